use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{text, Resource, WriteOp};
use crate::coerce::{self, date_or_empty, date_or_today};
use crate::entities::rice_dispatch;

pub struct RiceDispatches;

/// Loosely-typed rice dispatch submission. Five client field names are
/// remapped to internal storage names on write; [`RiceDispatchResponse`]
/// reverses each pair verbatim.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiceDispatchInput {
    #[serde(deserialize_with = "coerce::loose_text")]
    pub batch_no: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub dispatch_date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub dispatch_location: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub broker_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub hsn_code: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub bar_code: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub sku_code: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub product: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_class: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub packaging_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub weight_kg: f64,
    #[serde(deserialize_with = "coerce::loose_i32")]
    pub bag_config: i32,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub rate: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub cost: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub gst_percent: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub gst_amount: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub loading_location: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub loading_man: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub challan_no: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub challan_photo: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub car_no: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub car_photo: Option<String>,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub advance: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub due: f64,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub net_weight: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub driver_contact: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiceDispatchResponse {
    pub id: String,
    pub batch_no: String,
    pub dispatch_date: String,
    pub due_date: String,
    pub dispatch_location: String,
    pub customer_type: String,
    pub broker_name: String,
    pub customer_name: String,
    pub hsn_code: String,
    pub bar_code: String,
    pub sku_code: String,
    pub product: String,
    pub rice_type: String,
    pub rice_class: String,
    pub rice_name: String,
    pub packaging_type: String,
    pub weight_kg: f64,
    pub bag_config: i32,
    pub quantity: f64,
    pub rate: f64,
    pub cost: f64,
    pub gst_percent: f64,
    pub gst_amount: f64,
    pub amount: f64,
    pub loading_location: String,
    pub loading_man: String,
    pub challan_no: String,
    pub challan_photo: String,
    pub car_no: String,
    pub car_photo: String,
    pub advance: f64,
    pub due: f64,
    pub net_weight: String,
    pub driver_contact: String,
}

impl Resource for RiceDispatches {
    type Entity = rice_dispatch::Entity;
    type Record = rice_dispatch::ActiveModel;
    type Input = RiceDispatchInput;
    type Response = RiceDispatchResponse;

    const LABEL: &'static str = "Dispatch";
    const NOT_FOUND: &'static str = "No dispatch found for given ID";
    const RETURNS_RECORD: bool = true;

    fn normalize(input: RiceDispatchInput, op: WriteOp) -> rice_dispatch::ActiveModel {
        let batch_no = match (op, input.batch_no.filter(|key| !key.is_empty())) {
            (_, Some(key)) => Set(key),
            (WriteOp::Create, None) => Set(coerce::generate_batch_no()),
            (WriteOp::Update, None) => NotSet,
        };

        rice_dispatch::ActiveModel {
            id: NotSet,
            batch_no,
            date: Set(date_or_today(input.dispatch_date)),
            due_date: Set(date_or_empty(input.due_date)),
            // Renamed fields are always written, absent input included.
            location: Set(input.dispatch_location.unwrap_or_default()),
            packaging: Set(input.packaging_type.unwrap_or_default()),
            challan: Set(input.challan_no.unwrap_or_default()),
            weight: Set(input.weight_kg),
            customer_type: text(input.customer_type, op),
            broker_name: text(input.broker_name, op),
            customer_name: text(input.customer_name, op),
            hsn_code: text(input.hsn_code, op),
            bar_code: text(input.bar_code, op),
            sku_code: text(input.sku_code, op),
            product: text(input.product, op),
            rice_type: text(input.rice_type, op),
            rice_class: text(input.rice_class, op),
            rice_name: text(input.rice_name, op),
            bag_config: Set(input.bag_config),
            quantity: Set(input.quantity),
            rate: Set(input.rate),
            cost: Set(input.cost),
            gst_percent: Set(input.gst_percent),
            gst_amount: Set(input.gst_amount),
            amount: Set(input.amount),
            loading_location: text(input.loading_location, op),
            loading_man: text(input.loading_man, op),
            challan_photo: text(input.challan_photo, op),
            car_no: text(input.car_no, op),
            car_photo: text(input.car_photo, op),
            advance: Set(input.advance),
            due: Set(input.due),
            net_weight: text(input.net_weight, op),
            driver_contact: text(input.driver_contact, op),
        }
    }

    fn serialize(model: rice_dispatch::Model) -> RiceDispatchResponse {
        RiceDispatchResponse {
            id: model.id.to_string(),
            batch_no: model.batch_no,
            dispatch_date: model.date,
            due_date: model.due_date,
            dispatch_location: model.location,
            customer_type: model.customer_type,
            broker_name: model.broker_name,
            customer_name: model.customer_name,
            hsn_code: model.hsn_code,
            bar_code: model.bar_code,
            sku_code: model.sku_code,
            product: model.product,
            rice_type: model.rice_type,
            rice_class: model.rice_class,
            rice_name: model.rice_name,
            packaging_type: model.packaging,
            weight_kg: model.weight,
            bag_config: model.bag_config,
            quantity: model.quantity,
            rate: model.rate,
            cost: model.cost,
            gst_percent: model.gst_percent,
            gst_amount: model.gst_amount,
            amount: model.amount,
            loading_location: model.loading_location,
            loading_man: model.loading_man,
            challan_no: model.challan,
            challan_photo: model.challan_photo,
            car_no: model.car_no,
            car_photo: model.car_photo,
            advance: model.advance,
            due: model.due,
            net_weight: model.net_weight,
            driver_contact: model.driver_contact,
        }
    }

    fn id_column() -> rice_dispatch::Column {
        rice_dispatch::Column::Id
    }
}
