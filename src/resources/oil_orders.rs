use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{text, Resource, WriteOp};
use crate::coerce::{self, date_or_today};
use crate::entities::oil_order;

pub struct OilOrders;

/// Oil orders carry both a GST rate (`gst`) and a computed GST amount; the
/// batch number is passthrough, never generated for this resource.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OilOrderInput {
    #[serde(rename = "batchno", deserialize_with = "coerce::loose_text")]
    pub batchno: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub order_date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub broker_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub oil_variant: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub packaging_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub weight: f64,
    #[serde(deserialize_with = "coerce::loose_i32")]
    pub bag_config: i32,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub rate: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub cost: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub gst: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub gst_amount: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub cancel_reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OilOrderResponse {
    pub id: String,
    #[serde(rename = "batchno")]
    pub batchno: String,
    pub order_date: String,
    pub customer_type: String,
    pub broker_name: String,
    pub customer_name: String,
    pub oil_variant: String,
    pub brand: String,
    pub packaging_type: String,
    pub weight: f64,
    pub bag_config: i32,
    pub quantity: f64,
    pub rate: f64,
    pub cost: f64,
    pub gst: f64,
    pub gst_amount: f64,
    pub amount: f64,
    pub status: String,
    pub cancel_reason: String,
}

impl Resource for OilOrders {
    type Entity = oil_order::Entity;
    type Record = oil_order::ActiveModel;
    type Input = OilOrderInput;
    type Response = OilOrderResponse;

    const LABEL: &'static str = "Oil order";
    const NOT_FOUND: &'static str = "No oil order found for given ID";
    const RETURNS_RECORD: bool = false;

    fn normalize(input: OilOrderInput, op: WriteOp) -> oil_order::ActiveModel {
        oil_order::ActiveModel {
            id: NotSet,
            batchno: text(input.batchno, op),
            order_date: Set(date_or_today(input.order_date)),
            customer_type: text(input.customer_type, op),
            broker_name: text(input.broker_name, op),
            customer_name: text(input.customer_name, op),
            oil_variant: text(input.oil_variant, op),
            brand: text(input.brand, op),
            packaging_type: text(input.packaging_type, op),
            weight: Set(input.weight),
            bag_config: Set(input.bag_config),
            quantity: Set(input.quantity),
            rate: Set(input.rate),
            cost: Set(input.cost),
            gst: Set(input.gst),
            gst_amount: Set(input.gst_amount),
            amount: Set(input.amount),
            status: text(input.status, op),
            cancel_reason: text(input.cancel_reason, op),
        }
    }

    fn serialize(model: oil_order::Model) -> OilOrderResponse {
        OilOrderResponse {
            id: model.id.to_string(),
            batchno: model.batchno,
            order_date: model.order_date,
            customer_type: model.customer_type,
            broker_name: model.broker_name,
            customer_name: model.customer_name,
            oil_variant: model.oil_variant,
            brand: model.brand,
            packaging_type: model.packaging_type,
            weight: model.weight,
            bag_config: model.bag_config,
            quantity: model.quantity,
            rate: model.rate,
            cost: model.cost,
            gst: model.gst,
            gst_amount: model.gst_amount,
            amount: model.amount,
            status: model.status,
            cancel_reason: model.cancel_reason,
        }
    }

    fn id_column() -> oil_order::Column {
        oil_order::Column::Id
    }
}
