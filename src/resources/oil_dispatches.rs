use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{text, Resource, WriteOp};
use crate::coerce::{self, date_or_empty, date_or_today};
use crate::entities::oil_dispatch;

pub struct OilDispatches;

/// Oil dispatch submission. No field renames here; HSN and bar codes are
/// numeric for this resource.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OilDispatchInput {
    #[serde(deserialize_with = "coerce::loose_text")]
    pub batch_no: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub broker_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub hsn_code: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub bar_code: f64,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub sku_code: Option<String>,
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
    pub gst_percent: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub gst_amount: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub advance: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub due: f64,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub loading_location: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub loading_man: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub challan: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub challan_photo: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub car_no: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub car_photo: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub net_weight: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub driver_contact: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OilDispatchResponse {
    pub id: String,
    pub batch_no: String,
    pub date: String,
    pub due_date: String,
    pub location: String,
    pub customer_type: String,
    pub broker_name: String,
    pub customer_name: String,
    pub hsn_code: f64,
    pub bar_code: f64,
    pub sku_code: String,
    pub oil_variant: String,
    pub brand: String,
    pub packaging_type: String,
    pub weight: f64,
    pub bag_config: i32,
    pub quantity: f64,
    pub rate: f64,
    pub cost: f64,
    pub gst_percent: f64,
    pub gst_amount: f64,
    pub amount: f64,
    pub advance: f64,
    pub due: f64,
    pub loading_location: String,
    pub loading_man: String,
    pub challan: String,
    pub challan_photo: String,
    pub car_no: String,
    pub car_photo: String,
    pub net_weight: String,
    pub driver_contact: String,
}

impl Resource for OilDispatches {
    type Entity = oil_dispatch::Entity;
    type Record = oil_dispatch::ActiveModel;
    type Input = OilDispatchInput;
    type Response = OilDispatchResponse;

    const LABEL: &'static str = "Oil dispatch";
    const NOT_FOUND: &'static str = "No oil dispatch found for given ID";
    const RETURNS_RECORD: bool = true;

    fn normalize(input: OilDispatchInput, op: WriteOp) -> oil_dispatch::ActiveModel {
        oil_dispatch::ActiveModel {
            id: NotSet,
            batch_no: text(input.batch_no, op),
            date: Set(date_or_today(input.date)),
            due_date: Set(date_or_empty(input.due_date)),
            location: text(input.location, op),
            customer_type: text(input.customer_type, op),
            broker_name: text(input.broker_name, op),
            customer_name: text(input.customer_name, op),
            hsn_code: Set(input.hsn_code),
            bar_code: Set(input.bar_code),
            sku_code: text(input.sku_code, op),
            oil_variant: text(input.oil_variant, op),
            brand: text(input.brand, op),
            packaging_type: text(input.packaging_type, op),
            weight: Set(input.weight),
            bag_config: Set(input.bag_config),
            quantity: Set(input.quantity),
            rate: Set(input.rate),
            cost: Set(input.cost),
            gst_percent: Set(input.gst_percent),
            gst_amount: Set(input.gst_amount),
            amount: Set(input.amount),
            advance: Set(input.advance),
            due: Set(input.due),
            loading_location: text(input.loading_location, op),
            loading_man: text(input.loading_man, op),
            challan: text(input.challan, op),
            challan_photo: text(input.challan_photo, op),
            car_no: text(input.car_no, op),
            car_photo: text(input.car_photo, op),
            net_weight: text(input.net_weight, op),
            driver_contact: text(input.driver_contact, op),
        }
    }

    fn serialize(model: oil_dispatch::Model) -> OilDispatchResponse {
        OilDispatchResponse {
            id: model.id.to_string(),
            batch_no: model.batch_no,
            date: model.date,
            due_date: model.due_date,
            location: model.location,
            customer_type: model.customer_type,
            broker_name: model.broker_name,
            customer_name: model.customer_name,
            hsn_code: model.hsn_code,
            bar_code: model.bar_code,
            sku_code: model.sku_code,
            oil_variant: model.oil_variant,
            brand: model.brand,
            packaging_type: model.packaging_type,
            weight: model.weight,
            bag_config: model.bag_config,
            quantity: model.quantity,
            rate: model.rate,
            cost: model.cost,
            gst_percent: model.gst_percent,
            gst_amount: model.gst_amount,
            amount: model.amount,
            advance: model.advance,
            due: model.due,
            loading_location: model.loading_location,
            loading_man: model.loading_man,
            challan: model.challan,
            challan_photo: model.challan_photo,
            car_no: model.car_no,
            car_photo: model.car_photo,
            net_weight: model.net_weight,
            driver_contact: model.driver_contact,
        }
    }

    fn id_column() -> oil_dispatch::Column {
        oil_dispatch::Column::Id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn codes_coerce_to_numbers_for_oil_dispatches() {
        let input: OilDispatchInput = serde_json::from_value(json!({
            "hsnCode": "1512",
            "barCode": 890123,
            "skuCode": "OIL-5L"
        }))
        .unwrap();
        let record = OilDispatches::normalize(input, WriteOp::Create);

        assert_eq!(record.hsn_code.unwrap(), 1512.0);
        assert_eq!(record.bar_code.unwrap(), 890123.0);
        assert_eq!(record.sku_code.unwrap(), "OIL-5L");
    }
}
