use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{text, Resource, WriteOp};
use crate::coerce::{self, date_or_today};
use crate::entities::rice_order;
use crate::errors::ServiceError;
use crate::store::RecordKey;

pub struct RiceOrders;

/// Loosely-typed rice order submission. The business key is accepted under
/// either `id` or `orderId`; numbers arrive as numbers or strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiceOrderInput {
    #[serde(deserialize_with = "coerce::loose_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub order_id: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub order_date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub broker_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub product: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_class: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub packaging: Option<String>,
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
    pub amount: f64,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub cancel_reason: Option<String>,
}

/// The business key doubles as `id` for client convenience; the native
/// identifier is not exposed for this resource.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiceOrderResponse {
    pub id: String,
    pub order_id: String,
    pub order_date: String,
    pub customer_type: String,
    pub broker_name: String,
    pub customer_name: String,
    pub product: String,
    pub rice_type: String,
    pub rice_class: String,
    pub rice_name: String,
    pub packaging: String,
    pub weight: f64,
    pub bag_config: i32,
    pub quantity: f64,
    pub rate: f64,
    pub cost: f64,
    pub gst_percent: f64,
    pub amount: f64,
    pub status: String,
    pub cancel_reason: String,
}

impl Resource for RiceOrders {
    type Entity = rice_order::Entity;
    type Record = rice_order::ActiveModel;
    type Input = RiceOrderInput;
    type Response = RiceOrderResponse;

    const LABEL: &'static str = "Order";
    const NOT_FOUND: &'static str = "No order found for given orderId";
    const RETURNS_RECORD: bool = false;

    fn normalize(input: RiceOrderInput, op: WriteOp) -> rice_order::ActiveModel {
        let submitted = input
            .id
            .filter(|key| !key.is_empty())
            .or(input.order_id.filter(|key| !key.is_empty()));
        let order_id = match (op, submitted) {
            (_, Some(key)) => Set(key),
            (WriteOp::Create, None) => Set(coerce::generate_order_id()),
            // Updates never reassign the business key behind the client's back.
            (WriteOp::Update, None) => NotSet,
        };

        rice_order::ActiveModel {
            id: NotSet,
            order_id,
            order_date: Set(date_or_today(input.order_date)),
            customer_type: text(input.customer_type, op),
            broker_name: text(input.broker_name, op),
            customer_name: text(input.customer_name, op),
            product: text(input.product, op),
            rice_type: text(input.rice_type, op),
            rice_class: text(input.rice_class, op),
            rice_name: text(input.rice_name, op),
            packaging: text(input.packaging, op),
            weight: Set(input.weight),
            bag_config: Set(input.bag_config),
            quantity: Set(input.quantity),
            rate: Set(input.rate),
            cost: Set(input.cost),
            gst_percent: Set(input.gst_percent),
            amount: Set(input.amount),
            status: text(input.status, op),
            cancel_reason: text(input.cancel_reason, op),
        }
    }

    fn serialize(model: rice_order::Model) -> RiceOrderResponse {
        RiceOrderResponse {
            id: model.order_id.clone(),
            order_id: model.order_id,
            order_date: model.order_date,
            customer_type: model.customer_type,
            broker_name: model.broker_name,
            customer_name: model.customer_name,
            product: model.product,
            rice_type: model.rice_type,
            rice_class: model.rice_class,
            rice_name: model.rice_name,
            packaging: model.packaging,
            weight: model.weight,
            bag_config: model.bag_config,
            quantity: model.quantity,
            rate: model.rate,
            cost: model.cost,
            gst_percent: model.gst_percent,
            amount: model.amount,
            status: model.status,
            cancel_reason: model.cancel_reason,
        }
    }

    fn id_column() -> rice_order::Column {
        rice_order::Column::Id
    }

    fn key_column() -> rice_order::Column {
        rice_order::Column::OrderId
    }

    // Any string is a valid business key; "not found" is the only negative
    // outcome for this resource.
    fn parse_key(raw: &str) -> Result<RecordKey, ServiceError> {
        Ok(RecordKey::from(raw.to_string()))
    }
}
