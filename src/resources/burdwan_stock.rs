use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{text, Resource, WriteOp};
use crate::coerce::{self, date_or_today};
use crate::entities::burdwan_stock;

pub struct BurdwanStock;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BurdwanStockInput {
    #[serde(deserialize_with = "coerce::loose_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub variant: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_name: Option<String>,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub kg_per_bag: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub ton: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurdwanStockResponse {
    pub id: String,
    pub date: String,
    pub variant: String,
    pub brand: String,
    pub rice_type: String,
    pub rice_name: String,
    pub quantity: f64,
    pub kg_per_bag: f64,
    pub ton: f64,
}

impl Resource for BurdwanStock {
    type Entity = burdwan_stock::Entity;
    type Record = burdwan_stock::ActiveModel;
    type Input = BurdwanStockInput;
    type Response = BurdwanStockResponse;

    const LABEL: &'static str = "Stock";
    const NOT_FOUND: &'static str = "No stock found for given ID";
    const RETURNS_RECORD: bool = false;

    fn normalize(input: BurdwanStockInput, op: WriteOp) -> burdwan_stock::ActiveModel {
        burdwan_stock::ActiveModel {
            id: NotSet,
            date: Set(date_or_today(input.date)),
            variant: text(input.variant, op),
            brand: text(input.brand, op),
            rice_type: text(input.rice_type, op),
            rice_name: text(input.rice_name, op),
            quantity: Set(input.quantity),
            kg_per_bag: Set(input.kg_per_bag),
            ton: Set(input.ton),
        }
    }

    fn serialize(model: burdwan_stock::Model) -> BurdwanStockResponse {
        BurdwanStockResponse {
            id: model.id.to_string(),
            date: model.date,
            variant: model.variant,
            brand: model.brand,
            rice_type: model.rice_type,
            rice_name: model.rice_name,
            quantity: model.quantity,
            kg_per_bag: model.kg_per_bag,
            ton: model.ton,
        }
    }

    fn id_column() -> burdwan_stock::Column {
        burdwan_stock::Column::Id
    }
}
