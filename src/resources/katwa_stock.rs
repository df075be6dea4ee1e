use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{text, Resource, WriteOp};
use crate::coerce::{self, date_or_today};
use crate::entities::katwa_stock;

pub struct KatwaStock;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KatwaStockInput {
    #[serde(deserialize_with = "coerce::loose_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub rice_type: Option<String>,
    #[serde(deserialize_with = "coerce::loose_text")]
    pub variety: Option<String>,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub kari: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub godown: f64,
    #[serde(deserialize_with = "coerce::loose_f64")]
    pub total: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KatwaStockResponse {
    pub id: String,
    pub date: String,
    pub rice_type: String,
    pub variety: String,
    pub kari: f64,
    pub godown: f64,
    pub total: f64,
}

impl Resource for KatwaStock {
    type Entity = katwa_stock::Entity;
    type Record = katwa_stock::ActiveModel;
    type Input = KatwaStockInput;
    type Response = KatwaStockResponse;

    const LABEL: &'static str = "Katwa stock";
    const NOT_FOUND: &'static str = "No Katwa stock found for given ID";
    const RETURNS_RECORD: bool = false;

    fn normalize(input: KatwaStockInput, op: WriteOp) -> katwa_stock::ActiveModel {
        katwa_stock::ActiveModel {
            id: NotSet,
            date: Set(date_or_today(input.date)),
            rice_type: text(input.rice_type, op),
            variety: text(input.variety, op),
            kari: Set(input.kari),
            godown: Set(input.godown),
            total: Set(input.total),
        }
    }

    fn serialize(model: katwa_stock::Model) -> KatwaStockResponse {
        KatwaStockResponse {
            id: model.id.to_string(),
            date: model.date,
            rice_type: model.rice_type,
            variety: model.variety,
            kari: model.kari,
            godown: model.godown,
            total: model.total,
        }
    }

    fn id_column() -> katwa_stock::Column {
        katwa_stock::Column::Id
    }
}
