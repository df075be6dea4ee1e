use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rice order, keyed for lookups by the human-readable `order_id` business
/// key rather than the native `id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
