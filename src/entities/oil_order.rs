use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Edible oil order. `batchno` keeps its historical all-lowercase spelling on
/// the wire and in storage.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "oilorders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
