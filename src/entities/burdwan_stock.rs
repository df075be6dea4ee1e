use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Burdwan godown stock ledger entry.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "burdwan_stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: String,
    pub variant: String,
    pub brand: String,
    pub rice_type: String,
    pub rice_name: String,
    pub quantity: f64,
    pub kg_per_bag: f64,
    pub ton: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
