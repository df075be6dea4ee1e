use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Katwa stock ledger entry: three numeric buckets per rice variety.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "katwa_stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: String,
    pub rice_type: String,
    pub variety: String,
    pub kari: f64,
    pub godown: f64,
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
