use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rice dispatch (shipment). Several columns carry internal names that differ
/// from the client-facing ones; the resource layer owns that mapping
/// (`date` ⇄ `dispatchDate`, `location` ⇄ `dispatchLocation`,
/// `packaging` ⇄ `packagingType`, `weight` ⇄ `weightKg`,
/// `challan` ⇄ `challanNo`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dispatches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub batch_no: String,
    pub date: String,
    pub due_date: String,
    pub location: String,
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
    pub packaging: String,
    pub weight: f64,
    pub bag_config: i32,
    pub quantity: f64,
    pub rate: f64,
    pub cost: f64,
    pub gst_percent: f64,
    pub gst_amount: f64,
    pub amount: f64,
    pub loading_location: String,
    pub loading_man: String,
    pub challan: String,
    pub challan_photo: String,
    pub car_no: String,
    pub car_photo: String,
    pub advance: f64,
    pub due: f64,
    pub net_weight: String,
    pub driver_contact: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
