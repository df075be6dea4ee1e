//! Canonical stored record shapes, one table per resource collection.
//!
//! Every table carries an auto-increment `id` primary key: the store-native
//! identifier. It is monotonically increasing on insert, which is what makes
//! the newest-first listing order a simple descending scan.

pub mod burdwan_stock;
pub mod katwa_stock;
pub mod oil_dispatch;
pub mod oil_order;
pub mod rice_dispatch;
pub mod rice_order;
