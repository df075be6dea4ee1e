//! The six CRUD resources, each a configuration value over one generic
//! machinery: an entity, a normalizer (loose client input → canonical stored
//! record), a serializer (stored record → client response), and a key
//! strategy. Handlers and the store are written once against [`Resource`].

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::ServiceError;
use crate::store::RecordKey;

pub mod burdwan_stock;
pub mod katwa_stock;
pub mod oil_dispatches;
pub mod oil_orders;
pub mod rice_dispatches;
pub mod rice_orders;

/// Whether a record is being normalized for a first insert or to replace an
/// existing record's fields. On create, absent free-text fields settle to
/// empty strings; on update they are left untouched so only submitted fields
/// are replaced. Numeric and date fields are always written (absent input
/// coerces to its default either way).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
}

/// One CRUD resource group.
pub trait Resource: Send + Sync + 'static
where
    <Self::Entity as EntityTrait>::Model: IntoActiveModel<Self::Record>,
{
    type Entity: EntityTrait;
    /// Canonical stored shape under construction.
    type Record: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    /// Loosely-typed client submission.
    type Input: DeserializeOwned + Send + 'static;
    /// Client-facing response shape.
    type Response: Serialize + Send + 'static;

    /// Noun used in confirmation messages ("Order", "Katwa stock", ...).
    const LABEL: &'static str;
    /// Body text returned when a keyed operation matches nothing.
    const NOT_FOUND: &'static str;
    /// Dispatch-family resources echo the full stored record on
    /// create/update; order and stock resources answer with a confirmation
    /// message only. Historical client contract, see DESIGN.md.
    const RETURNS_RECORD: bool;

    fn normalize(input: Self::Input, op: WriteOp) -> Self::Record;
    fn serialize(model: <Self::Entity as EntityTrait>::Model) -> Self::Response;

    /// Native identifier column, used for the newest-first listing order.
    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Column keyed lookups filter on. Rice orders override this with their
    /// business key; everything else looks up by native id.
    fn key_column() -> <Self::Entity as EntityTrait>::Column {
        Self::id_column()
    }

    /// Parse a path parameter into a lookup key. The default rejects
    /// anything that is not a native `i64` identifier.
    fn parse_key(raw: &str) -> Result<RecordKey, ServiceError> {
        let id: i64 = raw.parse().map_err(|_| {
            ServiceError::MalformedKey(format!("'{raw}' is not a valid record id"))
        })?;
        Ok(RecordKey::from(id))
    }
}

/// Free-text field handling per write mode.
pub(crate) fn text(value: Option<String>, op: WriteOp) -> ActiveValue<String> {
    match value {
        Some(v) => ActiveValue::Set(v),
        None if op == WriteOp::Create => ActiveValue::Set(String::new()),
        None => ActiveValue::NotSet,
    }
}
