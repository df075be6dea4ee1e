//! Thin persistence façade, one instance per resource table.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::resources::Resource;

/// Equality value for a keyed lookup: a native `i64` identifier or a
/// business-key string, already validated by `Resource::parse_key`.
#[derive(Clone, Debug)]
pub struct RecordKey(sea_orm::Value);

impl RecordKey {
    fn value(&self) -> sea_orm::Value {
        self.0.clone()
    }
}

impl From<i64> for RecordKey {
    fn from(id: i64) -> Self {
        Self(id.into())
    }
}

impl From<String> for RecordKey {
    fn from(key: String) -> Self {
        Self(key.into())
    }
}

pub struct Store<'a, R: Resource> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> Store<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// Every record of the resource, most recently inserted first
    /// (descending native identifier). Unbounded by contract.
    pub async fn list_all(&self) -> Result<Vec<<R::Entity as EntityTrait>::Model>, DbErr> {
        R::Entity::find()
            .order_by_desc(R::id_column())
            .all(self.db)
            .await
    }

    /// Insert a normalized record and hand back the stored row, native
    /// identifier assigned.
    pub async fn insert(
        &self,
        record: R::Record,
    ) -> Result<<R::Entity as EntityTrait>::Model, DbErr> {
        record.insert(self.db).await
    }

    pub async fn find_by_key(
        &self,
        key: &RecordKey,
    ) -> Result<Option<<R::Entity as EntityTrait>::Model>, DbErr> {
        R::Entity::find()
            .filter(R::key_column().eq(key.value()))
            .one(self.db)
            .await
    }

    /// Replace the set fields of the record matching `key`; reports whether a
    /// match existed. No upsert.
    pub async fn update_by_key(&self, key: &RecordKey, record: R::Record) -> Result<bool, DbErr> {
        let result = R::Entity::update_many()
            .set(record)
            .filter(R::key_column().eq(key.value()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Remove the record matching `key`; reports whether a match existed.
    pub async fn delete_by_key(&self, key: &RecordKey) -> Result<bool, DbErr> {
        let result = R::Entity::delete_many()
            .filter(R::key_column().eq(key.value()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
