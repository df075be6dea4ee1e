//! One generic handler per verb; the six resource groups are registered as
//! configuration values rather than six hand-copied handler families.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::ServiceError;
use crate::resources::{
    burdwan_stock::BurdwanStock, katwa_stock::KatwaStock, oil_dispatches::OilDispatches,
    oil_orders::OilOrders, rice_dispatches::RiceDispatches, rice_orders::RiceOrders, Resource,
    WriteOp,
};
use crate::store::Store;
use crate::AppState;

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(list::<RiceOrders>).post(create::<RiceOrders>),
        )
        .route(
            "/orders/{key}",
            put(update::<RiceOrders>).delete(remove::<RiceOrders>),
        )
        .route(
            "/dispatches",
            get(list::<RiceDispatches>).post(create::<RiceDispatches>),
        )
        .route(
            "/dispatches/{key}",
            put(update::<RiceDispatches>).delete(remove::<RiceDispatches>),
        )
        .route(
            "/burdwan_stock",
            get(list::<BurdwanStock>).post(create::<BurdwanStock>),
        )
        .route(
            "/burdwan_stock/{key}",
            put(update::<BurdwanStock>).delete(remove::<BurdwanStock>),
        )
        .route(
            "/katwa_stock",
            get(list::<KatwaStock>).post(create::<KatwaStock>),
        )
        .route(
            "/katwa_stock/{key}",
            put(update::<KatwaStock>).delete(remove::<KatwaStock>),
        )
        .route(
            "/oilorders",
            get(list::<OilOrders>).post(create::<OilOrders>),
        )
        .route(
            "/oilorders/{key}",
            put(update::<OilOrders>).delete(remove::<OilOrders>),
        )
        .route(
            "/oildispatches",
            get(list::<OilDispatches>).post(create::<OilDispatches>),
        )
        .route(
            "/oildispatches/{key}",
            put(update::<OilDispatches>).delete(remove::<OilDispatches>),
        )
}

/// GET: every record of the resource, newest first.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Response>>, ServiceError> {
    let records = Store::<R>::new(&state.db).list_all().await?;
    Ok(Json(records.into_iter().map(R::serialize).collect()))
}

/// POST: normalize and insert; dispatch-family resources echo the stored
/// record, the rest confirm with a message.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(input): Json<R::Input>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    let record = R::normalize(input, WriteOp::Create);
    let stored = Store::<R>::new(&state.db)
        .insert(record)
        .await
        .map_err(|err| ServiceError::WriteFailed(err.to_string()))?;
    debug!(resource = R::LABEL, "record created");

    let body = if R::RETURNS_RECORD {
        to_body(R::serialize(stored))?
    } else {
        json!({ "message": format!("{} added successfully", R::LABEL) })
    };
    Ok((StatusCode::CREATED, Json(body)))
}

/// PUT: normalize and replace the submitted fields of the record matching the
/// path key. Not-found is reported; nothing is created.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<R::Input>,
) -> Result<Json<Value>, ServiceError> {
    let key = R::parse_key(&key)?;
    let record = R::normalize(input, WriteOp::Update);

    let store = Store::<R>::new(&state.db);
    let matched = store
        .update_by_key(&key, record)
        .await
        .map_err(|err| ServiceError::WriteFailed(err.to_string()))?;
    if !matched {
        return Err(ServiceError::NotFound(R::NOT_FOUND.to_string()));
    }
    debug!(resource = R::LABEL, "record updated");

    let body = if R::RETURNS_RECORD {
        match store.find_by_key(&key).await? {
            Some(model) => to_body(R::serialize(model))?,
            // Deleted out from under us between the write and the re-read.
            None => return Err(ServiceError::NotFound(R::NOT_FOUND.to_string())),
        }
    } else {
        json!({ "message": format!("{} updated successfully", R::LABEL) })
    };
    Ok(Json(body))
}

/// DELETE: remove the record matching the path key.
pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>, ServiceError> {
    let key = R::parse_key(&key)?;
    let matched = Store::<R>::new(&state.db).delete_by_key(&key).await?;
    if !matched {
        return Err(ServiceError::NotFound(R::NOT_FOUND.to_string()));
    }
    debug!(resource = R::LABEL, "record deleted");
    Ok(Json(
        json!({ "message": format!("{} deleted successfully", R::LABEL) }),
    ))
}

fn to_body<T: serde::Serialize>(value: T) -> Result<Value, ServiceError> {
    serde_json::to_value(value).map_err(|err| ServiceError::Internal(err.to_string()))
}
