use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema,
};
use tracing::info;

use crate::config::AppConfig;
use crate::entities::{
    burdwan_stock, katwa_stock, oil_dispatch, oil_order, rice_dispatch, rice_order,
};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Establishes the connection pool to the database named by the configured
/// connection string. The pool lives from process start to shutdown and is
/// handed to handlers through `AppState` rather than via global state.
pub async fn establish_connection(cfg: &AppConfig) -> Result<DbPool, DbErr> {
    let mut options = ConnectOptions::new(cfg.database_url.clone());
    options
        .max_connections(cfg.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(600))
        // Query logging is development noise everywhere else.
        .sqlx_logging(cfg.is_development());

    info!(
        max_connections = cfg.db_max_connections,
        "connecting to database"
    );
    Database::connect(options).await
}

/// Create any missing resource tables from the entity definitions. Stands in
/// for migration tooling, which is out of scope for this service.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = [
        schema.create_table_from_entity(rice_order::Entity),
        schema.create_table_from_entity(rice_dispatch::Entity),
        schema.create_table_from_entity(burdwan_stock::Entity),
        schema.create_table_from_entity(katwa_stock::Entity),
        schema.create_table_from_entity(oil_order::Entity),
        schema.create_table_from_entity(oil_dispatch::Entity),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(backend.build(statement)).await?;
    }

    Ok(())
}
