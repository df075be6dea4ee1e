use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use salesdesk_api::config::{init_tracing, load_config};
use salesdesk_api::db::{ensure_schema, establish_connection};
use salesdesk_api::{api_routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.log_level, config.log_json);

    info!(environment = %config.environment, "starting salesdesk-api");

    let db = establish_connection(&config)
        .await
        .context("failed to connect to database")?;
    ensure_schema(&db)
        .await
        .context("failed to create resource tables")?;

    let addr = config.server_addr();
    let state = AppState::new(db, config);

    let app = api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("shutdown signal received");
}
