//! Vehicle tracker server.
//!
//! Vehicles report GPS positions with `POST /location`, the latest position of
//! each one is served by `GET /vehicles`, and `GET /` is a small dashboard.
//!
//! Run the server with
//! ```not_rust
//! PORT=8080 cargo run
//! ```
//!
//! and open the dashboard with
//! ```not_rust
//! firefox http://localhost:8080
//! ```

mod config;
mod handlers;
mod models;
mod store;

use std::sync::Arc;
use anyhow::Context;
use axum::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::Config;
use crate::store::LocationStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vehicle_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(Config::from_env()).await {
        error!("server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(LocationStore::new());
    let app = handlers::router(store);

    let addr = config.addr();
    let server = Server::try_bind(&addr)
        .with_context(|| format!("unable to bind {}", addr))?;
    info!("listening on http://{}", addr);

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("unable to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
