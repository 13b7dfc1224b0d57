use crate::registry::Registry;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod routes;

/// Server state
///
/// The SQLite connection is not Sync, so handlers serialize access through
/// one async mutex. That matches the single-logical-writer model: contention
/// comes only from overlapping HTTP requests, not from background work.
pub struct AppState {
    pub registry: Mutex<Registry>,
}

pub async fn start_server(port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    let registry = Registry::open(&database_path)?;
    let state = Arc::new(AppState { registry: Mutex::new(registry) });

    let app = Router::new()
        .route("/farmers", get(routes::list_farmers).post(routes::add_farmer))
        .route("/retailers", get(routes::list_retailers).post(routes::add_retailer))
        .route("/stats", get(routes::get_stats))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("Ledger API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
