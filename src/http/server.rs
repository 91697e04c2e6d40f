//! Router construction and server startup.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::sync::Mutex;

use crate::graph::store::EdgeStore;
use crate::http::handlers;

/// Shared state for all handlers.
///
/// The store is behind a mutex because rusqlite connections are `Send` but
/// not `Sync`; each request locks only for the duration of its store calls,
/// and the database's transactional guarantees do the rest.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<EdgeStore>>,
}

impl AppState {
    pub fn new(store: EdgeStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Build the node-manager router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/node-manager/edges", post(handlers::create_edge))
        .route(
            "/v1/node-manager/edges/{from_id}/{to_id}",
            delete(handlers::delete_edge),
        )
        .route(
            "/v1/node-manager/edges/tree/{node_id}",
            get(handlers::get_tree),
        )
        .with_state(state)
}

/// Bind `addr` and serve the API until ctrl-c.
pub async fn serve(store: EdgeStore, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("NodeGraph listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down HTTP server");
        })
        .await?;

    Ok(())
}
