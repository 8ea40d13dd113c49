//! HTTP and WebSocket surface of the dashboard.
//!
//! Routes:
//! - `GET /status` — panel snapshot (readings, derived flags, enablement)
//! - `GET /events?filter=` — merged ledger rows
//! - `POST /stake` / `POST /execute` / `POST /withdraw` — policy-checked
//!   action submissions
//! - `GET /ws` — live snapshot push on every applied update

pub mod error;
pub mod handlers;
pub mod state;
pub mod ws;

pub use error::ServerError;
pub use state::Dashboard;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use stakeview_client::{ContractGateway, PriceSource};

/// Build the dashboard router over shared state.
pub fn router<G, P>(state: Arc<Dashboard<G, P>>) -> Router
where
    G: ContractGateway + 'static,
    P: PriceSource + 'static,
{
    // The dashboard is consumed from a browser on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/status", get(handlers::status))
        .route("/events", get(handlers::events))
        .route("/stake", post(handlers::stake))
        .route("/execute", post(handlers::execute))
        .route("/withdraw", post(handlers::withdraw))
        .route("/ws", get(ws::ws_handler))
        .layer(cors)
        .with_state(state)
}

/// The dashboard HTTP server.
pub struct DashboardServer {
    pub port: u16,
}

impl DashboardServer {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Bind and serve until shut down.
    pub async fn start<G, P>(&self, state: Arc<Dashboard<G, P>>) -> Result<(), ServerError>
    where
        G: ContractGateway + 'static,
        P: PriceSource + 'static,
    {
        let app = router(state);
        let addr = format!("0.0.0.0:{}", self.port);
        info!("dashboard listening on {addr}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Internal(format!("bind {addr} failed: {e}")))?;
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(format!("serve failed: {e}")))?;
        Ok(())
    }
}
