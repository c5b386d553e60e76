//! HTTP surface: router assembly, shared state, and request logging.
//!
//! Route layout:
//!   - `POST /provision` (API key + IP allowlist gates)
//!   - `GET  /health`    (API key gate)
//!   - `GET  /`          (open)

pub mod auth;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{ConnectInfo, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};

use crate::application::ports::AccessServer;
use crate::infra::config::AgentConfig;

/// Shared server state: configuration plus the Access Server adapter.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AgentConfig>,
    pub access_server: Arc<dyn AccessServer>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AgentConfig>, access_server: Arc<dyn AccessServer>) -> Self {
        Self {
            config,
            access_server,
        }
    }
}

/// Compose the full application router. The access gates run before any
/// handler, so a rejected request never reaches the provisioning workflow.
pub fn router(state: AppState) -> Router {
    let gated = Router::new()
        .route(
            "/provision",
            post(handlers::provision).layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_allowed_ip,
            )),
        )
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .route("/", get(handlers::root))
        .merge(gated)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Log every inbound request and its response status.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |info| info.0.to_string());

    tracing::info!(%method, %path, %peer, "request");
    let response = next.run(req).await;
    tracing::info!(status = response.status().as_u16(), "response");
    response
}
