//! Access gate middleware: shared-secret API key and caller IP allowlist.
//!
//! Both gates run before the provisioning workflow; a rejected request
//! invokes zero external commands.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use super::AppState;
use super::handlers::detail_response;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests whose `x-api-key` header is missing or does not exactly
/// match the configured secret.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match presented {
        None => {
            tracing::warn!("missing API key");
            detail_response(StatusCode::UNAUTHORIZED, "Missing API key")
        }
        Some(key) if key != state.config.api_key => {
            // Log at most a short prefix of the presented key.
            let prefix: String = key.chars().take(10).collect();
            tracing::warn!(key_prefix = %prefix, "invalid API key");
            detail_response(StatusCode::UNAUTHORIZED, "Invalid API key")
        }
        Some(_) => next.run(req).await,
    }
}

/// Reject callers whose peer address is not in the configured allowlist.
/// An empty allowlist means no IP restriction.
pub async fn require_allowed_ip(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let allowed = state.config.allowed_ip_list();
    if allowed.is_empty() {
        return next.run(req).await;
    }

    let peer_ip = peer.ip().to_string();
    if allowed.iter().any(|ip| *ip == peer_ip) {
        next.run(req).await
    } else {
        tracing::warn!(peer = %peer_ip, "unauthorized IP");
        detail_response(StatusCode::FORBIDDEN, "IP address not authorized")
    }
}
