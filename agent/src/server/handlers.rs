//! Request handlers and wire resources.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;
use crate::application::services::provision;
use crate::domain::account::ProvisionedAccount;

// ── Resources ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProvisionRequest {
    /// Requester identifier, carried for audit logging only.
    pub telegram_id: i64,
    pub desired_username: String,
}

#[derive(Debug, Serialize)]
pub struct ProvisionResponse {
    pub username: String,
    pub password: String,
    pub token_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovpn_file_base64: Option<String>,
}

impl From<ProvisionedAccount> for ProvisionResponse {
    fn from(account: ProvisionedAccount) -> Self {
        Self {
            username: account.username,
            password: account.password,
            token_url: account.token_url,
            ovpn_file_base64: account.profile_b64,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Build a `{ "detail": ... }` error response.
#[must_use]
pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `POST /provision`: run the provisioning workflow for the requested
/// account name. Callers get either a complete-or-degraded success payload
/// or a single generic failure, never partial credentials.
pub async fn provision(
    State(state): State<AppState>,
    Json(request): Json<ProvisionRequest>,
) -> Response {
    if request.desired_username.trim().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "desired_username must not be empty");
    }

    tracing::info!(
        username = %request.desired_username,
        telegram_id = request.telegram_id,
        "provisioning account"
    );

    match provision::provision(
        state.access_server.as_ref(),
        &state.config.admin_ui_url,
        &request.desired_username,
        None,
    )
    .await
    {
        Ok(account) => {
            tracing::info!(username = %account.username, "successfully provisioned");
            Json(ProvisionResponse::from(account)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "provisioning failed");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

/// `GET /health`: liveness probe, behind the API-key gate.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "vpn-provisioning-agent",
    }))
}

/// `GET /`: unauthenticated service banner.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "service": "VPN Provisioning Agent",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}
