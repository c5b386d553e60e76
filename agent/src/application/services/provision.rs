//! Application service: the account provisioning workflow.
//!
//! A linear pipeline of sacli-backed steps with two hard-fail gates
//! (ensure account, set password) and two soft-fail gates (profile token,
//! profile fetch). Soft failures downgrade the result instead of aborting:
//! valid credentials without a convenience URL or profile are still useful.
//!
//! Each step runs exactly once. There are no retries and no compensating
//! cleanup of partially created external state; retry policy belongs to the
//! caller of the HTTP boundary.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::application::ports::AccessServer;
use crate::domain::account::ProvisionedAccount;
use crate::domain::credentials::{DEFAULT_PASSWORD_LEN, generate_password};
use crate::domain::error::ProvisionError;
use crate::domain::token::{connect_url, extract_profile_token, fallback_connect_url};

/// Provision `username` on the Access Server, generating a password when
/// none is supplied.
///
/// Generic over `S: AccessServer + ?Sized` so callers can pass either a
/// concrete adapter or a trait object.
///
/// # Errors
///
/// Returns [`ProvisionError`] only when a hard-fail gate (account ensure or
/// password set) fails; no partial credentials are returned in that case.
pub async fn provision<S: AccessServer + ?Sized>(
    access: &S,
    admin_ui_url: &str,
    username: &str,
    password: Option<String>,
) -> Result<ProvisionedAccount, ProvisionError> {
    let password = password.unwrap_or_else(|| generate_password(DEFAULT_PASSWORD_LEN));

    // Hard gate: without a valid account nothing meaningful can be returned.
    let ensure = access.ensure_connect_user(username).await;
    if !ensure.success {
        tracing::error!(username, output = %ensure.output, "failed to configure account");
        return Err(ProvisionError::EnsureAccount {
            username: username.to_string(),
            output: ensure.output,
        });
    }
    tracing::info!(username, "account configured");

    // Hard gate: credentials are the minimum viable result.
    let set = access.set_local_password(username, &password).await;
    if !set.success {
        tracing::error!(username, output = %set.output, "failed to set password");
        return Err(ProvisionError::SetPassword {
            username: username.to_string(),
            output: set.output,
        });
    }
    tracing::info!(username, "password set");

    // Soft gate: a missing token degrades the URL to the admin-UI fallback.
    let token_outcome = access.add_profile_token(username).await;
    let token_url = if token_outcome.success {
        match extract_profile_token(&token_outcome.output) {
            Some(token) => connect_url(admin_ui_url, username, &token),
            None => {
                tracing::warn!(
                    username,
                    output = %token_outcome.output,
                    "token not found in AddProfileToken output"
                );
                fallback_connect_url(admin_ui_url)
            }
        }
    } else {
        tracing::warn!(
            username,
            output = %token_outcome.output,
            "failed to generate profile token"
        );
        fallback_connect_url(admin_ui_url)
    };

    // Soft gate: the profile artifact is optional.
    let login = access.get_user_login(username).await;
    let profile_b64 = if login.success {
        Some(BASE64.encode(login.output.as_bytes()))
    } else {
        tracing::warn!(username, output = %login.output, "failed to fetch login profile");
        None
    };

    tracing::info!(username, "account provisioned");
    Ok(ProvisionedAccount {
        username: username.to_string(),
        password,
        token_url,
        profile_b64,
    })
}
