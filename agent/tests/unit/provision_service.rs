//! Unit tests for the provisioning workflow's fatal and soft failure gates.

#![allow(clippy::expect_used)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use ovpn_agent::application::ports::CommandOutcome;
use ovpn_agent::application::services::provision::provision;
use ovpn_agent::domain::credentials::PASSWORD_ALPHABET;
use ovpn_agent::domain::error::ProvisionError;

use crate::helpers::{ADMIN_URL, Call, ScriptedAccessServer};

// ── Full run ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn full_run_returns_account_with_generated_password() {
    let access = ScriptedAccessServer::all_ok();
    let account = provision(&access, ADMIN_URL, "alice", None)
        .await
        .expect("provision");

    assert_eq!(account.username, "alice");
    assert_eq!(account.password.len(), 16);
    assert!(account.password.bytes().all(|b| PASSWORD_ALPHABET.contains(&b)));
    assert_eq!(account.token_url, "https://vpn.example:943/profile");
    assert_eq!(
        account.profile_b64.as_deref(),
        Some(BASE64.encode("client\nremote vpn.example 1194\n").as_str())
    );
    assert_eq!(
        access.recorded(),
        vec![Call::Ensure, Call::SetPassword, Call::AddToken, Call::GetLogin]
    );
}

#[tokio::test]
async fn supplied_password_is_used_verbatim() {
    let access = ScriptedAccessServer::all_ok();
    let account = provision(&access, ADMIN_URL, "alice", Some("hunter2!".to_string()))
        .await
        .expect("provision");
    assert_eq!(account.password, "hunter2!");
}

#[tokio::test]
async fn token_line_output_synthesises_admin_url() {
    let mut access = ScriptedAccessServer::all_ok();
    access.add_token = CommandOutcome::ok("Token: abc123");
    let account = provision(&access, ADMIN_URL, "alice", None)
        .await
        .expect("provision");
    assert_eq!(
        account.token_url,
        "https://admin.example/?src=connect&username=alice&token=abc123"
    );
}

// ── Fatal gates ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn ensure_failure_aborts_before_any_further_step() {
    let mut access = ScriptedAccessServer::all_ok();
    access.ensure = CommandOutcome::failed("boom");

    let err = provision(&access, ADMIN_URL, "alice", None)
        .await
        .expect_err("fatal");
    assert!(matches!(err, ProvisionError::EnsureAccount { .. }));
    // The password-set step must never run.
    assert_eq!(access.recorded(), vec![Call::Ensure]);
}

#[tokio::test]
async fn set_password_failure_aborts_with_no_token_or_profile_calls() {
    let mut access = ScriptedAccessServer::all_ok();
    access.set_password = CommandOutcome::failed("denied");

    let err = provision(&access, ADMIN_URL, "alice", None)
        .await
        .expect_err("fatal");
    assert!(matches!(err, ProvisionError::SetPassword { .. }));
    assert_eq!(access.recorded(), vec![Call::Ensure, Call::SetPassword]);
}

// ── Soft gates ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn token_step_failure_falls_back_to_admin_url() {
    let mut access = ScriptedAccessServer::all_ok();
    access.add_token = CommandOutcome::failed("token service unavailable");

    let account = provision(&access, ADMIN_URL, "alice", None)
        .await
        .expect("soft failure still succeeds");
    assert_eq!(account.token_url, "https://admin.example/?src=connect");
    // The remaining step still runs.
    assert_eq!(
        access.recorded(),
        vec![Call::Ensure, Call::SetPassword, Call::AddToken, Call::GetLogin]
    );
}

#[tokio::test]
async fn unparseable_token_output_falls_back_to_admin_url() {
    let mut access = ScriptedAccessServer::all_ok();
    access.add_token = CommandOutcome::ok("unexpected banner text");

    let account = provision(&access, ADMIN_URL, "alice", None)
        .await
        .expect("provision");
    assert_eq!(account.token_url, "https://admin.example/?src=connect");
}

#[tokio::test]
async fn login_fetch_failure_omits_profile_artifact() {
    let mut access = ScriptedAccessServer::all_ok();
    access.get_login = CommandOutcome::failed("profile locked");

    let account = provision(&access, ADMIN_URL, "alice", None)
        .await
        .expect("provision");
    assert_eq!(account.profile_b64, None);
}

// ── Non-idempotence ───────────────────────────────────────────────────────────

#[tokio::test]
async fn two_runs_without_supplied_password_get_different_passwords() {
    let first = provision(&ScriptedAccessServer::all_ok(), ADMIN_URL, "alice", None)
        .await
        .expect("first");
    let second = provision(&ScriptedAccessServer::all_ok(), ADMIN_URL, "alice", None)
        .await
        .expect("second");
    assert_ne!(first.password, second.password);
}
