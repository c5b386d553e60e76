//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`
//! or `crate::server`.

use std::process::Output;

use anyhow::Result;
use async_trait::async_trait;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Outcome of one external administrative command.
///
/// `output` is trimmed stdout on success, trimmed stderr (or a stringified
/// spawn/timeout error) on failure. Transient: consumed immediately by the
/// workflow, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub output: String,
}

impl CommandOutcome {
    #[must_use]
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    #[must_use]
    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout, the child process must be killed
    /// (not left orphaned).
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Access Server Port ────────────────────────────────────────────────────────

/// The external Access Server, reachable only through its administration
/// CLI. One method per distinct command shape, so the workflow depends on
/// this narrow contract and tests can substitute a scripted double without
/// spawning processes.
///
/// Methods never return `Err`: expected failure modes (non-zero exit,
/// timeout, missing tool) are folded into [`CommandOutcome`]. Re-running
/// any method is safe; the underlying commands have create-or-update
/// semantics and no idempotency is assumed.
#[async_trait]
pub trait AccessServer: Send + Sync {
    /// Ensure a connect-type account exists (`UserPropPut type user_connect`).
    async fn ensure_connect_user(&self, username: &str) -> CommandOutcome;

    /// Set the account's local password (`SetLocalPassword`).
    async fn set_local_password(&self, username: &str, password: &str) -> CommandOutcome;

    /// Generate a profile token (`AddProfileToken`); raw output carries the
    /// token in one of two text shapes (see `domain::token`).
    async fn add_profile_token(&self, username: &str) -> CommandOutcome;

    /// Fetch the `.ovpn` login profile (`GetUserlogin`).
    async fn get_user_login(&self, username: &str) -> CommandOutcome;
}
