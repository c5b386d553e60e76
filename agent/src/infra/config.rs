//! Agent configuration loaded from environment variables via `envy`.
//!
//! Each field maps to `OVPN_AGENT_<FIELD>`:
//!   - `OVPN_AGENT_API_KEY`              (required, shared secret)
//!   - `OVPN_AGENT_ALLOWED_IPS`          (comma-separated, default empty = no restriction)
//!   - `OVPN_AGENT_LISTEN_ADDR`          (default `0.0.0.0:8443`)
//!   - `OVPN_AGENT_SACLI_PATH`           (default `/usr/local/openvpn_as/scripts/sacli`)
//!   - `OVPN_AGENT_ADMIN_UI_URL`         (default `https://localhost:943`)
//!   - `OVPN_AGENT_USE_SUDO`             (default `true`)
//!   - `OVPN_AGENT_COMMAND_TIMEOUT_SECS` (default `30`)
//!   - `OVPN_AGENT_TLS_CERT`             (optional, path to TLS cert; enables HTTPS)
//!   - `OVPN_AGENT_TLS_KEY`              (optional, path to TLS key)

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable prefix for all agent settings.
pub const ENV_PREFIX: &str = "OVPN_AGENT_";

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    /// Shared secret checked against the `x-api-key` header.
    pub api_key: String,

    /// Comma-separated caller IP allowlist. Empty means unrestricted.
    #[serde(default)]
    pub allowed_ips: String,

    /// Socket address to bind the HTTP server to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Path to the Access Server administration CLI.
    #[serde(default = "default_sacli_path")]
    pub sacli_path: String,

    /// Admin UI base URL, used to synthesise connection URLs.
    #[serde(default = "default_admin_ui_url")]
    pub admin_ui_url: String,

    /// Run sacli under `sudo`.
    #[serde(default = "default_use_sudo")]
    pub use_sudo: bool,

    /// Wall-clock timeout for each sacli invocation.
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,

    /// Path to TLS certificate (enables HTTPS when set together with the key).
    pub tls_cert: Option<String>,

    /// Path to TLS private key.
    pub tls_key: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8443".to_string()
}

fn default_sacli_path() -> String {
    "/usr/local/openvpn_as/scripts/sacli".to_string()
}

fn default_admin_ui_url() -> String {
    "https://localhost:943".to_string()
}

fn default_use_sudo() -> bool {
    true
}

fn default_command_timeout_secs() -> u64 {
    30
}

impl AgentConfig {
    /// Load configuration from `OVPN_AGENT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when a required variable is missing or a value does
    /// not parse.
    pub fn from_env() -> Result<Self> {
        envy::prefixed(ENV_PREFIX)
            .from_env()
            .context("failed to load config from OVPN_AGENT_* env vars (OVPN_AGENT_API_KEY is required)")
    }

    /// Parse the allowlist into individual addresses, dropping blanks.
    #[must_use]
    pub fn allowed_ip_list(&self) -> Vec<&str> {
        self.allowed_ips
            .split(',')
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .collect()
    }
}
