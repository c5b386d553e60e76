//! Extraction of the connection token from sacli `AddProfileToken` output.
//!
//! The tool emits one of two unrelated text shapes for the same semantic
//! token, so extraction is an ordered list of independent strategies and the
//! first match wins. Adding a third shape means adding one function to
//! [`STRATEGIES`] without touching call sites.

use std::sync::LazyLock;

use regex::Regex;

static IMPORT_PROFILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"openvpn://import-profile/(https://\S+)").expect("valid regex")
});

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Token:\s*(\S+)").expect("valid regex"));

/// A token recognised in sacli output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileToken {
    /// A ready-to-use URL embedded in an `openvpn://import-profile/` deep link.
    ImportUrl(String),
    /// A bare token from a `Token: <token>` line; the connection URL must be
    /// synthesised against the admin UI.
    Token(String),
}

type Strategy = fn(&str) -> Option<ProfileToken>;

fn import_profile_url(raw: &str) -> Option<ProfileToken> {
    IMPORT_PROFILE_RE
        .captures(raw)
        .map(|caps| ProfileToken::ImportUrl(caps[1].to_string()))
}

fn token_line(raw: &str) -> Option<ProfileToken> {
    TOKEN_RE
        .captures(raw)
        .map(|caps| ProfileToken::Token(caps[1].to_string()))
}

/// Strategies in priority order. The import-profile deep link is preferred
/// because it needs no synthesis.
const STRATEGIES: [Strategy; 2] = [import_profile_url, token_line];

/// Extract a connection token from raw sacli output, or `None` when no
/// known shape matches. No validation beyond the pattern match is performed;
/// malformed output simply yields `None`.
#[must_use]
pub fn extract_profile_token(raw: &str) -> Option<ProfileToken> {
    STRATEGIES.iter().find_map(|strategy| strategy(raw))
}

/// Build the caller-facing connection URL for an extracted token.
#[must_use]
pub fn connect_url(admin_ui_url: &str, username: &str, token: &ProfileToken) -> String {
    match token {
        ProfileToken::ImportUrl(url) => url.clone(),
        ProfileToken::Token(token) => {
            format!("{admin_ui_url}/?src=connect&username={username}&token={token}")
        }
    }
}

/// Connection URL used when token generation or extraction failed: the admin
/// UI with `src=connect` and no token parameter.
#[must_use]
pub fn fallback_connect_url(admin_ui_url: &str) -> String {
    format!("{admin_ui_url}/?src=connect")
}
