//! Result record of a completed provisioning run.

/// A fully provisioned VPN account.
///
/// `token_url` is always present: either the real connection URL extracted
/// from sacli output, or the admin-UI fallback when token generation failed.
/// `profile_b64` is the base64-encoded `.ovpn` profile, omitted when the
/// profile fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedAccount {
    pub username: String,
    pub password: String,
    pub token_url: String,
    pub profile_b64: Option<String>,
}
