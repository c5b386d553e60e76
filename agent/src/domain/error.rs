//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error`. Only the two fatal
//! workflow steps surface as errors; recoverable steps degrade the result
//! instead (see `application::services::provision`).

use thiserror::Error;

/// Fatal provisioning failures. Anything not listed here is absorbed by the
/// workflow with a fallback value.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("failed to configure account '{username}': {output}")]
    EnsureAccount { username: String, output: String },

    #[error("failed to set password for '{username}': {output}")]
    SetPassword { username: String, output: String },
}
