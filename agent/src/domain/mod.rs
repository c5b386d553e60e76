//! Pure domain logic. This module has zero imports from `crate::infra`
//! or `crate::server`.

pub mod account;
pub mod credentials;
pub mod error;
pub mod token;
