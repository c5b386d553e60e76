//! VPN provisioning agent for OpenVPN Access Server.
//!
//! Drives the `sacli` administration CLI to create connect-type accounts,
//! set credentials, and fetch connection profiles, behind a small
//! authenticated HTTP surface. Exposed as a library so integration tests
//! can exercise the service and server layers directly.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod domain;
pub mod infra;
pub mod server;
