//! Infrastructure adapters: environment configuration, process execution,
//! and the sacli CLI adapter behind the `AccessServer` port.

pub mod command_runner;
pub mod config;
pub mod sacli;
