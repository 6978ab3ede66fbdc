//! Logging setup for applications and tests built on funcplus
//!
//! `funcplus-core` only emits `tracing` events. This crate turns them into
//! output: [`config::LogConfig`] reads the `FUNCPLUS_LOG*` variables and
//! [`tracing::init`] installs the matching subscriber.

pub mod config;
pub mod tracing;

pub use config::{LogConfig, LogFormat};
pub use self::tracing::{init, init_for_tests, init_from_env};
