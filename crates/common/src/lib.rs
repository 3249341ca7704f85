//! Shared utilities, configuration, and error handling for CareDesk
//!
//! This crate provides common functionality used across the CareDesk core:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Connection pool and migration helpers
//! - Tracing subscriber setup

pub mod config;
pub mod db;
pub mod error;
pub mod telemetry;

pub use config::Config;
pub use db::{violated_foreign_key, RepositoryError};
pub use error::{Error, Result};
