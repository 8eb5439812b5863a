//! Person Suite Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::ReqwestHttpClient;
pub use config::{ConfigError, SuiteConfig};
pub use logging::{ConsoleExchangeLogger, Palette, init_tracing};
