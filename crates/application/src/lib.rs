//! Person Suite Application - Fixtures, scenarios and ports
//!
//! This crate defines the orchestration layer of the conformance suite:
//! - Port traits for the HTTP transport and exchange reporting
//! - `PersonApi`, the thin client that builds person requests
//! - Fixtures producing test preconditions
//! - The scenario catalogue and the sequential suite runner

pub mod api;
pub mod error;
pub mod fixtures;
pub mod ports;
pub mod scenarios;
pub mod suite;
pub mod testing;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::PersonApi;
pub use error::{ApiError, FixtureError, ScenarioError};
pub use ports::{ExchangeLog, ExchangeObserver, HttpClient, HttpClientError, NoopObserver};
pub use scenarios::Scenario;
pub use suite::{ScenarioOutcome, SuiteReport, SuiteRunner};
pub use testing::TestRunner;
