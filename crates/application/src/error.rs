//! Application error types

use person_suite_domain::{DomainError, TestResults};
use thiserror::Error;

use crate::ports::HttpClientError;

/// A single call through `PersonApi` failed before a response was available.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request could not be built.
    #[error("invalid request: {0}")]
    Request(#[from] DomainError),

    /// The transport failed (connection refused, timeout, ...).
    #[error("{0}")]
    Transport(#[from] HttpClientError),
}

/// A fixture could not establish its precondition.
#[derive(Debug, Clone, Error)]
pub enum FixtureError {
    /// The server did not answer the creation request with 201.
    #[error("could not create a valid person: expected status 201, got {status}")]
    CreationFailed {
        /// Status returned by the server.
        status: u16,
    },

    /// The creation request never produced a response.
    #[error("could not create a valid person: {0}")]
    Api(#[from] ApiError),
}

/// Why a scenario failed.
#[derive(Debug, Clone, Error)]
pub enum ScenarioError {
    /// A fixture failed; the scenario body never ran.
    #[error("setup failed: {0}")]
    Setup(#[from] FixtureError),

    /// The response did not satisfy the scenario's assertions.
    #[error("assertion failed: {0}")]
    Assertion(Box<TestResults>),

    /// A request failed without a response.
    #[error("request failed: {0}")]
    Api(#[from] ApiError),
}

impl ScenarioError {
    /// Returns true for setup failures.
    #[must_use]
    pub const fn is_setup(&self) -> bool {
        matches!(self, Self::Setup(_))
    }

    /// Returns the failed assertion results, if this is an assertion failure.
    #[must_use]
    pub fn assertion_results(&self) -> Option<&TestResults> {
        match self {
            Self::Assertion(results) => Some(results),
            _ => None,
        }
    }
}

impl From<TestResults> for ScenarioError {
    fn from(results: TestResults) -> Self {
        Self::Assertion(Box::new(results))
    }
}
