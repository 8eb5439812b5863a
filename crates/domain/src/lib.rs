//! Person Suite Domain - Core types
//!
//! This crate defines the model shared by every layer of the Person API
//! conformance suite: requests, responses, exchanges, person payloads and
//! the assertion vocabulary. All types here are pure Rust with no I/O.

pub mod error;
pub mod exchange;
pub mod person;
pub mod request;
pub mod response;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use exchange::HttpExchange;
pub use person::{PersonId, PersonPayload};
pub use request::{HttpMethod, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use testing::{
    Assertion, AssertionResult, JsonKind, StatusExpectation, TestResults, TestSuite,
};
