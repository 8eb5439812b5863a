//! Response testing and assertions.
//!
//! This module provides types for describing what a response must look like
//! and for collecting the outcome of checking it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A test assertion to run against a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    /// Check response status code.
    StatusCode {
        /// Expected status code or acceptable set.
        expected: StatusExpectation,
    },
    /// Check body is valid JSON.
    IsJson,
    /// Check a top-level JSON field exists and has the given kind.
    JsonFieldType {
        /// Field name in the top-level object.
        field: String,
        /// Required JSON kind.
        kind: JsonKind,
    },
    /// Check a top-level JSON field equals a value.
    JsonFieldEquals {
        /// Field name in the top-level object.
        field: String,
        /// Expected value.
        expected: Value,
    },
}

impl Assertion {
    /// Status must be one of the given codes.
    #[must_use]
    pub fn status_in(codes: &[u16]) -> Self {
        Self::StatusCode {
            expected: StatusExpectation::one_of(codes),
        }
    }

    /// Top-level `field` must exist with the given kind.
    #[must_use]
    pub fn field_type(field: impl Into<String>, kind: JsonKind) -> Self {
        Self::JsonFieldType {
            field: field.into(),
            kind,
        }
    }

    /// Top-level `field` must equal `expected`.
    #[must_use]
    pub fn field_equals(field: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self::JsonFieldEquals {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Get a human-readable description of this assertion.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::StatusCode { expected } => format!("Status code {}", expected.description()),
            Self::IsJson => "Body is valid JSON".to_string(),
            Self::JsonFieldType { field, kind } => format!("JSON '{field}' is {kind}"),
            Self::JsonFieldEquals { field, expected } => {
                format!("JSON '{field}' equals {expected}")
            }
        }
    }
}

/// Expected status code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusExpectation {
    /// Exact status code.
    Exact(u16),
    /// One of multiple status codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Check if a status code matches this expectation.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(expected) => status == *expected,
            Self::OneOf(codes) => codes.contains(&status),
        }
    }

    /// Get description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => code.to_string(),
            Self::OneOf(codes) => {
                let codes_str: Vec<_> = codes.iter().map(ToString::to_string).collect();
                format!("in [{}]", codes_str.join(", "))
            }
        }
    }

    /// Expectation for an acceptable-status set; a single code is `Exact`.
    #[must_use]
    pub fn one_of(codes: &[u16]) -> Self {
        match codes {
            [code] => Self::Exact(*code),
            _ => Self::OneOf(codes.to_vec()),
        }
    }
}

/// Kind of a JSON value, used for body shape checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Number without a fractional part.
    Integer,
    /// Any other number.
    Float,
    /// String.
    String,
    /// Array.
    Array,
    /// Object.
    Object,
}

impl JsonKind {
    /// Classifies a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running a single assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssertionResult {
    /// The assertion that was run.
    pub assertion: Assertion,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Actual value found (for display).
    pub actual: Option<String>,
    /// Error message if failed.
    pub error: Option<String>,
}

impl AssertionResult {
    /// Create a passed result.
    #[must_use]
    pub const fn pass(assertion: Assertion) -> Self {
        Self {
            assertion,
            passed: true,
            actual: None,
            error: None,
        }
    }

    /// Create a passed result with actual value.
    #[must_use]
    pub fn pass_with_value(assertion: Assertion, actual: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: true,
            actual: Some(actual.into()),
            error: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(assertion: Assertion, error: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: false,
            actual: None,
            error: Some(error.into()),
        }
    }

    /// Create a failed result with actual value.
    #[must_use]
    pub fn fail_with_value(
        assertion: Assertion,
        actual: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            assertion,
            passed: false,
            actual: Some(actual.into()),
            error: Some(error.into()),
        }
    }
}

/// A named group of assertions checked against one response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TestSuite {
    /// Test suite name.
    pub name: String,
    /// Assertions to run.
    #[serde(default)]
    pub assertions: Vec<Assertion>,
    /// Whether to stop on first failure.
    #[serde(default)]
    pub stop_on_failure: bool,
}

impl TestSuite {
    /// Create a new empty test suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assertions: Vec::new(),
            stop_on_failure: false,
        }
    }

    /// Add an assertion to the suite.
    pub fn add(&mut self, assertion: Assertion) {
        self.assertions.push(assertion);
    }

    /// Add an assertion (builder pattern).
    #[must_use]
    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Stop at the first failing assertion (builder pattern).
    #[must_use]
    pub const fn stopping_on_failure(mut self) -> Self {
        self.stop_on_failure = true;
        self
    }
}

/// Results from running a test suite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResults {
    /// Test suite that was run.
    pub suite_name: String,
    /// Individual assertion results.
    pub results: Vec<AssertionResult>,
    /// Total number of assertions.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl TestResults {
    /// Create new test results.
    #[must_use]
    pub fn new(
        suite_name: impl Into<String>,
        results: Vec<AssertionResult>,
        duration_ms: u64,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;

        Self {
            suite_name: suite_name.into(),
            results,
            total,
            passed,
            failed,
            duration_ms,
        }
    }

    /// Check if all tests passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Iterates over the failed assertions.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

impl fmt::Display for TestResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} assertions passed",
            self.suite_name, self.passed, self.total
        )?;
        for failure in self.failures() {
            let message = failure.error.as_deref().unwrap_or("failed");
            write!(f, "; {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_code_is_exact() {
        let exp = StatusExpectation::one_of(&[201]);
        assert_eq!(exp, StatusExpectation::Exact(201));
        assert!(exp.matches(201));
        assert!(!exp.matches(200));
        assert_eq!(exp.description(), "201");
    }

    #[test]
    fn test_status_expectation_one_of() {
        let exp = StatusExpectation::one_of(&[404, 500]);
        assert!(exp.matches(404));
        assert!(exp.matches(500));
        assert!(!exp.matches(200));
        assert!(!exp.matches(400));
        assert_eq!(exp.description(), "in [404, 500]");
    }

    #[test]
    fn test_json_kind_classification() {
        assert_eq!(JsonKind::of(&json!(42)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(-1)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Float);
        assert_eq!(JsonKind::of(&json!("42")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!({"id": 1})), JsonKind::Object);
    }

    #[test]
    fn test_assertion_description() {
        assert_eq!(
            Assertion::status_in(&[200, 204]).description(),
            "Status code in [200, 204]"
        );
        assert_eq!(
            Assertion::field_type("id", JsonKind::Integer).description(),
            "JSON 'id' is integer"
        );
        assert_eq!(
            Assertion::field_equals("id", 7).description(),
            "JSON 'id' equals 7"
        );
    }

    #[test]
    fn test_test_suite_builder() {
        let suite = TestSuite::new("GET /person")
            .with_assertion(Assertion::status_in(&[200]))
            .with_assertion(Assertion::IsJson)
            .stopping_on_failure();

        assert_eq!(suite.name, "GET /person");
        assert_eq!(suite.assertions.len(), 2);
        assert!(suite.stop_on_failure);
    }

    #[test]
    fn test_test_results() {
        let results = vec![
            AssertionResult::pass(Assertion::status_in(&[200])),
            AssertionResult::fail(Assertion::IsJson, "Invalid JSON"),
        ];

        let test_results = TestResults::new("Suite", results, 100);
        assert_eq!(test_results.total, 2);
        assert_eq!(test_results.passed, 1);
        assert_eq!(test_results.failed, 1);
        assert!(!test_results.all_passed());
        assert_eq!(test_results.failures().count(), 1);
        assert_eq!(
            test_results.to_string(),
            "Suite: 1/2 assertions passed; Invalid JSON"
        );
    }
}
