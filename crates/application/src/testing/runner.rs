//! Test runner implementation.
//!
//! Executes assertions against HTTP responses and produces test results.

use std::time::Instant;

use person_suite_domain::{
    Assertion, AssertionResult, JsonKind, ResponseSpec, StatusExpectation, TestResults, TestSuite,
};
use serde_json::Value;

const PREVIEW_LEN: usize = 100;

/// Test runner that executes assertions against responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestRunner;

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run a test suite against a response.
    ///
    /// Stops after the first failure when the suite asks for it.
    #[must_use]
    pub fn run(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        let start = Instant::now();
        let mut results = Vec::with_capacity(suite.assertions.len());

        for assertion in &suite.assertions {
            let result = self.run_assertion(assertion, response);
            let failed = !result.passed;
            results.push(result);

            if failed && suite.stop_on_failure {
                break;
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;
        TestResults::new(&suite.name, results, duration_ms)
    }

    /// Run a single assertion against a response.
    #[must_use]
    pub fn run_assertion(&self, assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        match assertion {
            Assertion::StatusCode { expected } => {
                Self::check_status_code(assertion, response, expected)
            }
            Assertion::IsJson => Self::check_is_json(assertion, response),
            Assertion::JsonFieldType { field, kind } => {
                Self::check_field_type(assertion, response, field, *kind)
            }
            Assertion::JsonFieldEquals { field, expected } => {
                Self::check_field_equals(assertion, response, field, expected)
            }
        }
    }

    fn check_status_code(
        assertion: &Assertion,
        response: &ResponseSpec,
        expected: &StatusExpectation,
    ) -> AssertionResult {
        let actual = response.status;
        if expected.matches(actual) {
            AssertionResult::pass_with_value(assertion.clone(), actual.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                actual.to_string(),
                format!("Expected status {}, got {}", expected.description(), actual),
            )
        }
    }

    fn check_is_json(assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        match serde_json::from_str::<Value>(&response.body) {
            Ok(_) => AssertionResult::pass(assertion.clone()),
            Err(e) => AssertionResult::fail_with_value(
                assertion.clone(),
                preview(&response.body),
                format!("Body is not valid JSON: {e}"),
            ),
        }
    }

    fn check_field_type(
        assertion: &Assertion,
        response: &ResponseSpec,
        field: &str,
        kind: JsonKind,
    ) -> AssertionResult {
        let value = match lookup_field(response, field) {
            Ok(value) => value,
            Err(message) => return AssertionResult::fail(assertion.clone(), message),
        };

        let actual = JsonKind::of(&value);
        if actual == kind {
            AssertionResult::pass_with_value(assertion.clone(), value.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                value.to_string(),
                format!("'{field}' should be {kind}, got {actual}"),
            )
        }
    }

    fn check_field_equals(
        assertion: &Assertion,
        response: &ResponseSpec,
        field: &str,
        expected: &Value,
    ) -> AssertionResult {
        let value = match lookup_field(response, field) {
            Ok(value) => value,
            Err(message) => return AssertionResult::fail(assertion.clone(), message),
        };

        if &value == expected {
            AssertionResult::pass_with_value(assertion.clone(), value.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                value.to_string(),
                format!("'{field}' mismatch: expected {expected}, got {value}"),
            )
        }
    }
}

/// Parses the body and extracts a top-level field.
fn lookup_field(response: &ResponseSpec, field: &str) -> Result<Value, String> {
    let json = serde_json::from_str::<Value>(&response.body)
        .map_err(|e| format!("Failed to parse body as JSON: {e}"))?;

    match json {
        Value::Object(mut map) => map
            .remove(field)
            .ok_or_else(|| format!("Response should contain '{field}'")),
        other => Err(format!(
            "Response should be an object, got {}",
            JsonKind::of(&other)
        )),
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > PREVIEW_LEN {
        let head: String = body.chars().take(PREVIEW_LEN).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
