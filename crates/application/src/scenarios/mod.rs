//! Scenario catalogue.
//!
//! Each scenario is independent: it builds its target, performs its HTTP
//! calls through `PersonApi`, and checks every response against an
//! acceptable-status set. Several sets are intentionally wide (404 and 500
//! accepted interchangeably, for instance) because the server's error
//! handling is not settled; keep them as they are.

mod crud;
mod lifecycle;

use std::fmt;

use person_suite_domain::{Assertion, JsonKind, ResponseSpec, TestSuite};

use crate::api::PersonApi;
use crate::error::ScenarioError;
use crate::ports::{ExchangeObserver, HttpClient};
use crate::testing::TestRunner;

/// Every test case of the suite, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// POST a valid person, expect 201.
    PostPersonSuccess,
    /// GET a known name, expect 200/404/500 and a well-formed body on 200.
    GetPersonSuccess,
    /// GET a non-numeric id, expect 404/500.
    GetPersonNotFound,
    /// PUT the fixture person, expect 200/204/404/500.
    UpdatePersonSuccess,
    /// PUT a non-numeric id, expect 404/500.
    UpdatePersonNotFound,
    /// PUT a body with wrongly typed fields, expect 400/422/500.
    UpdatePersonInvalidData,
    /// GET with a literal non-numeric id, expect 400/404/500.
    GetPersonInvalidIdType,
    /// POST then read back the generated id; POST a range of accepted ids.
    PostGetPerson,
    /// POST ids the server must reject, expect 400/500.
    PostNegative,
}

impl Scenario {
    /// All scenarios in execution order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PostPersonSuccess,
            Self::GetPersonSuccess,
            Self::GetPersonNotFound,
            Self::UpdatePersonSuccess,
            Self::UpdatePersonNotFound,
            Self::UpdatePersonInvalidData,
            Self::GetPersonInvalidIdType,
            Self::PostGetPerson,
            Self::PostNegative,
        ]
    }

    /// Stable snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PostPersonSuccess => "post_person_success",
            Self::GetPersonSuccess => "get_person_success",
            Self::GetPersonNotFound => "get_person_not_found",
            Self::UpdatePersonSuccess => "update_person_success",
            Self::UpdatePersonNotFound => "update_person_not_found",
            Self::UpdatePersonInvalidData => "update_person_invalid_data",
            Self::GetPersonInvalidIdType => "get_person_invalid_id_type",
            Self::PostGetPerson => "post_get_person",
            Self::PostNegative => "post_negative",
        }
    }

    /// Whether the scenario needs the `valid_person_id` fixture.
    #[must_use]
    pub const fn needs_person(self) -> bool {
        matches!(
            self,
            Self::GetPersonSuccess | Self::UpdatePersonSuccess | Self::UpdatePersonInvalidData
        )
    }

    /// Runs the scenario against `api`.
    ///
    /// # Errors
    ///
    /// Returns the first setup, transport or assertion failure.
    pub async fn run<C: HttpClient, O: ExchangeObserver>(
        self,
        api: &PersonApi<C, O>,
    ) -> Result<(), ScenarioError> {
        match self {
            Self::PostPersonSuccess => crud::post_person_success(api).await,
            Self::GetPersonSuccess => crud::get_person_success(api).await,
            Self::GetPersonNotFound => crud::get_person_not_found(api).await,
            Self::UpdatePersonSuccess => crud::update_person_success(api).await,
            Self::UpdatePersonNotFound => crud::update_person_not_found(api).await,
            Self::UpdatePersonInvalidData => crud::update_person_invalid_data(api).await,
            Self::GetPersonInvalidIdType => crud::get_person_invalid_id_type(api).await,
            Self::PostGetPerson => lifecycle::post_get_person(api).await,
            Self::PostNegative => lifecycle::post_negative(api).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Status must be in `acceptable`; later checks are skipped when it is not.
fn expect_status(step: impl Into<String>, acceptable: &[u16]) -> TestSuite {
    TestSuite::new(step)
        .with_assertion(Assertion::status_in(acceptable))
        .stopping_on_failure()
}

/// Adds the person body shape checks when the response is a 200.
fn with_person_shape(mut suite: TestSuite, response: &ResponseSpec) -> TestSuite {
    if response.status == 200 {
        suite.add(Assertion::IsJson);
        suite.add(Assertion::field_type("id", JsonKind::Integer));
        suite.add(Assertion::field_type("name", JsonKind::String));
    }
    suite
}

/// Checks `response` against `suite`, turning failures into a `ScenarioError`.
fn verify(suite: &TestSuite, response: &ResponseSpec) -> Result<(), ScenarioError> {
    let results = TestRunner::new().run(suite, response);
    if results.all_passed() {
        Ok(())
    } else {
        Err(results.into())
    }
}
