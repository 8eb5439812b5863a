//! Test preconditions.
//!
//! Fixtures are recomputed for every scenario that needs them. Creating a
//! person on each run may leave duplicates on the server; scenarios tolerate
//! pre-existing records.

use person_suite_domain::{PersonId, PersonPayload};
use tracing::error;

use crate::api::PersonApi;
use crate::error::FixtureError;
use crate::ports::{ExchangeObserver, HttpClient};

/// Sentinel identifier of the fixture person.
pub const VALID_PERSON_ID: i64 = 0;
/// Name of the fixture person.
pub const VALID_PERSON_NAME: &str = "Test Person";
/// Identifier that is never numeric.
pub const INVALID_PERSON_ID: &str = "not_a_number";

/// A well-formed payload. Deterministic, no side effects.
#[must_use]
pub fn valid_person_data() -> PersonPayload {
    PersonPayload::new(PersonId::Number(VALID_PERSON_ID), VALID_PERSON_NAME)
}

/// Creates `data` on the server and returns its name as a stand-in identifier.
///
/// # Errors
///
/// Returns `FixtureError::CreationFailed` if the server answers anything but
/// 201, and `FixtureError::Api` if no response arrives.
pub async fn valid_person_id<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
    data: &PersonPayload,
) -> Result<String, FixtureError> {
    let response = api.create(data).await?;
    if response.status == 201 {
        Ok(data.name.clone())
    } else {
        error!(status = response.status, "Failed to create a valid person for testing.");
        Err(FixtureError::CreationFailed {
            status: response.status,
        })
    }
}

/// A non-numeric identifier for probing not-found and validation paths.
#[must_use]
pub const fn invalid_person_id() -> &'static str {
    INVALID_PERSON_ID
}
