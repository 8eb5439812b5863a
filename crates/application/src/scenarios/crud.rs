//! Single-call scenarios against `/person`.

use serde_json::json;
use tracing::info;

use super::{expect_status, verify, with_person_shape};
use crate::api::PersonApi;
use crate::error::ScenarioError;
use crate::fixtures::{invalid_person_id, valid_person_data, valid_person_id};
use crate::ports::{ExchangeObserver, HttpClient};

/// Name read back by `get_person_success`; the update scenarios rename the
/// fixture person to it.
const KNOWN_NAME: &str = "tima";

pub async fn post_person_success<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    info!("Testing POST request to add a new person.");
    let data = valid_person_data();

    let response = api.create(&data).await?;

    verify(&expect_status("POST /person", &[201]), &response)?;
    info!("Test passed successfully");
    Ok(())
}

pub async fn get_person_success<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    valid_person_id(api, &valid_person_data()).await?;
    info!("Testing GET request for valid person ID: {KNOWN_NAME}");

    let response = api.fetch(KNOWN_NAME).await?;

    let suite = with_person_shape(
        expect_status(format!("GET /person/{KNOWN_NAME}"), &[200, 404, 500]),
        &response,
    );
    verify(&suite, &response)?;
    info!("Test passed successfully");
    Ok(())
}

pub async fn get_person_not_found<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    let id = invalid_person_id();
    info!("Testing GET request for invalid person ID: {id}");

    let response = api.fetch(id).await?;

    verify(&expect_status(format!("GET /person/{id}"), &[404, 500]), &response)?;
    info!("Test passed successfully");
    Ok(())
}

pub async fn update_person_success<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    let id = valid_person_id(api, &valid_person_data()).await?;
    let update = json!({ "id": id, "name": KNOWN_NAME });
    info!("Testing PUT request to update person with ID: {id}");

    let response = api.update(&id, &update).await?;

    verify(
        &expect_status(format!("PUT /person/{id}"), &[200, 204, 404, 500]),
        &response,
    )?;
    info!("Test passed successfully");
    Ok(())
}

pub async fn update_person_not_found<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    let id = invalid_person_id();
    let update = json!({ "id": id, "name": KNOWN_NAME });
    info!("Testing PUT request for non-existent person ID: {id}");

    let response = api.update(id, &update).await?;

    verify(&expect_status(format!("PUT /person/{id}"), &[404, 500]), &response)?;
    info!("Test passed successfully");
    Ok(())
}

pub async fn update_person_invalid_data<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    let id = valid_person_id(api, &valid_person_data()).await?;
    // Both fields carry the wrong JSON type on purpose.
    let invalid = json!({ "id": KNOWN_NAME, "name": 12345 });
    info!("Testing PUT request with invalid data for person ID: {id}");

    let response = api.update(&id, &invalid).await?;

    verify(
        &expect_status(format!("PUT /person/{id}"), &[400, 422, 500]),
        &response,
    )?;
    info!("Test passed successfully");
    Ok(())
}

pub async fn get_person_invalid_id_type<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    info!("Testing GET request with invalid ID type");

    let response = api.fetch("invalid").await?;

    verify(
        &expect_status("GET /person/invalid", &[400, 404, 500]),
        &response,
    )?;
    info!("Test passed successfully");
    Ok(())
}
