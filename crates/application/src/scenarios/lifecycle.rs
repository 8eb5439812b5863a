//! Multi-step scenarios: create then read back, and identifier validation.

use person_suite_domain::{Assertion, PersonId, PersonPayload, TestSuite};
use serde_json::Value;
use tracing::info;

use super::{expect_status, verify};
use crate::api::PersonApi;
use crate::error::ScenarioError;
use crate::ports::{ExchangeObserver, HttpClient};

/// Identifiers the server must accept.
const POSITIVE_IDS: [i64; 6] = [462_539_845_238, 90, 52, 69, 42, 1488];
/// Numeric string the server must accept as well.
const POSITIVE_TEXT_ID: &str = "1";
/// Identifiers the server must reject.
const NEGATIVE_IDS: [&str; 2] = ["aa", "-q0"];
const NEGATIVE_NUMERIC_ID: i64 = -1;

fn positive_ids() -> impl Iterator<Item = PersonId> {
    POSITIVE_IDS
        .into_iter()
        .map(PersonId::Number)
        .chain(std::iter::once(PersonId::from(POSITIVE_TEXT_ID)))
}

fn negative_ids() -> impl Iterator<Item = PersonId> {
    std::iter::once(PersonId::Number(NEGATIVE_NUMERIC_ID))
        .chain(NEGATIVE_IDS.into_iter().map(PersonId::from))
}

pub async fn post_get_person<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    let response = api.create(&PersonPayload::new(1, "artem")).await?;
    info!("Request sent.");
    verify(
        &expect_status("POST /person", &[201]).with_assertion(Assertion::IsJson),
        &response,
    )?;

    info!("Status code successful, get person id");
    let generated = response.body_as_json().unwrap_or(Value::Null);
    info!(body = %generated, "created person");
    let segment = match &generated {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    // Only the echoed id is checked; the read-back status is not.
    let response = api.fetch(&segment).await?;
    verify(
        &TestSuite::new(format!("GET /person/{segment}"))
            .with_assertion(Assertion::field_equals("id", generated)),
        &response,
    )?;

    info!("Testing some positive id's");
    for id in positive_ids() {
        info!("Testing {id} id");
        let response = api.create(&PersonPayload::new(id.clone(), "artem1")).await?;
        verify(&expect_status(format!("POST /person id={id}"), &[201]), &response)?;
    }
    Ok(())
}

pub async fn post_negative<C: HttpClient, O: ExchangeObserver>(
    api: &PersonApi<C, O>,
) -> Result<(), ScenarioError> {
    info!("Test non-validating id's");
    for id in negative_ids() {
        info!("Testing {id} id");
        let response = api.create(&PersonPayload::new(id.clone(), "artem1")).await?;
        verify(
            &expect_status(format!("POST /person id={id}"), &[400, 500]),
            &response,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedClient, api, respond};
    use person_suite_domain::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_id_sets() {
        let positive: Vec<_> = positive_ids().map(|id| id.to_string()).collect();
        assert_eq!(
            positive,
            vec!["462539845238", "90", "52", "69", "42", "1488", "1"]
        );
        assert_eq!(positive_ids().last(), Some(PersonId::Text("1".to_string())));

        let negative: Vec<_> = negative_ids().collect();
        assert_eq!(
            negative,
            vec![
                PersonId::Number(-1),
                PersonId::Text("aa".to_string()),
                PersonId::Text("-q0".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_post_get_person_reads_back_generated_id() {
        let api = api(ScriptedClient::new(|method, path, _| {
            Ok(match method {
                HttpMethod::Post => respond(201, "31"),
                _ if path == "/api/person/31" => respond(200, r#"{"id": 31, "name": "artem"}"#),
                _ => respond(404, ""),
            })
        }));

        post_get_person(&api).await.unwrap();

        let requests = api.client().requests();
        assert_eq!(requests.len(), 9);
        assert_eq!(requests[0].body, Some(json!({"id": 1, "name": "artem"})));
        assert_eq!(requests[1].url.path(), "/api/person/31");
        assert_eq!(
            requests[8].body,
            Some(json!({"id": "1", "name": "artem1"}))
        );
    }

    #[tokio::test]
    async fn test_post_get_person_detects_id_mismatch() {
        let api = api(ScriptedClient::new(|method, _, _| {
            Ok(match method {
                HttpMethod::Post => respond(201, "31"),
                _ => respond(200, r#"{"id": 30, "name": "artem"}"#),
            })
        }));

        let err = post_get_person(&api).await.unwrap_err();
        let results = err.assertion_results().unwrap();
        assert_eq!(results.suite_name, "GET /person/31");
        assert_eq!(
            results.failures().next().unwrap().error.as_deref(),
            Some("'id' mismatch: expected 31, got 30")
        );
    }

    #[tokio::test]
    async fn test_read_back_status_is_not_checked() {
        let api = api(ScriptedClient::new(|method, _, _| {
            Ok(match method {
                HttpMethod::Post => respond(201, "31"),
                _ => respond(500, r#"{"id": 31}"#),
            })
        }));

        post_get_person(&api).await.unwrap();
        assert_eq!(api.observer().statuses()[1], 500);
    }

    #[tokio::test]
    async fn test_read_back_without_body_fails_on_lookup() {
        let api = api(ScriptedClient::new(|method, _, _| {
            Ok(match method {
                HttpMethod::Post => respond(201, "31"),
                _ => respond(404, ""),
            })
        }));

        let err = post_get_person(&api).await.unwrap_err();

        let results = err.assertion_results().unwrap();
        assert_eq!(results.suite_name, "GET /person/31");
        assert!(
            results
                .failures()
                .next()
                .unwrap()
                .error
                .as_deref()
                .is_some_and(|e| e.starts_with("Failed to parse body as JSON"))
        );
        assert_eq!(api.client().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_post_negative_accepts_400_or_500() {
        let api = api(ScriptedClient::new(|_, _, body| {
            let id = body.map(|b| b["id"].clone()).unwrap_or_default();
            Ok(if id == json!(-1) {
                respond(500, "")
            } else {
                respond(400, "")
            })
        }));
        post_negative(&api).await.unwrap();
        assert_eq!(api.observer().statuses(), vec![500, 400, 400]);
    }

    #[tokio::test]
    async fn test_post_negative_stops_at_first_accepted_id() {
        let api = api(ScriptedClient::fixed(201, "5"));

        let err = post_negative(&api).await.unwrap_err();

        assert_eq!(err.assertion_results().unwrap().suite_name, "POST /person id=-1");
        assert_eq!(api.client().requests().len(), 1);
    }
}
