//! One request/response pair between the suite and the server.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::request::{HttpMethod, RequestSpec};
use crate::response::{ResponseSpec, StatusCode};

/// Record of a completed HTTP call, handed to observers for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpExchange {
    /// Identifier of the originating request.
    pub id: Uuid,
    /// When the request was dispatched.
    pub sent_at: DateTime<Utc>,
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL.
    pub url: Url,
    /// Status code returned by the server.
    pub status_code: u16,
    /// Body that was sent, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    /// Body that was received; `None` when the server sent nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    /// Round-trip time.
    pub duration: Duration,
}

impl HttpExchange {
    /// Pairs a request with the response it produced.
    #[must_use]
    pub fn new(request: &RequestSpec, response: &ResponseSpec, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: request.id,
            sent_at,
            method: request.method,
            url: request.url.clone(),
            status_code: response.status,
            request_body: request.body.clone(),
            response_body: (!response.body.is_empty()).then(|| response.body.clone()),
            duration: response.duration,
        }
    }

    /// Returns the status as a `StatusCode` struct.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        StatusCode::new(self.status_code)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_exchange_copies_request_and_response() {
        let url = Url::parse("http://localhost:8080/api/person").unwrap();
        let request = RequestSpec::post(url.clone(), json!({"id": 0, "name": "Test Person"}));
        let response =
            ResponseSpec::new(201u16, HashMap::new(), b"12", Duration::from_millis(3));

        let exchange = HttpExchange::new(&request, &response, Utc::now());

        assert_eq!(exchange.id, request.id);
        assert_eq!(exchange.method, HttpMethod::Post);
        assert_eq!(exchange.url, url);
        assert_eq!(exchange.status_code, 201);
        assert_eq!(
            exchange.request_body,
            Some(json!({"id": 0, "name": "Test Person"}))
        );
        assert_eq!(exchange.response_body.as_deref(), Some("12"));
        assert!(!exchange.status().is_failure());
    }

    #[test]
    fn test_empty_response_body_is_none() {
        let url = Url::parse("http://localhost:8080/api/person/1").unwrap();
        let request = RequestSpec::get(url);
        let response = ResponseSpec::new(204u16, HashMap::new(), b"", Duration::ZERO);

        let exchange = HttpExchange::new(&request, &response, Utc::now());
        assert_eq!(exchange.request_body, None);
        assert_eq!(exchange.response_body, None);
    }
}
