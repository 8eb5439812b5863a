//! Request description type

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use super::HttpMethod;
use crate::error::{DomainError, DomainResult};

/// Everything needed to send one HTTP call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Unique identifier for this request
    pub id: Uuid,
    /// HTTP method
    pub method: HttpMethod,
    /// Fully resolved target URL
    pub url: Url,
    /// JSON request body, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Creates a request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            id: Uuid::now_v7(),
            method,
            url,
            body: None,
        }
    }

    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a POST request carrying a JSON body.
    #[must_use]
    pub fn post(url: Url, body: Value) -> Self {
        Self::new(HttpMethod::Post, url).with_body(body)
    }

    /// Creates a PUT request carrying a JSON body.
    #[must_use]
    pub fn put(url: Url, body: Value) -> Self {
        Self::new(HttpMethod::Put, url).with_body(body)
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes any payload into a request body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be represented as JSON.
    pub fn json_body<T: Serialize + ?Sized>(payload: &T) -> DomainResult<Value> {
        serde_json::to_value(payload).map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }

    /// Builds `base` joined with the given path segments.
    ///
    /// Segments are percent-encoded, so `Test Person` becomes `Test%20Person`
    /// and a segment never introduces extra path levels.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot carry a path (e.g. `data:` URLs).
    pub fn endpoint(base: &Url, segments: &[&str]) -> DomainResult<Url> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| DomainError::InvalidUrl(format!("cannot be a base: {base}")))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}
