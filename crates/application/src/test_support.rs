//! Scripted HTTP client for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use person_suite_domain::{HttpMethod, RequestSpec, ResponseSpec};
use serde_json::Value;
use url::Url;

use crate::api::PersonApi;
use crate::ports::{ExchangeLog, HttpClient, HttpClientError, HttpFuture};

type Handler =
    dyn Fn(HttpMethod, &str, Option<&Value>) -> Result<ResponseSpec, HttpClientError> + Send + Sync;

/// Client whose responses are computed by a closure over method, path and body.
pub struct ScriptedClient {
    handler: Box<Handler>,
    seen: Mutex<Vec<RequestSpec>>,
}

impl ScriptedClient {
    pub fn new(
        handler: impl Fn(HttpMethod, &str, Option<&Value>) -> Result<ResponseSpec, HttpClientError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `status` and `body`.
    pub fn fixed(status: u16, body: &'static str) -> Self {
        Self::new(move |_, _, _| Ok(respond(status, body)))
    }

    pub fn requests(&self) -> Vec<RequestSpec> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HttpClient for ScriptedClient {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        let result = (self.handler)(request.method, request.url.path(), request.body.as_ref());
        Box::pin(async move { result })
    }
}

pub fn respond(status: u16, body: &str) -> ResponseSpec {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    ResponseSpec::new(status, headers, body.as_bytes(), Duration::from_millis(1))
}

pub fn base_url() -> Url {
    Url::parse("http://localhost:8080/api").unwrap_or_else(|e| unreachable!("{e}"))
}

pub fn api(client: ScriptedClient) -> PersonApi<ScriptedClient, ExchangeLog> {
    PersonApi::new(Arc::new(client), ExchangeLog::new(), base_url())
}
