//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the suite.

use std::collections::HashMap;
use std::error::Error as _;
use std::time::{Duration, Instant};

use person_suite_application::ports::{HttpClient, HttpClientError, HttpFuture};
use person_suite_domain::{HttpMethod, RequestSpec, ResponseSpec};
use reqwest::{Client, Method};

const USER_AGENT: &str = concat!("person-suite/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
///
/// Any response the server produces is returned as a `ResponseSpec`, whatever
/// its status. Without a timeout a request waits for the server indefinitely.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(timeout: Option<Duration>) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout: Option<Duration>) -> HttpClientError {
        if error.is_timeout() {
            #[allow(clippy::cast_possible_truncation)]
            let timeout_ms = timeout.map_or(0, |t| t.as_millis() as u64);
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_builder() {
            return HttpClientError::InvalidUrl(describe(error));
        }

        if error.is_connect() {
            let message = describe(error);
            let lower = message.to_lowercase();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();

            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                let port = error
                    .url()
                    .and_then(reqwest::Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(describe(error))
    }
}

/// Joins an error with its sources; reqwest keeps the useful part in the chain.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        // Clone what we need to move into the async block
        let method = request.method;
        let url = request.url.clone();
        let body = request.body.clone();
        let timeout = self.timeout;

        Box::pin(async move {
            let start = Instant::now();

            let mut builder = self.client.request(Self::to_reqwest_method(method), url);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout))?;

            let status = response.status().as_u16();
            let headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("Failed to read body: {}", describe(&e))))?;

            Ok(ResponseSpec::new(
                status,
                headers,
                &body_bytes,
                start.elapsed(),
            ))
        })
    }
}
