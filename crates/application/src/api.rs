//! Person API client
//!
//! `PersonApi` is the injected client every scenario talks through. It builds
//! the request for one person operation, sends it through the `HttpClient`
//! port and hands the completed exchange to the `ExchangeObserver` before
//! returning the response. It never judges status codes.

use std::sync::Arc;

use chrono::Utc;
use person_suite_domain::{HttpExchange, RequestSpec, ResponseSpec};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::ApiError;
use crate::ports::{ExchangeObserver, HttpClient};

const PERSON_RESOURCE: &str = "person";

/// Client for the `/person` resource rooted at a base URL.
pub struct PersonApi<C: HttpClient, O: ExchangeObserver> {
    client: Arc<C>,
    observer: O,
    base_url: Url,
}

impl<C: HttpClient, O: ExchangeObserver> PersonApi<C, O> {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:8080/api`).
    pub const fn new(client: Arc<C>, observer: O, base_url: Url) -> Self {
        Self {
            client,
            observer,
            base_url,
        }
    }

    /// Underlying HTTP client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Observer receiving the exchanges.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// URL of the collection (`None`) or of one person.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn person_url(&self, id: Option<&str>) -> Result<Url, ApiError> {
        let url = match id {
            Some(id) => RequestSpec::endpoint(&self.base_url, &[PERSON_RESOURCE, id])?,
            None => RequestSpec::endpoint(&self.base_url, &[PERSON_RESOURCE])?,
        };
        Ok(url)
    }

    /// `POST /person` with `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not serializable or the transport fails.
    pub async fn create<T: Serialize + ?Sized>(&self, payload: &T) -> Result<ResponseSpec, ApiError> {
        let request = RequestSpec::post(self.person_url(None)?, RequestSpec::json_body(payload)?);
        self.send(request).await
    }

    /// `GET /person/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn fetch(&self, id: &str) -> Result<ResponseSpec, ApiError> {
        let request = RequestSpec::get(self.person_url(Some(id))?);
        self.send(request).await
    }

    /// `PUT /person/{id}` with `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not serializable or the transport fails.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        id: &str,
        payload: &T,
    ) -> Result<ResponseSpec, ApiError> {
        let request = RequestSpec::put(
            self.person_url(Some(id))?,
            RequestSpec::json_body(payload)?,
        );
        self.send(request).await
    }

    async fn send(&self, request: RequestSpec) -> Result<ResponseSpec, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let sent_at = Utc::now();
        let response = self.client.execute(&request).await?;
        self.observer
            .record(&HttpExchange::new(&request, &response, sent_at));
        Ok(response)
    }
}
