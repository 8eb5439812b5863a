//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the suite and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod exchange_observer;
mod http_client;

pub use exchange_observer::{ExchangeLog, ExchangeObserver, NoopObserver};
pub use http_client::{HttpClient, HttpClientError, HttpFuture};
