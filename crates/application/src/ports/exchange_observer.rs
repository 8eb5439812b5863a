//! Exchange reporting port

use std::sync::{Arc, Mutex, PoisonError};

use person_suite_domain::HttpExchange;

/// Receives every completed exchange.
///
/// Observers are purely observational: they cannot fail the call and must
/// not panic on odd payloads.
pub trait ExchangeObserver: Send + Sync {
    /// Records one exchange.
    fn record(&self, exchange: &HttpExchange);
}

impl<T: ExchangeObserver + ?Sized> ExchangeObserver for &T {
    fn record(&self, exchange: &HttpExchange) {
        (**self).record(exchange);
    }
}

impl<T: ExchangeObserver + ?Sized> ExchangeObserver for Arc<T> {
    fn record(&self, exchange: &HttpExchange) {
        (**self).record(exchange);
    }
}

impl<A: ExchangeObserver, B: ExchangeObserver> ExchangeObserver for (A, B) {
    fn record(&self, exchange: &HttpExchange) {
        self.0.record(exchange);
        self.1.record(exchange);
    }
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExchangeObserver for NoopObserver {
    fn record(&self, _exchange: &HttpExchange) {}
}

/// In-memory observer that keeps every exchange in order.
#[derive(Debug, Default)]
pub struct ExchangeLog {
    entries: Mutex<Vec<HttpExchange>>,
}

impl ExchangeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded exchanges.
    #[must_use]
    pub fn exchanges(&self) -> Vec<HttpExchange> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the status codes in the order they were observed.
    #[must_use]
    pub fn statuses(&self) -> Vec<u16> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|e| e.status_code)
            .collect()
    }

    /// Number of recorded exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExchangeObserver for ExchangeLog {
    fn record(&self, exchange: &HttpExchange) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(exchange.clone());
    }
}
