//! In-process stand-in for the person API.
//!
//! Implements the contract the suite expects from a well-behaved server:
//! - `POST /api/person` accepts non-negative integer ids (or numeric strings)
//!   and answers 201 with a generated id; anything else is 400.
//! - `GET /api/person/{id}` answers 200 with `{id, name}` or 404.
//! - `PUT /api/person/{id}` answers 422 on a badly typed body, 404 for an
//!   unknown or non-numeric id, 200 otherwise.
#![allow(clippy::expect_used, dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use url::Url;

/// How the stub treats creation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubMode {
    /// Follow the contract.
    Conforming,
    /// Answer every POST with 500.
    RejectCreates,
}

struct StubState {
    mode: StubMode,
    next_id: AtomicI64,
    people: Mutex<HashMap<i64, String>>,
}

/// A running stub; aborted on drop.
pub struct StubServer {
    /// Root of the API, e.g. `http://127.0.0.1:54321/api`.
    pub base_url: Url,
    handle: JoinHandle<()>,
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Binds an ephemeral port and serves the stub on it.
pub async fn spawn(mode: StubMode) -> StubServer {
    let state = Arc::new(StubState {
        mode,
        next_id: AtomicI64::new(1),
        people: Mutex::new(HashMap::new()),
    });
    let app = Router::new()
        .route("/api/person", post(create))
        .route("/api/person/{id}", axum::routing::get(fetch).put(update))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    StubServer {
        base_url: Url::parse(&format!("http://{addr}/api")).expect("stub url"),
        handle,
    }
}

fn accepted_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
    .filter(|id| *id >= 0)
}

async fn create(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    if state.mode == StubMode::RejectCreates {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    if body.get("id").and_then(accepted_id).is_none() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    state
        .people
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(id, name.to_string());
    (StatusCode::CREATED, Json(json!(id))).into_response()
}

async fn fetch(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let people = state.people.lock().unwrap_or_else(PoisonError::into_inner);
    match people.get(&id) {
        Some(name) => Json(json!({ "id": id, "name": name })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    if body.get("id").is_none() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    let Ok(id) = id.parse::<i64>() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut people = state.people.lock().unwrap_or_else(PoisonError::into_inner);
    match people.get_mut(&id) {
        Some(existing) => {
            name.clone_into(existing);
            Json(json!({ "id": id, "name": name })).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
