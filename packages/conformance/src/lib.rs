//! Shared helpers for the paintshop conformance test suite.
//!
//! Provides [`spawn_backend`]: a stand-in for the shop backend that binds a
//! `TcpListener` on an ephemeral port, records every request it receives and
//! answers from a script the test controls. Unscripted routes answer
//! `200 {"success": true}`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use paintshop_api::ErrorBody;
use serde_json::{json, Value};

/// Mount point of the API on the stub, as on the real backend.
pub const API_PREFIX: &str = "/api";

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path below [`API_PREFIX`], query string included.
    pub path: String,
    /// Header names lowercased.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The body parsed as JSON, `None` if it is not.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Scripted {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    /// The backend's standard error body.
    pub fn error(status: u16, body: &ErrorBody) -> Self {
        Self::json(status, serde_json::to_value(body).unwrap_or_else(|_| json!({})))
    }

    /// A non-JSON body, e.g. a proxy's HTML error page.
    pub fn html(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: String::new(),
        }
    }
}

#[derive(Default)]
struct Script {
    routes: HashMap<(String, String), Scripted>,
    seen: Vec<Recorded>,
}

/// Handle on a running stub backend.
#[derive(Clone)]
pub struct Backend {
    /// API base URL to configure the client with, e.g.
    /// `http://127.0.0.1:51234/api`.
    pub api_base: String,
    script: Arc<Mutex<Script>>,
}

impl Backend {
    /// Answer `method path` (no query string) with `response` from now on.
    pub fn on(&self, method: &str, path: &str, response: Scripted) {
        let mut script = self.script.lock().expect("script lock");
        script
            .routes
            .insert((method.to_ascii_uppercase(), path.to_string()), response);
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Recorded> {
        self.script.lock().expect("script lock").seen.clone()
    }

    /// The most recent request.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been received yet.
    pub fn last(&self) -> Recorded {
        self.requests()
            .pop()
            .expect("backend has not received any request")
    }
}

/// Start a stub backend on an ephemeral port.
///
/// The server runs in a background `tokio` task for the rest of the test.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound.
pub async fn spawn_backend() -> Backend {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");

    let script = Arc::new(Mutex::new(Script::default()));
    let router = Router::new()
        .fallback(handle)
        .with_state(Arc::clone(&script));

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub backend error");
    });

    Backend {
        api_base: format!("http://{addr}{API_PREFIX}"),
        script,
    }
}

async fn handle(
    State(script): State<Arc<Mutex<Script>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let path = uri.path().strip_prefix(API_PREFIX).unwrap_or(uri.path());
    let full = match uri.query() {
        Some(q) => format!("{path}?{q}"),
        None => path.to_string(),
    };

    let recorded = Recorded {
        method: method.as_str().to_string(),
        path: full,
        headers: headers
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect(),
        body: body.to_vec(),
    };

    let response = {
        let mut script = script.lock().expect("script lock");
        let key = (method.as_str().to_string(), path.to_string());
        let response = script
            .routes
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Scripted::json(200, json!({"success": true})));
        script.seen.push(recorded);
        response
    };

    (
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
}
