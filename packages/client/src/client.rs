//! # API Client
//!
//! The single point of HTTP communication with the shop backend. Every
//! grouped operation ends up in [`ApiClient::request`], which
//!
//! 1. adds `Accept: application/json`, `Content-Type: application/json` (JSON
//!    bodies only) and `Authorization: Bearer <token>` when a token is stored,
//!    letting caller headers win on conflict;
//! 2. sends the request and reads the whole body;
//! 3. returns the parsed JSON on 2xx, or classifies the failure into an
//!    [`ApiError`];
//! 4. hands every error to the [`SessionGuard`] before returning it.
//!
//! No retries, no deduplication, no cancellation: a call resolves or fails
//! exactly once.

use std::sync::Arc;

use paintshop::catalog::Endpoint;
use paintshop::error::{classify, REQUEST_FAILED, UPLOAD_FAILED};
use paintshop::query::with_query;
use paintshop::{ApiError, BodyShape, Context, Method, Session, StoreError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::groups::{
    Addresses, Admin, Auth, Cart, Categories, Gallery, Orders, Products, Profile, Reviews,
    Settings, Wishlist,
};
use crate::guard::SessionGuard;
use crate::navigator::{LogNavigator, Navigator};
use crate::upload::Upload;

/// Request body.
#[derive(Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(Value),
    Multipart(Upload),
}

/// One outgoing call. Built per call, never stored.
#[derive(Debug, Default)]
pub struct Request {
    pub method: Method,
    /// Path relative to the API base, query string included.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Body,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Body::Json(body);
        self
    }

    pub fn multipart(mut self, upload: Upload) -> Self {
        self.body = Body::Multipart(upload);
        self
    }

    /// Add a header that overrides any default of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// What accompanies a catalog call, checked against the entry's [`BodyShape`].
#[derive(Debug, Default)]
pub enum Payload {
    /// No body. Accepted by `json` entries (sent as `{}`) and `query`
    /// entries (no query string) as well as `none` entries.
    #[default]
    None,
    Query(Vec<(String, String)>),
    Json(Value),
    Multipart(Upload),
}

impl Payload {
    /// Serialize `body` into a [`Payload::Json`].
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self, ApiError> {
        to_json(body).map(Payload::Json)
    }

    /// A [`Payload::Query`] from borrowed pairs.
    pub fn query<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> Self {
        Payload::Query(
            pairs
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
        )
    }

    fn shape(&self) -> BodyShape {
        match self {
            Payload::None => BodyShape::None,
            Payload::Query(_) => BodyShape::Query,
            Payload::Json(_) => BodyShape::Json,
            Payload::Multipart(_) => BodyShape::Multipart,
        }
    }
}

/// Async client for the shop backend. Cheap to clone; clones share the
/// connection pool and the session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    guard: SessionGuard,
}

impl ApiClient {
    /// Build a client from `config` with an in-memory session that logs
    /// redirects.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_session(config, Arc::new(Session::in_memory()), Arc::new(LogNavigator))
    }

    /// Build a client around an existing session and navigator.
    pub fn with_session(
        config: &ClientConfig,
        session: Arc<Session>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            warn!("failed to build HTTP client: {e}");
            ApiError::network()
        })?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            guard: SessionGuard::new(Arc::clone(&session), navigator, config.context),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn context(&self) -> Context {
        self.guard.context()
    }

    /// The session this client reads tokens from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    // ── transport ────────────────────────────────────────────────────────────

    /// Send `req` and return the parsed body of a 2xx response.
    pub async fn request(&self, req: Request) -> Result<Value, ApiError> {
        let fallback = match req.body {
            Body::Multipart(_) => UPLOAD_FAILED,
            _ => REQUEST_FAILED,
        };
        let result = self.send(req, fallback).await;
        if let Err(e) = &result {
            self.guard.observe(e);
        }
        result
    }

    async fn send(&self, req: Request, fallback: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, req.path);
        let headers = self.headers(&req)?;

        let mut builder = self
            .http
            .request(to_reqwest(req.method), &url)
            .headers(headers);
        builder = match req.body {
            Body::Empty => builder,
            Body::Json(value) => builder.body(value.to_string()),
            Body::Multipart(upload) => builder.multipart(upload.into_form()?),
        };

        let response = builder.send().await.map_err(|e| {
            warn!(method = %req.method, path = %req.path, "request failed: {e}");
            ApiError::network()
        })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            warn!(method = %req.method, path = %req.path, "reading body failed: {e}");
            ApiError::network()
        })?;
        debug!(method = %req.method, path = %req.path, status = status.as_u16(), "response");

        if status.is_success() {
            decode(&bytes).map_err(|e| {
                warn!(path = %req.path, "response is not JSON: {e}");
                ApiError::network()
            })
        } else {
            let body = decode(&bytes).unwrap_or_else(|_| json!({}));
            let body = if body.is_object() { body } else { json!({}) };
            Err(classify(status.as_u16(), &body, self.context(), fallback))
        }
    }

    /// Defaults first, then the caller's headers on top.
    fn headers(&self, req: &Request) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !matches!(req.body, Body::Multipart(_)) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = self.session.token()? {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                StoreError::Corrupt("stored token is not a valid header value".to_string())
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in &req.headers {
            headers.insert(name.clone(), value.clone());
        }
        Ok(headers)
    }

    // ── convenience wrappers ─────────────────────────────────────────────────

    /// `GET path?params`.
    pub async fn get<K, V>(&self, path: &str, params: &[(K, V)]) -> Result<Value, ApiError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request(Request::new(Method::Get, with_query(path, params)))
            .await
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.request(Request::new(Method::Post, path).json(to_json(body)?))
            .await
    }

    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.request(Request::new(Method::Put, path).json(to_json(body)?))
            .await
    }

    pub async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.request(Request::new(Method::Patch, path).json(to_json(body)?))
            .await
    }

    /// `DELETE path` with no body.
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Request::new(Method::Delete, path)).await
    }

    /// `DELETE path` with a JSON body.
    pub async fn delete_with<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, ApiError> {
        self.request(Request::new(Method::Delete, path).json(to_json(body)?))
            .await
    }

    /// `POST path` with a multipart body.
    pub async fn upload(&self, path: &str, upload: Upload) -> Result<Value, ApiError> {
        self.request(Request::new(Method::Post, path).multipart(upload))
            .await
    }

    // ── catalog ──────────────────────────────────────────────────────────────

    /// Call a catalog entry with its path arguments and payload.
    ///
    /// Fails with [`ApiError::Catalog`] before any I/O when the arguments do
    /// not fit the template or the payload does not fit the entry.
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        args: &[(&str, &str)],
        payload: Payload,
    ) -> Result<Value, ApiError> {
        let path = endpoint.render(args)?;
        let shape = payload.shape();
        let accepted = shape == endpoint.body
            || (shape == BodyShape::None
                && matches!(endpoint.body, BodyShape::Json | BodyShape::Query));
        if !accepted {
            endpoint.expect_body(shape)?;
        }

        let req = match payload {
            Payload::Query(params) => Request::new(endpoint.method, with_query(&path, &params)),
            Payload::Json(value) => Request::new(endpoint.method, path).json(value),
            Payload::Multipart(upload) => Request::new(endpoint.method, path).multipart(upload),
            Payload::None if endpoint.body == BodyShape::Json => {
                Request::new(endpoint.method, path).json(json!({}))
            }
            Payload::None => Request::new(endpoint.method, path),
        };
        self.request(req).await
    }

    // ── groups ───────────────────────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    pub fn profile(&self) -> Profile<'_> {
        Profile::new(self)
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    pub fn gallery(&self) -> Gallery<'_> {
        Gallery::new(self)
    }

    pub fn reviews(&self) -> Reviews<'_> {
        Reviews::new(self)
    }

    pub fn wishlist(&self) -> Wishlist<'_> {
        Wishlist::new(self)
    }

    pub fn cart(&self) -> Cart<'_> {
        Cart::new(self)
    }

    pub fn addresses(&self) -> Addresses<'_> {
        Addresses::new(self)
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings::new(self)
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin::new(self)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn to_json<T: Serialize + ?Sized>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        warn!("request body does not serialize: {e}");
        ApiError::network()
    })
}

/// Empty or whitespace-only bodies decode as `null`.
fn decode(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        Ok(Value::Null)
    } else {
        serde_json::from_slice(bytes)
    }
}
