//! Authentication bodies: `POST /login`, `POST /admin/login`, `POST /register`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /login` and `POST /admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /register`.
///
/// `password_confirmation` must equal `password`; the backend validates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// The parts of an auth response the client acts on.
///
/// ```json
/// { "success": true, "token": "1|abc...", "user": { "id": 3, "name": "Ada" } }
/// ```
///
/// Anything else in the body is left to the caller, who receives the full
/// JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    /// The `success` field, read with JavaScript truthiness.
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<Value>,
    pub message: Option<String>,
}

impl AuthResponse {
    /// Pick the auth fields out of a raw response body.
    pub fn from_body(body: &Value) -> Self {
        Self {
            success: body.get("success").map(is_truthy).unwrap_or(false),
            token: body
                .get("token")
                .and_then(Value::as_str)
                .map(str::to_string),
            user: body.get("user").filter(|u| !u.is_null()).cloned(),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Token and user, when the response both succeeded and carried a token.
    pub fn credentials(&self) -> Option<(&str, &Value)> {
        if !self.success {
            return None;
        }
        let token = self.token.as_deref()?;
        Some((token, self.user.as_ref().unwrap_or(&Value::Null)))
    }
}

/// JavaScript truthiness of a JSON value.
///
/// `false`, `null`, `0` and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
