//! The error taxonomy every client call fails with, and the rule that maps a
//! non-2xx response onto it.
//!
//! | Variant | Raised when | Envelope status |
//! |---------|-------------|-----------------|
//! | [`ApiError::SessionExpired`] | any `401` | `401` |
//! | [`ApiError::AdminSessionExpired`] | `403` in [`Context::Admin`] | `403` |
//! | [`ApiError::RequestFailed`] | any other non-2xx | the response status |
//! | [`ApiError::Network`] | no usable response (connect, timeout, bad JSON) | absent |
//! | [`ApiError::Catalog`] | caller misuse of the endpoint catalog | absent |
//! | [`ApiError::Session`] | the session store failed | absent |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::session::StoreError;
use crate::types::Context;

/// Per-field validation messages, as returned by the backend's `errors` map.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";
pub const ADMIN_SESSION_EXPIRED: &str = "Admin session expired. Please login again.";
pub const REQUEST_FAILED: &str = "Request failed";
pub const UPLOAD_FAILED: &str = "Upload failed";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";

/// The normalized error shape handed to UI code.
///
/// ```json
/// { "status": 422, "message": "The given data was invalid.", "errors": { "email": ["taken"] } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorEnvelope {
    /// HTTP status; absent for failures that never produced a response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub errors: FieldErrors,
}

/// Why a client call failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (`401`).
    #[error("{message}")]
    SessionExpired { message: String },

    /// The admin console got a `403`: the token is no longer an admin's.
    #[error("{message}")]
    AdminSessionExpired { message: String },

    /// Any other non-2xx response.
    #[error("{message} (HTTP {status})")]
    RequestFailed {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    /// No usable response was obtained.
    #[error("{message}")]
    Network { message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] StoreError),
}

impl ApiError {
    /// A [`ApiError::Network`] with the fixed connectivity message.
    pub fn network() -> Self {
        ApiError::Network {
            message: NETWORK_ERROR.to_string(),
        }
    }

    /// HTTP status carried by the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::SessionExpired { .. } => Some(401),
            ApiError::AdminSessionExpired { .. } => Some(403),
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::Network { .. } | ApiError::Catalog(_) | ApiError::Session(_) => None,
        }
    }

    /// `true` for the two variants that invalidate the stored session.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            ApiError::SessionExpired { .. } | ApiError::AdminSessionExpired { .. }
        )
    }

    /// Project onto the [`ErrorEnvelope`] shape.
    pub fn envelope(&self) -> ErrorEnvelope {
        let errors = match self {
            ApiError::RequestFailed { errors, .. } => errors.clone(),
            _ => FieldErrors::new(),
        };
        let message = match self {
            ApiError::SessionExpired { message }
            | ApiError::AdminSessionExpired { message }
            | ApiError::RequestFailed { message, .. }
            | ApiError::Network { message } => message.clone(),
            other => other.to_string(),
        };
        ErrorEnvelope {
            status: self.status(),
            message,
            errors,
        }
    }
}

/// Map a non-2xx response onto the taxonomy.
///
/// `body` is the decoded response body (`{}` when it was empty or not JSON);
/// `fallback` is the message used when the body has none.
pub fn classify(status: u16, body: &Value, context: Context, fallback: &str) -> ApiError {
    match (status, context) {
        (401, _) => ApiError::SessionExpired {
            message: SESSION_EXPIRED.to_string(),
        },
        (403, Context::Admin) => ApiError::AdminSessionExpired {
            message: ADMIN_SESSION_EXPIRED.to_string(),
        },
        _ => ApiError::RequestFailed {
            status,
            message: body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(fallback)
                .to_string(),
            errors: field_errors(body.get("errors")),
        },
    }
}

/// Read the backend's `errors` map, accepting a bare string per field.
fn field_errors(raw: Option<&Value>) -> FieldErrors {
    let Some(Value::Object(map)) = raw else {
        return FieldErrors::new();
    };
    map.iter()
        .map(|(field, v)| {
            let messages = match v {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect(),
                other => vec![other.to_string()],
            };
            (field.clone(), messages)
        })
        .collect()
}
