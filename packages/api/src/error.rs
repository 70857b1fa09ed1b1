//! Standard error response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON body the backend returns for error responses.
///
/// ```json
/// { "message": "The given data was invalid.", "errors": { "email": ["The email field is required."] } }
/// ```
///
/// Both fields are optional; a bare `{}` is a valid error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Field name → list of messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Value) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_serialises_to_empty_object() {
        assert_eq!(serde_json::to_string(&ErrorBody::default()).unwrap(), "{}");
    }
}
