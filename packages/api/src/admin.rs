//! Admin console bodies.

use serde::{Deserialize, Serialize};

/// Request body for order and review status changes.
///
/// Order statuses: `pending`, `processing`, `shipped`, `delivered`,
/// `cancelled`. Review statuses: `pending`, `approved`, `rejected`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: String,
}

/// Request body for deleting an uploaded hero image or video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaPath {
    /// Storage path as returned by the upload endpoint.
    pub path: String,
}
