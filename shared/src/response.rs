//! API response types
//!
//! The backend wraps failures in a JSON body carrying a `message` field;
//! successful responses return the resource payload directly.

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses
///
/// ```json
/// { "message": "Table number already in use" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    /// Human-readable error message, surfaced to the user verbatim
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement body for DELETE and other side-effect-only calls
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
