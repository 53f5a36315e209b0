//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Backend message for user-visible notifications
    ///
    /// The server's own `message` field is surfaced verbatim; transport and
    /// decode failures collapse to a generic string.
    pub fn user_message(&self) -> String {
        match self {
            Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::Unauthorized => "Authentication required".to_string(),
            Self::Http(_) | Self::InvalidResponse(_) | Self::Serialization(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_messages_surface_verbatim() {
        let err = ClientError::Validation("Table number already in use".into());
        assert_eq!(err.user_message(), "Table number already in use");
    }

    #[test]
    fn decode_failures_fall_back_to_generic_message() {
        let err = ClientError::InvalidResponse("truncated body".into());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }
}
