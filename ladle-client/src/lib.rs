//! Ladle Client - HTTP client for the Ladle backend
//!
//! Provides network-based HTTP calls to the restaurant REST API.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use transport::ApiTransport;

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, UserInfo};
