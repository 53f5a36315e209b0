//! Shared types for the Ladle dashboard
//!
//! Common types used across the client and dashboard crates: entity models,
//! create/update payloads, status enums and API response structures.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginResponse, UserInfo};
pub use response::ErrorBody;
