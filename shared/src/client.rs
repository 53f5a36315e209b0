//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

/// Role expected for dashboard access
pub const ROLE_RESTAURANT: &str = "restaurant";

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information supplied by the auth context
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Restaurant the user manages, when role is `restaurant`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
}

impl UserInfo {
    /// Whether this user may operate the restaurant dashboard
    pub fn is_restaurant(&self) -> bool {
        self.role == ROLE_RESTAURANT
    }
}
