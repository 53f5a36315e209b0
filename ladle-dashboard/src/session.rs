//! Dashboard session
//!
//! Token and user identity supplied by the auth layer. Managers refuse to
//! fetch anything without a restaurant-role session.

use shared::client::UserInfo;

/// Message shown when the session cannot operate the dashboard
pub const NOT_AUTHORIZED_MESSAGE: &str =
    "Please sign in with a restaurant account to manage this page.";

/// Ambient auth state for the dashboard
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<UserInfo>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// Session with no identity; every management surface is gated off
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// True when a token is present and the user holds the restaurant role
    pub fn can_manage(&self) -> bool {
        self.token.is_some() && self.user.as_ref().is_some_and(|u| u.is_restaurant())
    }

    /// Restaurant scope for collection endpoints
    pub fn restaurant_id(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.restaurant_id.as_deref())
    }
}
