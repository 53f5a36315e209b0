//! Custom Order Model
//!
//! A user-specified recipe request routed to a restaurant for acceptance
//! and pricing (the "recipe box" feature).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Custom order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CustomOrderStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    InProgress,
    Completed,
}

impl CustomOrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "yellow",
            Self::Accepted => "green",
            Self::Rejected => "red",
            Self::InProgress => "blue",
            Self::Completed => "gray",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }
}

/// Custom order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrder {
    pub id: String,
    pub user_id: String,
    pub dish_name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
    /// Set by the restaurant on acceptance
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: CustomOrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Partial payload for status transitions; price accompanies acceptance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderStatusUpdate {
    pub status: CustomOrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}
