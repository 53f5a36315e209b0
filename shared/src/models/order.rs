//! Order Model
//!
//! Regular (non-custom) orders shown in the restaurant order feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    OutForDelivery,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::OutForDelivery => "Out for Delivery",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "yellow",
            Self::Preparing => "blue",
            Self::Ready => "cyan",
            Self::OutForDelivery => "magenta",
            Self::Completed => "green",
            Self::Cancelled => "red",
        }
    }

    /// Next status in the fulfilment flow, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Completed),
            Self::Completed | Self::Cancelled => None,
        }
    }
}

/// Line item within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub dish_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Status advance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
