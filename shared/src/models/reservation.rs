//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Occupied,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Occupied => "Occupied",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "yellow",
            Self::Confirmed => "green",
            Self::Occupied => "blue",
            Self::Cancelled => "red",
            Self::Completed => "gray",
        }
    }

    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}

/// Reservation entity
///
/// Carries either a registered user reference or walk-in contact fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub restaurant_id: String,
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub guest_count: u32,
    pub reservation_time: DateTime<Utc>,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

/// Create reservation payload (walk-in entry from the dashboard)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub guest_count: u32,
    pub reservation_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Partial payload for status transitions (confirm/cancel/seat/complete)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
}
