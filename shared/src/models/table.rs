//! Table Model

use serde::{Deserialize, Serialize};

/// Table availability status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl TableStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Reserved => "Reserved",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Badge color hint used by the dashboard UI
    pub fn color(&self) -> &'static str {
        match self {
            Self::Available => "green",
            Self::Occupied => "red",
            Self::Reserved => "yellow",
            Self::Maintenance => "gray",
        }
    }
}

/// Table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub table_number: u32,
    pub seating_capacity: u32,
    #[serde(default)]
    pub status: TableStatus,
    /// Current bill amount for the seated party
    #[serde(default)]
    pub amount: f64,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub table_number: u32,
    pub seating_capacity: u32,
    pub status: TableStatus,
    pub amount: f64,
}

/// Update table payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seating_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}
