//! Reservation form (walk-in entry and edits)

use chrono::{DateTime, Utc};
use shared::models::{Reservation, ReservationCreate, ReservationUpdate};

use super::parse_or_zero;
use crate::controller::SaveAction;

/// Staged reservation fields; the time is staged as RFC 3339 text
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    editing: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    pub guest_count: String,
    pub reservation_time: String,
    pub table_id: Option<String>,
    pub special_requests: String,
}

impl ReservationForm {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(reservation: &Reservation) -> Self {
        Self {
            editing: Some(reservation.id.clone()),
            customer_name: reservation.customer_name.clone().unwrap_or_default(),
            customer_phone: reservation.customer_phone.clone().unwrap_or_default(),
            guest_count: reservation.guest_count.to_string(),
            reservation_time: reservation.reservation_time.to_rfc3339(),
            table_id: reservation.table_id.clone(),
            special_requests: reservation.special_requests.clone().unwrap_or_default(),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Staged time parsed back to UTC, if well-formed
    pub fn parsed_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.reservation_time.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn can_submit(&self) -> bool {
        !self.customer_name.trim().is_empty() && self.parsed_time().is_some()
    }

    fn optional(text: &str) -> Option<String> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn submit(&self) -> Option<SaveAction<Reservation>> {
        let time = self.parsed_time()?;
        if !self.can_submit() {
            return None;
        }
        let action = match &self.editing {
            Some(id) => SaveAction::Update {
                id: id.clone(),
                data: ReservationUpdate {
                    customer_name: Some(self.customer_name.trim().to_string()),
                    customer_phone: Self::optional(&self.customer_phone),
                    guest_count: Some(parse_or_zero(&self.guest_count)),
                    reservation_time: Some(time),
                    table_id: self.table_id.clone(),
                    special_requests: Self::optional(&self.special_requests),
                },
            },
            None => SaveAction::Create(ReservationCreate {
                customer_name: self.customer_name.trim().to_string(),
                customer_phone: Self::optional(&self.customer_phone),
                guest_count: parse_or_zero(&self.guest_count),
                reservation_time: time,
                table_id: self.table_id.clone(),
                special_requests: Self::optional(&self.special_requests),
            }),
        };
        Some(action)
    }
}
