//! Table and reservation management
//!
//! One tab owns both collections: reservations reference tables, so table
//! mutations refetch the reservation list as well.

use std::sync::Arc;

use ladle_client::ApiTransport;
use shared::models::{
    Reservation, ReservationStatus, ReservationStatusUpdate, Table, TableStatus, TableUpdate,
};

use crate::controller::{ResourceController, SaveAction, Scope};
use crate::notify::Notice;
use crate::session::{NOT_AUTHORIZED_MESSAGE, Session};

/// Orchestrates the tables tab: table CRUD plus reservation actions
pub struct TableManager<T: ApiTransport> {
    session: Session,
    pub tables: ResourceController<Table, T>,
    pub reservations: ResourceController<Reservation, T>,
    auth_error: Option<&'static str>,
}

impl<T: ApiTransport> TableManager<T> {
    pub fn new(transport: Arc<T>, session: Session) -> Self {
        let scope = Scope::new(session.restaurant_id().unwrap_or_default());
        Self {
            tables: ResourceController::new(transport.clone(), scope.clone()),
            reservations: ResourceController::new(transport, scope),
            session,
            auth_error: None,
        }
    }

    /// Static gate message when the session may not manage this page
    pub fn auth_error(&self) -> Option<&'static str> {
        self.auth_error
    }

    /// Fetch both collections; suppressed entirely without a restaurant
    /// session
    pub async fn refresh(&mut self) {
        if !self.session.can_manage() {
            self.auth_error = Some(NOT_AUTHORIZED_MESSAGE);
            return;
        }
        self.auth_error = None;
        self.tables.fetch_all().await;
        self.reservations.fetch_all().await;
    }

    // ========== Tables ==========

    pub async fn save_table(&mut self, action: SaveAction<Table>) -> bool {
        self.tables.save(action).await
    }

    pub fn request_delete_table(&mut self, id: impl Into<String>) {
        self.tables.request_delete(id);
    }

    pub fn cancel_delete_table(&mut self) {
        self.tables.cancel_delete();
    }

    /// Confirmed table deletes also refetch reservations, which may
    /// reference the removed table
    pub async fn confirm_delete_table(&mut self) {
        if self.tables.confirm_delete().await.is_some() {
            self.reservations.fetch_all().await;
        }
    }

    pub async fn set_table_status(&mut self, id: &str, status: TableStatus) -> bool {
        let payload = TableUpdate {
            status: Some(status),
            ..Default::default()
        };
        self.tables
            .update_status_refetching(id, &payload)
            .await
    }

    // ========== Reservations ==========

    pub async fn save_reservation(&mut self, action: SaveAction<Reservation>) -> bool {
        self.reservations.save(action).await
    }

    pub fn request_delete_reservation(&mut self, id: impl Into<String>) {
        self.reservations.request_delete(id);
    }

    pub fn cancel_delete_reservation(&mut self) {
        self.reservations.cancel_delete();
    }

    pub async fn confirm_delete_reservation(&mut self) {
        self.reservations.confirm_delete().await;
    }

    pub async fn confirm_reservation(&mut self, id: &str) -> bool {
        let payload = ReservationStatusUpdate {
            status: ReservationStatus::Confirmed,
            cancellation_reason: None,
            table_id: None,
        };
        self.reservations.update_status(id, &payload).await
    }

    /// Cancel with the reason picked in the cancellation modal
    pub async fn cancel_reservation(&mut self, id: &str, reason: String) -> bool {
        let payload = ReservationStatusUpdate {
            status: ReservationStatus::Cancelled,
            cancellation_reason: Some(reason),
            table_id: None,
        };
        self.reservations.update_status(id, &payload).await
    }

    /// Seat a party: the reservation becomes occupied at the given table,
    /// and the table's own status follows as a side effect
    pub async fn seat_reservation(&mut self, id: &str, table_id: &str) -> bool {
        let payload = ReservationStatusUpdate {
            status: ReservationStatus::Occupied,
            cancellation_reason: None,
            table_id: Some(table_id.to_string()),
        };
        if !self.reservations.update_status(id, &payload).await {
            return false;
        }
        self.set_table_status(table_id, TableStatus::Occupied).await
    }

    /// Close out a seated reservation and free its table
    pub async fn complete_reservation(&mut self, id: &str) -> bool {
        let table_id = self
            .reservations
            .find(id)
            .and_then(|r| r.table_id.clone());
        let payload = ReservationStatusUpdate {
            status: ReservationStatus::Completed,
            cancellation_reason: None,
            table_id: None,
        };
        if !self.reservations.update_status(id, &payload).await {
            return false;
        }
        match table_id {
            Some(table_id) => {
                self.set_table_status(&table_id, TableStatus::Available)
                    .await
            }
            None => true,
        }
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        let mut notices = self.tables.notices.drain();
        notices.extend(self.reservations.notices.drain());
        notices
    }
}
