//! Custom order (recipe box) management

use std::sync::Arc;

use ladle_client::ApiTransport;
use shared::models::{CustomOrder, CustomOrderStatus, CustomOrderStatusUpdate};

use crate::controller::{ResourceController, Scope};
use crate::notify::Notice;
use crate::pager::{CUSTOM_ORDERS_PAGE_SIZE, Pager};
use crate::session::{NOT_AUTHORIZED_MESSAGE, Session};

/// Orchestrates incoming custom-order requests
///
/// The fetched list is deduplicated by id (last write wins) and sorted
/// newest first before display; see the `CustomOrder` resource binding.
pub struct CustomOrderManager<T: ApiTransport> {
    session: Session,
    pub orders: ResourceController<CustomOrder, T>,
    pub pager: Pager,
    auth_error: Option<&'static str>,
}

impl<T: ApiTransport> CustomOrderManager<T> {
    pub fn new(transport: Arc<T>, session: Session) -> Self {
        let scope = Scope::new(session.restaurant_id().unwrap_or_default());
        Self {
            orders: ResourceController::new(transport, scope),
            pager: Pager::new(CUSTOM_ORDERS_PAGE_SIZE),
            session,
            auth_error: None,
        }
    }

    pub fn auth_error(&self) -> Option<&'static str> {
        self.auth_error
    }

    pub async fn refresh(&mut self) {
        if !self.session.can_manage() {
            self.auth_error = Some(NOT_AUTHORIZED_MESSAGE);
            return;
        }
        self.auth_error = None;
        self.orders.fetch_all().await;
        self.pager.clamp(self.orders.items().len());
    }

    pub fn page(&self) -> &[CustomOrder] {
        self.pager.slice(self.orders.items())
    }

    /// Accept and price the request in one transition
    pub async fn accept(&mut self, id: &str, price: f64) -> bool {
        self.transition(id, CustomOrderStatus::Accepted, Some(price)).await
    }

    pub async fn reject(&mut self, id: &str) -> bool {
        self.transition(id, CustomOrderStatus::Rejected, None).await
    }

    pub async fn start_preparing(&mut self, id: &str) -> bool {
        self.transition(id, CustomOrderStatus::InProgress, None).await
    }

    pub async fn complete(&mut self, id: &str) -> bool {
        self.transition(id, CustomOrderStatus::Completed, None).await
    }

    async fn transition(
        &mut self,
        id: &str,
        status: CustomOrderStatus,
        price: Option<f64>,
    ) -> bool {
        let payload = CustomOrderStatusUpdate { status, price };
        self.orders.update_status(id, &payload).await
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.orders.notices.drain()
    }
}
