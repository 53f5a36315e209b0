//! Order feed management

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ladle_client::{ApiTransport, endpoints};
use shared::models::{Order, OrderStatus, OrderStatusUpdate};

use crate::controller::{ResourceController, Scope};
use crate::notify::Notice;
use crate::pager::{ORDERS_PAGE_SIZE, Pager};
use crate::report;
use crate::session::{NOT_AUTHORIZED_MESSAGE, Session};

/// Orchestrates the incoming order feed and the completed-orders report
pub struct OrderManager<T: ApiTransport> {
    session: Session,
    pub orders: ResourceController<Order, T>,
    pub pager: Pager,
    auth_error: Option<&'static str>,
}

impl<T: ApiTransport> OrderManager<T> {
    pub fn new(transport: Arc<T>, session: Session) -> Self {
        let scope = Scope::new(session.restaurant_id().unwrap_or_default());
        Self {
            orders: ResourceController::new(transport, scope),
            pager: Pager::new(ORDERS_PAGE_SIZE),
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

    pub fn page(&self) -> &[Order] {
        self.pager.slice(self.orders.items())
    }

    pub async fn set_status(&mut self, id: &str, status: OrderStatus) -> bool {
        let payload = OrderStatusUpdate { status };
        let updated = self.orders.update_status_refetching(id, &payload).await;
        self.pager.clamp(self.orders.items().len());
        updated
    }

    /// Advance an order along the fulfilment flow, if it has a next step
    pub async fn advance(&mut self, id: &str) -> bool {
        let Some(next) = self.orders.find(id).and_then(|o| o.status.next()) else {
            return false;
        };
        self.set_status(id, next).await
    }

    /// Download the completed-orders report and save it as a timestamped
    /// JSON file under `dir`
    pub async fn download_completed_report(&mut self, dir: &Path) -> Option<PathBuf> {
        let blob = match self
            .orders
            .transport()
            .get_bytes(&endpoints::completed_orders_report())
            .await
        {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!(error = %e, "report download failed");
                self.orders.notices.error(e.user_message());
                return None;
            }
        };

        match report::save_report(dir, &blob) {
            Ok(path) => {
                self.orders
                    .notices
                    .success(format!("Report saved to {}", path.display()));
                Some(path)
            }
            Err(e) => {
                tracing::error!(error = %e, "report save failed");
                self.orders.notices.error("Failed to save report");
                None
            }
        }
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.orders.notices.drain()
    }
}
