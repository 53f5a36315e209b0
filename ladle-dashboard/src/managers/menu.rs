//! Menu management

use std::sync::Arc;

use ladle_client::ApiTransport;
use shared::models::{Dish, DishUpdate};

use crate::controller::{ResourceController, SaveAction, Scope};
use crate::notify::Notice;
use crate::pager::{ORDERS_PAGE_SIZE, Pager};
use crate::session::{NOT_AUTHORIZED_MESSAGE, Session};

/// Orchestrates the menu tab: dish CRUD and availability toggles
pub struct MenuManager<T: ApiTransport> {
    session: Session,
    pub dishes: ResourceController<Dish, T>,
    pub pager: Pager,
    auth_error: Option<&'static str>,
}

impl<T: ApiTransport> MenuManager<T> {
    pub fn new(transport: Arc<T>, session: Session) -> Self {
        let scope = Scope::new(session.restaurant_id().unwrap_or_default());
        Self {
            dishes: ResourceController::new(transport, scope),
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
        self.dishes.fetch_all().await;
        self.pager.clamp(self.dishes.items().len());
    }

    /// Current page of the menu grid
    pub fn page(&self) -> &[Dish] {
        self.pager.slice(self.dishes.items())
    }

    pub async fn save_dish(&mut self, action: SaveAction<Dish>) -> bool {
        let saved = self.dishes.save(action).await;
        self.pager.clamp(self.dishes.items().len());
        saved
    }

    /// Availability flips go through the normal save path: full refetch,
    /// no in-place patching
    pub async fn toggle_availability(&mut self, id: &str) -> bool {
        let Some(dish) = self.dishes.find(id) else {
            return false;
        };
        let action = SaveAction::Update {
            id: id.to_string(),
            data: DishUpdate {
                is_available: Some(!dish.is_available),
                ..Default::default()
            },
        };
        self.save_dish(action).await
    }

    pub fn request_delete_dish(&mut self, id: impl Into<String>) {
        self.dishes.request_delete(id);
    }

    pub fn cancel_delete_dish(&mut self) {
        self.dishes.cancel_delete();
    }

    pub async fn confirm_delete_dish(&mut self) {
        self.dishes.confirm_delete().await;
        self.pager.clamp(self.dishes.items().len());
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.dishes.notices.drain()
    }
}
