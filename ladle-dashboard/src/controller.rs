//! Generic resource-CRUD controller
//!
//! One controller owns the authoritative list for one resource kind scoped
//! to a restaurant, and coordinates create/update/delete against the
//! backend. The list is a cache of the last successful fetch: it is replaced
//! wholesale after every mutation, never patched incrementally - except
//! [`ResourceController::update_status`], which swaps the single affected
//! item in place.

use std::sync::Arc;

use ladle_client::{ApiTransport, ClientError};
use serde::{Serialize, de::DeserializeOwned};
use shared::response::Ack;

use crate::confirm::ConfirmGate;
use crate::notify::NoticeQueue;

/// Restaurant scope for collection endpoints
#[derive(Debug, Clone)]
pub struct Scope {
    pub restaurant_id: String,
}

impl Scope {
    pub fn new(restaurant_id: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
        }
    }
}

/// Endpoint and payload shape of one manageable resource kind
pub trait Resource: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Payload for `POST` to the collection
    type Create: Serialize + std::fmt::Debug + Clone + Send + Sync;
    /// Payload for `PUT` to an item
    type Update: Serialize + std::fmt::Debug + Clone + Send + Sync;
    /// Partial payload for status transitions
    type StatusUpdate: Serialize + std::fmt::Debug + Clone + Send + Sync;

    /// Lowercase singular noun for notices and logs
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn collection_path(scope: &Scope) -> String;
    fn item_path(id: &str) -> String;

    /// Path for status-only updates; defaults to the item path
    fn status_path(id: &str) -> String {
        Self::item_path(id)
    }

    /// Hook run on every fetched list before it is stored (dedup, ordering)
    fn normalize(items: Vec<Self>) -> Vec<Self> {
        items
    }
}

/// A completed form submission
///
/// Forms seeded from an existing entity emit `Update`; fresh forms emit
/// `Create`. The controller picks `PUT` vs `POST` from the variant.
#[derive(Debug, Clone)]
pub enum SaveAction<R: Resource> {
    Create(R::Create),
    Update { id: String, data: R::Update },
}

/// Controller owning the fetch/mutate lifecycle for one resource kind
pub struct ResourceController<R: Resource, T: ApiTransport> {
    transport: Arc<T>,
    scope: Scope,
    items: Vec<R>,
    error: Option<String>,
    loading: bool,
    editor_open: bool,
    editing: Option<String>,
    pub confirm: ConfirmGate,
    pub notices: NoticeQueue,
}

impl<R: Resource, T: ApiTransport> ResourceController<R, T> {
    pub fn new(transport: Arc<T>, scope: Scope) -> Self {
        Self {
            transport,
            scope,
            items: Vec::new(),
            error: None,
            loading: false,
            editor_open: false,
            editing: None,
            confirm: ConfirmGate::new(),
            notices: NoticeQueue::new(),
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Error from the last failed fetch, if the list is stale or absent
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Open the form, optionally seeded with an existing item's id
    pub fn open_editor(&mut self, editing: Option<&str>) {
        self.editor_open = true;
        self.editing = editing.map(str::to_string);
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.editing = None;
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Replace the cached list with a fresh fetch
    ///
    /// A failed fetch keeps whatever was cached, records the error and
    /// raises a notice. There is no retry.
    pub async fn fetch_all(&mut self) {
        self.loading = true;
        let path = R::collection_path(&self.scope);
        match self.transport.get::<Vec<R>>(&path).await {
            Ok(list) => {
                self.items = R::normalize(list);
                self.error = None;
                tracing::debug!(kind = R::KIND, count = self.items.len(), "fetched list");
            }
            Err(e) => {
                tracing::error!(kind = R::KIND, error = %e, "fetch failed");
                self.error = Some(e.user_message());
                self.notices.error(format!("Failed to load {}s", R::KIND));
            }
        }
        self.loading = false;
    }

    /// Persist a form submission, then resync with a full refetch
    ///
    /// On failure the backend message is surfaced verbatim and the editor
    /// stays open so the user can retry.
    pub async fn save(&mut self, action: SaveAction<R>) -> bool {
        let result: Result<R, ClientError> = match &action {
            SaveAction::Create(payload) => {
                self.transport
                    .post(&R::collection_path(&self.scope), payload)
                    .await
            }
            SaveAction::Update { id, data } => {
                self.transport.put(&R::item_path(id), data).await
            }
        };

        match result {
            Ok(_) => {
                self.close_editor();
                self.notices.success(format!("Saved {}", R::KIND));
                self.fetch_all().await;
                true
            }
            Err(e) => {
                tracing::error!(kind = R::KIND, error = %e, "save failed");
                self.notices.error(e.user_message());
                false
            }
        }
    }

    /// Stage a delete behind the confirmation gate; nothing is sent yet
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.confirm.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Fire the staged delete and refetch
    ///
    /// Returns the deleted id so callers can refresh dependent lists.
    pub async fn confirm_delete(&mut self) -> Option<String> {
        let id = self.confirm.take()?;
        match self.transport.delete::<Ack>(&R::item_path(&id)).await {
            Ok(_) => {
                self.notices.success(format!("Deleted {}", R::KIND));
                self.fetch_all().await;
                Some(id)
            }
            Err(e) => {
                tracing::error!(kind = R::KIND, id = %id, error = %e, "delete failed");
                self.notices.error(e.user_message());
                None
            }
        }
    }

    /// Status transition with an in-place single-item replace
    ///
    /// The one exception to the refetch-always rule: the returned entity
    /// replaces the matching cached item by identity, no full refetch.
    pub async fn update_status(&mut self, id: &str, payload: &R::StatusUpdate) -> bool {
        match self.transport.put::<R, _>(&R::status_path(id), payload).await {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) {
                    *slot = updated;
                }
                self.notices.success(format!("Updated {}", R::KIND));
                true
            }
            Err(e) => {
                tracing::error!(kind = R::KIND, id = %id, error = %e, "status update failed");
                self.notices.error(e.user_message());
                false
            }
        }
    }

    /// Status transition followed by a full refetch (order feed)
    pub async fn update_status_refetching(&mut self, id: &str, payload: &R::StatusUpdate) -> bool {
        match self.transport.put::<R, _>(&R::status_path(id), payload).await {
            Ok(_) => {
                self.notices.success(format!("Updated {}", R::KIND));
                self.fetch_all().await;
                true
            }
            Err(e) => {
                tracing::error!(kind = R::KIND, id = %id, error = %e, "status update failed");
                self.notices.error(e.user_message());
                false
            }
        }
    }

    pub(crate) fn transport(&self) -> &Arc<T> {
        &self.transport
    }
}
