//! Ladle Dashboard - restaurant management orchestration
//!
//! Client-side state and coordination for the restaurant dashboard: one
//! generic resource-CRUD controller parameterized by endpoint and entity
//! shape, per-resource managers wired on top of it, form staging, pagination,
//! confirmation gating and toast notifications.
//!
//! Nothing here renders; a UI (see `examples/dashboard_tui.rs`) drives the
//! managers and draws from their state.

pub mod confirm;
pub mod controller;
pub mod forms;
pub mod managers;
pub mod notify;
pub mod pager;
pub mod report;
pub mod resources;
pub mod session;

pub use confirm::ConfirmGate;
pub use controller::{Resource, ResourceController, SaveAction, Scope};
pub use notify::{Notice, NoticeLevel, NoticeQueue};
pub use pager::Pager;
pub use session::Session;
