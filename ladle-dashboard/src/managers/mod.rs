//! Per-resource managers
//!
//! Thin wiring over the generic controller: each manager owns the
//! collections for one dashboard tab, applies the session gate, and carries
//! the couplings the generic controller cannot know about (dependent
//! refetches, status cascades, the report download).

pub mod custom_orders;
pub mod menu;
pub mod orders;
pub mod profile;
pub mod tables;

pub use custom_orders::CustomOrderManager;
pub use menu::MenuManager;
pub use orders::OrderManager;
pub use profile::ProfileManager;
pub use tables::TableManager;
