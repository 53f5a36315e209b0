//! Data models
//!
//! Mirrored from the backend REST API (camelCase on the wire). Entity ids
//! are backend-owned strings; the client never invents identity.

pub mod custom_order;
pub mod dish;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod table;

// Re-exports
pub use custom_order::*;
pub use dish::*;
pub use order::*;
pub use reservation::*;
pub use restaurant::*;
pub use table::*;
