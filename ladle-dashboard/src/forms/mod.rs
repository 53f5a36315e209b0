//! Form staging
//!
//! Forms hold a single entity's fields as raw input state, seeded from an
//! optional existing entity, and emit a fully-populated payload on submit.
//! They never talk to the network.

pub mod cancellation;
pub mod cuisine;
pub mod dish;
pub mod reservation;
pub mod table;

pub use cancellation::{CANCELLATION_REASONS, CancellationReasonForm};
pub use cuisine::CuisineForm;
pub use dish::DishForm;
pub use reservation::ReservationForm;
pub use table::TableForm;

/// Parse a staged numeric input, defaulting to zero on invalid text
pub(crate) fn parse_or_zero<T>(raw: &str) -> T
where
    T: std::str::FromStr + Default,
{
    raw.trim().parse().unwrap_or_default()
}

/// Parse an optional numeric input; empty or invalid text stays unset
pub(crate) fn parse_optional<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
