//! Confirmation gate for destructive actions
//!
//! A delete request parks the candidate id here; the backend call fires only
//! after an explicit confirm, which consumes the id exactly once.

/// Two-step yes/no gate holding at most one pending id
#[derive(Debug, Clone, Default)]
pub struct ConfirmGate {
    pending: Option<String>,
}

impl ConfirmGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an id for confirmation, replacing any previous candidate
    pub fn request(&mut self, id: impl Into<String>) {
        self.pending = Some(id.into());
    }

    /// Whether the gate is awaiting a decision
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// The staged id, if any
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Dismiss without confirming
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consume the staged id; returns `None` when nothing was staged
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}
