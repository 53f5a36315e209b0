//! Cancellation reason picker

/// Predefined cancellation reasons; "Other" requires custom text
pub const CANCELLATION_REASONS: &[&str] = &[
    "Customer request",
    "No-show",
    "Overbooking",
    "Kitchen closed early",
    "Other",
];

const OTHER: &str = "Other";

/// Staged cancellation reason selection
#[derive(Debug, Clone, Default)]
pub struct CancellationReasonForm {
    pub selected: Option<String>,
    pub custom_reason: String,
}

impl CancellationReasonForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, reason: impl Into<String>) {
        self.selected = Some(reason.into());
    }

    /// Confirm stays disabled until a usable reason exists
    pub fn can_confirm(&self) -> bool {
        match self.selected.as_deref() {
            Some(OTHER) => !self.custom_reason.trim().is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    /// The reason to send; `None` while confirmation is blocked
    pub fn reason(&self) -> Option<String> {
        if !self.can_confirm() {
            return None;
        }
        match self.selected.as_deref() {
            Some(OTHER) => Some(self.custom_reason.trim().to_string()),
            Some(reason) => Some(reason.to_string()),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_reason_enables_confirm_immediately() {
        let mut form = CancellationReasonForm::new();
        assert!(!form.can_confirm());
        form.select("No-show");
        assert!(form.can_confirm());
        assert_eq!(form.reason().as_deref(), Some("No-show"));
    }

    #[test]
    fn other_requires_custom_text() {
        let mut form = CancellationReasonForm::new();
        form.select("Other");
        assert!(!form.can_confirm());
        assert!(form.reason().is_none());

        form.custom_reason = "  double booking  ".into();
        assert!(form.can_confirm());
        assert_eq!(form.reason().as_deref(), Some("double booking"));
    }
}
