//! Table form

use shared::models::{Table, TableCreate, TableStatus, TableUpdate};

use super::parse_or_zero;
use crate::controller::SaveAction;

/// Staged table fields
#[derive(Debug, Clone, Default)]
pub struct TableForm {
    editing: Option<String>,
    pub table_number: String,
    pub seating_capacity: String,
    pub status: TableStatus,
    pub amount: String,
}

impl TableForm {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(table: &Table) -> Self {
        Self {
            editing: Some(table.id.clone()),
            table_number: table.table_number.to_string(),
            seating_capacity: table.seating_capacity.to_string(),
            status: table.status,
            amount: table.amount.to_string(),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !self.table_number.trim().is_empty() && !self.seating_capacity.trim().is_empty()
    }

    pub fn submit(&self) -> Option<SaveAction<Table>> {
        if !self.can_submit() {
            return None;
        }
        let action = match &self.editing {
            Some(id) => SaveAction::Update {
                id: id.clone(),
                data: TableUpdate {
                    table_number: Some(parse_or_zero(&self.table_number)),
                    seating_capacity: Some(parse_or_zero(&self.seating_capacity)),
                    status: Some(self.status),
                    amount: Some(parse_or_zero(&self.amount)),
                },
            },
            None => SaveAction::Create(TableCreate {
                table_number: parse_or_zero(&self.table_number),
                seating_capacity: parse_or_zero(&self.seating_capacity),
                status: self.status,
                amount: parse_or_zero(&self.amount),
            }),
        };
        Some(action)
    }
}
