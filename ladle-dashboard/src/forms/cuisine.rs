//! Cuisine list editor

use shared::models::{Restaurant, RestaurantProfileUpdate};

/// Staged cuisine tags plus the pending input
#[derive(Debug, Clone, Default)]
pub struct CuisineForm {
    pub values: Vec<String>,
    pub input: String,
}

impl CuisineForm {
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        Self {
            values: restaurant.cuisine.clone(),
            input: String::new(),
        }
    }

    /// Add the pending input; blanks and case-insensitive duplicates are
    /// ignored
    pub fn add(&mut self) {
        let value = self.input.trim().to_string();
        self.input.clear();
        if value.is_empty() {
            return;
        }
        let duplicate = self
            .values
            .iter()
            .any(|v| v.eq_ignore_ascii_case(&value));
        if !duplicate {
            self.values.push(value);
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.values.len() {
            self.values.remove(index);
        }
    }

    /// Profile update carrying only the cuisine list
    pub fn into_update(self) -> RestaurantProfileUpdate {
        RestaurantProfileUpdate {
            cuisine: Some(self.values),
            ..Default::default()
        }
    }
}
