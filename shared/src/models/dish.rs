//! Dish Model

use serde::{Deserialize, Serialize};

/// Nutrition facts sub-record, every field optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

/// Dish entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub diet_types: Vec<String>,
    #[serde(default)]
    pub health_goals: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
}

fn default_true() -> bool {
    true
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
    pub nutrition: Nutrition,
    pub diet_types: Vec<String>,
    pub health_goals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
}

/// Update dish payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_wire_format_is_camel_case() {
        let json = serde_json::json!({
            "id": "d1",
            "restaurantId": "r1",
            "name": "Miso Ramen",
            "price": 12.5,
            "isAvailable": true,
            "nutrition": { "calories": 540 },
            "dietTypes": ["vegetarian"],
            "prepTimeMinutes": 15
        });
        let dish: Dish = serde_json::from_value(json).unwrap();
        assert_eq!(dish.restaurant_id, "r1");
        assert_eq!(dish.nutrition.calories, Some(540));
        assert!(dish.nutrition.protein.is_none());
        assert_eq!(dish.prep_time_minutes, Some(15));
    }

    #[test]
    fn empty_nutrition_serializes_to_empty_object() {
        let json = serde_json::to_value(Nutrition::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
