//! Dish form

use shared::models::{Dish, DishCreate, DishUpdate, Nutrition};

use super::{parse_optional, parse_or_zero};
use crate::controller::SaveAction;

/// Staged dish fields, raw as typed
#[derive(Debug, Clone, Default)]
pub struct DishForm {
    editing: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub is_available: bool,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub diet_types: Vec<String>,
    pub health_goals: Vec<String>,
    pub prep_time_minutes: String,
}

impl DishForm {
    /// Blank form for a new dish
    pub fn create() -> Self {
        Self {
            is_available: true,
            ..Self::default()
        }
    }

    /// Form seeded from an existing dish
    pub fn edit(dish: &Dish) -> Self {
        let fmt = |n: Option<u32>| n.map(|v| v.to_string()).unwrap_or_default();
        Self {
            editing: Some(dish.id.clone()),
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: dish.price.to_string(),
            image_url: dish.image_url.clone().unwrap_or_default(),
            is_available: dish.is_available,
            calories: fmt(dish.nutrition.calories),
            protein: fmt(dish.nutrition.protein),
            carbs: fmt(dish.nutrition.carbs),
            fat: fmt(dish.nutrition.fat),
            diet_types: dish.diet_types.clone(),
            health_goals: dish.health_goals.clone(),
            prep_time_minutes: fmt(dish.prep_time_minutes),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn toggle_diet_type(&mut self, value: &str) {
        toggle(&mut self.diet_types, value);
    }

    pub fn toggle_health_goal(&mut self, value: &str) {
        toggle(&mut self.health_goals, value);
    }

    /// Required-field check mirroring the native form validation
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty()
    }

    fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: parse_optional(&self.calories),
            protein: parse_optional(&self.protein),
            carbs: parse_optional(&self.carbs),
            fat: parse_optional(&self.fat),
        }
    }

    fn image_url(&self) -> Option<String> {
        let trimmed = self.image_url.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Emit the completed payload; `None` while required fields are missing
    pub fn submit(&self) -> Option<SaveAction<Dish>> {
        if !self.can_submit() {
            return None;
        }
        let action = match &self.editing {
            Some(id) => SaveAction::Update {
                id: id.clone(),
                data: DishUpdate {
                    name: Some(self.name.trim().to_string()),
                    description: Some(self.description.trim().to_string()),
                    price: Some(parse_or_zero(&self.price)),
                    image_url: self.image_url(),
                    is_available: Some(self.is_available),
                    nutrition: Some(self.nutrition()),
                    diet_types: Some(self.diet_types.clone()),
                    health_goals: Some(self.health_goals.clone()),
                    prep_time_minutes: parse_optional(&self.prep_time_minutes),
                },
            },
            None => SaveAction::Create(DishCreate {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                price: parse_or_zero(&self.price),
                image_url: self.image_url(),
                is_available: self.is_available,
                nutrition: self.nutrition(),
                diet_types: self.diet_types.clone(),
                health_goals: self.health_goals.clone(),
                prep_time_minutes: parse_optional(&self.prep_time_minutes),
            }),
        };
        Some(action)
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    match values.iter().position(|v| v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_parses_price_and_nutrition() {
        let mut form = DishForm::create();
        form.name = "Miso Ramen".into();
        form.price = "12.5".into();
        form.calories = "200".into();

        let action = form.submit().unwrap();
        match action {
            SaveAction::Create(payload) => {
                assert_eq!(payload.price, 12.5);
                assert_eq!(payload.nutrition.calories, Some(200));
                assert_eq!(payload.nutrition.protein, None);
            }
            SaveAction::Update { .. } => panic!("fresh form must create"),
        }
    }

    #[test]
    fn blank_calories_stay_unset() {
        let mut form = DishForm::create();
        form.name = "Salad".into();
        form.price = "8".into();

        match form.submit().unwrap() {
            SaveAction::Create(payload) => assert_eq!(payload.nutrition.calories, None),
            SaveAction::Update { .. } => panic!("fresh form must create"),
        }
    }

    #[test]
    fn invalid_price_defaults_to_zero() {
        let mut form = DishForm::create();
        form.name = "Soup".into();
        form.price = "free".into();

        match form.submit().unwrap() {
            SaveAction::Create(payload) => assert_eq!(payload.price, 0.0),
            SaveAction::Update { .. } => panic!("fresh form must create"),
        }
    }

    #[test]
    fn missing_name_blocks_submit() {
        let mut form = DishForm::create();
        form.price = "9".into();
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn seeded_form_updates_in_place() {
        let dish = Dish {
            id: "d1".into(),
            restaurant_id: "r1".into(),
            name: "Pho".into(),
            description: String::new(),
            price: 11.0,
            image_url: None,
            is_available: true,
            nutrition: Nutrition::default(),
            diet_types: vec![],
            health_goals: vec![],
            prep_time_minutes: Some(20),
        };
        let mut form = DishForm::edit(&dish);
        form.price = "11.5".into();

        match form.submit().unwrap() {
            SaveAction::Update { id, data } => {
                assert_eq!(id, "d1");
                assert_eq!(data.price, Some(11.5));
                assert_eq!(data.prep_time_minutes, Some(20));
            }
            SaveAction::Create(_) => panic!("seeded form must update"),
        }
    }

    #[test]
    fn diet_type_toggle_adds_and_removes() {
        let mut form = DishForm::create();
        form.toggle_diet_type("vegan");
        assert_eq!(form.diet_types, ["vegan"]);
        form.toggle_diet_type("vegan");
        assert!(form.diet_types.is_empty());
    }
}
