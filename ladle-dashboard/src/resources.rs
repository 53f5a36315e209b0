//! Resource bindings for the dashboard's manageable collections
//!
//! Each impl ties an entity from `shared` to its REST endpoints and payload
//! shapes, so the generic controller can drive it.

use ladle_client::endpoints;
use shared::models::{
    CustomOrder, CustomOrderStatusUpdate, Dish, DishCreate, DishUpdate, Order, OrderStatusUpdate,
    Reservation, ReservationCreate, ReservationStatusUpdate, ReservationUpdate, Table, TableCreate,
    TableUpdate,
};

use crate::controller::{Resource, Scope};

impl Resource for Table {
    type Create = TableCreate;
    type Update = TableUpdate;
    type StatusUpdate = TableUpdate;

    const KIND: &'static str = "table";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection_path(_scope: &Scope) -> String {
        endpoints::tables()
    }

    fn item_path(id: &str) -> String {
        endpoints::table_item(id)
    }
}

impl Resource for Reservation {
    type Create = ReservationCreate;
    type Update = ReservationUpdate;
    type StatusUpdate = ReservationStatusUpdate;

    const KIND: &'static str = "reservation";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection_path(_scope: &Scope) -> String {
        endpoints::reservations()
    }

    fn item_path(id: &str) -> String {
        endpoints::reservation_item(id)
    }
}

impl Resource for Dish {
    type Create = DishCreate;
    type Update = DishUpdate;
    type StatusUpdate = DishUpdate;

    const KIND: &'static str = "dish";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection_path(_scope: &Scope) -> String {
        endpoints::menu()
    }

    fn item_path(id: &str) -> String {
        endpoints::menu_item(id)
    }
}

impl Resource for CustomOrder {
    // The restaurant side never creates or rewrites custom orders; it only
    // transitions their status (accept with price, reject, progress).
    type Create = ();
    type Update = CustomOrderStatusUpdate;
    type StatusUpdate = CustomOrderStatusUpdate;

    const KIND: &'static str = "custom order";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection_path(scope: &Scope) -> String {
        endpoints::custom_orders(&scope.restaurant_id)
    }

    fn item_path(id: &str) -> String {
        endpoints::custom_order_item(id)
    }

    /// The backend may return duplicate rows; collapse by id with
    /// last-write-wins, then order newest first.
    fn normalize(items: Vec<Self>) -> Vec<Self> {
        let mut seen: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
        let mut deduped: Vec<Self> = Vec::with_capacity(items.len());
        for item in items {
            match seen.get(&item.id) {
                Some(&index) => deduped[index] = item,
                None => {
                    seen.insert(item.id.clone(), deduped.len());
                    deduped.push(item);
                }
            }
        }
        deduped.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        deduped
    }
}

impl Resource for Order {
    // Orders are placed by customers; the dashboard only advances status.
    type Create = ();
    type Update = OrderStatusUpdate;
    type StatusUpdate = OrderStatusUpdate;

    const KIND: &'static str = "order";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection_path(scope: &Scope) -> String {
        endpoints::restaurant_orders(&scope.restaurant_id)
    }

    fn item_path(id: &str) -> String {
        format!("/orders/{id}")
    }

    fn status_path(id: &str) -> String {
        endpoints::order_status(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::CustomOrderStatus;

    fn custom_order(id: &str, day: u32, dish: &str) -> CustomOrder {
        CustomOrder {
            id: id.to_string(),
            user_id: "u1".to_string(),
            dish_name: dish.to_string(),
            ingredients: vec![],
            excluded_ingredients: vec![],
            price: None,
            status: CustomOrderStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn normalize_dedups_last_write_wins() {
        let items = vec![
            custom_order("co1", 1, "first copy"),
            custom_order("co2", 3, "other"),
            custom_order("co1", 2, "second copy"),
        ];
        let normalized = CustomOrder::normalize(items);
        assert_eq!(normalized.len(), 2);
        // the later occurrence of co1 wins
        let co1 = normalized.iter().find(|o| o.id == "co1").unwrap();
        assert_eq!(co1.dish_name, "second copy");
    }

    #[test]
    fn normalize_sorts_newest_first() {
        let items = vec![
            custom_order("co1", 1, "old"),
            custom_order("co2", 5, "new"),
            custom_order("co3", 3, "mid"),
        ];
        let normalized = CustomOrder::normalize(items);
        let ids: Vec<&str> = normalized.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["co2", "co3", "co1"]);
    }

    #[test]
    fn scoped_paths() {
        let scope = Scope::new("r1");
        assert_eq!(CustomOrder::collection_path(&scope), "/custom-orders/r1/orders");
        assert_eq!(Order::collection_path(&scope), "/orders/restaurant/r1");
        assert_eq!(Order::status_path("o9"), "/orders/o9/status");
        assert_eq!(Table::collection_path(&scope), "/tables");
    }
}
