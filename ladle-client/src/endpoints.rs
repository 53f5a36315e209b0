//! REST endpoint paths
//!
//! Single source of truth for the backend's URL layout; controllers build
//! every request path through these helpers.

/// `GET`/`PUT /restaurants/profile`
pub fn restaurant_profile() -> String {
    "/restaurants/profile".to_string()
}

/// `GET`/`POST /restaurants/menu`
pub fn menu() -> String {
    "/restaurants/menu".to_string()
}

/// `PUT`/`DELETE /restaurants/menu/:id`
pub fn menu_item(id: &str) -> String {
    format!("/restaurants/menu/{id}")
}

/// `GET`/`POST /tables`
pub fn tables() -> String {
    "/tables".to_string()
}

/// `PUT`/`DELETE /tables/:id`
pub fn table_item(id: &str) -> String {
    format!("/tables/{id}")
}

/// `GET`/`POST /reservations`
pub fn reservations() -> String {
    "/reservations".to_string()
}

/// `PUT`/`DELETE /reservations/:id`
pub fn reservation_item(id: &str) -> String {
    format!("/reservations/{id}")
}

/// `GET /custom-orders/:restaurant_id/orders`
pub fn custom_orders(restaurant_id: &str) -> String {
    format!("/custom-orders/{restaurant_id}/orders")
}

/// `PUT /custom-orders/:id`
pub fn custom_order_item(id: &str) -> String {
    format!("/custom-orders/{id}")
}

/// `GET /orders/restaurant/:restaurant_id`
pub fn restaurant_orders(restaurant_id: &str) -> String {
    format!("/orders/restaurant/{restaurant_id}")
}

/// `PUT /orders/:id/status`
pub fn order_status(id: &str) -> String {
    format!("/orders/{id}/status")
}

/// `GET /orders/report/completed`
pub fn completed_orders_report() -> String {
    "/orders/report/completed".to_string()
}
