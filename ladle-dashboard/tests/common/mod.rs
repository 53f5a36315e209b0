// ladle-dashboard/tests/common/mod.rs
// In-memory transport fake and fixture builders
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use ladle_client::{ApiTransport, ClientError, ClientResult};
use ladle_dashboard::Session;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::client::UserInfo;

type Route = Result<Value, String>;

fn key(method: &str, path: &str) -> String {
    format!("{method} {path}")
}

/// Scripted transport: canned responses per method+path, with a call log
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<HashMap<String, Value>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response
    pub fn route(&self, method: &str, path: &str, value: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert(key(method, path), Ok(value));
    }

    /// Script a backend failure with the given message
    pub fn fail(&self, method: &str, path: &str, message: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(key(method, path), Err(message.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, method: &str, path: &str) -> usize {
        let wanted = key(method, path);
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == wanted)
            .count()
    }

    /// Last JSON body sent to method+path
    pub fn last_body(&self, method: &str, path: &str) -> Option<Value> {
        self.bodies.lock().unwrap().get(&key(method, path)).cloned()
    }

    fn record(&self, method: &str, path: &str) {
        self.calls.lock().unwrap().push(key(method, path));
    }

    fn lookup<T: DeserializeOwned>(&self, method: &str, path: &str) -> ClientResult<T> {
        self.record(method, path);
        match self.routes.lock().unwrap().get(&key(method, path)) {
            Some(Ok(value)) => serde_json::from_value(value.clone()).map_err(Into::into),
            Some(Err(message)) => Err(ClientError::Validation(message.clone())),
            None => Err(ClientError::NotFound(format!("no route for {method} {path}"))),
        }
    }

    fn store_body<B: serde::Serialize>(&self, method: &str, path: &str, body: &B) {
        if let Ok(value) = serde_json::to_value(body) {
            self.bodies.lock().unwrap().insert(key(method, path), value);
        }
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.lookup("GET", path)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.store_body("POST", path, body);
        self.lookup("POST", path)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.store_body("PUT", path, body);
        self.lookup("PUT", path)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.lookup("DELETE", path)
    }

    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        self.record("GET", path);
        match self.routes.lock().unwrap().get(&key("GET", path)) {
            Some(Ok(value)) => Ok(serde_json::to_vec(value).expect("route value serializes")),
            Some(Err(message)) => Err(ClientError::Validation(message.clone())),
            None => Err(ClientError::NotFound(format!("no route for GET {path}"))),
        }
    }
}

// ========== Fixtures ==========

pub fn restaurant_session() -> Session {
    Session::new(
        "jwt-token",
        UserInfo {
            id: "u1".into(),
            name: "Sam".into(),
            email: "sam@example.com".into(),
            role: "restaurant".into(),
            restaurant_id: Some("r1".into()),
        },
    )
}

pub fn customer_session() -> Session {
    Session::new(
        "jwt-token",
        UserInfo {
            id: "u2".into(),
            name: "Alex".into(),
            email: "alex@example.com".into(),
            role: "customer".into(),
            restaurant_id: None,
        },
    )
}

pub fn table_json(id: &str, number: u32, status: &str) -> Value {
    json!({
        "id": id,
        "tableNumber": number,
        "seatingCapacity": 4,
        "status": status,
        "amount": 0.0
    })
}

pub fn reservation_json(id: &str, table_id: Option<&str>, status: &str) -> Value {
    json!({
        "id": id,
        "restaurantId": "r1",
        "tableId": table_id,
        "customerName": "Dana",
        "guestCount": 2,
        "reservationTime": "2026-09-01T19:30:00Z",
        "status": status
    })
}

pub fn dish_json(id: &str, name: &str, available: bool) -> Value {
    json!({
        "id": id,
        "restaurantId": "r1",
        "name": name,
        "price": 12.5,
        "isAvailable": available
    })
}

pub fn custom_order_json(id: &str, day: u32, dish: &str, status: &str) -> Value {
    json!({
        "id": id,
        "userId": "u9",
        "dishName": dish,
        "status": status,
        "createdAt": format!("2026-08-{day:02}T10:00:00Z")
    })
}

pub fn order_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "restaurantId": "r1",
        "userId": "u9",
        "items": [],
        "total": 25.0,
        "status": status,
        "createdAt": "2026-08-28T18:00:00Z"
    })
}
