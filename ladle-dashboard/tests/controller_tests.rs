// ladle-dashboard/tests/controller_tests.rs
// Generic controller semantics, exercised through the Table binding

mod common;

use std::sync::Arc;

use common::{FakeTransport, table_json};
use ladle_dashboard::controller::{ResourceController, SaveAction, Scope};
use ladle_dashboard::notify::NoticeLevel;
use serde_json::json;
use shared::models::{Table, TableStatus, TableUpdate};

fn controller(transport: &Arc<FakeTransport>) -> ResourceController<Table, FakeTransport> {
    ResourceController::new(transport.clone(), Scope::new("r1"))
}

#[tokio::test]
async fn fetch_all_replaces_list_wholesale() {
    let transport = Arc::new(FakeTransport::new());
    transport.route(
        "GET",
        "/tables",
        json!([table_json("t1", 1, "available"), table_json("t2", 2, "occupied")]),
    );

    let mut tables = controller(&transport);
    tables.fetch_all().await;
    assert_eq!(tables.items().len(), 2);
    assert!(tables.error().is_none());

    transport.route("GET", "/tables", json!([table_json("t3", 3, "available")]));
    tables.fetch_all().await;
    assert_eq!(tables.items().len(), 1);
    assert_eq!(tables.items()[0].id, "t3");
}

#[tokio::test]
async fn failed_fetch_keeps_stale_list_and_records_error() {
    let transport = Arc::new(FakeTransport::new());
    transport.route("GET", "/tables", json!([table_json("t1", 1, "available")]));

    let mut tables = controller(&transport);
    tables.fetch_all().await;
    assert_eq!(tables.items().len(), 1);

    transport.fail("GET", "/tables", "Database unavailable");
    tables.fetch_all().await;

    // stale data survives; the failure is visible as an error plus a notice
    assert_eq!(tables.items().len(), 1);
    assert_eq!(tables.error(), Some("Database unavailable"));
    let notices = tables.notices.drain();
    assert!(notices.iter().any(|n| n.level == NoticeLevel::Error));
}

#[tokio::test]
async fn save_create_posts_then_refetches() {
    let transport = Arc::new(FakeTransport::new());
    transport.route("POST", "/tables", table_json("t1", 1, "available"));
    transport.route("GET", "/tables", json!([table_json("t1", 1, "available")]));

    let mut tables = controller(&transport);
    tables.open_editor(None);

    let saved = tables
        .save(SaveAction::Create(shared::models::TableCreate {
            table_number: 1,
            seating_capacity: 4,
            status: TableStatus::Available,
            amount: 0.0,
        }))
        .await;

    assert!(saved);
    assert!(!tables.is_editor_open());
    assert_eq!(transport.call_count("POST", "/tables"), 1);
    assert_eq!(transport.call_count("GET", "/tables"), 1);
    assert_eq!(tables.items().len(), 1);
}

#[tokio::test]
async fn save_failure_keeps_editor_open_and_surfaces_message_verbatim() {
    let transport = Arc::new(FakeTransport::new());
    transport.fail("PUT", "/tables/t1", "Table number already in use");

    let mut tables = controller(&transport);
    tables.open_editor(Some("t1"));

    let saved = tables
        .save(SaveAction::Update {
            id: "t1".into(),
            data: TableUpdate {
                table_number: Some(7),
                ..Default::default()
            },
        })
        .await;

    assert!(!saved);
    assert!(tables.is_editor_open());
    assert_eq!(tables.editing(), Some("t1"));
    let notices = tables.notices.drain();
    assert!(
        notices
            .iter()
            .any(|n| n.message == "Table number already in use")
    );
    // no refetch on failure
    assert_eq!(transport.call_count("GET", "/tables"), 0);
}

#[tokio::test]
async fn delete_fires_only_after_explicit_confirm() {
    let transport = Arc::new(FakeTransport::new());
    transport.route("GET", "/tables", json!([]));
    transport.route("DELETE", "/tables/t1", json!({}));

    let mut tables = controller(&transport);
    tables.request_delete("t1");
    assert!(tables.confirm.is_open());
    assert_eq!(transport.call_count("DELETE", "/tables/t1"), 0);

    let deleted = tables.confirm_delete().await;
    assert_eq!(deleted.as_deref(), Some("t1"));
    assert_eq!(transport.call_count("DELETE", "/tables/t1"), 1);
    // delete resyncs with a full refetch
    assert_eq!(transport.call_count("GET", "/tables"), 1);
}

#[tokio::test]
async fn cancelled_delete_never_calls_backend() {
    let transport = Arc::new(FakeTransport::new());

    let mut tables = controller(&transport);
    tables.request_delete("t1");
    tables.cancel_delete();

    assert_eq!(tables.confirm_delete().await, None);
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn update_status_replaces_single_item_without_refetch() {
    let transport = Arc::new(FakeTransport::new());
    transport.route(
        "GET",
        "/tables",
        json!([table_json("t1", 1, "available"), table_json("t2", 2, "available")]),
    );
    transport.route("PUT", "/tables/t1", table_json("t1", 1, "occupied"));

    let mut tables = controller(&transport);
    tables.fetch_all().await;

    let payload = TableUpdate {
        status: Some(TableStatus::Occupied),
        ..Default::default()
    };
    assert!(tables.update_status("t1", &payload).await);

    let t1 = tables.find("t1").unwrap();
    assert_eq!(t1.status, TableStatus::Occupied);
    let t2 = tables.find("t2").unwrap();
    assert_eq!(t2.status, TableStatus::Available);
    // the one exception to refetch-always: no extra GET
    assert_eq!(transport.call_count("GET", "/tables"), 1);
}
