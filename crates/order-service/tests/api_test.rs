use actor_framework::QueuePolicy;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use order_service::api::{router, AppState};
use order_service::clients::OrderClient;
use order_service::lifecycle::{OrderSystem, SystemSettings};
use order_service::model::Catalog;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn start() -> (OrderSystem, Router) {
    let system = OrderSystem::new(SystemSettings {
        advance_interval: Duration::from_secs(3600),
        queue_policy: QueuePolicy::OneShot,
    });
    let app = router(AppState {
        catalog: system.catalog.clone(),
        orders: system.order_client.clone(),
    });
    (system, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_order(body: impl Into<Body>) -> Request<Body> {
    Request::post("/order")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn test_menu_lists_whole_catalog() {
    let (_system, app) = start();

    let (status, body) = send(&app, get("/menu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Pizza", "price": 10, "category": "Main"},
            {"id": 2, "name": "Burger", "price": 5, "category": "Main"},
            {"id": 3, "name": "Pasta", "price": 7, "category": "Main"},
            {"id": 4, "name": "Salad", "price": 4, "category": "Side"},
            {"id": 5, "name": "Coke", "price": 2, "category": "Drink"},
        ])
    );
}

#[tokio::test]
async fn test_place_then_fetch_order() {
    let (system, app) = start();

    let (status, created) = send(&app, post_order(r#"{"items": [1, 2]}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({
            "id": 1,
            "items": [
                {"id": 1, "name": "Pizza", "price": 10, "category": "Main"},
                {"id": 2, "name": "Burger", "price": 5, "category": "Main"},
            ],
            "total": 15,
            "status": "Pending",
        })
    );

    let (status, fetched) = send(&app, get("/order/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    system.order_client.advance_next().await.unwrap();
    let (_, fetched) = send(&app, get("/order/1")).await;
    assert_eq!(fetched["status"], "In Progress");
    assert_eq!(fetched["total"], 15);
}

#[tokio::test]
async fn test_place_order_rejections() {
    let (_system, app) = start();

    let no_items = json!({"error": "No items in the order."});
    for body in ["", "{}", r#"{"items": null}"#, r#"{"items": []}"#] {
        let (status, error) = send(&app, post_order(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert_eq!(error, no_items, "body: {body:?}");
    }

    let invalid = json!({"error": "Some items are invalid."});
    let unknown_ids = [
        r#"{"items": [99]}"#,
        r#"{"items": [1, 0]}"#,
        r#"{"items": [-1]}"#,
        r#"{"items": [1.5]}"#,
        r#"{"items": [4294967297]}"#,
        r#"{"items": ["1"]}"#,
    ];
    for body in unknown_ids {
        let (status, error) = send(&app, post_order(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(error, invalid, "body: {body}");
    }

    let malformed = json!({"error": "Malformed request body."});
    for body in [r#"{"items": "pizza"}"#, "[1, 2]", "not json"] {
        let (status, error) = send(&app, post_order(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(error, malformed, "body: {body}");
    }

    // None of the rejected requests consumed an ID.
    let (status, created) = send(&app, post_order(r#"{"items": [5]}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn test_whole_amounts_are_written_as_integers() {
    let (_system, app) = start();

    let response = app
        .clone()
        .oneshot(post_order(r#"{"items": [1, 2]}"#))
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = std::str::from_utf8(&bytes).unwrap();
    assert!(text.contains(r#""price":10,"#), "{text}");
    assert!(text.contains(r#""total":15,"#), "{text}");
}

#[tokio::test]
async fn test_unknown_orders_are_not_found() {
    let (_system, app) = start();
    let not_found = json!({"error": "Order not found."});

    for uri in ["/order/2", "/order/0", "/order/abc", "/order/-1"] {
        let (status, error) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri: {uri}");
        assert_eq!(error, not_found, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_stopped_actor_is_service_unavailable() {
    let (actor, generic_client) = order_service::order_actor::new(QueuePolicy::OneShot);
    drop(actor);
    let app = router(AppState {
        catalog: Arc::new(Catalog::standard()),
        orders: OrderClient::new(generic_client),
    });

    let (status, error) = send(&app, get("/order/1")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error, json!({"error": "Order service unavailable."}));
}
