//! Handler tests for the monitoring domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run against the in-memory repositories, so no database or Docker
//! is needed. The Postgres-specific behavior is covered in postgres_test.rs.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_monitoring::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn sensors_app() -> Router {
    handlers::sensors_router(SensorService::new(InMemorySensorRepository::new()))
}

// Sensors and events routers sharing one sensor store
fn monitoring_apps() -> (Router, Router) {
    let sensors = InMemorySensorRepository::new();
    let events = InMemoryEventRepository::new(sensors.clone());

    (
        handlers::sensors_router(SensorService::new(sensors)),
        handlers::events_router(EventService::new(events)),
    )
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn create_sensor(app: &Router, sensor_id: &str) -> Sensor {
    let request = post_json(
        "/",
        &json!({
            "sensorId": sensor_id,
            "name": "Temperature Sensor",
            "location": "Warehouse A"
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_list_sensors_starts_empty() {
    let app = sensors_app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let sensors: Vec<Sensor> = json_body(response.into_body()).await;
    assert!(sensors.is_empty());
}

#[tokio::test]
async fn test_create_sensor_returns_201_and_defaults_status() {
    let app = sensors_app();

    let request = post_json(
        "/",
        &json!({
            "sensorId": "sensor-001",
            "name": "Temperature Sensor",
            "location": "Warehouse A"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["sensorId"], "sensor-001");
    assert_eq!(body["status"], "active");
    assert!(body.get("createdAt").is_some());
    assert!(body.get("updatedAt").is_some());
}

#[tokio::test]
async fn test_create_duplicate_sensor_id_returns_409() {
    let app = sensors_app();

    create_sensor(&app, "sensor-dup").await;

    let request = post_json(
        "/",
        &json!({
            "sensorId": "sensor-dup",
            "name": "Second Sensor",
            "location": "Warehouse B"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_create_sensor_with_malformed_json_returns_400() {
    let app = sensors_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_sensor_with_missing_fields_returns_400() {
    let app = sensors_app();

    let request = post_json("/", &json!({"sensorId": "sensor-002"}));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_sensor_returns_200() {
    let app = sensors_app();
    let created = create_sensor(&app, "sensor-get").await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let sensor: Sensor = json_body(response.into_body()).await;
    assert_eq!(sensor.id, created.id);
    assert_eq!(sensor.sensor_id, "sensor-get");
}

#[tokio::test]
async fn test_get_unknown_sensor_returns_404_with_exact_body() {
    let app = sensors_app();

    let request = Request::builder()
        .method("GET")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "Sensor not found"}));
}

#[tokio::test]
async fn test_get_sensor_with_non_numeric_id_returns_400() {
    let app = sensors_app();

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-number")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_sensor_retains_unset_fields() {
    let app = sensors_app();
    let created = create_sensor(&app, "sensor-upd").await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"location": "Warehouse C"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["location"], "Warehouse C");
    assert_eq!(body["name"], "Temperature Sensor");
    assert_eq!(body["sensorId"], "sensor-upd");
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_update_unknown_sensor_returns_404() {
    let app = sensors_app();

    let request = Request::builder()
        .method("PUT")
        .uri("/999")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"name": "Renamed"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_sensor_to_taken_sensor_id_returns_409() {
    let app = sensors_app();
    create_sensor(&app, "sensor-a").await;
    let second = create_sensor(&app, "sensor-b").await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", second.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"sensorId": "sensor-a"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_sensor_returns_204_then_404() {
    let app = sensors_app();
    let created = create_sensor(&app, "sensor-del").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting the same id again is a 404
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_event_returns_201_and_embeds_sensor() {
    let (sensors_app, events_app) = monitoring_apps();
    let sensor = create_sensor(&sensors_app, "sensor-evt").await;

    let request = post_json(
        "/",
        &json!({
            "type": "button_press",
            "data": "pressed",
            "sensor": {"id": sensor.id}
        }),
    );

    let response = events_app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["type"], "button_press");
    assert_eq!(body["data"], "pressed");
    assert_eq!(body["sensor"]["sensorId"], "sensor-evt");
    assert_eq!(body["sensor"]["name"], "Temperature Sensor");
}

#[tokio::test]
async fn test_create_event_for_missing_sensor_returns_409() {
    let (_, events_app) = monitoring_apps();

    let request = post_json(
        "/",
        &json!({
            "type": "connection",
            "data": "online",
            "sensor": {"id": 42}
        }),
    );

    let response = events_app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_event_with_unknown_type_returns_400() {
    let (sensors_app, events_app) = monitoring_apps();
    let sensor = create_sensor(&sensors_app, "sensor-badtype").await;

    let request = post_json(
        "/",
        &json!({
            "type": "earthquake",
            "data": "rumble",
            "sensor": {"id": sensor.id}
        }),
    );

    let response = events_app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_event_returns_404_with_exact_body() {
    let (_, events_app) = monitoring_apps();

    let request = Request::builder()
        .method("GET")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = events_app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "Event not found"}));
}

#[tokio::test]
async fn test_list_events_embeds_sensors() {
    let (sensors_app, events_app) = monitoring_apps();
    let sensor = create_sensor(&sensors_app, "sensor-list").await;

    let request = post_json(
        "/",
        &json!({
            "type": "error",
            "data": "overheated",
            "sensor": {"id": sensor.id}
        }),
    );
    let response = events_app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = events_app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["sensor"]["sensorId"], "sensor-list");
}

#[tokio::test]
async fn test_list_events_by_sensor_filters_and_unknown_is_empty() {
    let (sensors_app, events_app) = monitoring_apps();
    let first = create_sensor(&sensors_app, "sensor-one").await;
    let second = create_sensor(&sensors_app, "sensor-two").await;

    for (sensor_id, data) in [(first.id, "a"), (first.id, "b"), (second.id, "c")] {
        let request = post_json(
            "/",
            &json!({
                "type": "connection",
                "data": data,
                "sensor": {"id": sensor_id}
            }),
        );
        let response = events_app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .method("GET")
        .uri(format!("/sensor/{}", first.id))
        .body(Body::empty())
        .unwrap();

    let response = events_app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let events: Vec<Value> = json_body(response.into_body()).await;
    assert_eq!(events.len(), 2);

    // Unknown sensor id is an empty list, not a 404
    let request = Request::builder()
        .method("GET")
        .uri("/sensor/999")
        .body(Body::empty())
        .unwrap();

    let response = events_app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let events: Vec<Value> = json_body(response.into_body()).await;
    assert!(events.is_empty());
}
