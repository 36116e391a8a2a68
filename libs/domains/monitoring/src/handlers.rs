use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody,
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{EventResult, SensorResult};
use crate::models::{CreateEvent, CreateSensor, Event, Sensor, UpdateSensor};
use crate::repository::{EventRepository, SensorRepository};
use crate::service::{EventService, SensorService};

/// OpenAPI documentation for the Sensors API
#[derive(OpenApi)]
#[openapi(
    paths(list_sensors, create_sensor, get_sensor, update_sensor, delete_sensor),
    components(
        schemas(Sensor, CreateSensor, UpdateSensor),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Sensors", description = "Sensor registry endpoints")
    )
)]
pub struct SensorsApiDoc;

/// OpenAPI documentation for the Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, get_event, list_events_by_sensor),
    components(
        schemas(Event, CreateEvent),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Events", description = "Sensor event endpoints")
    )
)]
pub struct EventsApiDoc;

/// Create the sensors router with all HTTP endpoints
pub fn sensors_router<R: SensorRepository + 'static>(service: SensorService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_sensors).post(create_sensor))
        .route(
            "/{id}",
            get(get_sensor).put(update_sensor).delete(delete_sensor),
        )
        .with_state(shared_service)
}

/// Create the events router with all HTTP endpoints
///
/// The static `/sensor` segment takes precedence over `/{id}`, so
/// `/sensor/3` is never parsed as an event id.
pub fn events_router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/sensor/{sensor_id}", get(list_events_by_sensor))
        .route("/{id}", get(get_event))
        .with_state(shared_service)
}

/// List all sensors
#[utoipa::path(
    get,
    path = "",
    tag = "Sensors",
    responses(
        (status = 200, description = "List of sensors", body = Vec<Sensor>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_sensors<R: SensorRepository>(
    State(service): State<Arc<SensorService<R>>>,
) -> SensorResult<Json<Vec<Sensor>>> {
    let sensors = service.list_sensors().await?;
    Ok(Json(sensors))
}

/// Register a new sensor
#[utoipa::path(
    post,
    path = "",
    tag = "Sensors",
    request_body = CreateSensor,
    responses(
        (status = 201, description = "Sensor created successfully", body = Sensor),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_sensor<R: SensorRepository>(
    State(service): State<Arc<SensorService<R>>>,
    JsonBody(input): JsonBody<CreateSensor>,
) -> SensorResult<impl IntoResponse> {
    let sensor = service.create_sensor(input).await?;
    Ok((StatusCode::CREATED, Json(sensor)))
}

/// Get a sensor by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Sensors",
    params(
        ("id" = i32, Path, description = "Sensor ID")
    ),
    responses(
        (status = 200, description = "Sensor found", body = Sensor),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_sensor<R: SensorRepository>(
    State(service): State<Arc<SensorService<R>>>,
    Path(id): Path<i32>,
) -> SensorResult<Json<Sensor>> {
    let sensor = service.get_sensor(id).await?;
    Ok(Json(sensor))
}

/// Update a sensor
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Sensors",
    params(
        ("id" = i32, Path, description = "Sensor ID")
    ),
    request_body = UpdateSensor,
    responses(
        (status = 200, description = "Sensor updated successfully", body = Sensor),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_sensor<R: SensorRepository>(
    State(service): State<Arc<SensorService<R>>>,
    Path(id): Path<i32>,
    JsonBody(input): JsonBody<UpdateSensor>,
) -> SensorResult<Json<Sensor>> {
    let sensor = service.update_sensor(id, input).await?;
    Ok(Json(sensor))
}

/// Delete a sensor
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Sensors",
    params(
        ("id" = i32, Path, description = "Sensor ID")
    ),
    responses(
        (status = 204, description = "Sensor deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_sensor<R: SensorRepository>(
    State(service): State<Arc<SensorService<R>>>,
    Path(id): Path<i32>,
) -> SensorResult<impl IntoResponse> {
    service.delete_sensor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all events
#[utoipa::path(
    get,
    path = "",
    tag = "Events",
    responses(
        (status = 200, description = "List of events with their sensors embedded", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.list_events().await?;
    Ok(Json(events))
}

/// Record a new event
#[utoipa::path(
    post,
    path = "",
    tag = "Events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event recorded successfully", body = Event),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    JsonBody(input): JsonBody<CreateEvent>,
) -> EventResult<impl IntoResponse> {
    let event = service.create_event(input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Path(id): Path<i32>,
) -> EventResult<Json<Event>> {
    let event = service.get_event(id).await?;
    Ok(Json(event))
}

/// List events recorded by one sensor
#[utoipa::path(
    get,
    path = "/sensor/{sensor_id}",
    tag = "Events",
    params(
        ("sensor_id" = i32, Path, description = "Sensor ID")
    ),
    responses(
        (status = 200, description = "Events for the sensor, empty when it has none", body = Vec<Event>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events_by_sensor<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Path(sensor_id): Path<i32>,
) -> EventResult<Json<Vec<Event>>> {
    let events = service.list_events_by_sensor(sensor_id).await?;
    Ok(Json(events))
}
