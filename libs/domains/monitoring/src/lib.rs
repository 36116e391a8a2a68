//! Monitoring Domain
//!
//! This module provides the sensor and event domains for the telemetry
//! backend, backed by PostgreSQL via Sea-ORM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, conflict checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres/in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_monitoring::{
//!     handlers,
//!     postgres::{PgEventRepository, PgSensorRepository},
//!     service::{EventService, SensorService},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Connect to Postgres
//! let db = database::postgres::connect("postgres://localhost/monitoring").await?;
//!
//! // Wire repositories and services
//! let sensors = SensorService::new(PgSensorRepository::new(db.clone()));
//! let events = EventService::new(PgEventRepository::new(db));
//!
//! // Create Axum routers
//! let sensors_router = handlers::sensors_router(sensors);
//! let events_router = handlers::events_router(events);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{EventError, EventResult, SensorError, SensorResult};
pub use handlers::{EventsApiDoc, SensorsApiDoc};
pub use models::{
    CreateEvent, CreateSensor, Event, EventType, Sensor, SensorRef, SensorStatus, UpdateSensor,
};
pub use postgres::{PgEventRepository, PgSensorRepository};
pub use repository::{
    EventRepository, InMemoryEventRepository, InMemorySensorRepository, SensorRepository,
};
pub use service::{EventService, SensorService};
