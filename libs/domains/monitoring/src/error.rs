use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    #[error("Sensor not found")]
    NotFound,

    #[error("Sensor with sensorId '{0}' already exists")]
    DuplicateSensorId(String),

    #[error("Sensor still has recorded events")]
    HasEvents,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SensorResult<T> = Result<T, SensorError>;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found")]
    NotFound,

    #[error("Sensor {0} does not exist")]
    SensorMissing(i32),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EventResult<T> = Result<T, EventError>;

/// Convert SensorError to AppError for standardized error responses
impl From<SensorError> for AppError {
    fn from(err: SensorError) -> Self {
        match err {
            SensorError::NotFound => AppError::NotFound("Sensor not found".to_string()),
            SensorError::DuplicateSensorId(sensor_id) => AppError::Conflict(format!(
                "Sensor with sensorId '{}' already exists",
                sensor_id
            )),
            SensorError::HasEvents => {
                AppError::Conflict("Sensor still has recorded events".to_string())
            }
            SensorError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for SensorError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for SensorError {
    fn from(err: sea_orm::DbErr) -> Self {
        SensorError::Internal(format!("Database error: {}", err))
    }
}

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound => AppError::NotFound("Event not found".to_string()),
            EventError::SensorMissing(sensor_id) => {
                AppError::Conflict(format!("Sensor {} does not exist", sensor_id))
            }
            EventError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for EventError {
    fn from(err: sea_orm::DbErr) -> Self {
        EventError::Internal(format!("Database error: {}", err))
    }
}
