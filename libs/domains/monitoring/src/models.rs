use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Sensor status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "sensor_status")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SensorStatus {
    /// Sensor is reporting normally
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    /// Sensor is registered but not reporting
    #[sea_orm(string_value = "inactive")]
    Inactive,
    /// Sensor is in a fault state
    #[sea_orm(string_value = "error")]
    Error,
}

/// Kind of event reported by a sensor
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_type")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    #[sea_orm(string_value = "button_press")]
    ButtonPress,
    #[sea_orm(string_value = "connection")]
    Connection,
    #[sea_orm(string_value = "error")]
    Error,
}

/// Sensor entity - a registered IoT device
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    /// Database-assigned identifier
    pub id: i32,
    /// External device identifier, unique across sensors
    pub sensor_id: String,
    /// Human-readable name
    pub name: String,
    /// Physical location
    pub location: String,
    /// Current status
    pub status: SensorStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a new sensor
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSensor {
    pub sensor_id: String,
    pub name: String,
    pub location: String,
    /// Defaults to `active` when omitted
    #[serde(default)]
    pub status: SensorStatus,
}

/// DTO for updating an existing sensor
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSensor {
    pub sensor_id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: Option<SensorStatus>,
}

/// Reference to an existing sensor by database id
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct SensorRef {
    pub id: i32,
}

/// Event entity - a reading or state change reported by a sensor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Database-assigned identifier
    pub id: i32,
    /// Event kind
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Free-form payload recorded with the event
    pub data: String,
    /// Owning sensor, embedded in full
    pub sensor: Sensor,
    /// Creation timestamp, never updated
    pub created_at: DateTime<Utc>,
}

/// DTO for recording a new event
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub data: String,
    pub sensor: SensorRef,
}

impl Sensor {
    /// Create a new sensor from CreateSensor DTO with a caller-assigned id
    pub fn new(id: i32, input: CreateSensor) -> Self {
        let now = Utc::now();
        Self {
            id,
            sensor_id: input.sensor_id,
            name: input.name,
            location: input.location,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateSensor DTO
    pub fn apply_update(&mut self, update: UpdateSensor) {
        if let Some(sensor_id) = update.sensor_id {
            self.sensor_id = sensor_id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}
