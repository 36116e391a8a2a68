//! Sensor and Event services - business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{EventError, EventResult, SensorError, SensorResult};
use crate::models::{CreateEvent, CreateSensor, Event, Sensor, UpdateSensor};
use crate::repository::{EventRepository, SensorRepository};

/// Sensor service providing business logic operations
///
/// The service layer enforces sensorId uniqueness and orchestrates
/// repository operations.
pub struct SensorService<R: SensorRepository> {
    repository: Arc<R>,
}

impl<R: SensorRepository> SensorService<R> {
    /// Create a new SensorService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all sensors
    #[instrument(skip(self))]
    pub async fn list_sensors(&self) -> SensorResult<Vec<Sensor>> {
        self.repository.list().await
    }

    /// Register a new sensor
    #[instrument(skip(self, input), fields(sensor_id = %input.sensor_id))]
    pub async fn create_sensor(&self, input: CreateSensor) -> SensorResult<Sensor> {
        // Check for duplicate sensorId
        if self.repository.exists_by_sensor_id(&input.sensor_id).await? {
            return Err(SensorError::DuplicateSensorId(input.sensor_id));
        }

        self.repository.create(input).await
    }

    /// Get a sensor by ID
    #[instrument(skip(self))]
    pub async fn get_sensor(&self, id: i32) -> SensorResult<Sensor> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(SensorError::NotFound)
    }

    /// Update an existing sensor
    #[instrument(skip(self, input))]
    pub async fn update_sensor(&self, id: i32, input: UpdateSensor) -> SensorResult<Sensor> {
        // Check if sensor exists
        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(SensorError::NotFound)?;

        // Check for duplicate sensorId if it is being changed
        if let Some(ref new_sensor_id) = input.sensor_id {
            if new_sensor_id != &existing.sensor_id
                && self.repository.exists_by_sensor_id(new_sensor_id).await?
            {
                return Err(SensorError::DuplicateSensorId(new_sensor_id.clone()));
            }
        }

        self.repository
            .update(id, input)
            .await?
            .ok_or(SensorError::NotFound)
    }

    /// Delete a sensor
    #[instrument(skip(self))]
    pub async fn delete_sensor(&self, id: i32) -> SensorResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(SensorError::NotFound);
        }

        Ok(())
    }
}

impl<R: SensorRepository> Clone for SensorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Event service providing business logic operations
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new EventService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all events with their sensors embedded
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        self.repository.list().await
    }

    /// Record a new event for an existing sensor
    #[instrument(skip(self, input), fields(sensor_id = %input.sensor.id))]
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<Event> {
        self.repository.create(input).await
    }

    /// Get an event by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: i32) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound)
    }

    /// List events recorded by one sensor
    #[instrument(skip(self))]
    pub async fn list_events_by_sensor(&self, sensor_id: i32) -> EventResult<Vec<Event>> {
        self.repository.list_by_sensor(sensor_id).await
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
