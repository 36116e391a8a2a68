use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{EventError, EventResult, SensorError, SensorResult};
use crate::models::{CreateEvent, CreateSensor, Event, EventType, Sensor, UpdateSensor};

/// Repository trait for Sensor persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensorRepository: Send + Sync {
    /// Create a new sensor
    async fn create(&self, input: CreateSensor) -> SensorResult<Sensor>;

    /// Get a sensor by ID
    async fn get_by_id(&self, id: i32) -> SensorResult<Option<Sensor>>;

    /// List all sensors
    async fn list(&self) -> SensorResult<Vec<Sensor>>;

    /// Update an existing sensor, returning None when the id is unknown
    async fn update(&self, id: i32, input: UpdateSensor) -> SensorResult<Option<Sensor>>;

    /// Delete a sensor by ID
    async fn delete(&self, id: i32) -> SensorResult<bool>;

    /// Check if a sensorId is already registered
    async fn exists_by_sensor_id(&self, sensor_id: &str) -> SensorResult<bool>;
}

/// Repository trait for Event persistence
///
/// Events are append-only: there is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Record a new event; the referenced sensor must exist
    async fn create(&self, input: CreateEvent) -> EventResult<Event>;

    /// Get an event by ID with its sensor embedded
    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>>;

    /// List all events with their sensors embedded
    async fn list(&self) -> EventResult<Vec<Event>>;

    /// List events recorded by one sensor; unknown sensors yield an empty list
    async fn list_by_sensor(&self, sensor_id: i32) -> EventResult<Vec<Event>>;
}

/// In-memory implementation of SensorRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemorySensorRepository {
    sensors: Arc<RwLock<HashMap<i32, Sensor>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemorySensorRepository {
    pub fn new() -> Self {
        Self {
            sensors: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl Default for InMemorySensorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensorRepository for InMemorySensorRepository {
    async fn create(&self, input: CreateSensor) -> SensorResult<Sensor> {
        let mut sensors = self.sensors.write().await;

        // Check for duplicate sensorId
        let exists = sensors.values().any(|s| s.sensor_id == input.sensor_id);
        if exists {
            return Err(SensorError::DuplicateSensorId(input.sensor_id));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let sensor = Sensor::new(id, input);
        sensors.insert(sensor.id, sensor.clone());

        tracing::info!(sensor_id = %sensor.id, "Created sensor");
        Ok(sensor)
    }

    async fn get_by_id(&self, id: i32) -> SensorResult<Option<Sensor>> {
        let sensors = self.sensors.read().await;
        Ok(sensors.get(&id).cloned())
    }

    async fn list(&self) -> SensorResult<Vec<Sensor>> {
        let sensors = self.sensors.read().await;

        let mut result: Vec<Sensor> = sensors.values().cloned().collect();
        result.sort_by_key(|s| s.id);

        Ok(result)
    }

    async fn update(&self, id: i32, input: UpdateSensor) -> SensorResult<Option<Sensor>> {
        let mut sensors = self.sensors.write().await;

        match sensors.get_mut(&id) {
            Some(sensor) => {
                sensor.apply_update(input);
                let updated = sensor.clone();

                tracing::info!(sensor_id = %id, "Updated sensor");
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> SensorResult<bool> {
        let mut sensors = self.sensors.write().await;

        if sensors.remove(&id).is_some() {
            tracing::info!(sensor_id = %id, "Deleted sensor");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_sensor_id(&self, sensor_id: &str) -> SensorResult<bool> {
        let sensors = self.sensors.read().await;
        Ok(sensors.values().any(|s| s.sensor_id == sensor_id))
    }
}

/// Internal storage record; the embedded sensor is joined on read
#[derive(Debug, Clone)]
struct EventRecord {
    id: i32,
    event_type: EventType,
    data: String,
    sensor_id: i32,
    created_at: DateTime<Utc>,
}

/// In-memory implementation of EventRepository (for development/testing)
///
/// Shares the sensor store so embedded sensors reflect later updates,
/// matching the join the Postgres implementation performs.
#[derive(Debug, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<i32, EventRecord>>>,
    next_id: Arc<AtomicI32>,
    sensors: InMemorySensorRepository,
}

impl InMemoryEventRepository {
    pub fn new(sensors: InMemorySensorRepository) -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            sensors,
        }
    }

    async fn hydrate(&self, record: EventRecord) -> EventResult<Event> {
        let sensor = self
            .sensors
            .get_by_id(record.sensor_id)
            .await
            .map_err(|e| EventError::Internal(e.to_string()))?
            .ok_or_else(|| {
                EventError::Internal(format!("Sensor {} missing from store", record.sensor_id))
            })?;

        Ok(Event {
            id: record.id,
            event_type: record.event_type,
            data: record.data,
            sensor,
            created_at: record.created_at,
        })
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, input: CreateEvent) -> EventResult<Event> {
        let sensor = self
            .sensors
            .get_by_id(input.sensor.id)
            .await
            .map_err(|e| EventError::Internal(e.to_string()))?
            .ok_or(EventError::SensorMissing(input.sensor.id))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = EventRecord {
            id,
            event_type: input.event_type,
            data: input.data,
            sensor_id: sensor.id,
            created_at: Utc::now(),
        };

        let event = Event {
            id: record.id,
            event_type: record.event_type,
            data: record.data.clone(),
            sensor,
            created_at: record.created_at,
        };

        self.events.write().await.insert(id, record);

        tracing::info!(event_id = %event.id, sensor_id = %event.sensor.id, "Recorded event");
        Ok(event)
    }

    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>> {
        let record = {
            let events = self.events.read().await;
            events.get(&id).cloned()
        };

        match record {
            Some(record) => Ok(Some(self.hydrate(record).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> EventResult<Vec<Event>> {
        let mut records: Vec<EventRecord> = {
            let events = self.events.read().await;
            events.values().cloned().collect()
        };
        records.sort_by_key(|r| r.id);

        let mut result = Vec::with_capacity(records.len());
        for record in records {
            result.push(self.hydrate(record).await?);
        }

        Ok(result)
    }

    async fn list_by_sensor(&self, sensor_id: i32) -> EventResult<Vec<Event>> {
        let mut records: Vec<EventRecord> = {
            let events = self.events.read().await;
            events
                .values()
                .filter(|r| r.sensor_id == sensor_id)
                .cloned()
                .collect()
        };
        records.sort_by_key(|r| r.id);

        let mut result = Vec::with_capacity(records.len());
        for record in records {
            result.push(self.hydrate(record).await?);
        }

        Ok(result)
    }
}
