use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    entity,
    error::{EventError, EventResult, SensorError, SensorResult},
    models::{CreateEvent, CreateSensor, Event, Sensor, UpdateSensor},
    repository::{EventRepository, SensorRepository},
};

/// Postgres implementation of SensorRepository
pub struct PgSensorRepository {
    db: DatabaseConnection,
}

impl PgSensorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SensorRepository for PgSensorRepository {
    async fn create(&self, input: CreateSensor) -> SensorResult<Sensor> {
        let active_model: entity::sensors::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(sensor_id = %model.id, "Created sensor");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> SensorResult<Option<Sensor>> {
        let model = entity::sensors::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> SensorResult<Vec<Sensor>> {
        let models = entity::sensors::Entity::find()
            .order_by_asc(entity::sensors::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateSensor) -> SensorResult<Option<Sensor>> {
        // Fetch existing sensor
        let model = match entity::sensors::Entity::find_by_id(id).one(&self.db).await? {
            Some(model) => model,
            None => return Ok(None),
        };

        // Convert to domain model and apply the partial update
        let mut sensor: Sensor = model.into();
        sensor.apply_update(input);

        // Convert back to ActiveModel for update
        let active_model = entity::sensors::ActiveModel {
            id: Set(sensor.id),
            sensor_id: Set(sensor.sensor_id.clone()),
            name: Set(sensor.name.clone()),
            location: Set(sensor.location.clone()),
            status: Set(sensor.status),
            created_at: Set(sensor.created_at.into()),
            updated_at: Set(sensor.updated_at.into()),
        };

        let updated = active_model.update(&self.db).await?;

        tracing::info!(sensor_id = %id, "Updated sensor");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> SensorResult<bool> {
        // Sensors with recorded events must not be deleted; the foreign key
        // is ON DELETE RESTRICT so the database enforces the same rule.
        let event_count = entity::events::Entity::find()
            .filter(entity::events::Column::SensorId.eq(id))
            .count(&self.db)
            .await?;

        if event_count > 0 {
            return Err(SensorError::HasEvents);
        }

        let result = entity::sensors::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(sensor_id = %id, "Deleted sensor");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_sensor_id(&self, sensor_id: &str) -> SensorResult<bool> {
        let count = entity::sensors::Entity::find()
            .filter(entity::sensors::Column::SensorId.eq(sensor_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}

/// Postgres implementation of EventRepository
pub struct PgEventRepository {
    db: DatabaseConnection,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// Rows come back from the sensor join; a missing sensor means the join broke
fn hydrate(row: (entity::events::Model, Option<entity::sensors::Model>)) -> EventResult<Event> {
    match row {
        (event, Some(sensor)) => Ok((event, sensor).into()),
        (event, None) => Err(EventError::Internal(format!(
            "Event {} has no sensor row",
            event.id
        ))),
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, input: CreateEvent) -> EventResult<Event> {
        // Resolve the sensor first: it must exist, and the response embeds it
        let sensor = entity::sensors::Entity::find_by_id(input.sensor.id)
            .one(&self.db)
            .await?
            .ok_or(EventError::SensorMissing(input.sensor.id))?;

        let active_model: entity::events::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(event_id = %model.id, sensor_id = %sensor.id, "Recorded event");
        Ok((model, sensor).into())
    }

    async fn get_by_id(&self, id: i32) -> EventResult<Option<Event>> {
        let row = entity::events::Entity::find_by_id(id)
            .find_also_related(entity::sensors::Entity)
            .one(&self.db)
            .await?;

        row.map(hydrate).transpose()
    }

    async fn list(&self) -> EventResult<Vec<Event>> {
        let rows = entity::events::Entity::find()
            .find_also_related(entity::sensors::Entity)
            .order_by_asc(entity::events::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter().map(hydrate).collect()
    }

    async fn list_by_sensor(&self, sensor_id: i32) -> EventResult<Vec<Event>> {
        let rows = entity::events::Entity::find()
            .filter(entity::events::Column::SensorId.eq(sensor_id))
            .find_also_related(entity::sensors::Entity)
            .order_by_asc(entity::events::Column::Id)
            .all(&self.db)
            .await?;

        rows.into_iter().map(hydrate).collect()
    }
}
