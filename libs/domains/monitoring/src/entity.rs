use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::models::{EventType, SensorStatus};

// ===== Sensors Entity =====

pub mod sensors {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "sensors")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub sensor_id: String,
        pub name: String,
        pub location: String,
        pub status: SensorStatus,
        pub created_at: DateTimeWithTimeZone,
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::events::Entity")]
        Events,
    }

    impl Related<super::events::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Events.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::Sensor {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                sensor_id: model.sensor_id,
                name: model.name,
                location: model.location,
                status: model.status,
                created_at: model.created_at.into(),
                updated_at: model.updated_at.into(),
            }
        }
    }

    impl From<crate::models::CreateSensor> for ActiveModel {
        fn from(input: crate::models::CreateSensor) -> Self {
            let now = chrono::Utc::now();
            ActiveModel {
                id: NotSet,
                sensor_id: Set(input.sensor_id),
                name: Set(input.name),
                location: Set(input.location),
                status: Set(input.status),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            }
        }
    }
}

// ===== Events Entity =====

pub mod events {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "events")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_name = "type")]
        pub event_type: EventType,
        #[sea_orm(column_type = "Text")]
        pub data: String,
        pub sensor_id: i32,
        pub created_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::sensors::Entity",
            from = "Column::SensorId",
            to = "super::sensors::Column::Id"
        )]
        Sensor,
    }

    impl Related<super::sensors::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Sensor.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<(Model, super::sensors::Model)> for crate::models::Event {
        fn from((event, sensor): (Model, super::sensors::Model)) -> Self {
            Self {
                id: event.id,
                event_type: event.event_type,
                data: event.data,
                sensor: sensor.into(),
                created_at: event.created_at.into(),
            }
        }
    }

    impl From<crate::models::CreateEvent> for ActiveModel {
        fn from(input: crate::models::CreateEvent) -> Self {
            ActiveModel {
                id: NotSet,
                event_type: Set(input.event_type),
                data: Set(input.data),
                sensor_id: Set(input.sensor.id),
                created_at: Set(chrono::Utc::now().into()),
            }
        }
    }
}
