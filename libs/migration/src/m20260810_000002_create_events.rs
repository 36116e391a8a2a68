use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create event_type enum
        manager
            .create_type(
                Type::create()
                    .as_enum(EventType::Enum)
                    .values([
                        EventType::ButtonPress,
                        EventType::Connection,
                        EventType::Error,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create events table
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(
                        ColumnDef::new(Events::Type)
                            .enumeration(
                                EventType::Enum,
                                [
                                    EventType::ButtonPress,
                                    EventType::Connection,
                                    EventType::Error,
                                ],
                            )
                            .not_null(),
                    )
                    .col(text(Events::Data))
                    .col(integer(Events::SensorId))
                    .col(
                        timestamp_with_time_zone(Events::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_sensor_id")
                            .from(Events::Table, Events::SensorId)
                            .to(Sensors::Table, Sensors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_events_sensor_id")
                    .table(Events::Table)
                    .col(Events::SensorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_created_at")
                    .table(Events::Table)
                    .col(Events::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(EventType::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Type,
    Data,
    SensorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sensors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EventType {
    #[sea_orm(iden = "event_type")]
    Enum,
    #[sea_orm(iden = "button_press")]
    ButtonPress,
    #[sea_orm(iden = "connection")]
    Connection,
    #[sea_orm(iden = "error")]
    Error,
}
