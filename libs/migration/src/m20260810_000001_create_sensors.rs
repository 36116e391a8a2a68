use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create sensor_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(SensorStatus::Enum)
                    .values([
                        SensorStatus::Active,
                        SensorStatus::Inactive,
                        SensorStatus::Error,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create sensors table
        manager
            .create_table(
                Table::create()
                    .table(Sensors::Table)
                    .if_not_exists()
                    .col(pk_auto(Sensors::Id))
                    .col(
                        ColumnDef::new(Sensors::SensorId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(string(Sensors::Name))
                    .col(string(Sensors::Location))
                    .col(
                        ColumnDef::new(Sensors::Status)
                            .enumeration(
                                SensorStatus::Enum,
                                [
                                    SensorStatus::Active,
                                    SensorStatus::Inactive,
                                    SensorStatus::Error,
                                ],
                            )
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        timestamp_with_time_zone(Sensors::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Sensors::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_sensors_sensor_id")
                    .table(Sensors::Table)
                    .col(Sensors::SensorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensors_created_at")
                    .table(Sensors::Table)
                    .col(Sensors::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sensors::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(SensorStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sensors {
    Table,
    Id,
    SensorId,
    Name,
    Location,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SensorStatus {
    #[sea_orm(iden = "sensor_status")]
    Enum,
    #[sea_orm(iden = "active")]
    Active,
    #[sea_orm(iden = "inactive")]
    Inactive,
    #[sea_orm(iden = "error")]
    Error,
}
