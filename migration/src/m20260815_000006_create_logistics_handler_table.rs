use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_hospital_table::Hospital;

static FK_LOGISTICS_HANDLER_HOSPITAL_ID: &str = "fk_logistics_handler_hospital_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogisticsHandler::Table)
                    .if_not_exists()
                    .col(pk_auto(LogisticsHandler::Id))
                    .col(integer(LogisticsHandler::HospitalId))
                    .col(string(LogisticsHandler::Name))
                    .col(string(LogisticsHandler::Phone))
                    .col(string(LogisticsHandler::Email))
                    .col(timestamp(LogisticsHandler::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOGISTICS_HANDLER_HOSPITAL_ID)
                    .from_tbl(LogisticsHandler::Table)
                    .from_col(LogisticsHandler::HospitalId)
                    .to_tbl(Hospital::Table)
                    .to_col(Hospital::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LOGISTICS_HANDLER_HOSPITAL_ID)
                    .table(LogisticsHandler::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LogisticsHandler::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LogisticsHandler {
    Table,
    Id,
    HospitalId,
    Name,
    Phone,
    Email,
    CreatedAt,
}
