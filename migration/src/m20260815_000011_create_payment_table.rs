use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_hospital_table::Hospital;

static FK_PAYMENT_HOSPITAL_ID: &str = "fk_payment_hospital_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::HospitalId))
                    .col(double(Payment::Amount))
                    .col(string(Payment::Status))
                    .col(timestamp(Payment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_HOSPITAL_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::HospitalId)
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
                    .name(FK_PAYMENT_HOSPITAL_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    HospitalId,
    Amount,
    Status,
    CreatedAt,
}
