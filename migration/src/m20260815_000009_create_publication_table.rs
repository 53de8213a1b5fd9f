use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_hospital_table::Hospital,
    m20260815_000003_create_medication_table::Medication,
};

static FK_PUBLICATION_HOSPITAL_ID: &str = "fk_publication_hospital_id";
static FK_PUBLICATION_MEDICATION_ID: &str = "fk_publication_medication_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publication::Table)
                    .if_not_exists()
                    .col(pk_auto(Publication::Id))
                    .col(integer(Publication::HospitalId))
                    .col(integer(Publication::MedicationId))
                    .col(integer(Publication::Quantity))
                    .col(string_null(Publication::Description))
                    .col(boolean(Publication::Published))
                    .col(timestamp(Publication::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PUBLICATION_HOSPITAL_ID)
                    .from_tbl(Publication::Table)
                    .from_col(Publication::HospitalId)
                    .to_tbl(Hospital::Table)
                    .to_col(Hospital::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PUBLICATION_MEDICATION_ID)
                    .from_tbl(Publication::Table)
                    .from_col(Publication::MedicationId)
                    .to_tbl(Medication::Table)
                    .to_col(Medication::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PUBLICATION_MEDICATION_ID)
                    .table(Publication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PUBLICATION_HOSPITAL_ID)
                    .table(Publication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Publication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Publication {
    Table,
    Id,
    HospitalId,
    MedicationId,
    Quantity,
    Description,
    Published,
    CreatedAt,
}
