use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_hospital_table::Hospital,
    m20260815_000009_create_publication_table::Publication,
};

static FK_MEDICATION_REQUEST_PUBLICATION_ID: &str = "fk_medication_request_publication_id";
static FK_MEDICATION_REQUEST_HOSPITAL_ID: &str = "fk_medication_request_hospital_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicationRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicationRequest::Id))
                    .col(integer(MedicationRequest::PublicationId))
                    .col(integer(MedicationRequest::HospitalId))
                    .col(integer(MedicationRequest::Quantity))
                    .col(string(MedicationRequest::Status))
                    .col(timestamp(MedicationRequest::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEDICATION_REQUEST_PUBLICATION_ID)
                    .from_tbl(MedicationRequest::Table)
                    .from_col(MedicationRequest::PublicationId)
                    .to_tbl(Publication::Table)
                    .to_col(Publication::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEDICATION_REQUEST_HOSPITAL_ID)
                    .from_tbl(MedicationRequest::Table)
                    .from_col(MedicationRequest::HospitalId)
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
                    .name(FK_MEDICATION_REQUEST_HOSPITAL_ID)
                    .table(MedicationRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEDICATION_REQUEST_PUBLICATION_ID)
                    .table(MedicationRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MedicationRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MedicationRequest {
    Table,
    Id,
    PublicationId,
    HospitalId,
    Quantity,
    Status,
    CreatedAt,
}
