use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_hospital_table::Hospital,
    m20260815_000007_create_shipment_table::Shipment,
};

static IDX_DONATION_SHIPMENT_ID: &str = "idx_donation_shipment_id";
static FK_DONATION_HOSPITAL_ID: &str = "fk_donation_hospital_id";
static FK_DONATION_SHIPMENT_ID: &str = "fk_donation_shipment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(integer(Donation::HospitalId))
                    .col(integer_null(Donation::ShipmentId))
                    .col(string_null(Donation::Description))
                    .col(timestamp(Donation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Unique so a shipment can never be linked to two donations.
        manager
            .create_index(
                Index::create()
                    .name(IDX_DONATION_SHIPMENT_ID)
                    .table(Donation::Table)
                    .col(Donation::ShipmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONATION_HOSPITAL_ID)
                    .from_tbl(Donation::Table)
                    .from_col(Donation::HospitalId)
                    .to_tbl(Hospital::Table)
                    .to_col(Hospital::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DONATION_SHIPMENT_ID)
                    .from_tbl(Donation::Table)
                    .from_col(Donation::ShipmentId)
                    .to_tbl(Shipment::Table)
                    .to_col(Shipment::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DONATION_SHIPMENT_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DONATION_HOSPITAL_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONATION_SHIPMENT_ID)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Donation {
    Table,
    Id,
    HospitalId,
    ShipmentId,
    Description,
    CreatedAt,
}
