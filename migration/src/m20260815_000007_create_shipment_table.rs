use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000004_create_shipment_state_table::ShipmentState,
    m20260815_000005_create_transport_method_table::TransportMethod,
    m20260815_000006_create_logistics_handler_table::LogisticsHandler,
};

static IDX_SHIPMENT_STATE_ID: &str = "idx_shipment_shipment_state_id";
static FK_SHIPMENT_TRANSPORT_METHOD_ID: &str = "fk_shipment_transport_method_id";
static FK_SHIPMENT_STATE_ID: &str = "fk_shipment_shipment_state_id";
static FK_SHIPMENT_LOGISTICS_HANDLER_ID: &str = "fk_shipment_logistics_handler_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Shipment::Id))
                    .col(integer(Shipment::TransportMethodId))
                    .col(integer(Shipment::ShipmentStateId))
                    .col(date(Shipment::PickupDate))
                    .col(date(Shipment::EstimatedDeliveryDate))
                    .col(integer_null(Shipment::LogisticsHandlerId))
                    .col(string_null(Shipment::Description))
                    .col(timestamp(Shipment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIPMENT_STATE_ID)
                    .table(Shipment::Table)
                    .col(Shipment::ShipmentStateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIPMENT_TRANSPORT_METHOD_ID)
                    .from_tbl(Shipment::Table)
                    .from_col(Shipment::TransportMethodId)
                    .to_tbl(TransportMethod::Table)
                    .to_col(TransportMethod::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIPMENT_STATE_ID)
                    .from_tbl(Shipment::Table)
                    .from_col(Shipment::ShipmentStateId)
                    .to_tbl(ShipmentState::Table)
                    .to_col(ShipmentState::Id)
                    .to_owned(),
            )
            .await?;

        // Handlers cannot be deleted while shipments reference them.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIPMENT_LOGISTICS_HANDLER_ID)
                    .from_tbl(Shipment::Table)
                    .from_col(Shipment::LogisticsHandlerId)
                    .to_tbl(LogisticsHandler::Table)
                    .to_col(LogisticsHandler::Id)
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
                    .name(FK_SHIPMENT_LOGISTICS_HANDLER_ID)
                    .table(Shipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIPMENT_STATE_ID)
                    .table(Shipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIPMENT_TRANSPORT_METHOD_ID)
                    .table(Shipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHIPMENT_STATE_ID)
                    .table(Shipment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Shipment {
    Table,
    Id,
    TransportMethodId,
    ShipmentStateId,
    PickupDate,
    EstimatedDeliveryDate,
    LogisticsHandlerId,
    Description,
    CreatedAt,
}
