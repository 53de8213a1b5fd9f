use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipmentState::Table)
                    .if_not_exists()
                    .col(pk_auto(ShipmentState::Id))
                    .col(string_uniq(ShipmentState::Name))
                    .to_owned(),
            )
            .await?;

        // Seed the fixed state catalog; the workflow refuses to create
        // shipments if "Empaquetando" is ever missing from this table.
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(ShipmentState::Table)
                    .columns([ShipmentState::Name])
                    .values_panic(["Empaquetando".into()])
                    .values_panic(["En camino".into()])
                    .values_panic(["Entregado".into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShipmentState::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShipmentState {
    Table,
    Id,
    Name,
}
