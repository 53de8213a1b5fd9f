use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransportMethod::Table)
                    .if_not_exists()
                    .col(pk_auto(TransportMethod::Id))
                    .col(string_uniq(TransportMethod::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(TransportMethod::Table)
                    .columns([TransportMethod::Name])
                    .values_panic(["Terrestre".into()])
                    .values_panic(["Aéreo".into()])
                    .values_panic(["Marítimo".into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransportMethod::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TransportMethod {
    Table,
    Id,
    Name,
}
