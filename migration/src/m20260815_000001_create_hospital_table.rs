use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hospital::Table)
                    .if_not_exists()
                    .col(pk_auto(Hospital::Id))
                    .col(string(Hospital::Name))
                    .col(string(Hospital::Address))
                    .col(string(Hospital::City))
                    .col(string(Hospital::Phone))
                    .col(string(Hospital::Email))
                    .col(timestamp(Hospital::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hospital::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Hospital {
    Table,
    Id,
    Name,
    Address,
    City,
    Phone,
    Email,
    CreatedAt,
}
