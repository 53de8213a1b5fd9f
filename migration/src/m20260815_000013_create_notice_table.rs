use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(pk_auto(Notice::Id))
                    .col(string(Notice::Title))
                    .col(string(Notice::Body))
                    .col(date(Notice::Date))
                    .col(boolean(Notice::Published))
                    .col(timestamp(Notice::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Notice {
    Table,
    Id,
    Title,
    Body,
    Date,
    Published,
    CreatedAt,
}
