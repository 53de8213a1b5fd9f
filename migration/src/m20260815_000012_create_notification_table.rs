use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000002_create_app_user_table::AppUser;

static IDX_NOTIFICATION_USER_ID: &str = "idx_notification_user_id";
static FK_NOTIFICATION_USER_ID: &str = "fk_notification_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer(Notification::UserId))
                    .col(string(Notification::Message))
                    .col(boolean(Notification::Read))
                    .col(timestamp(Notification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(Notification::Table)
                    .col(Notification::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_USER_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTIFICATION_USER_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_USER_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    UserId,
    Message,
    Read,
    CreatedAt,
}
