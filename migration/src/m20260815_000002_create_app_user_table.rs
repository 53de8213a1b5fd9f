use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_hospital_table::Hospital;

static IDX_APP_USER_EMAIL: &str = "idx_app_user_email";
static FK_APP_USER_HOSPITAL_ID: &str = "fk_app_user_hospital_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::Id))
                    .col(integer_null(AppUser::HospitalId))
                    .col(string(AppUser::Name))
                    .col(string_uniq(AppUser::Email))
                    .col(string(AppUser::PasswordHash))
                    .col(string(AppUser::Role))
                    .col(timestamp(AppUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_USER_EMAIL)
                    .table(AppUser::Table)
                    .col(AppUser::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_USER_HOSPITAL_ID)
                    .from_tbl(AppUser::Table)
                    .from_col(AppUser::HospitalId)
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
                    .name(FK_APP_USER_HOSPITAL_ID)
                    .table(AppUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APP_USER_EMAIL)
                    .table(AppUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    HospitalId,
    Name,
    Email,
    PasswordHash,
    Role,
    CreatedAt,
}
