use sea_orm::entity::prelude::*;

/// A published notice shown on the platform until its date passes.
///
/// The expiry sweep flips `published` to false once `date` is in the
/// past; the listing query independently filters on `date` so a notice
/// never appears after expiry even before the sweep runs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub body: String,
    pub date: Date,
    pub published: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
