use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, UpdateResult,
};

pub struct NoticeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoticeRepository<'a, C> {
    /// Creates a new instance of [`NoticeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        body: String,
        date: NaiveDate,
    ) -> Result<entity::notice::Model, DbErr> {
        let notice = entity::notice::ActiveModel {
            title: ActiveValue::Set(title),
            body: ActiveValue::Set(body),
            date: ActiveValue::Set(date),
            published: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notice.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::notice::Model>, DbErr> {
        entity::prelude::Notice::find_by_id(id).one(self.db).await
    }

    /// Pure read: published notices that have not yet expired, newest
    /// date first. Filters on `date` directly so correctness does not
    /// depend on the sweep having run.
    pub async fn list_published(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<entity::notice::Model>, DbErr> {
        entity::prelude::Notice::find()
            .filter(entity::notice::Column::Published.eq(true))
            .filter(entity::notice::Column::Date.gte(today))
            .order_by_desc(entity::notice::Column::Date)
            .all(self.db)
            .await
    }

    /// Unpublishes every notice dated strictly before `today`.
    pub async fn sweep_expired(&self, today: NaiveDate) -> Result<UpdateResult, DbErr> {
        entity::prelude::Notice::update_many()
            .col_expr(
                entity::notice::Column::Published,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::notice::Column::Published.eq(true))
            .filter(entity::notice::Column::Date.lt(today))
            .exec(self.db)
            .await
    }
}
