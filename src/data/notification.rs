use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Sets the read flag. Setting it on an already-read notification is a
    /// normal update, not an error.
    pub async fn set_read(
        &self,
        notification: entity::notification::Model,
    ) -> Result<entity::notification::Model, DbErr> {
        let mut notification: entity::notification::ActiveModel = notification.into();
        notification.read = ActiveValue::Set(true);

        notification.update(self.db).await
    }

    /// Deletes a notification
    ///
    /// Returns OK regardless of the notification existing; to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
