//! Notification updates.

use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository,
    error::{domain::DomainError, Error},
    model::notification::NotificationDto,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a notification as read.
    ///
    /// Idempotent: marking an already-read notification succeeds and
    /// returns `leida = true` again.
    pub async fn mark_read(&self, id: i32) -> Result<NotificationDto, Error> {
        let repository = NotificationRepository::new(self.db);

        let notification = repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Notification", id))?;

        let notification = repository.set_read(notification).await?;

        Ok(notification.into())
    }

    /// Deletes a notification; absence is reported as `NotFound`, distinct
    /// from other persistence failures.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = NotificationRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Notification", id).into());
        }

        Ok(())
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<NotificationDto>, Error> {
        let notifications = NotificationRepository::new(self.db)
            .list_for_user(user_id)
            .await?;

        Ok(notifications.into_iter().map(NotificationDto::from).collect())
    }
}
