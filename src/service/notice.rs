//! Published-notice lifecycle.
//!
//! Listing is a pure query; expiry is an explicit sweep run from the cron
//! scheduler rather than a side effect of reading.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::notice::NoticeRepository,
    error::Error,
    model::notice::{CreateNoticeDto, NoticeDto},
};

pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    /// Creates a new instance of [`NoticeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_notice(&self, input: CreateNoticeDto) -> Result<NoticeDto, Error> {
        let notice = NoticeRepository::new(self.db)
            .create(input.titulo, input.contenido, input.fecha)
            .await?;

        Ok(notice.into())
    }

    /// Currently active notices, newest date first.
    ///
    /// Never returns a notice dated strictly before today, regardless of
    /// whether the sweep has already unpublished it.
    pub async fn list_published(&self, now: DateTime<Utc>) -> Result<Vec<NoticeDto>, Error> {
        let notices = NoticeRepository::new(self.db)
            .list_published(now.date_naive())
            .await?;

        Ok(notices.into_iter().map(NoticeDto::from).collect())
    }

    /// Unpublishes every notice whose date has passed; returns how many
    /// rows were flipped.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<u64, Error> {
        let result = NoticeRepository::new(self.db)
            .sweep_expired(now.date_naive())
            .await?;

        Ok(result.rows_affected)
    }
}
