use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for publishing a notice.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateNoticeDto {
    /// Notice title
    #[validate(length(min = 1, max = 200, message = "El título es obligatorio"))]
    pub titulo: String,
    /// Notice body
    #[validate(length(min = 1, message = "El contenido es obligatorio"))]
    pub contenido: String,
    /// Date the notice remains active until (inclusive)
    pub fecha: NaiveDate,
}

/// A notice as returned by the API.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoticeDto {
    /// Notice identifier
    pub id: i32,
    /// Notice title
    pub titulo: String,
    /// Notice body
    pub contenido: String,
    /// Active-until date
    pub fecha: NaiveDate,
    /// Published flag; flipped off by the expiry sweep
    pub publicado: bool,
    /// Creation timestamp
    pub creado_en: NaiveDateTime,
}

impl From<entity::notice::Model> for NoticeDto {
    fn from(notice: entity::notice::Model) -> Self {
        Self {
            id: notice.id,
            titulo: notice.title,
            contenido: notice.body,
            fecha: notice.date,
            publicado: notice.published,
            creado_en: notice.created_at,
        }
    }
}
