use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A notification as returned by the API.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotificationDto {
    /// Notification identifier
    pub id: i32,
    /// Target user
    pub usuario_id: i32,
    /// Message body
    pub mensaje: String,
    /// Read flag
    pub leida: bool,
    /// Creation timestamp
    pub creado_en: NaiveDateTime,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            usuario_id: notification.user_id,
            mensaje: notification.message,
            leida: notification.read,
            creado_en: notification.created_at,
        }
    }
}
