use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or replacing a logistics handler.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct HandlerInputDto {
    /// Hospital the handler works for
    #[validate(range(min = 1, message = "hospital_id debe ser positivo"))]
    pub hospital_id: i32,
    /// Contact name
    #[validate(length(min = 1, max = 120, message = "El nombre es obligatorio"))]
    pub nombre: String,
    /// Contact phone
    #[validate(length(min = 1, max = 30, message = "El teléfono es obligatorio"))]
    pub telefono: String,
    /// Contact email
    #[validate(email(message = "Correo inválido"))]
    pub correo: String,
}

/// A logistics handler as returned by the API.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HandlerDto {
    /// Handler identifier
    pub id: i32,
    /// Hospital affiliation
    pub hospital_id: i32,
    /// Contact name
    pub nombre: String,
    /// Contact phone
    pub telefono: String,
    /// Contact email
    pub correo: String,
    /// Creation timestamp
    pub creado_en: NaiveDateTime,
}

impl From<entity::logistics_handler::Model> for HandlerDto {
    fn from(handler: entity::logistics_handler::Model) -> Self {
        Self {
            id: handler.id,
            hospital_id: handler.hospital_id,
            nombre: handler.name,
            telefono: handler.phone,
            correo: handler.email,
            creado_en: handler.created_at,
        }
    }
}
