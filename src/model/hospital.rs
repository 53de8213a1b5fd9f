use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for registering a hospital.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateHospitalDto {
    /// Hospital name
    #[validate(length(min = 1, max = 200, message = "El nombre es obligatorio"))]
    pub nombre: String,
    /// Street address
    #[validate(length(min = 1, max = 200, message = "La dirección es obligatoria"))]
    pub direccion: String,
    /// City
    #[validate(length(min = 1, max = 120, message = "La ciudad es obligatoria"))]
    pub ciudad: String,
    /// Contact phone
    #[validate(length(min = 1, max = 30, message = "El teléfono es obligatorio"))]
    pub telefono: String,
    /// Contact email
    #[validate(email(message = "Correo inválido"))]
    pub correo: String,
}

/// A hospital as returned by the API.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HospitalDto {
    /// Hospital identifier
    pub id: i32,
    /// Hospital name
    pub nombre: String,
    /// Street address
    pub direccion: String,
    /// City
    pub ciudad: String,
    /// Contact phone
    pub telefono: String,
    /// Contact email
    pub correo: String,
    /// Creation timestamp
    pub creado_en: NaiveDateTime,
}

impl From<entity::hospital::Model> for HospitalDto {
    fn from(hospital: entity::hospital::Model) -> Self {
        Self {
            id: hospital.id,
            nombre: hospital.name,
            direccion: hospital.address,
            ciudad: hospital.city,
            telefono: hospital.phone,
            correo: hospital.email,
            creado_en: hospital.created_at,
        }
    }
}
