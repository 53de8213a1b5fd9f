use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for listing a medication offer.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreatePublicationDto {
    /// Publishing hospital
    #[validate(range(min = 1, message = "hospital_id debe ser positivo"))]
    pub hospital_id: i32,
    /// Offered medication
    #[validate(range(min = 1, message = "medicamento_id debe ser positivo"))]
    pub medicamento_id: i32,
    /// Offered quantity
    #[validate(range(min = 1, message = "cantidad debe ser al menos 1"))]
    pub cantidad: i32,
    /// Optional free-form description
    #[validate(length(max = 500, message = "descripcion supera los 500 caracteres"))]
    pub descripcion: Option<String>,
}

/// Request body for updating a medication offer.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdatePublicationDto {
    /// Offered quantity
    #[validate(range(min = 1, message = "cantidad debe ser al menos 1"))]
    pub cantidad: i32,
    /// Optional free-form description
    #[validate(length(max = 500, message = "descripcion supera los 500 caracteres"))]
    pub descripcion: Option<String>,
    /// Whether the offer is visible to other hospitals
    pub publicado: bool,
}

/// A publication as returned by the API.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PublicationDto {
    /// Publication identifier
    pub id: i32,
    /// Publishing hospital
    pub hospital_id: i32,
    /// Offered medication
    pub medicamento_id: i32,
    /// Offered quantity
    pub cantidad: i32,
    /// Free-form description
    pub descripcion: Option<String>,
    /// Visibility flag
    pub publicado: bool,
    /// Creation timestamp
    pub creado_en: NaiveDateTime,
}

impl From<entity::publication::Model> for PublicationDto {
    fn from(publication: entity::publication::Model) -> Self {
        Self {
            id: publication.id,
            hospital_id: publication.hospital_id,
            medicamento_id: publication.medication_id,
            cantidad: publication.quantity,
            descripcion: publication.description,
            publicado: publication.published,
            creado_en: publication.created_at,
        }
    }
}
