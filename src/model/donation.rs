use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for registering a donation.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateDonationDto {
    /// Donor hospital
    #[validate(range(min = 1, message = "hospital_id debe ser positivo"))]
    pub hospital_id: i32,
    /// Optional free-form description
    #[validate(length(max = 500, message = "descripcion supera los 500 caracteres"))]
    pub descripcion: Option<String>,
}

/// A donation as returned by the API.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DonationDto {
    /// Donation identifier
    pub id: i32,
    /// Donor hospital
    pub hospital_id: i32,
    /// Linked shipment, set once the shipment is created
    pub envio_id: Option<i32>,
    /// Free-form description
    pub descripcion: Option<String>,
    /// Creation timestamp
    pub creado_en: NaiveDateTime,
}

impl From<entity::donation::Model> for DonationDto {
    fn from(donation: entity::donation::Model) -> Self {
        Self {
            id: donation.id,
            hospital_id: donation.hospital_id,
            envio_id: donation.shipment_id,
            descripcion: donation.description,
            creado_en: donation.created_at,
        }
    }
}
