use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for attaching a shipment to a donation.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
#[validate(schema(function = "validate_delivery_after_pickup"))]
pub struct CreateShipmentDto {
    /// Donation the shipment belongs to
    #[validate(range(min = 1, message = "donacion_id debe ser positivo"))]
    pub donacion_id: i32,
    /// Transport method catalog id
    #[validate(range(min = 1, message = "transporte_id debe ser positivo"))]
    pub transporte_id: i32,
    /// Scheduled pickup date
    pub fecha_recoleccion: NaiveDate,
    /// Estimated delivery date, never before pickup
    pub fecha_entrega_estimada: NaiveDate,
    /// Optional free-form description
    #[validate(length(max = 500, message = "descripcion supera los 500 caracteres"))]
    pub descripcion: Option<String>,
    /// Optional logistics handler coordinating the shipment
    pub encargado_logistica_id: Option<i32>,
}

fn validate_delivery_after_pickup(
    dto: &CreateShipmentDto,
) -> Result<(), validator::ValidationError> {
    if dto.fecha_entrega_estimada < dto.fecha_recoleccion {
        return Err(validator::ValidationError::new("fecha_entrega_estimada")
            .with_message("La fecha de entrega estimada no puede ser anterior a la de recolección".into()));
    }

    Ok(())
}

/// A shipment as returned by the API.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipmentDto {
    /// Shipment identifier
    pub id: i32,
    /// Transport method catalog id
    pub transporte_id: i32,
    /// Current state catalog id
    pub estado_envio_id: i32,
    /// Scheduled pickup date
    pub fecha_recoleccion: NaiveDate,
    /// Estimated delivery date
    pub fecha_entrega_estimada: NaiveDate,
    /// Logistics handler, if assigned
    pub encargado_logistica_id: Option<i32>,
    /// Free-form description
    pub descripcion: Option<String>,
    /// Creation timestamp
    pub creado_en: NaiveDateTime,
}

impl From<entity::shipment::Model> for ShipmentDto {
    fn from(shipment: entity::shipment::Model) -> Self {
        Self {
            id: shipment.id,
            transporte_id: shipment.transport_method_id,
            estado_envio_id: shipment.shipment_state_id,
            fecha_recoleccion: shipment.pickup_date,
            fecha_entrega_estimada: shipment.estimated_delivery_date,
            encargado_logistica_id: shipment.logistics_handler_id,
            descripcion: shipment.description,
            creado_en: shipment.created_at,
        }
    }
}
