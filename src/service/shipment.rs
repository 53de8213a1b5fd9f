//! Donation to shipment workflow.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        donation::DonationRepository,
        shipment::ShipmentRepository,
        shipment_state::{ShipmentStateRepository, STATE_PACKING},
    },
    error::{domain::DomainError, Error},
    model::shipment::{CreateShipmentDto, ShipmentDto},
};

/// Assigns a shipment to a donation exactly once and exposes state lookups.
pub struct ShipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipmentService<'a> {
    /// Creates a new instance of [`ShipmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a shipment for a donation and links the two.
    ///
    /// Fails with `NotFound` if the donation does not exist, `Conflict` if
    /// it already has a shipment, and `InternalError` if the initial state
    /// catalog entry is missing (corrupt seed data, not a user error).
    ///
    /// The shipment insert and the donation update run in one transaction
    /// so a crash between them cannot leave an orphaned shipment. The
    /// early `shipment_id` check only produces a friendlier message; the
    /// link itself is a conditional `shipment_id IS NULL` update, so of
    /// two interleaved callers exactly one links and the other rolls back
    /// with `Conflict`.
    pub async fn create_shipment(&self, input: CreateShipmentDto) -> Result<ShipmentDto, Error> {
        let donation = DonationRepository::new(self.db)
            .get_by_id(input.donacion_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Donation", input.donacion_id))?;

        if donation.shipment_id.is_some() {
            return Err(DomainError::Conflict(format!(
                "Donation {} already has a shipment assigned",
                donation.id
            ))
            .into());
        }

        let initial_state = ShipmentStateRepository::new(self.db)
            .get_by_name(STATE_PACKING)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Shipment state catalog entry {:?} is missing; seed data is corrupt",
                    STATE_PACKING
                ))
            })?;

        let txn = self.db.begin().await?;

        let shipment = ShipmentRepository::new(&txn)
            .create(
                input.transporte_id,
                initial_state.id,
                input.fecha_recoleccion,
                input.fecha_entrega_estimada,
                input.encargado_logistica_id,
                input.descripcion,
            )
            .await?;

        let linked = DonationRepository::new(&txn)
            .link_shipment(donation.id, shipment.id)
            .await?;

        // Somebody else linked the donation between our read and the
        // conditional update. Dropping the transaction discards our
        // shipment insert.
        if linked == 0 {
            return Err(DomainError::Conflict(format!(
                "Donation {} already has a shipment assigned",
                donation.id
            ))
            .into());
        }

        txn.commit().await?;

        Ok(shipment.into())
    }

    /// Looks up a shipment by id.
    pub async fn get_shipment(&self, id: i32) -> Result<ShipmentDto, Error> {
        let shipment = ShipmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Shipment", id))?;

        Ok(shipment.into())
    }
}
