//! Logistics handler management and the deletion guard.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::{logistics_handler::LogisticsHandlerRepository, shipment::ShipmentRepository},
    error::{domain::DomainError, Error},
    model::logistics::{HandlerDto, HandlerInputDto},
};

pub struct LogisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogisticsService<'a> {
    /// Creates a new instance of [`LogisticsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_handler(&self, input: HandlerInputDto) -> Result<HandlerDto, Error> {
        let handler = LogisticsHandlerRepository::new(self.db).create(input).await?;

        Ok(handler.into())
    }

    pub async fn list_handlers(&self) -> Result<Vec<HandlerDto>, Error> {
        let handlers = LogisticsHandlerRepository::new(self.db).list().await?;

        Ok(handlers.into_iter().map(HandlerDto::from).collect())
    }

    /// Replaces a handler's contact fields.
    pub async fn update_handler(
        &self,
        id: i32,
        input: HandlerInputDto,
    ) -> Result<HandlerDto, Error> {
        let repository = LogisticsHandlerRepository::new(self.db);

        let handler = repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Logistics handler", id))?;

        let handler = repository.update(handler, input).await?;

        Ok(handler.into())
    }

    /// Deletes a handler unless shipments still reference it.
    ///
    /// The count check exists to report how many shipments block the
    /// delete; the RESTRICT foreign key is the authoritative guard, so a
    /// referential-integrity error from the delete itself maps to the same
    /// `Conflict` outcome.
    pub async fn delete_handler(&self, id: i32) -> Result<(), Error> {
        let referencing = ShipmentRepository::new(self.db).count_by_handler(id).await?;

        if referencing > 0 {
            return Err(DomainError::Conflict(format!(
                "Logistics handler {} is referenced by {} shipment(s)",
                id, referencing
            ))
            .into());
        }

        let result = LogisticsHandlerRepository::new(self.db).delete(id).await;

        match result {
            Ok(deleted) => {
                if deleted.rows_affected == 0 {
                    return Err(DomainError::not_found("Logistics handler", id).into());
                }

                Ok(())
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(DomainError::Conflict(format!(
                        "Logistics handler {} is referenced by existing shipments",
                        id
                    ))
                    .into())
                }
                _ => Err(err.into()),
            },
        }
    }
}
