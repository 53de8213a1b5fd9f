use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct ShipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipmentRepository<'a, C> {
    /// Creates a new instance of [`ShipmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a shipment seeded in the given state.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        transport_method_id: i32,
        shipment_state_id: i32,
        pickup_date: NaiveDate,
        estimated_delivery_date: NaiveDate,
        logistics_handler_id: Option<i32>,
        description: Option<String>,
    ) -> Result<entity::shipment::Model, DbErr> {
        let shipment = entity::shipment::ActiveModel {
            transport_method_id: ActiveValue::Set(transport_method_id),
            shipment_state_id: ActiveValue::Set(shipment_state_id),
            pickup_date: ActiveValue::Set(pickup_date),
            estimated_delivery_date: ActiveValue::Set(estimated_delivery_date),
            logistics_handler_id: ActiveValue::Set(logistics_handler_id),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        shipment.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::shipment::Model>, DbErr> {
        entity::prelude::Shipment::find_by_id(id).one(self.db).await
    }

    /// Number of shipments referencing the given logistics handler.
    pub async fn count_by_handler(&self, handler_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Shipment::find()
            .filter(entity::shipment::Column::LogisticsHandlerId.eq(handler_id))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use medilink_test_utils::prelude::*;

    use crate::data::shipment::ShipmentRepository;

    #[tokio::test]
    /// Expect zero referencing shipments for an unused handler id
    async fn test_count_by_handler_zero() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Hospital,
            entity::prelude::ShipmentState,
            entity::prelude::TransportMethod,
            entity::prelude::LogisticsHandler,
            entity::prelude::Shipment
        )?;
        let repository = ShipmentRepository::new(&test.db);

        let count = repository.count_by_handler(1).await?;

        assert_eq!(count, 0);

        Ok(())
    }

    #[tokio::test]
    /// Expect the count to reflect shipments referencing the handler
    async fn test_count_by_handler_some() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::Hospital,
            entity::prelude::ShipmentState,
            entity::prelude::TransportMethod,
            entity::prelude::LogisticsHandler,
            entity::prelude::Shipment
        )?;
        let hospital = test.insert_hospital().await?;
        let states = test.seed_shipment_states().await?;
        let handler = test.insert_handler(hospital.id).await?;
        test.insert_shipment(states[0].id, Some(handler.id)).await?;
        test.insert_shipment(states[1].id, Some(handler.id)).await?;
        let repository = ShipmentRepository::new(&test.db);

        let count = repository.count_by_handler(handler.id).await?;

        assert_eq!(count, 2);

        Ok(())
    }
}
