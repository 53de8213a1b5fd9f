use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Names of the fixed state catalog entries, as seeded by migrations.
pub static STATE_PACKING: &str = "Empaquetando";
pub static STATE_IN_TRANSIT: &str = "En camino";
pub static STATE_DELIVERED: &str = "Entregado";

pub struct ShipmentStateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipmentStateRepository<'a, C> {
    /// Creates a new instance of [`ShipmentStateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Looks up a catalog entry by its exact name.
    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::shipment_state::Model>, DbErr> {
        entity::prelude::ShipmentState::find()
            .filter(entity::shipment_state::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
