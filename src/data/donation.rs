use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct DonationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonationRepository<'a, C> {
    /// Creates a new instance of [`DonationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a new donation with no shipment attached yet.
    pub async fn create(
        &self,
        hospital_id: i32,
        description: Option<String>,
    ) -> Result<entity::donation::Model, DbErr> {
        let donation = entity::donation::ActiveModel {
            hospital_id: ActiveValue::Set(hospital_id),
            shipment_id: ActiveValue::Set(None),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        donation.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::donation::Model>, DbErr> {
        entity::prelude::Donation::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::donation::Model>, DbErr> {
        entity::prelude::Donation::find()
            .order_by_desc(entity::donation::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Points the donation at its shipment, but only while it has none.
    ///
    /// The `shipment_id IS NULL` condition makes the write atomic: of two
    /// concurrent callers, exactly one gets `rows_affected == 1` and the
    /// other gets `0`. Callers treat `0` as a conflict.
    pub async fn link_shipment(&self, donation_id: i32, shipment_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Donation::update_many()
            .col_expr(
                entity::donation::Column::ShipmentId,
                Expr::value(shipment_id),
            )
            .filter(entity::donation::Column::Id.eq(donation_id))
            .filter(entity::donation::Column::ShipmentId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
