use chrono::NaiveDateTime;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

/// Payment status counted toward the dashboard donation total.
pub static PAYMENT_COMPLETED: &str = "Completado";

/// Read-only aggregate queries backing the dashboard.
///
/// Everything here is recomputed per call; cost is linear in the row count
/// within the trailing window.
pub struct MetricsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MetricsRepository<'a, C> {
    /// Creates a new instance of [`MetricsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn count_users(&self) -> Result<u64, DbErr> {
        entity::prelude::AppUser::find().count(self.db).await
    }

    pub async fn count_hospitals(&self) -> Result<u64, DbErr> {
        entity::prelude::Hospital::find().count(self.db).await
    }

    pub async fn count_donations(&self) -> Result<u64, DbErr> {
        entity::prelude::Donation::find().count(self.db).await
    }

    pub async fn count_publications(&self) -> Result<u64, DbErr> {
        entity::prelude::Publication::find().count(self.db).await
    }

    pub async fn count_medications(&self) -> Result<u64, DbErr> {
        entity::prelude::Medication::find().count(self.db).await
    }

    pub async fn count_requests(&self) -> Result<u64, DbErr> {
        entity::prelude::MedicationRequest::find()
            .count(self.db)
            .await
    }

    /// Amounts of all completed payments.
    pub async fn completed_payment_amounts(&self) -> Result<Vec<f64>, DbErr> {
        entity::prelude::Payment::find()
            .select_only()
            .column(entity::payment::Column::Amount)
            .filter(entity::payment::Column::Status.eq(PAYMENT_COMPLETED))
            .into_tuple::<f64>()
            .all(self.db)
            .await
    }

    /// Creation timestamps of publications created at or after `start`.
    pub async fn publication_dates_since(
        &self,
        start: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>, DbErr> {
        entity::prelude::Publication::find()
            .select_only()
            .column(entity::publication::Column::CreatedAt)
            .filter(entity::publication::Column::CreatedAt.gte(start))
            .into_tuple::<NaiveDateTime>()
            .all(self.db)
            .await
    }

    /// Creation timestamps of shipments created at or after `start` whose
    /// current state is one of `state_ids`.
    pub async fn shipment_dates_since(
        &self,
        start: NaiveDateTime,
        state_ids: &[i32],
    ) -> Result<Vec<NaiveDateTime>, DbErr> {
        entity::prelude::Shipment::find()
            .select_only()
            .column(entity::shipment::Column::CreatedAt)
            .filter(entity::shipment::Column::CreatedAt.gte(start))
            .filter(entity::shipment::Column::ShipmentStateId.is_in(state_ids.iter().copied()))
            .into_tuple::<NaiveDateTime>()
            .all(self.db)
            .await
    }
}
