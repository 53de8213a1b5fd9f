use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::hospital::CreateHospitalDto;

pub struct HospitalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HospitalRepository<'a, C> {
    /// Creates a new instance of [`HospitalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        input: CreateHospitalDto,
    ) -> Result<entity::hospital::Model, DbErr> {
        let hospital = entity::hospital::ActiveModel {
            name: ActiveValue::Set(input.nombre),
            address: ActiveValue::Set(input.direccion),
            city: ActiveValue::Set(input.ciudad),
            phone: ActiveValue::Set(input.telefono),
            email: ActiveValue::Set(input.correo),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        hospital.insert(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::hospital::Model>, DbErr> {
        entity::prelude::Hospital::find()
            .order_by_asc(entity::hospital::Column::Name)
            .all(self.db)
            .await
    }
}
