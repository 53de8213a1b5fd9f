use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::logistics::HandlerInputDto;

pub struct LogisticsHandlerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LogisticsHandlerRepository<'a, C> {
    /// Creates a new instance of [`LogisticsHandlerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        input: HandlerInputDto,
    ) -> Result<entity::logistics_handler::Model, DbErr> {
        let handler = entity::logistics_handler::ActiveModel {
            hospital_id: ActiveValue::Set(input.hospital_id),
            name: ActiveValue::Set(input.nombre),
            phone: ActiveValue::Set(input.telefono),
            email: ActiveValue::Set(input.correo),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        handler.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::logistics_handler::Model>, DbErr> {
        entity::prelude::LogisticsHandler::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::logistics_handler::Model>, DbErr> {
        entity::prelude::LogisticsHandler::find()
            .order_by_asc(entity::logistics_handler::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the handler's contact fields.
    pub async fn update(
        &self,
        handler: entity::logistics_handler::Model,
        input: HandlerInputDto,
    ) -> Result<entity::logistics_handler::Model, DbErr> {
        let mut handler: entity::logistics_handler::ActiveModel = handler.into();
        handler.hospital_id = ActiveValue::Set(input.hospital_id);
        handler.name = ActiveValue::Set(input.nombre);
        handler.phone = ActiveValue::Set(input.telefono);
        handler.email = ActiveValue::Set(input.correo);

        handler.update(self.db).await
    }

    /// Deletes a handler
    ///
    /// Returns OK regardless of the handler existing; to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LogisticsHandler::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
