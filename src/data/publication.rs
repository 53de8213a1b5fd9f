use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::publication::{CreatePublicationDto, UpdatePublicationDto};

pub struct PublicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PublicationRepository<'a, C> {
    /// Creates a new instance of [`PublicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        input: CreatePublicationDto,
    ) -> Result<entity::publication::Model, DbErr> {
        let publication = entity::publication::ActiveModel {
            hospital_id: ActiveValue::Set(input.hospital_id),
            medication_id: ActiveValue::Set(input.medicamento_id),
            quantity: ActiveValue::Set(input.cantidad),
            description: ActiveValue::Set(input.descripcion),
            published: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        publication.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::publication::Model>, DbErr> {
        entity::prelude::Publication::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::publication::Model>, DbErr> {
        entity::prelude::Publication::find()
            .order_by_desc(entity::publication::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        publication: entity::publication::Model,
        input: UpdatePublicationDto,
    ) -> Result<entity::publication::Model, DbErr> {
        let mut publication: entity::publication::ActiveModel = publication.into();
        publication.quantity = ActiveValue::Set(input.cantidad);
        publication.description = ActiveValue::Set(input.descripcion);
        publication.published = ActiveValue::Set(input.publicado);

        publication.update(self.db).await
    }
}
