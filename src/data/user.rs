use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already-hashed password.
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: String,
        hospital_id: Option<i32>,
    ) -> Result<entity::app_user::Model, DbErr> {
        let user = entity::app_user::ActiveModel {
            hospital_id: ActiveValue::Set(hospital_id),
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
