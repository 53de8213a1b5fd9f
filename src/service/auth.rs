//! Account registration and credential verification.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, domain::DomainError, Error},
    model::auth::{LoginDto, RegisterDto, UserDto},
};

/// Role assigned to self-registered accounts.
static DEFAULT_ROLE: &str = "hospital";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account, storing a bcrypt hash of the password.
    pub async fn register(&self, input: RegisterDto) -> Result<UserDto, Error> {
        let repository = UserRepository::new(self.db);

        if repository.get_by_email(&input.correo).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Email {} is already registered",
                input.correo
            ))
            .into());
        }

        let password_hash = bcrypt::hash(&input.contrasena, bcrypt::DEFAULT_COST)?;

        let user = repository
            .create(
                input.nombre,
                input.correo,
                password_hash,
                DEFAULT_ROLE.to_string(),
                input.hospital_id,
            )
            .await?;

        Ok(user.into())
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// A missing user and a wrong password both map to the same
    /// `InvalidCredentials` error so login failures do not reveal which
    /// emails are registered.
    pub async fn login(&self, input: LoginDto) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_email(&input.correo)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(&input.contrasena, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user.into())
    }

    /// Resolves the logged-in user for a session id.
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        Ok(user.into())
    }
}
