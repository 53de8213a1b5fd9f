use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct RegisterDto {
    /// Display name
    #[validate(length(min = 1, max = 120, message = "El nombre es obligatorio"))]
    pub nombre: String,
    /// Login email, unique across users
    #[validate(email(message = "Correo inválido"))]
    pub correo: String,
    /// Plaintext password, hashed before storage
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub contrasena: String,
    /// Hospital the user belongs to, if any
    pub hospital_id: Option<i32>,
}

/// Login request body.
#[derive(Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct LoginDto {
    /// Login email
    #[validate(email(message = "Correo inválido"))]
    pub correo: String,
    /// Plaintext password
    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub contrasena: String,
}

/// A user as returned by the API. The password hash never leaves the server.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    /// User identifier
    pub id: i32,
    /// Display name
    pub nombre: String,
    /// Login email
    pub correo: String,
    /// Role name, e.g. "hospital" or "admin"
    pub rol: String,
    /// Hospital affiliation, if any
    pub hospital_id: Option<i32>,
}

impl From<entity::app_user::Model> for UserDto {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            nombre: user.name,
            correo: user.email,
            rol: user.role,
            hospital_id: user.hospital_id,
        }
    }
}
