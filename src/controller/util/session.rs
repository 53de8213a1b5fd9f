use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUserId,
};

/// Resolves the logged-in user's id from the session.
/// Returns `AuthError::Unauthorized` when no user is logged in.
pub async fn require_user(session: &Session) -> Result<i32, Error> {
    match SessionUserId::get(session).await? {
        Some(user_id) => Ok(user_id),
        None => Err(Error::AuthError(AuthError::Unauthorized)),
    }
}
