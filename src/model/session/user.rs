use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key the logged-in user id is stored under.
pub const SESSION_USER_ID_KEY: &str = "medilink:user:id";

/// Logged-in user id as stored in the tower-session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id))
    }
}
