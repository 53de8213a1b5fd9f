//! Server startup: database connection, migrations, session layer.

use sea_orm::DatabaseConnection;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure session management backed by an in-memory store.
///
/// Sessions are server-side; the only thing the client holds is the
/// session cookie. Restarting the server logs everyone out.
pub fn build_session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let session_store = MemoryStore::default();

    // Secure cookies outside of debug builds.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
