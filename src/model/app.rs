use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Single shared database handle; the only shared mutable resource.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
