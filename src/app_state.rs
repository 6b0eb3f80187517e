//! Implements a struct that holds the state of the web server.

use axum::extract::FromRef;

use crate::db::Database;

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The application database.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] around an already initialized [Database].
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

// Route handlers only need the database, so they can extract it directly.
impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}
