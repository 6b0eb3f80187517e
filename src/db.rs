//! Owns the application's SQLite connection and hands out sessions for units of work.

use std::{
    fs,
    ops::{Deref, DerefMut},
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use rusqlite::Connection;

use crate::{
    Error,
    account::create_account_table,
    balance::create_balance_table,
    budget::create_budget_table,
    net_worth::create_net_worth_table,
    transaction::create_transaction_table,
};

/// The handle to the application database.
///
/// Construct one with [Database::open] at startup and pass clones of it to
/// whatever needs to talk to the database. All clones share the same
/// connection, access to which is serialised by a mutex.
#[derive(Debug, Clone)]
pub struct Database {
    connection: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open (or create) the SQLite database at `path` and create any missing tables.
    ///
    /// The parent directory of `path` is created if it does not exist.
    ///
    /// # Errors
    /// Returns [Error::StorageInit] if the directory or database file cannot be
    /// created or opened, or if the schema could not be created.
    pub fn open(path: &Path) -> Result<Self, Error> {
        tracing::info!("Initializing database at: {}", path.display());

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| {
                Error::StorageInit(format!(
                    "could not create directory {}: {error}",
                    parent.display()
                ))
            })?;
        }

        if !path.exists() {
            tracing::warn!(
                "Database file {} does not exist yet. It will be created along with the tables.",
                path.display()
            );
        }

        let connection = Connection::open(path).map_err(|error| {
            Error::StorageInit(format!("could not open {}: {error}", path.display()))
        })?;

        Self::from_connection(connection)
    }

    /// Create a database that only lives in memory.
    ///
    /// # Errors
    /// Returns [Error::StorageInit] if the schema could not be created.
    pub fn open_in_memory() -> Result<Self, Error> {
        let connection = Connection::open_in_memory()
            .map_err(|error| Error::StorageInit(format!("could not open in-memory database: {error}")))?;

        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)
            .map_err(|error| Error::StorageInit(format!("could not create tables: {error}")))?;

        tracing::info!("All tables have been created successfully.");

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Lock the connection for one unit of work.
    ///
    /// The lock is released when the returned [Session] is dropped.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the lock is poisoned.
    pub fn acquire_session(&self) -> Result<Session<'_>, Error> {
        let guard = self
            .connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        tracing::debug!("Database session created.");

        Ok(Session { guard })
    }
}

/// Exclusive access to the database connection for the lifetime of the value.
pub struct Session<'a> {
    guard: MutexGuard<'a, Connection>,
}

impl Deref for Session<'_> {
    type Target = Connection;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl DerefMut for Session<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        tracing::debug!("Database session closed.");
    }
}

/// Create all of the application's tables if they do not already exist.
///
/// Also turns on foreign key enforcement for `connection`, which SQLite
/// leaves off by default.
///
/// # Errors
/// Returns an error if a table could not be created or if there is some other
/// SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction = connection.unchecked_transaction()?;

    create_account_table(&transaction)?;
    create_balance_table(&transaction)?;
    create_transaction_table(&transaction)?;
    create_budget_table(&transaction)?;
    create_net_worth_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
