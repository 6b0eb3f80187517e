//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    database_id::{AccountId, DatabaseId},
    ensure_finite, is_foreign_key_error,
};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income against an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// The account the money moved in or out of.
    pub account_id: AccountId,
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values are income, negative values are expenses.
    pub amount: f64,
    /// The category of the transaction, e.g. "Groceries", "Rent".
    pub category: String,
    /// An optional free text description.
    pub description: Option<String>,
}

/// The data needed to record a new [Transaction].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The account the money moved in or out of.
    pub account_id: AccountId,
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent (negative) or earned (positive).
    pub amount: f64,
    /// The category of the transaction.
    pub category: String,
    /// An optional free text description.
    pub description: Option<String>,
}

/// Constraints for [get_transactions].
///
/// Every field that is set must match. Fields that are `None` do not
/// constrain the query. The date range is inclusive at both ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Only include transactions for this account.
    pub account_id: Option<AccountId>,
    /// Only include transactions on or after this date.
    pub start_date: Option<Date>,
    /// Only include transactions on or before this date.
    pub end_date: Option<Date>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Record a new transaction.
///
/// # Errors
/// This function will return a:
/// - [Error::NonFiniteAmount] if the amount is infinite or NaN,
/// - [Error::InvalidAccount] if the account ID does not refer to an account,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn add_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let account_id = new_transaction.account_id;
    ensure_finite(new_transaction.amount)?;
    let db_transaction = connection.unchecked_transaction()?;

    let transaction = db_transaction
        .prepare(
            "INSERT INTO \"transaction\" (account_id, date, amount, category, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, account_id, date, amount, category, description",
        )?
        .query_row(
            (
                new_transaction.account_id,
                new_transaction.date,
                new_transaction.amount,
                &new_transaction.category,
                &new_transaction.description,
            ),
            map_transaction_row,
        )
        .map_err(|error| {
            if is_foreign_key_error(&error) {
                Error::InvalidAccount(account_id)
            } else {
                error.into()
            }
        })?;

    db_transaction.commit()?;

    tracing::debug!(
        "Transaction added for Account ID {account_id}: {} ({})",
        transaction.amount,
        transaction.category
    );

    Ok(transaction)
}

/// Get the transactions matching `filter`, ordered by date and then ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transactions(
    filter: &TransactionFilter,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, account_id, date, amount, category, description FROM \"transaction\"
             WHERE (?1 IS NULL OR account_id = ?1)
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)
             ORDER BY date ASC, id ASC",
        )?
        .query_map(
            (filter.account_id, filter.start_date, filter.end_date),
            map_transaction_row,
        )?
        .map(|transaction_result| transaction_result.map_err(Error::from))
        .collect::<Result<Vec<_>, _>>()
}

#[cfg(test)]
/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY,
                account_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT,
                FOREIGN KEY(account_id) REFERENCES account(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_account_date ON \"transaction\"(account_id, date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        account_id: row.get(1)?,
        date: row.get(2)?,
        amount: row.get(3)?,
        category: row.get(4)?,
        description: row.get(5)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
