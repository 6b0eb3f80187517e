use rusqlite::{Connection, Row};
use serde::Serialize;
use time::Date;

use crate::{
    Error,
    database_id::{AccountId, DatabaseId},
    ensure_finite, is_foreign_key_error,
};

/// The amount of money in an account on a given date.
///
/// Negative balances represent money owed, e.g. on a credit card or loan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalance {
    /// The id for the account balance.
    pub id: DatabaseId,
    /// The account the balance belongs to.
    pub account_id: AccountId,
    /// The date the balance was recorded for.
    pub date: Date,
    /// The balance.
    pub balance: f64,
}

/// A balance joined with the name of its account, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceTableRow {
    pub account_name: String,
    pub date: Date,
    pub balance: f64,
}

pub fn create_balance_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS account_balance (
            id INTEGER PRIMARY KEY,
            account_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            balance REAL NOT NULL,
            FOREIGN KEY(account_id) REFERENCES account(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_account_balance_date ON account_balance(date);",
    )?;

    Ok(())
}

fn map_row_to_balance(row: &Row) -> Result<AccountBalance, rusqlite::Error> {
    Ok(AccountBalance {
        id: row.get(0)?,
        account_id: row.get(1)?,
        date: row.get(2)?,
        balance: row.get(3)?,
    })
}

/// Record the balance of an account on `date`.
///
/// A new row is always inserted, so calling this twice for the same account
/// and date keeps both rows. [get_balance] returns the most recent one.
///
/// # Errors
/// Returns [Error::NonFiniteAmount] if `balance` is infinite or NaN,
/// [Error::InvalidAccount] if `account_id` does not refer to an
/// account, or [Error::SqlError] if there is some other SQL error.
pub fn update_balance(
    account_id: AccountId,
    date: Date,
    balance: f64,
    connection: &Connection,
) -> Result<AccountBalance, Error> {
    let balance = ensure_finite(balance)?;
    let transaction = connection.unchecked_transaction()?;

    let account_balance = transaction
        .prepare(
            "INSERT INTO account_balance (account_id, date, balance) VALUES (?1, ?2, ?3)
             RETURNING id, account_id, date, balance",
        )?
        .query_row((account_id, date, balance), map_row_to_balance)
        .map_err(|error| {
            if is_foreign_key_error(&error) {
                Error::InvalidAccount(account_id)
            } else {
                error.into()
            }
        })?;

    transaction.commit()?;

    tracing::debug!("Balance updated for Account ID {account_id} on {date}: {balance}");

    Ok(account_balance)
}

/// Get the balance of an account on `date`, or `None` if none was recorded.
///
/// If several balances were recorded for the same account and date, the one
/// recorded last is returned.
pub fn get_balance(
    account_id: AccountId,
    date: Date,
    connection: &Connection,
) -> Result<Option<AccountBalance>, Error> {
    let result = connection
        .prepare(
            "SELECT id, account_id, date, balance FROM account_balance
             WHERE account_id = ?1 AND date = ?2
             ORDER BY id DESC
             LIMIT 1",
        )?
        .query_row((account_id, date), map_row_to_balance);

    match result {
        Ok(balance) => Ok(Some(balance)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Get every recorded balance with its account name, newest first.
pub fn get_balances(connection: &Connection) -> Result<Vec<BalanceTableRow>, Error> {
    connection
        .prepare(
            "SELECT account.name, account_balance.date, account_balance.balance
             FROM account_balance
             INNER JOIN account ON account_balance.account_id = account.id
             ORDER BY account_balance.date DESC, account_balance.id DESC",
        )?
        .query_map([], |row| {
            Ok(BalanceTableRow {
                account_name: row.get(0)?,
                date: row.get(1)?,
                balance: row.get(2)?,
            })
        })?
        .map(|row_result| row_result.map_err(Error::from))
        .collect()
}
