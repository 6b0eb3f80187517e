//! Calculates net worth from account balances and stores daily snapshots.

use rusqlite::{Connection, Row};
use serde::Serialize;
use time::Date;

use crate::{Error, database_id::DatabaseId, is_unique_constraint_error};

/// A snapshot of total assets, total liabilities and net worth on a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorth {
    /// The id for the snapshot.
    pub id: DatabaseId,
    /// The date the snapshot was taken for. At most one snapshot exists per date.
    pub date: Date,
    /// The sum of the positive balances on `date`.
    pub total_assets: f64,
    /// The sum of the magnitudes of the negative balances on `date`.
    pub total_liabilities: f64,
    /// `total_assets - total_liabilities`.
    pub net_worth: f64,
}

/// The aggregate of a set of balances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NetWorthTotals {
    /// The sum of the positive balances.
    pub total_assets: f64,
    /// The sum of the magnitudes of the negative balances.
    pub total_liabilities: f64,
    /// `total_assets - total_liabilities`.
    pub net_worth: f64,
}

impl NetWorthTotals {
    /// Aggregate `balances` into assets and liabilities.
    ///
    /// Zero balances count towards neither. The result does not depend on
    /// the order of `balances`.
    pub fn from_balances(balances: &[f64]) -> Self {
        let (total_assets, total_liabilities) = balances.iter().fold(
            (0.0, 0.0),
            |(assets, liabilities), &balance| {
                if balance > 0.0 {
                    (assets + balance, liabilities)
                } else if balance < 0.0 {
                    (assets, liabilities + balance.abs())
                } else {
                    (assets, liabilities)
                }
            },
        );

        Self {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
        }
    }
}

pub fn create_net_worth_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS net_worth (
            id INTEGER PRIMARY KEY,
            date TEXT NOT NULL UNIQUE,
            total_assets REAL NOT NULL,
            total_liabilities REAL NOT NULL,
            net_worth REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row_to_net_worth(row: &Row) -> Result<NetWorth, rusqlite::Error> {
    Ok(NetWorth {
        id: row.get(0)?,
        date: row.get(1)?,
        total_assets: row.get(2)?,
        total_liabilities: row.get(3)?,
        net_worth: row.get(4)?,
    })
}

/// Calculate the totals over every balance recorded for exactly `date`.
///
/// Returns all zeros when no balances were recorded on `date`.
pub fn calculate_net_worth(date: Date, connection: &Connection) -> Result<NetWorthTotals, Error> {
    let balances = connection
        .prepare("SELECT balance FROM account_balance WHERE date = ?1")?
        .query_map([date], |row| row.get::<_, f64>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    let totals = NetWorthTotals::from_balances(&balances);

    tracing::debug!(
        "Net worth calculated for {date}: Assets={}, Liabilities={}, Net Worth={}",
        totals.total_assets,
        totals.total_liabilities,
        totals.net_worth
    );

    Ok(totals)
}

/// Calculate the net worth for `date` and store it as a snapshot.
///
/// # Errors
/// Returns [Error::DuplicateNetWorthDate] if a snapshot for `date` already
/// exists, or [Error::SqlError] if there is some other SQL error. Nothing is
/// stored on error.
pub fn add_net_worth_entry(date: Date, connection: &Connection) -> Result<NetWorth, Error> {
    let transaction = connection.unchecked_transaction()?;

    let totals = calculate_net_worth(date, &transaction)?;

    let net_worth = transaction
        .prepare(
            "INSERT INTO net_worth (date, total_assets, total_liabilities, net_worth)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, date, total_assets, total_liabilities, net_worth",
        )?
        .query_row(
            (
                date,
                totals.total_assets,
                totals.total_liabilities,
                totals.net_worth,
            ),
            map_row_to_net_worth,
        )
        .map_err(|error| {
            if is_unique_constraint_error(&error) {
                Error::DuplicateNetWorthDate(date)
            } else {
                error.into()
            }
        })?;

    transaction.commit()?;

    tracing::info!("Net worth entry added for {date}: {}", net_worth.net_worth);

    Ok(net_worth)
}

/// Get every snapshot, oldest first.
pub fn get_net_worth_history(connection: &Connection) -> Result<Vec<NetWorth>, Error> {
    connection
        .prepare(
            "SELECT id, date, total_assets, total_liabilities, net_worth FROM net_worth
             ORDER BY date ASC",
        )?
        .query_map([], map_row_to_net_worth)?
        .map(|row_result| row_result.map_err(Error::from))
        .collect()
}

/// Get the snapshot with the latest date, or `None` if none have been recorded.
pub fn get_latest_net_worth(connection: &Connection) -> Result<Option<NetWorth>, Error> {
    let result = connection
        .prepare(
            "SELECT id, date, total_assets, total_liabilities, net_worth FROM net_worth
             ORDER BY date DESC
             LIMIT 1",
        )?
        .query_row([], map_row_to_net_worth);

    match result {
        Ok(net_worth) => Ok(Some(net_worth)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}
