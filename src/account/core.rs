//! The account model and its database queries.

use rusqlite::{Connection, Row};
use serde::Serialize;

use crate::{Error, database_id::AccountId, is_unique_constraint_error};

/// A bank account, credit card, loan or investment account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The unique, user-facing name of the account.
    pub name: String,
    /// The bank or institution that holds the account.
    pub bank_name: String,
    /// The kind of account, e.g. "Checking", "Credit Card", "Investment".
    pub account_type: String,
}

pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS account (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            bank_name TEXT NOT NULL,
            account_type TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row_to_account(row: &Row) -> Result<Account, rusqlite::Error> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        bank_name: row.get(2)?,
        account_type: row.get(3)?,
    })
}

/// Add a new account and return it with its generated ID.
///
/// # Errors
/// Returns [Error::DuplicateAccountName] if an account called `name` already
/// exists, in which case the existing account is left unchanged, or
/// [Error::SqlError] if there is some other SQL error.
pub fn add_account(
    name: &str,
    bank_name: &str,
    account_type: &str,
    connection: &Connection,
) -> Result<Account, Error> {
    let transaction = connection.unchecked_transaction()?;

    let account = transaction
        .prepare(
            "INSERT INTO account (name, bank_name, account_type) VALUES (?1, ?2, ?3)
             RETURNING id, name, bank_name, account_type",
        )?
        .query_row((name, bank_name, account_type), map_row_to_account)
        .map_err(|error| {
            if is_unique_constraint_error(&error) {
                Error::DuplicateAccountName(name.to_owned())
            } else {
                error.into()
            }
        })?;

    transaction.commit()?;

    tracing::debug!("Account '{name}' added (Bank: {bank_name}, Type: {account_type})");

    Ok(account)
}

/// Get all accounts in the order they were added.
pub fn get_accounts(connection: &Connection) -> Result<Vec<Account>, Error> {
    connection
        .prepare("SELECT id, name, bank_name, account_type FROM account ORDER BY id ASC")?
        .query_map([], map_row_to_account)?
        .map(|account_result| account_result.map_err(Error::from))
        .collect()
}

#[cfg(test)]
/// Get a single account by ID.
///
/// # Errors
/// Returns [Error::NotFound] if there is no account with `account_id`.
pub fn get_account(account_id: AccountId, connection: &Connection) -> Result<Account, Error> {
    connection
        .prepare("SELECT id, name, bank_name, account_type FROM account WHERE id = :id")?
        .query_row(&[(":id", &account_id)], map_row_to_account)
        .map_err(Error::from)
}

/// Delete an account by ID.
///
/// The account's balances and transactions are deleted along with it.
///
/// Returns `true` if the account was deleted, `false` if there was no
/// account with `account_id`.
pub fn delete_account(account_id: AccountId, connection: &Connection) -> Result<bool, Error> {
    let transaction = connection.unchecked_transaction()?;

    let rows_affected = transaction
        .execute("DELETE FROM account WHERE id = :id", &[(":id", &account_id)])?;

    transaction.commit()?;

    if rows_affected == 0 {
        tracing::debug!("Attempted to delete non-existent account (ID: {account_id})");
        return Ok(false);
    }

    tracing::debug!("Account deleted (ID: {account_id})");

    Ok(true)
}

#[cfg(test)]
mod create_table_tests {
    use rusqlite::Connection;

    use super::create_account_table;

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_account_table(&connection));
    }
}

#[cfg(test)]
mod account_query_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        account::{Account, add_account, delete_account, get_account, get_accounts},
        balance::{get_balance, update_balance},
        db::initialize,
        transaction::{NewTransaction, TransactionFilter, add_transaction, get_transactions},
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    #[test]
    fn add_account_returns_account_with_id() {
        let connection = get_test_connection();

        let account = add_account("Checking", "Bank X", "Checking", &connection).unwrap();

        assert_eq!(
            account,
            Account {
                id: 1,
                name: "Checking".to_owned(),
                bank_name: "Bank X".to_owned(),
                account_type: "Checking".to_owned(),
            }
        );
    }

    #[test]
    fn get_accounts_contains_added_account_once() {
        let connection = get_test_connection();
        let account = add_account("Savings", "Bank Y", "Savings", &connection).unwrap();

        let accounts = get_accounts(&connection).unwrap();

        assert_eq!(accounts, vec![account]);
    }

    #[test]
    fn get_accounts_returns_empty_vec_when_no_accounts() {
        let connection = get_test_connection();

        assert_eq!(Ok(vec![]), get_accounts(&connection));
    }

    #[test]
    fn get_accounts_is_in_insertion_order() {
        let connection = get_test_connection();
        let want = vec![
            add_account("Zebra", "Bank", "Checking", &connection).unwrap(),
            add_account("Aardvark", "Bank", "Savings", &connection).unwrap(),
        ];

        assert_eq!(Ok(want), get_accounts(&connection));
    }

    #[test]
    fn add_account_fails_on_duplicate_name() {
        let connection = get_test_connection();
        let existing = add_account("Checking", "Bank X", "Checking", &connection).unwrap();

        let result = add_account("Checking", "Bank Z", "Credit Card", &connection);

        assert_eq!(
            result,
            Err(Error::DuplicateAccountName("Checking".to_owned()))
        );
        assert_eq!(Ok(vec![existing]), get_accounts(&connection));
    }

    #[test]
    fn delete_account_removes_existing_account() {
        let connection = get_test_connection();
        let account = add_account("foo", "Bank", "Checking", &connection).unwrap();
        let other = add_account("bar", "Bank", "Checking", &connection).unwrap();

        let deleted = delete_account(account.id, &connection).unwrap();

        assert!(deleted);
        assert_eq!(get_account(account.id, &connection), Err(Error::NotFound));
        assert_eq!(Ok(vec![other]), get_accounts(&connection));
    }

    #[test]
    fn delete_account_twice_returns_false_second_time() {
        let connection = get_test_connection();
        let account = add_account("foo", "Bank", "Checking", &connection).unwrap();

        assert_eq!(Ok(true), delete_account(account.id, &connection));
        assert_eq!(Ok(false), delete_account(account.id, &connection));
    }

    #[test]
    fn delete_account_with_unknown_id_changes_nothing() {
        let connection = get_test_connection();
        let account = add_account("foo", "Bank", "Checking", &connection).unwrap();

        let deleted = delete_account(account.id + 42, &connection).unwrap();

        assert!(!deleted);
        assert_eq!(Ok(vec![account]), get_accounts(&connection));
    }

    #[test]
    fn delete_account_cascades_to_balances_and_transactions() {
        let connection = get_test_connection();
        let account = add_account("foo", "Bank", "Checking", &connection).unwrap();
        update_balance(account.id, date!(2024 - 01 - 01), 500.0, &connection).unwrap();
        add_transaction(
            NewTransaction {
                account_id: account.id,
                date: date!(2024 - 01 - 02),
                amount: -50.0,
                category: "Groceries".to_owned(),
                description: None,
            },
            &connection,
        )
        .unwrap();

        delete_account(account.id, &connection).unwrap();

        assert_eq!(
            Ok(None),
            get_balance(account.id, date!(2024 - 01 - 01), &connection)
        );
        assert_eq!(
            Ok(vec![]),
            get_transactions(&TransactionFilter::default(), &connection)
        );
    }
}
