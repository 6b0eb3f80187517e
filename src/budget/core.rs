//! The budget model and its database queries.

use rusqlite::{Connection, Row};
use serde::Serialize;

use crate::{Error, database_id::BudgetId, ensure_finite, is_unique_constraint_error};

/// A monthly spending limit for a transaction category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    /// The id for the budget.
    pub id: BudgetId,
    /// The transaction category the budget applies to. Unique.
    pub category: String,
    /// The amount budgeted for the category.
    pub amount: f64,
}

pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
            id INTEGER PRIMARY KEY,
            category TEXT NOT NULL UNIQUE,
            amount REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row_to_budget(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        amount: row.get(2)?,
    })
}

/// Add a budget for `category`.
///
/// # Errors
/// Returns [Error::NonFiniteAmount] if `amount` is infinite or NaN,
/// [Error::DuplicateBudgetCategory] if the category already has a
/// budget, or [Error::SqlError] if there is some other SQL error.
pub fn add_budget(category: &str, amount: f64, connection: &Connection) -> Result<Budget, Error> {
    let amount = ensure_finite(amount)?;
    let transaction = connection.unchecked_transaction()?;

    let budget = transaction
        .prepare(
            "INSERT INTO budget (category, amount) VALUES (?1, ?2)
             RETURNING id, category, amount",
        )?
        .query_row((category, amount), map_row_to_budget)
        .map_err(|error| {
            if is_unique_constraint_error(&error) {
                Error::DuplicateBudgetCategory(category.to_owned())
            } else {
                error.into()
            }
        })?;

    transaction.commit()?;

    tracing::debug!("Budget added for '{category}': {amount}");

    Ok(budget)
}

/// Get all budgets ordered by category.
pub fn get_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare("SELECT id, category, amount FROM budget ORDER BY category ASC")?
        .query_map([], map_row_to_budget)?
        .map(|budget_result| budget_result.map_err(Error::from))
        .collect()
}

/// Delete a budget by ID.
///
/// Returns `false` if there was no budget with `budget_id`.
pub fn delete_budget(budget_id: BudgetId, connection: &Connection) -> Result<bool, Error> {
    let rows_affected = connection
        .execute("DELETE FROM budget WHERE id = :id", &[(":id", &budget_id)])?;

    Ok(rows_affected > 0)
}

#[cfg(test)]
mod budget_query_tests {
    use rusqlite::Connection;

    use crate::{Error, db::initialize};

    use super::{Budget, add_budget, delete_budget, get_budgets};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    #[test]
    fn add_budget_returns_budget_with_id() {
        let connection = get_test_connection();

        let budget = add_budget("Groceries", 400.0, &connection);

        assert_eq!(
            budget,
            Ok(Budget {
                id: 1,
                category: "Groceries".to_owned(),
                amount: 400.0,
            })
        );
    }

    #[test]
    fn add_budget_fails_on_duplicate_category() {
        let connection = get_test_connection();
        let existing = add_budget("Groceries", 400.0, &connection).unwrap();

        let result = add_budget("Groceries", 250.0, &connection);

        assert_eq!(
            result,
            Err(Error::DuplicateBudgetCategory("Groceries".to_owned()))
        );
        assert_eq!(get_budgets(&connection), Ok(vec![existing]));
    }

    #[test]
    fn add_budget_rejects_non_finite_amount() {
        let connection = get_test_connection();

        for amount in [f64::NEG_INFINITY, f64::NAN] {
            let result = add_budget("Groceries", amount, &connection);

            assert!(
                matches!(result, Err(Error::NonFiniteAmount(_))),
                "got {result:?} for {amount}"
            );
        }
        assert_eq!(get_budgets(&connection), Ok(vec![]));
    }

    #[test]
    fn get_budgets_is_ordered_by_category() {
        let connection = get_test_connection();
        let rent = add_budget("Rent", 1500.0, &connection).unwrap();
        let dining = add_budget("Dining", 200.0, &connection).unwrap();

        assert_eq!(get_budgets(&connection), Ok(vec![dining, rent]));
    }

    #[test]
    fn delete_budget_reports_whether_a_row_was_removed() {
        let connection = get_test_connection();
        let budget = add_budget("Rent", 1500.0, &connection).unwrap();

        assert_eq!(delete_budget(budget.id, &connection), Ok(true));
        assert_eq!(delete_budget(budget.id, &connection), Ok(false));
        assert_eq!(get_budgets(&connection), Ok(vec![]));
    }
}
