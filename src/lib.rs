//! Budget Dashboard is a small web app for tracking your personal finances.
//!
//! It records accounts, account balances, transactions, budgets and daily
//! net worth snapshots in a local SQLite database, and serves HTML pages for
//! viewing and editing that data.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use time::Date;
use tokio::signal;

mod account;
mod alert;
mod app_state;
mod balance;
mod budget;
mod config;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod error_page;
mod form;
mod html;
mod landing;
mod logging;
mod navigation;
mod net_worth;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use account::{Account, add_account, delete_account, get_accounts};
pub use app_state::AppState;
pub use balance::{AccountBalance, get_balance, update_balance};
pub use budget::{Budget, add_budget, get_budgets};
pub use config::expand_home_dir;
pub use database_id::{AccountId, BudgetId, DatabaseId};
pub use db::{Database, Session, initialize as initialize_db};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use net_worth::{NetWorth, NetWorthTotals, add_net_worth_entry, calculate_net_worth};
pub use routing::build_router;
pub use transaction::{
    NewTransaction, Transaction, TransactionFilter, add_transaction, get_transactions,
};

use crate::{alert::Alert, error_page::ErrorPage};

/// How long in-flight requests get to finish once shutdown starts.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Wait for ctrl+c (or SIGTERM on Unix) and then tell the server behind
/// `handle` to shut down gracefully.
///
/// If a signal handler cannot be installed, that signal is ignored and the
/// other one is still listened for.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        _ = ctrl_c => "ctrl+c",
        _ = terminate => "terminate",
    };

    tracing::info!("Received {signal_name} signal, shutting down.");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The database file or its directory could not be created or opened.
    ///
    /// This is unrecoverable and should abort startup.
    #[error("could not initialize storage: {0}")]
    StorageInit(String),

    /// The specified account name already exists in the database.
    #[error("the account \"{0}\" already exists in the database")]
    DuplicateAccountName(String),

    /// A budget for the specified category already exists in the database.
    #[error("a budget for the category \"{0}\" already exists in the database")]
    DuplicateBudgetCategory(String),

    /// A net worth snapshot for the specified date already exists in the database.
    #[error("a net worth snapshot for {0} already exists in the database")]
    DuplicateNetWorthDate(Date),

    /// The account ID used to create a balance or transaction did not match a valid account.
    #[error("the account ID {0} does not refer to a valid account")]
    InvalidAccount(AccountId),

    /// An amount of money was infinite or NaN.
    #[error("amounts must be finite numbers, got {0}")]
    NonFiniteAmount(f64),

    /// Submitted form data was missing a field or could not be parsed.
    #[error("invalid form data: {0}")]
    InvalidForm(String),

    /// A query string filter could not be parsed.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete an account that does not exist
    #[error("tried to delete an account that is not in the database")]
    DeleteMissingAccount,

    /// Tried to delete a budget that does not exist
    #[error("tried to delete a budget that is not in the database")]
    DeleteMissingBudget,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl Error {
    /// Whether the error was caused by a duplicate value in a unique column.
    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(
            self,
            Error::DuplicateAccountName(_)
                | Error::DuplicateBudgetCategory(_)
                | Error::DuplicateNetWorthDate(_)
        )
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

/// Reject infinite and NaN amounts before they are written to the database.
pub(crate) fn ensure_finite(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        tracing::warn!("Rejected non-finite amount {amount}");
        Err(Error::NonFiniteAmount(amount))
    }
}

/// Whether `error` was raised by a UNIQUE constraint.
pub(crate) fn is_unique_constraint_error(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: _,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
            },
            _,
        )
    )
}

/// Whether `error` was raised by a FOREIGN KEY constraint.
pub(crate) fn is_foreign_key_error(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: _,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            },
            _,
        )
    )
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::InvalidFilter(reason) => ErrorPage {
                status: StatusCode::BAD_REQUEST,
                description: "Invalid filter",
                fix: &reason,
            }
            .into_response(),
            Error::DatabaseLockError => ErrorPage::internal_server_error().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            _ => ErrorPage::internal_server_error().into_response(),
        }
    }
}

impl Error {
    /// Render the error as an alert for htmx to swap into `#alert-container`.
    fn into_alert_response(self) -> Response {
        let (status, message, details) = match self {
            Error::DuplicateAccountName(name) => (
                StatusCode::BAD_REQUEST,
                "Duplicate Account Name",
                format!(
                    "There is already an account called {name}. \
                    Choose a different name, or delete the existing account."
                ),
            ),
            Error::DuplicateBudgetCategory(category) => (
                StatusCode::BAD_REQUEST,
                "Duplicate Budget Category",
                format!(
                    "There is already a budget for {category}. \
                    Choose a different category, or delete the existing budget."
                ),
            ),
            Error::DuplicateNetWorthDate(date) => (
                StatusCode::BAD_REQUEST,
                "Snapshot Already Recorded",
                format!(
                    "A net worth snapshot for {date} has already been recorded. \
                    Choose a different date."
                ),
            ),
            Error::NonFiniteAmount(amount) => (
                StatusCode::BAD_REQUEST,
                "Invalid Amount",
                format!("{amount} is not a valid amount of money. Enter a number like 12.50."),
            ),
            Error::InvalidForm(reason) => (
                StatusCode::BAD_REQUEST,
                "Invalid Form Data",
                format!("The form could not be read: {reason}"),
            ),
            Error::InvalidAccount(account_id) => (
                StatusCode::BAD_REQUEST,
                "Invalid Account",
                format!("Could not find an account with the ID {account_id}."),
            ),
            Error::DeleteMissingAccount => (
                StatusCode::NOT_FOUND,
                "Could Not Delete Account",
                "The account could not be found. \
                It may have been deleted already, try refreshing the page."
                    .to_owned(),
            ),
            Error::DeleteMissingBudget => (
                StatusCode::NOT_FOUND,
                "Could Not Delete Budget",
                "The budget could not be found. \
                It may have been deleted already, try refreshing the page."
                    .to_owned(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something Went Wrong",
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            ),
        };

        (
            status,
            Alert::Error {
                message: message.to_owned(),
                details,
            },
        )
            .into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use time::macros::date;

    use crate::{Error, ensure_finite};

    #[test]
    fn groups_uniqueness_violations() {
        assert!(Error::DuplicateAccountName("foo".to_owned()).is_uniqueness_violation());
        assert!(Error::DuplicateBudgetCategory("foo".to_owned()).is_uniqueness_violation());
        assert!(Error::DuplicateNetWorthDate(date!(2024 - 01 - 01)).is_uniqueness_violation());

        assert!(!Error::NotFound.is_uniqueness_violation());
        assert!(!Error::InvalidAccount(1).is_uniqueness_violation());
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn duplicate_errors_are_bad_requests() {
        let response = Error::DuplicateAccountName("foo".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_input_errors_are_bad_requests() {
        for error in [
            Error::NonFiniteAmount(f64::NAN),
            Error::InvalidForm("missing field `date`".to_owned()),
        ] {
            let response = error.into_alert_response();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn ensure_finite_passes_through_finite_amounts() {
        assert_eq!(ensure_finite(-12.5), Ok(-12.5));
        assert_eq!(ensure_finite(f64::INFINITY), Err(Error::NonFiniteAmount(f64::INFINITY)));
    }

    #[test]
    fn missing_account_is_not_found() {
        let response = Error::DeleteMissingAccount.into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
