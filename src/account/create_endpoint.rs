//! Defines the endpoint for creating a new account.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::{Deserialize, Serialize};

use crate::{account::add_account, db::Database, endpoints, form::AlertForm};

/// The form data for creating an account.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountForm {
    /// The account name.
    pub name: String,
    /// The bank or institution that holds the account.
    pub bank_name: String,
    /// The kind of account, e.g. "Checking".
    pub account_type: String,
}

/// A route handler for creating a new account, redirects to accounts view on success.
pub async fn create_account_endpoint(
    State(database): State<Database>,
    AlertForm(form): AlertForm<AccountForm>,
) -> Response {
    let session = match database.acquire_session() {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match add_account(
        form.name.trim(),
        form.bank_name.trim(),
        form.account_type.trim(),
        &session,
    ) {
        Ok(_) => (
            HxRedirect(endpoints::ACCOUNTS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not create account with {form:?}: {error}");
            error.into_alert_response()
        }
    }
}
