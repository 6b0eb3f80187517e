//! Defines the endpoint for recording a transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    database_id::AccountId,
    db::Database,
    endpoints,
    form::AlertForm,
    transaction::{NewTransaction, add_transaction},
};

/// The form data for recording a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The account the money moved in or out of.
    pub account_id: AccountId,
    /// When the transaction happened.
    pub date: Date,
    /// The amount, negative for expenses.
    pub amount: f64,
    /// The category of the transaction.
    pub category: String,
    /// An optional description, an empty string means no description.
    #[serde(default)]
    pub description: String,
}

impl From<TransactionForm> for NewTransaction {
    fn from(form: TransactionForm) -> Self {
        let description = form.description.trim();

        NewTransaction {
            account_id: form.account_id,
            date: form.date,
            amount: form.amount,
            category: form.category.trim().to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
        }
    }
}

/// A route handler for recording a transaction, redirects to the transactions view on success.
pub async fn create_transaction_endpoint(
    State(database): State<Database>,
    AlertForm(form): AlertForm<TransactionForm>,
) -> Response {
    let session = match database.acquire_session() {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match add_transaction(form.into(), &session) {
        Ok(_) => (
            HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            error.into_alert_response()
        }
    }
}
