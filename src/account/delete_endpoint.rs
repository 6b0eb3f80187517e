//! Defines the endpoint for deleting an account.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, account::delete_account, alert::Alert, database_id::AccountId, db::Database};

/// A route handler for deleting an account, responds with an alert.
pub async fn delete_account_endpoint(
    State(database): State<Database>,
    Path(account_id): Path<AccountId>,
) -> Response {
    let session = match database.acquire_session() {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match delete_account(account_id, &session) {
        // The status code has to be 200 OK or htmx will not delete the table row.
        Ok(true) => Alert::Success {
            message: "Account deleted successfully".to_owned(),
            details: "Its balances and transactions were deleted too.".to_owned(),
        }
        .into_response(),
        Ok(false) => Error::DeleteMissingAccount.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not delete account {account_id}: {error}");
            error.into_alert_response()
        }
    }
}
