//! Defines the endpoint for deleting a budget.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, alert::Alert, budget::delete_budget, database_id::BudgetId, db::Database};

/// A route handler for deleting a budget, responds with an alert.
pub async fn delete_budget_endpoint(
    State(database): State<Database>,
    Path(budget_id): Path<BudgetId>,
) -> Response {
    let session = match database.acquire_session() {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match delete_budget(budget_id, &session) {
        Ok(true) => Alert::SuccessSimple {
            message: "Budget deleted successfully".to_owned(),
        }
        .into_response(),
        Ok(false) => Error::DeleteMissingBudget.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not delete budget {budget_id}: {error}");
            error.into_alert_response()
        }
    }
}
