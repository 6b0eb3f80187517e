//! Defines the endpoint for creating a budget.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::{Deserialize, Serialize};

use crate::{budget::add_budget, db::Database, endpoints, form::AlertForm};

/// The form data for creating a budget.
#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetForm {
    /// The transaction category to budget for.
    pub category: String,
    /// The amount budgeted.
    pub amount: f64,
}

/// A route handler for creating a budget, redirects to the budgets view on success.
pub async fn create_budget_endpoint(
    State(database): State<Database>,
    AlertForm(form): AlertForm<BudgetForm>,
) -> Response {
    let session = match database.acquire_session() {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match add_budget(form.category.trim(), form.amount, &session) {
        Ok(_) => (
            HxRedirect(endpoints::BUDGETS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not create budget with {form:?}: {error}");
            error.into_alert_response()
        }
    }
}
