//! Defines the endpoint for recording a net worth snapshot.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{db::Database, endpoints, form::AlertForm, net_worth::add_net_worth_entry};

/// The form data for recording a snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetWorthForm {
    /// The date to calculate the snapshot for.
    pub date: Date,
}

/// A route handler for recording a snapshot, redirects to the dashboard on success.
pub async fn create_net_worth_endpoint(
    State(database): State<Database>,
    AlertForm(form): AlertForm<NetWorthForm>,
) -> Response {
    let session = match database.acquire_session() {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match add_net_worth_entry(form.date, &session) {
        Ok(_) => (
            HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not record net worth for {}: {error}", form.date);
            error.into_alert_response()
        }
    }
}
