//! Defines the endpoint for recording an account balance.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    balance::update_balance, database_id::AccountId, db::Database, endpoints, form::AlertForm,
};

/// The form data for recording an account balance.
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceForm {
    /// The account the balance belongs to.
    pub account_id: AccountId,
    /// The date the balance was observed.
    pub date: Date,
    /// The balance, negative for money owed.
    pub balance: f64,
}

/// A route handler for recording a balance, redirects to the balances view on success.
pub async fn update_balance_endpoint(
    State(database): State<Database>,
    AlertForm(form): AlertForm<BalanceForm>,
) -> Response {
    let session = match database.acquire_session() {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match update_balance(form.account_id, form.date, form.balance, &session) {
        Ok(_) => (
            HxRedirect(endpoints::BALANCES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not record balance with {form:?}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use time::macros::date;

    use crate::{
        account::add_account,
        balance::{get_balance, update_balance_endpoint},
        db::Database,
        endpoints,
        form::AlertForm,
        test_utils::{assert_hx_redirect, count_errors},
    };

    use super::BalanceForm;

    #[tokio::test]
    async fn can_record_balance() {
        let database = Database::open_in_memory().unwrap();
        let account = {
            let session = database.acquire_session().unwrap();
            add_account("Checking", "Bank X", "Checking", &session).unwrap()
        };
        let form = BalanceForm {
            account_id: account.id,
            date: date!(2024 - 03 - 01),
            balance: 1234.5,
        };

        let response = update_balance_endpoint(State(database.clone()), AlertForm(form)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::BALANCES_VIEW);
        let session = database.acquire_session().unwrap();
        let balance = get_balance(account.id, date!(2024 - 03 - 01), &session)
            .unwrap()
            .expect("Balance was not recorded");
        assert_eq!(balance.balance, 1234.5);
    }

    #[tokio::test]
    async fn unknown_account_responds_with_bad_request() {
        let database = Database::open_in_memory().unwrap();
        let form = BalanceForm {
            account_id: 99,
            date: date!(2024 - 03 - 01),
            balance: 10.0,
        };
        let (errors, _guard) = count_errors();

        let response = update_balance_endpoint(State(database), AlertForm(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(errors.count(), 1, "failure should be logged exactly once");
    }

    #[tokio::test]
    async fn infinite_balance_responds_with_bad_request() {
        let database = Database::open_in_memory().unwrap();
        let account = {
            let session = database.acquire_session().unwrap();
            add_account("Checking", "Bank X", "Checking", &session).unwrap()
        };
        let form = BalanceForm {
            account_id: account.id,
            date: date!(2024 - 03 - 01),
            balance: f64::INFINITY,
        };

        let response = update_balance_endpoint(State(database.clone()), AlertForm(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let session = database.acquire_session().unwrap();
        assert_eq!(
            get_balance(account.id, date!(2024 - 03 - 01), &session),
            Ok(None)
        );
    }
}
