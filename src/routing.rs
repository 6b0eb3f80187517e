//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    account::{create_account_endpoint, delete_account_endpoint, get_accounts_page},
    balance::{get_balances_page, update_balance_endpoint},
    budget::{create_budget_endpoint, delete_budget_endpoint, get_budgets_page},
    dashboard::get_dashboard_page,
    endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    landing::get_index_page,
    net_worth::{create_net_worth_endpoint, get_net_worth_history_endpoint},
    transaction::{create_transaction_endpoint, get_transactions_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_REDIRECT, get(get_dashboard_redirect))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::ACCOUNTS_VIEW, get(get_accounts_page))
        .route(endpoints::BALANCES_VIEW, get(get_balances_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::BUDGETS_VIEW, get(get_budgets_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::POST_ACCOUNT, post(create_account_endpoint))
        .route(endpoints::DELETE_ACCOUNT, delete(delete_account_endpoint))
        .route(endpoints::POST_BALANCE, post(update_balance_endpoint))
        .route(endpoints::POST_TRANSACTION, post(create_transaction_endpoint))
        .route(endpoints::POST_BUDGET, post(create_budget_endpoint))
        .route(endpoints::DELETE_BUDGET, delete(delete_budget_endpoint))
        .route(
            endpoints::NET_WORTH_API,
            get(get_net_worth_history_endpoint).post(create_net_worth_endpoint),
        );

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The dashboard lives at '/dashboard/', so '/dashboard' redirects there.
async fn get_dashboard_redirect() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use time::macros::date;

    use crate::{
        AppState,
        account::AccountForm,
        balance::BalanceForm,
        budget::BudgetForm,
        db::Database,
        endpoints::{self, format_endpoint},
        net_worth::NetWorthForm,
        transaction::TransactionForm,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let database = Database::open_in_memory().expect("Could not open database");
        let app = build_router(AppState::new(database));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn pages_render() {
        let server = get_test_server();

        for page in [
            endpoints::ROOT,
            endpoints::DASHBOARD_VIEW,
            endpoints::ACCOUNTS_VIEW,
            endpoints::BALANCES_VIEW,
            endpoints::TRANSACTIONS_VIEW,
            endpoints::BUDGETS_VIEW,
        ] {
            let response = server.get(page).await;

            assert_eq!(
                response.status_code(),
                StatusCode::OK,
                "GET {page} responded with {}",
                response.status_code()
            );
        }
    }

    #[tokio::test]
    async fn dashboard_without_slash_redirects() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_REDIRECT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/definitely/not/a/page").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_transaction_filter_is_bad_request() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS_VIEW)
            .add_query_param("start_date", "not-a-date")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn record_balances_and_snapshot() {
        let server = get_test_server();

        server
            .post(endpoints::POST_ACCOUNT)
            .form(&AccountForm {
                name: "Checking".to_owned(),
                bank_name: "Bank X".to_owned(),
                account_type: "Checking".to_owned(),
            })
            .await
            .assert_status(StatusCode::SEE_OTHER);
        server
            .post(endpoints::POST_ACCOUNT)
            .form(&AccountForm {
                name: "Visa".to_owned(),
                bank_name: "Bank Y".to_owned(),
                account_type: "Credit Card".to_owned(),
            })
            .await
            .assert_status(StatusCode::SEE_OTHER);
        for (account_id, balance) in [(1, 1000.0), (2, -200.0)] {
            server
                .post(endpoints::POST_BALANCE)
                .form(&BalanceForm {
                    account_id,
                    date: date!(2024 - 01 - 01),
                    balance,
                })
                .await
                .assert_status(StatusCode::SEE_OTHER);
        }

        server
            .post(endpoints::NET_WORTH_API)
            .form(&NetWorthForm {
                date: date!(2024 - 01 - 01),
            })
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let snapshots: Value = server.get(endpoints::NET_WORTH_API).await.json();
        assert_eq!(
            snapshots,
            serde_json::json!([{
                "id": 1,
                "date": "2024-01-01",
                "total_assets": 1000.0,
                "total_liabilities": 200.0,
                "net_worth": 800.0,
            }])
        );

        server
            .post(endpoints::NET_WORTH_API)
            .form(&NetWorthForm {
                date: date!(2024 - 01 - 01),
            })
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn transaction_for_unknown_account_is_rejected() {
        let server = get_test_server();

        let response = server
            .post(endpoints::POST_TRANSACTION)
            .form(&TransactionForm {
                account_id: 5,
                date: date!(2024 - 01 - 01),
                amount: -10.0,
                category: "Coffee".to_owned(),
                description: String::new(),
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_finite_balance_is_rejected_with_alert() {
        let server = get_test_server();
        server
            .post(endpoints::POST_ACCOUNT)
            .form(&AccountForm {
                name: "Checking".to_owned(),
                bank_name: "Bank X".to_owned(),
                account_type: "Checking".to_owned(),
            })
            .await
            .assert_status(StatusCode::SEE_OTHER);

        for balance in ["inf", "-inf", "NaN"] {
            let response = server
                .post(endpoints::POST_BALANCE)
                .text(format!("account_id=1&date=2024-01-01&balance={balance}"))
                .content_type("application/x-www-form-urlencoded")
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            assert!(
                response.text().contains("Invalid Amount"),
                "got {} for {balance}",
                response.text()
            );
        }

        server
            .post(endpoints::NET_WORTH_API)
            .form(&NetWorthForm {
                date: date!(2024 - 01 - 01),
            })
            .await
            .assert_status(StatusCode::SEE_OTHER);
        let snapshots: Value = server.get(endpoints::NET_WORTH_API).await.json();
        assert_eq!(snapshots[0]["net_worth"], serde_json::json!(0.0));
    }

    #[tokio::test]
    async fn malformed_form_is_rejected_with_alert() {
        let server = get_test_server();

        let response = server
            .post(endpoints::POST_BALANCE)
            .text("account_id=1&date=2024-1-1&balance=10")
            .content_type("application/x-www-form-urlencoded")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.text();
        assert!(body.contains("role=\"alert\""), "got {body}");
        assert!(body.contains("Invalid Form Data"), "got {body}");
    }

    #[tokio::test]
    async fn create_and_delete_budget() {
        let server = get_test_server();

        server
            .post(endpoints::POST_BUDGET)
            .form(&BudgetForm {
                category: "Groceries".to_owned(),
                amount: 400.0,
            })
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let delete_url = format_endpoint(endpoints::DELETE_BUDGET, 1);
        server.delete(&delete_url).await.assert_status_ok();
        server
            .delete(&delete_url)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn deleting_missing_account_is_not_found() {
        let server = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_ACCOUNT, 99))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
