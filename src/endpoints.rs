//! Paths for every page and API route.
//!
//! Routes with an ID parameter, such as [DELETE_ACCOUNT], need
//! [format_endpoint] before they are used in a link.

/// The landing page.
pub const ROOT: &str = "/";
/// The dashboard without a trailing slash, which redirects to [DASHBOARD_VIEW].
pub const DASHBOARD_REDIRECT: &str = "/dashboard";
/// The dashboard page with the net worth overview.
pub const DASHBOARD_VIEW: &str = "/dashboard/";
/// The page for listing and adding accounts.
pub const ACCOUNTS_VIEW: &str = "/accounts";
/// The page for listing and recording account balances.
pub const BALANCES_VIEW: &str = "/balances";
/// The page for listing and adding transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for listing and adding budgets.
pub const BUDGETS_VIEW: &str = "/budgets";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create an account.
pub const POST_ACCOUNT: &str = "/api/accounts";
/// The route to delete an account.
pub const DELETE_ACCOUNT: &str = "/api/accounts/{account_id}";
/// The route to record an account balance.
pub const POST_BALANCE: &str = "/api/balances";
/// The route to create a transaction.
pub const POST_TRANSACTION: &str = "/api/transactions";
/// The route to create a budget.
pub const POST_BUDGET: &str = "/api/budgets";
/// The route to delete a budget.
pub const DELETE_BUDGET: &str = "/api/budgets/{budget_id}";
/// The route to record a net worth snapshot (POST) or list all snapshots as JSON (GET).
pub const NET_WORTH_API: &str = "/api/net_worth";

/// Replace the first `{...}` parameter in `endpoint_path` with `id`.
///
/// For example, `format_endpoint("/api/accounts/{account_id}", 3)` gives
/// `"/api/accounts/3"`. Paths without a parameter are returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let end = endpoint_path[start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| start + offset + 1);

    format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end..])
}

#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    #[test]
    fn endpoints_are_valid_uris() {
        for endpoint in [
            endpoints::ROOT,
            endpoints::DASHBOARD_REDIRECT,
            endpoints::DASHBOARD_VIEW,
            endpoints::ACCOUNTS_VIEW,
            endpoints::BALANCES_VIEW,
            endpoints::TRANSACTIONS_VIEW,
            endpoints::BUDGETS_VIEW,
            endpoints::INTERNAL_ERROR_VIEW,
            endpoints::STATIC,
            endpoints::POST_ACCOUNT,
            endpoints::POST_BALANCE,
            endpoints::POST_TRANSACTION,
            endpoints::POST_BUDGET,
            endpoints::NET_WORTH_API,
        ] {
            assert!(endpoint.parse::<Uri>().is_ok(), "{endpoint} is not a valid URI");
        }
    }

    #[test]
    fn formats_delete_endpoints() {
        assert_eq!(
            format_endpoint(endpoints::DELETE_ACCOUNT, 7),
            "/api/accounts/7"
        );
        assert_eq!(format_endpoint(endpoints::DELETE_BUDGET, 12), "/api/budgets/12");
    }

    #[test]
    fn replaces_parameter_in_middle() {
        let formatted_path = format_endpoint("/accounts/{id}/balances", 1);

        assert_eq!(formatted_path, "/accounts/1/balances");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        assert_eq!(format_endpoint("/balances", 1), "/balances");
    }

    #[test]
    fn unclosed_parameter_runs_to_end() {
        assert_eq!(format_endpoint("/budgets/{budget_id", 5), "/budgets/5");
    }
}
