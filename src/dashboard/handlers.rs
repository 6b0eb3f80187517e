//! Dashboard HTTP handler and view rendering.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    account::{Account, get_accounts},
    budget::get_budgets,
    dashboard::{
        aggregation::{BudgetProgress, CashFlow, budget_progress, cash_flow, start_of_month},
        charts::{DashboardChart, ECHARTS_SCRIPT_URL, charts_script, net_worth_chart},
    },
    db::Database,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, base,
        currency_rounded_with_tooltip, format_currency, link,
    },
    navigation::nav_bar,
    net_worth::{NetWorth, get_latest_net_worth, get_net_worth_history},
    transaction::{TransactionFilter, get_transactions},
};

/// The sections listed in the dashboard sidebar as (anchor ID, title).
const SECTIONS: [(&str, &str); 4] = [
    ("net-worth", "Net Worth"),
    ("budget", "Budget"),
    ("investments", "Investments"),
    ("cash-flow", "Cash Flow"),
];

const NET_WORTH_CHART_ID: &str = "net-worth-chart";

/// Everything shown on the dashboard.
struct DashboardData {
    today: Date,
    latest_net_worth: Option<NetWorth>,
    history: Vec<NetWorth>,
    budgets: Vec<BudgetProgress>,
    investment_accounts: Vec<Account>,
    cash_flow: CashFlow,
}

/// Display a page with an overview of the user's finances.
pub async fn get_dashboard_page(State(database): State<Database>) -> Result<Response, Error> {
    let today = OffsetDateTime::now_utc().date();
    let data = {
        let session = database.acquire_session()?;
        build_dashboard_data(today, &session)
            .inspect_err(|error| tracing::error!("could not build dashboard data: {error}"))?
    };

    Ok(dashboard_view(&data).into_response())
}

fn build_dashboard_data(
    today: Date,
    connection: &rusqlite::Connection,
) -> Result<DashboardData, Error> {
    let month_to_date = TransactionFilter {
        account_id: None,
        start_date: Some(start_of_month(today)),
        end_date: Some(today),
    };
    let transactions = get_transactions(&month_to_date, connection)?;
    let budgets = get_budgets(connection)?;
    let investment_accounts = get_accounts(connection)?
        .into_iter()
        .filter(|account| account.account_type.eq_ignore_ascii_case("investment"))
        .collect();

    Ok(DashboardData {
        today,
        latest_net_worth: get_latest_net_worth(connection)?,
        history: get_net_worth_history(connection)?,
        budgets: budget_progress(&budgets, &transactions),
        investment_accounts,
        cash_flow: cash_flow(&transactions),
    })
}

fn dashboard_view(data: &DashboardData) -> Markup {
    let nav = nav_bar(endpoints::DASHBOARD_VIEW);

    let charts: Vec<DashboardChart> = if data.history.is_empty() {
        Vec::new()
    } else {
        vec![DashboardChart {
            id: NET_WORTH_CHART_ID,
            options: net_worth_chart(&data.history).to_string(),
        }]
    };

    let content = html!(
        (nav)

        div
            class="flex flex-col lg:flex-row gap-6 px-4 lg:px-6 py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (sidebar())

            main id="dashboard-content" class="flex-1 min-w-0 space-y-8"
            {
                h1 class="text-2xl font-bold" { "Budget Dashboard" }

                (net_worth_section(data.latest_net_worth.as_ref(), !charts.is_empty(), data.today))
                (budget_section(&data.budgets))
                (investments_section(&data.investment_accounts))
                (cash_flow_section(data.cash_flow))
            }
        }
    );

    let mut head_elements = Vec::new();
    if !charts.is_empty() {
        head_elements.push(HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()));
        head_elements.push(charts_script(&charts));
    }

    base("Dashboard", &head_elements, &content)
}

fn sidebar() -> Markup {
    html!(
        aside class="lg:w-56 shrink-0"
        {
            nav aria-label="Dashboard sections"
            {
                ul class="flex lg:flex-col gap-2 text-sm font-medium"
                {
                    @for (id, title) in SECTIONS {
                        li
                        {
                            a
                                href={ "#" (id) }
                                class="block rounded-lg px-3 py-2 text-gray-700
                                    hover:bg-blue-50 hover:text-blue-700
                                    dark:text-gray-200 dark:hover:bg-gray-800"
                            {
                                (title)
                            }
                        }
                    }
                }
            }
        }
    )
}

fn section_card(id: &str, title: &str, body: Markup) -> Markup {
    html!(
        section
            id=(id)
            class="rounded-lg bg-white dark:bg-gray-800 shadow-sm p-6 space-y-4"
        {
            h2 class="text-xl font-semibold" { (title) }
            (body)
        }
    )
}

fn stat(label: &str, amount: f64) -> Markup {
    html!(
        div
        {
            dt class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            dd class="text-2xl font-bold" { (currency_rounded_with_tooltip(amount)) }
        }
    )
}

fn net_worth_section(latest: Option<&NetWorth>, has_chart: bool, today: Date) -> Markup {
    let body = html!(
        @match latest {
            Some(snapshot) => {
                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "Latest snapshot: " time datetime=(snapshot.date) { (snapshot.date) }
                }

                dl class="grid grid-cols-1 sm:grid-cols-3 gap-4"
                {
                    (stat("Total Assets", snapshot.total_assets))
                    (stat("Total Liabilities", snapshot.total_liabilities))
                    (stat("Net Worth", snapshot.net_worth))
                }
            }
            None => {
                p
                {
                    "No snapshots yet. Record your "
                    (link(endpoints::BALANCES_VIEW, "account balances"))
                    " and then take a snapshot below."
                }
            }
        }

        @if has_chart {
            div id=(NET_WORTH_CHART_ID) class="min-h-[380px] rounded dark:bg-gray-100" {}
        }

        form
            hx-post=(endpoints::NET_WORTH_API)
            hx-target-error="#alert-container"
            class="flex flex-col sm:flex-row gap-4 sm:items-end"
        {
            div
            {
                label for="snapshot-date" class=(FORM_LABEL_STYLE) { "Snapshot date" }
                input
                    id="snapshot-date"
                    type="date"
                    name="date"
                    value=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="sm:w-48"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Record Snapshot" }
            }
        }
    );

    section_card("net-worth", "Net Worth", body)
}

fn budget_section(budgets: &[BudgetProgress]) -> Markup {
    let body = html!(
        @if budgets.is_empty() {
            p
            {
                "No budgets yet. Set some up on the "
                (link(endpoints::BUDGETS_VIEW, "budgets page"))
                "."
            }
        } @else {
            p class="text-sm text-gray-500 dark:text-gray-400" { "Spending this month" }

            ul class="space-y-3"
            {
                @for budget in budgets {
                    li
                    {
                        div class="flex justify-between text-sm"
                        {
                            span class="font-medium" { (budget.category) }
                            span
                            {
                                (format_currency(budget.spent)) " of " (format_currency(budget.budgeted))
                            }
                        }

                        div class="w-full h-2 bg-gray-200 rounded dark:bg-gray-700"
                        {
                            div
                                class=(if budget.remaining() < 0.0 {
                                    "h-2 rounded bg-red-500"
                                } else {
                                    "h-2 rounded bg-green-500"
                                })
                                style={ "width: " (format!("{:.0}", budget.percent_spent())) "%" }
                            {}
                        }
                    }
                }
            }
        }
    );

    section_card("budget", "Budget", body)
}

fn investments_section(accounts: &[Account]) -> Markup {
    let body = html!(
        @if accounts.is_empty() {
            p
            {
                "No investment accounts. Add an account with the type \"Investment\" on the "
                (link(endpoints::ACCOUNTS_VIEW, "accounts page"))
                "."
            }
        } @else {
            ul class="divide-y divide-gray-200 dark:divide-gray-700"
            {
                @for account in accounts {
                    li class="py-2 flex justify-between"
                    {
                        span class="font-medium" { (account.name) }
                        span class="text-gray-500 dark:text-gray-400" { (account.bank_name) }
                    }
                }
            }
        }
    );

    section_card("investments", "Investments", body)
}

fn cash_flow_section(cash_flow: CashFlow) -> Markup {
    let body = html!(
        p class="text-sm text-gray-500 dark:text-gray-400" { "This month" }

        dl class="grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            (stat("Income", cash_flow.income))
            (stat("Expenses", cash_flow.expenses))
            (stat("Net", cash_flow.net))
        }
    );

    section_card("cash-flow", "Cash Flow", body)
}
