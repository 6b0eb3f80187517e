//! Defines the route handler for the page that displays transactions as a table.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, OffsetDateTime, macros::format_description};

use crate::{
    Error,
    account::{Account, get_accounts},
    database_id::AccountId,
    db::Database,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, link,
    },
    navigation::nav_bar,
    transaction::{Transaction, TransactionFilter, get_transactions},
};

/// The raw query string for the transactions page.
///
/// HTML forms submit empty strings for blank inputs, so every field is taken
/// as text and parsed by [TransactionFilter::try_from].
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    /// Only show transactions for this account.
    pub account_id: Option<String>,
    /// Only show transactions on or after this date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Only show transactions on or before this date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

impl TryFrom<TransactionsQuery> for TransactionFilter {
    type Error = Error;

    fn try_from(query: TransactionsQuery) -> Result<Self, Self::Error> {
        let account_id = match non_empty(query.account_id) {
            Some(text) => Some(text.parse::<AccountId>().map_err(|_| {
                Error::InvalidFilter(format!("\"{text}\" is not a valid account ID"))
            })?),
            None => None,
        };

        let start_date = non_empty(query.start_date)
            .map(|text| parse_date(&text))
            .transpose()?;
        let end_date = non_empty(query.end_date)
            .map(|text| parse_date(&text))
            .transpose()?;

        Ok(TransactionFilter {
            account_id,
            start_date,
            end_date,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, format_description!("[year]-[month]-[day]")).map_err(|_| {
        Error::InvalidFilter(format!("\"{text}\" is not a date in the format YYYY-MM-DD"))
    })
}

/// Render the transactions page, applying any filters in the query string.
pub async fn get_transactions_page(
    State(database): State<Database>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Response, Error> {
    let filter = TransactionFilter::try_from(query)
        .inspect_err(|error| tracing::warn!("Rejected transactions filter: {error}"))?;

    let session = database.acquire_session()?;
    let accounts = get_accounts(&session)
        .inspect_err(|error| tracing::error!("could not get accounts: {error}"))?;
    let transactions = get_transactions(&filter, &session)
        .inspect_err(|error| tracing::error!("could not get transactions for {filter:?}: {error}"))?;

    let today = OffsetDateTime::now_utc().date();

    Ok(transactions_view(&accounts, &transactions, &filter, today).into_response())
}

fn transactions_view(
    accounts: &[Account],
    transactions: &[Transaction],
    filter: &TransactionFilter,
    today: Date,
) -> Markup {
    let nav = nav_bar(endpoints::TRANSACTIONS_VIEW);
    let account_names: HashMap<AccountId, &str> = accounts
        .iter()
        .map(|account| (account.id, account.name.as_str()))
        .collect();
    let total: f64 = transactions
        .iter()
        .map(|transaction| transaction.amount)
        .sum();

    let content = html!(
        (nav)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                h1 class="text-xl font-bold" { "Transactions" }

                @if accounts.is_empty() {
                    p
                    {
                        "Add an account on the "
                        (link(endpoints::ACCOUNTS_VIEW, "accounts page"))
                        " before recording transactions."
                    }
                } @else {
                    (new_transaction_form(accounts, today))
                }

                (filter_form(accounts, filter))

                section class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Account" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class="px-6 py-4 text-right" { "Amount" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td class=(TABLE_CELL_STYLE) { (transaction.date) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        (account_names
                                            .get(&transaction.account_id)
                                            .copied()
                                            .unwrap_or("Unknown"))
                                    }
                                    td class=(TABLE_CELL_STYLE) { (transaction.category) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        (transaction.description.as_deref().unwrap_or_default())
                                    }
                                    td class="px-6 py-4 text-right"
                                    {
                                        (format_currency(transaction.amount))
                                    }
                                }
                            }

                            @if transactions.is_empty() {
                                tr
                                {
                                    td
                                        colspan="5"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No transactions found."
                                    }
                                }
                            }
                        }

                        @if !transactions.is_empty() {
                            tfoot
                            {
                                tr class="font-semibold text-gray-900 dark:text-white"
                                {
                                    th scope="row" colspan="4" class=(TABLE_CELL_STYLE) { "Total" }
                                    td class="px-6 py-4 text-right" { (format_currency(total)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Transactions", &[], &content)
}

fn new_transaction_form(accounts: &[Account], today: Date) -> Markup {
    html!(
        form
            hx-post=(endpoints::POST_TRANSACTION)
            hx-target-error="#alert-container"
            class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end"
        {
            div
            {
                label for="account_id" class=(FORM_LABEL_STYLE) { "Account" }
                select id="account_id" name="account_id" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for account in accounts {
                        option value=(account.id) { (account.name) }
                    }
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    id="date"
                    type="date"
                    name="date"
                    value=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                div class="input-wrapper w-full"
                {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        placeholder="-0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Groceries"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description (optional)" }
                input
                    id="description"
                    type="text"
                    name="description"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    )
}

fn filter_form(accounts: &[Account], filter: &TransactionFilter) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            aria-label="Filter transactions"
            class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end"
        {
            div
            {
                label for="filter-account" class=(FORM_LABEL_STYLE) { "Account" }
                select id="filter-account" name="account_id" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "All accounts" }
                    @for account in accounts {
                        option
                            value=(account.id)
                            selected[filter.account_id == Some(account.id)]
                        {
                            (account.name)
                        }
                    }
                }
            }

            div
            {
                label for="filter-start" class=(FORM_LABEL_STYLE) { "From" }
                input
                    id="filter-start"
                    type="date"
                    name="start_date"
                    value=[filter.start_date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="filter-end" class=(FORM_LABEL_STYLE) { "To" }
                input
                    id="filter-end"
                    type="date"
                    name="end_date"
                    value=[filter.end_date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Filter" }
        }
    )
}
