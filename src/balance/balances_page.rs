//! Displays recorded account balances and a form for recording new ones.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    Error,
    account::{Account, get_accounts},
    balance::{BalanceTableRow, get_balances},
    db::Database,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, link,
    },
    navigation::nav_bar,
};

/// Renders the balances page.
pub async fn get_balances_page(State(database): State<Database>) -> Result<Response, Error> {
    let session = database.acquire_session()?;

    let accounts = get_accounts(&session)
        .inspect_err(|error| tracing::error!("could not get accounts: {error}"))?;
    let balances = get_balances(&session)
        .inspect_err(|error| tracing::error!("could not get balances: {error}"))?;

    let today = OffsetDateTime::now_utc().date();

    Ok(balances_view(&accounts, &balances, today).into_response())
}

fn balances_view(accounts: &[Account], balances: &[BalanceTableRow], today: time::Date) -> Markup {
    let nav = nav_bar(endpoints::BALANCES_VIEW);

    let content = html!(
        (nav)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                h1 class="text-xl font-bold" { "Balances" }

                @if accounts.is_empty() {
                    p
                    {
                        "Add an account on the "
                        (link(endpoints::ACCOUNTS_VIEW, "accounts page"))
                        " before recording balances."
                    }
                } @else {
                    (new_balance_form(accounts, today))
                }

                section class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Account" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class="px-6 py-4 text-right" { "Balance" }
                            }
                        }

                        tbody
                        {
                            @for row in balances {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    th
                                        scope="row"
                                        class="px-6 py-4 font-medium text-gray-900
                                            whitespace-nowrap dark:text-white"
                                    {
                                        (row.account_name)
                                    }
                                    td class=(TABLE_CELL_STYLE) { (row.date) }
                                    td class="px-6 py-4 text-right" { (format_currency(row.balance)) }
                                }
                            }

                            @if balances.is_empty() {
                                tr
                                {
                                    td
                                        colspan="3"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No balances recorded yet."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Balances", &[], &content)
}

fn new_balance_form(accounts: &[Account], today: time::Date) -> Markup {
    html!(
        form
            hx-post=(endpoints::POST_BALANCE)
            hx-target-error="#alert-container"
            class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end"
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
                    max=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="balance" class=(FORM_LABEL_STYLE) { "Balance" }
                div class="input-wrapper w-full"
                {
                    input
                        id="balance"
                        type="number"
                        name="balance"
                        step="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Record Balance" }
        }
    )
}

#[cfg(test)]
mod balances_view_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        account::Account,
        balance::BalanceTableRow,
        endpoints,
        test_utils::{
            assert_form_input, assert_form_select, assert_form_submit_button, assert_hx_endpoint,
            assert_valid_html, must_get_form,
        },
    };

    use super::balances_view;

    fn account() -> Account {
        Account {
            id: 1,
            name: "Everyday".to_owned(),
            bank_name: "Bank X".to_owned(),
            account_type: "Checking".to_owned(),
        }
    }

    #[test]
    fn renders_form() {
        let html = Html::parse_document(
            &balances_view(&[account()], &[], date!(2024 - 05 - 01)).into_string(),
        );

        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_BALANCE, "hx-post");
        assert_form_select(&form, "account_id");
        assert_form_input(&form, "date", "date");
        assert_form_input(&form, "balance", "number");
        assert_form_submit_button(&form);
    }

    #[test]
    fn hides_form_without_accounts() {
        let html =
            Html::parse_document(&balances_view(&[], &[], date!(2024 - 05 - 01)).into_string());

        assert_valid_html(&html);
        assert!(
            html.select(&Selector::parse("form").unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn renders_balance_rows() {
        let rows = vec![BalanceTableRow {
            account_name: "Everyday".to_owned(),
            date: date!(2024 - 04 - 30),
            balance: 0.0,
        }];

        let html = Html::parse_document(
            &balances_view(&[account()], &rows, date!(2024 - 05 - 01)).into_string(),
        );

        let cells: Vec<String> = html
            .select(&Selector::parse("tbody tr td").unwrap())
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect();
        assert_eq!(cells, vec!["2024-04-30".to_owned(), "$0.00".to_owned()]);
    }
}

#[cfg(test)]
mod get_balances_page_tests {
    use axum::extract::State;

    use crate::{
        balance::get_balances_page,
        db::Database,
        test_utils::{assert_html_ok, assert_valid_html, parse_html_document},
    };

    #[tokio::test]
    async fn renders_page() {
        let database = Database::open_in_memory().unwrap();

        let response = get_balances_page(State(database)).await.unwrap();

        assert_html_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
    }
}
