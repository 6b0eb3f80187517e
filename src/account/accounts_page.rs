//! Displays the accounts and a form for adding new ones.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    account::{Account, get_accounts},
    db::Database,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, delete_button,
    },
    navigation::nav_bar,
};

/// Suggestions for the account type input.
const ACCOUNT_TYPES: [&str; 5] = ["Checking", "Savings", "Credit Card", "Investment", "Loan"];

/// Renders the accounts page showing all accounts.
pub async fn get_accounts_page(State(database): State<Database>) -> Result<Response, Error> {
    let session = database.acquire_session()?;

    let accounts = get_accounts(&session)
        .inspect_err(|error| tracing::error!("could not get all accounts: {error}"))?;

    Ok(accounts_view(&accounts).into_response())
}

fn accounts_view(accounts: &[Account]) -> Markup {
    let nav = nav_bar(endpoints::ACCOUNTS_VIEW);

    let table_row = |account: &Account| {
        let delete_url = format_endpoint(endpoints::DELETE_ACCOUNT, account.id);
        let confirm_message = format!(
            "Are you sure you want to delete the account '{}'? \
            Its balances and transactions will also be deleted. This cannot be undone.",
            account.name
        );

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                th
                    scope="row"
                    class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
                {
                    (account.name)
                }

                td class=(TABLE_CELL_STYLE) { (account.bank_name) }

                td class=(TABLE_CELL_STYLE) { (account.account_type) }

                td class=(TABLE_CELL_STYLE)
                {
                    (delete_button(&delete_url, &confirm_message, "closest tr", "delete"))
                }
            }
        )
    };

    let content = html!(
        (nav)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                h1 class="text-xl font-bold" { "Accounts" }

                (new_account_form())

                section class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Bank" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for account in accounts {
                                (table_row(account))
                            }

                            @if accounts.is_empty() {
                                tr
                                {
                                    td
                                        colspan="4"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No accounts found. Add one with the form above."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Accounts", &[], &content)
}

fn new_account_form() -> Markup {
    html!(
        form
            hx-post=(endpoints::POST_ACCOUNT)
            hx-target-error="#alert-container"
            class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Account Name" }
                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Everyday"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="bank_name" class=(FORM_LABEL_STYLE) { "Bank" }
                input
                    id="bank_name"
                    type="text"
                    name="bank_name"
                    placeholder="Bank X"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="account_type" class=(FORM_LABEL_STYLE) { "Type" }
                input
                    id="account_type"
                    type="text"
                    name="account_type"
                    list="account-types"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                datalist id="account-types"
                {
                    @for account_type in ACCOUNT_TYPES {
                        option value=(account_type) {}
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Account" }
        }
    )
}
