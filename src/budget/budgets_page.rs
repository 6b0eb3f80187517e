//! Displays the budgets and a form for adding new ones.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    budget::{Budget, get_budgets},
    db::Database,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, delete_button,
        format_currency,
    },
    navigation::nav_bar,
};

/// Renders the budgets page.
pub async fn get_budgets_page(State(database): State<Database>) -> Result<Response, Error> {
    let session = database.acquire_session()?;

    let budgets = get_budgets(&session)
        .inspect_err(|error| tracing::error!("could not get budgets: {error}"))?;

    Ok(budgets_view(&budgets).into_response())
}

fn budgets_view(budgets: &[Budget]) -> Markup {
    let nav = nav_bar(endpoints::BUDGETS_VIEW);
    let total: f64 = budgets.iter().map(|budget| budget.amount).sum();

    let content = html!(
        (nav)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-3xl"
            {
                h1 class="text-xl font-bold" { "Budgets" }

                (new_budget_form())

                section class="w-full overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class="px-6 py-4 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for budget in budgets {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    th
                                        scope="row"
                                        class="px-6 py-4 font-medium text-gray-900
                                            whitespace-nowrap dark:text-white"
                                    {
                                        (budget.category)
                                    }
                                    td class="px-6 py-4 text-right" { (format_currency(budget.amount)) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        (delete_button(
                                            &format_endpoint(endpoints::DELETE_BUDGET, budget.id),
                                            &format!("Are you sure you want to delete the budget for '{}'?", budget.category),
                                            "closest tr",
                                            "delete",
                                        ))
                                    }
                                }
                            }

                            @if budgets.is_empty() {
                                tr
                                {
                                    td
                                        colspan="3"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No budgets yet. Add one with the form above."
                                    }
                                }
                            }
                        }

                        @if !budgets.is_empty() {
                            tfoot
                            {
                                tr class="font-semibold text-gray-900 dark:text-white"
                                {
                                    th scope="row" class=(TABLE_CELL_STYLE) { "Total" }
                                    td class="px-6 py-4 text-right" { (format_currency(total)) }
                                    td {}
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Budgets", &[], &content)
}

fn new_budget_form() -> Markup {
    html!(
        form
            hx-post=(endpoints::POST_BUDGET)
            hx-target-error="#alert-container"
            class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end"
        {
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
                label for="amount" class=(FORM_LABEL_STYLE) { "Monthly Amount" }
                div class="input-wrapper w-full"
                {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Budget" }
        }
    )
}
