//! The landing page at the site root.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
};

/// The pages linked from the landing page as (URL, title, description).
const FEATURES: [(&str, &str, &str); 4] = [
    (
        endpoints::ACCOUNTS_VIEW,
        "Accounts",
        "Keep track of your bank accounts, credit cards, loans and investments.",
    ),
    (
        endpoints::BALANCES_VIEW,
        "Balances",
        "Record what each account held on a given day.",
    ),
    (
        endpoints::TRANSACTIONS_VIEW,
        "Transactions",
        "Log income and expenses by category.",
    ),
    (
        endpoints::BUDGETS_VIEW,
        "Budgets",
        "Set monthly spending limits for each category.",
    ),
];

/// Display the landing page.
pub async fn get_index_page() -> Markup {
    index_view()
}

fn index_view() -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="max-w-3xl text-center space-y-6 py-12"
            {
                h1 class="text-4xl font-extrabold tracking-tight" { "Budget Dashboard" }

                p class="text-lg text-gray-600 dark:text-gray-300"
                {
                    "Track your accounts, transactions and budgets, and watch your net worth grow."
                }

                a
                    href=(endpoints::DASHBOARD_VIEW)
                    class="inline-flex text-white bg-blue-600 hover:bg-blue-800
                        font-medium rounded text-lg px-6 py-3 dark:bg-blue-600
                        dark:hover:bg-blue-700"
                {
                    "Open the dashboard"
                }
            }

            section class="grid grid-cols-1 sm:grid-cols-2 gap-4 w-full max-w-3xl"
            {
                @for (url, title, description) in FEATURES {
                    a
                        href=(url)
                        class="block p-6 rounded-lg bg-white dark:bg-gray-800 shadow-sm
                            hover:bg-gray-100 dark:hover:bg-gray-700"
                    {
                        h2 class="text-xl font-semibold mb-2" { (title) }
                        p class="text-gray-600 dark:text-gray-400" { (description) }
                    }
                }
            }
        }
    );

    base("Home", &[], &content)
}
