//! The navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// The pages listed in the navigation bar, in display order.
const NAV_LINKS: [(&str, &str); 5] = [
    (endpoints::DASHBOARD_VIEW, "Dashboard"),
    (endpoints::ACCOUNTS_VIEW, "Accounts"),
    (endpoints::BALANCES_VIEW, "Balances"),
    (endpoints::TRANSACTIONS_VIEW, "Transactions"),
    (endpoints::BUDGETS_VIEW, "Budgets"),
];

const LINK_STYLE: &str = "rounded-md px-3 py-2 text-sm font-medium text-gray-700 \
    hover:bg-gray-100 hover:text-blue-700 dark:text-gray-300 \
    dark:hover:bg-gray-800 dark:hover:text-blue-400";

const CURRENT_LINK_STYLE: &str = "rounded-md px-3 py-2 text-sm font-semibold \
    bg-blue-50 text-blue-700 dark:bg-blue-900/40 dark:text-blue-300";

/// Render the navigation bar with the link for `current_page` highlighted.
///
/// Pages that are not in the navigation bar, such as API endpoints, highlight nothing.
pub fn nav_bar(current_page: &str) -> Markup {
    html!(
        nav class="sticky top-0 z-40 w-full border-b border-gray-200 bg-white/95 \
            backdrop-blur dark:border-gray-700 dark:bg-gray-900/95"
        {
            div
                class="mx-auto flex max-w-screen-xl flex-col gap-2 px-4 py-3 \
                sm:flex-row sm:items-center sm:justify-between"
            {
                a
                    href=(endpoints::ROOT)
                    class="text-xl font-semibold whitespace-nowrap dark:text-white"
                {
                    "Budget Dashboard"
                }

                ul class="flex gap-1 overflow-x-auto" aria-label="Primary"
                {
                    @for (url, title) in NAV_LINKS {
                        @let is_current = url == current_page;

                        li {
                            a
                                href=(url)
                                class=(if is_current { CURRENT_LINK_STYLE } else { LINK_STYLE })
                                aria-current=[is_current.then_some("page")]
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
