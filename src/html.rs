//! Shared page layout, styles and formatting helpers for the HTML views.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

pub const LINK_STYLE: &str = "underline text-blue-600 hover:text-blue-500 \
    dark:text-blue-400 dark:hover:text-blue-300";

pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 rounded text-white \
    bg-blue-600 hover:enabled:bg-blue-700 disabled:bg-blue-800 \
    dark:bg-blue-600 hover:enabled:dark:bg-blue-500";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full px-4 py-2 rounded text-sm \
    font-medium border border-gray-300 text-gray-900 bg-white hover:bg-gray-100 \
    dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700";

const BUTTON_DELETE_STYLE: &str = "underline cursor-pointer bg-transparent \
    text-red-600 hover:text-red-500 dark:text-red-400 dark:hover:text-red-300";

pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium text-gray-900 dark:text-white";

pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2 rounded text-sm \
    border border-gray-300 bg-gray-50 text-gray-900 \
    focus:border-blue-600 focus:ring-blue-600 \
    dark:border-gray-600 dark:bg-gray-700 dark:text-white dark:placeholder-gray-400";

pub const TABLE_HEADER_STYLE: &str = "text-xs uppercase text-gray-700 bg-gray-100 \
    dark:bg-gray-700 dark:text-gray-300";

pub const TABLE_ROW_STYLE: &str = "border-b bg-white dark:border-gray-700 dark:bg-gray-800";

pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col items-center gap-6 px-4 py-6 \
    mx-auto max-w-screen-xl text-gray-900 dark:text-white";

const TAILWIND_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const HTMX_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";
const HTMX_RESPONSE_TARGETS_URL: &str =
    "https://cdn.jsdelivr.net/npm/htmx-ext-response-targets@2.0.4/response-targets.js";

/// Extra elements a page adds to the `<head>` after the shared scripts.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

/// The HTML document every page is rendered into.
///
/// Loads Tailwind, htmx and the stylesheet in `/static`, and provides the
/// `#alert-container` that endpoints target with their alerts.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Budget Dashboard" }
                link href="/static/main.css" rel="stylesheet";

                script src=(TAILWIND_SCRIPT_URL) {}
                script src=(HTMX_SCRIPT_URL) {}
                script src=(HTMX_RESPONSE_TARGETS_URL) {}

                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptLink(url) => script src=(url) {}
                        HeadElement::ScriptSource(source) => script { (source) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                div
                    id="alert-container"
                    class="fixed bottom-4 left-1/2 z-50 w-full max-w-md -translate-x-1/2 px-4"
                {}
            }
        }
    }
}

/// Format `amount` as dollars with thousands separators and cents, e.g. "-$1,234.50".
pub fn format_currency(amount: f64) -> String {
    static FORMATTER: OnceLock<Option<Formatter>> = OnceLock::new();

    let dollars = format_dollars(amount.abs(), 2, &FORMATTER);

    // numfmt drops trailing zeros from the cents.
    let dollars = match dollars.split_once('.') {
        Some((_, cents)) if cents.len() == 1 => format!("{dollars}0"),
        None => format!("{dollars}.00"),
        _ => dollars,
    };

    with_sign(amount, dollars)
}

/// Format `amount` as whole dollars, e.g. "-$1,235".
pub fn format_currency_rounded(amount: f64) -> String {
    static FORMATTER: OnceLock<Option<Formatter>> = OnceLock::new();

    let amount = amount.round();

    with_sign(amount, format_dollars(amount.abs(), 0, &FORMATTER))
}

fn format_dollars(amount: f64, decimals: u8, formatter: &OnceLock<Option<Formatter>>) -> String {
    let formatter = formatter.get_or_init(|| {
        Formatter::currency("$")
            .map(|formatter| formatter.precision(Precision::Decimals(decimals)))
            .inspect_err(|error| tracing::error!("Could not create currency formatter: {error:?}"))
            .ok()
    });

    match formatter {
        // numfmt renders zero as a bare "0".
        Some(formatter) if amount != 0.0 => formatter.fmt_string(amount),
        _ => format!("${amount:.*}", usize::from(decimals)),
    }
}

fn with_sign(amount: f64, dollars: String) -> String {
    if amount < 0.0 {
        format!("-{dollars}")
    } else {
        dollars
    }
}

/// Whole dollars with the exact amount shown on hover.
pub fn currency_rounded_with_tooltip(amount: f64) -> Markup {
    html!(
        span title=(format_currency(amount)) { (format_currency_rounded(amount)) }
    )
}

/// An inline text link.
pub fn link(url: &str, text: &str) -> Markup {
    html!(a href=(url) class=(LINK_STYLE) { (text) })
}

/// A button that sends a DELETE request to `delete_url` after asking the user to confirm.
///
/// On success htmx swaps the element matched by `target` using `swap`,
/// e.g. `"closest tr"` and `"delete"` to remove a table row.
pub fn delete_button(delete_url: &str, confirm_message: &str, target: &str, swap: &str) -> Markup {
    html!(
        button
            type="button"
            hx-delete=(delete_url)
            hx-confirm=(confirm_message)
            hx-target=(target)
            hx-target-error="#alert-container"
            hx-swap=(swap)
            class=(BUTTON_DELETE_STYLE)
        {
            "Delete"
        }
    )
}

#[cfg(test)]
mod format_currency_tests {
    use super::{format_currency, format_currency_rounded};

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency_rounded(0.0), "$0");
    }

    #[test]
    fn always_shows_two_decimal_places() {
        let formatted = format_currency(12.3);

        assert!(formatted.starts_with('$'), "got {formatted}");
        assert!(formatted.ends_with(".30"), "got {formatted}");
    }

    #[test]
    fn negative_amounts_lead_with_minus_sign() {
        assert!(format_currency(-5.25).starts_with("-$"));
        assert!(format_currency_rounded(-5.75).starts_with("-$"));
    }
}
