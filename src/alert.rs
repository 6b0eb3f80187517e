//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element defined in [base](crate::html::base).

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// A message to show the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action worked, with some extra details.
    Success { message: String, details: String },
    /// The action worked.
    SuccessSimple { message: String },
    /// The action failed, with details on how to fix it.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_markup(self) -> Markup {
        let (is_success, message, details) = match self {
            Alert::Success { message, details } => (true, message, details),
            Alert::SuccessSimple { message } => (true, message, String::new()),
            Alert::Error { message, details } => (false, message, details),
        };

        let style = if is_success {
            "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
            dark:bg-gray-800 dark:text-green-400"
        } else {
            "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
            dark:bg-gray-800 dark:text-red-400"
        };

        html!(
            div
                class=(style)
                role="alert"
                data-alert-type=(if is_success { "success" } else { "error" })
            {
                span class="font-medium" { (message) }

                @if !details.is_empty() {
                    p class="mt-1" { (details) }
                }

                button
                    type="button"
                    class="mt-2 underline"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "Dismiss"
                }
            }
        )
    }

    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        // The status code has to be 200 OK or htmx will not swap in the alert.
        (StatusCode::OK, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn renders_error_with_details() {
        let alert = Alert::Error {
            message: "Oh no".to_owned(),
            details: "Try again".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_markup().into_string());

        let div = html
            .select(&Selector::parse("div[role='alert']").unwrap())
            .next()
            .expect("Could not find alert div");
        assert_eq!(div.attr("data-alert-type"), Some("error"));
        let text = div.text().collect::<String>();
        assert!(text.contains("Oh no"), "want message in {text:?}");
        assert!(text.contains("Try again"), "want details in {text:?}");
    }

    #[test]
    fn simple_success_has_no_details_paragraph() {
        let alert = Alert::SuccessSimple {
            message: "Done".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_markup().into_string());

        let div = html
            .select(&Selector::parse("div[role='alert']").unwrap())
            .next()
            .expect("Could not find alert div");
        assert_eq!(div.attr("data-alert-type"), Some("success"));
        assert_eq!(div.select(&Selector::parse("p").unwrap()).count(), 0);
    }
}
