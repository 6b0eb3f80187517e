//! Full-page error responses, such as the 404 page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{endpoints, html::base};

/// An error page with the status code in large print and a hint on what to do next.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl ErrorPage<'_> {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. Head back to the home page to find your way.",
        }
    }

    pub fn internal_server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs.",
        }
    }

    fn into_markup(self) -> Markup {
        let title = self.status.canonical_reason().unwrap_or("Error");

        let content = html!(
            section class="bg-white dark:bg-gray-900"
            {
                div class="mx-auto max-w-screen-sm px-4 py-16 text-center"
                {
                    h1 class="mb-4 text-7xl lg:text-9xl font-extrabold text-blue-600 dark:text-blue-500"
                    {
                        (self.status.as_str())
                    }

                    p class="mb-4 text-3xl font-bold text-gray-900 dark:text-white"
                    {
                        (self.description)
                    }

                    p class="mb-4 text-xl text-gray-700 dark:text-gray-300" { (self.fix) }

                    a
                        href=(endpoints::ROOT)
                        class="inline-flex my-4 px-5 py-2.5 rounded text-sm font-medium \
                            text-white bg-blue-600 hover:bg-blue-700"
                    {
                        "Back to Homepage"
                    }
                }
            }
        );

        base(title, &[], &content)
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let status = self.status;

        (status, Html(self.into_markup().into_string())).into_response()
    }
}

/// The fallback route handler.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal_server_error().into_response()
}
