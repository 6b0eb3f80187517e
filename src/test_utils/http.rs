use axum::{body::Body, http::StatusCode, response::Response};

/// Assert that `response` is a 200 OK HTML page.
#[track_caller]
pub(crate) fn assert_html_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok());
    assert_eq!(content_type, Some("text/html; charset=utf-8"));
}

/// Assert that `response` tells htmx to go to `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    let location = response
        .headers()
        .get("hx-redirect")
        .and_then(|value| value.to_str().ok());

    assert_eq!(location, Some(endpoint), "want HX-Redirect to {endpoint}");
}
