//! A form extractor whose rejections are shown to the user as alerts.

use axum::{
    extract::{FromRequest, rejection::FormRejection},
    response::{IntoResponse, Response},
};

use crate::Error;

/// Like [axum::Form], but a missing or malformed field responds with a
/// 400 alert that htmx swaps into `#alert-container` instead of a plain
/// text error the user never sees.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(FormError))]
pub struct AlertForm<T>(pub T);

/// The rejection for [AlertForm].
#[derive(Debug)]
pub struct FormError(FormRejection);

impl From<FormRejection> for FormError {
    fn from(rejection: FormRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let reason = self.0.body_text();
        tracing::warn!("Rejected form data: {reason}");

        Error::InvalidForm(reason).into_alert_response()
    }
}
