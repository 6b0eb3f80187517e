//! Assertions shared by the handler and view tests.

#![allow(missing_docs)]

mod form;
mod html;
mod http;
mod logs;

pub(crate) use form::{
    assert_form_input, assert_form_select, assert_form_submit_button, assert_hx_endpoint,
    must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_html_ok, assert_hx_redirect};
pub(crate) use logs::count_errors;
