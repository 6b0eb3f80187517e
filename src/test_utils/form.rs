use scraper::{ElementRef, Html, Selector};

fn selector(selectors: &str) -> Selector {
    Selector::parse(selectors).unwrap_or_else(|error| panic!("bad selector {selectors}: {error}"))
}

/// Get the first form on the page.
#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&selector("form"))
        .next()
        .expect("No form found")
}

/// Assert that `form` sends its request to `endpoint` with the htmx `attribute`, e.g. `hx-post`.
#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    assert_eq!(
        form.attr(attribute),
        Some(endpoint),
        "want form with {attribute}=\"{endpoint}\""
    );
}

/// Assert that `form` has a required input called `name` of type `type_`.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = form
        .select(&selector(&format!("input[name='{name}']")))
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    assert_eq!(input.attr("type"), Some(type_), "input {name} has the wrong type");
    assert!(input.attr("required").is_some(), "input {name} should be required");
}

#[track_caller]
pub(crate) fn assert_form_select(form: &ElementRef<'_>, name: &str) {
    assert!(
        form.select(&selector(&format!("select[name='{name}']")))
            .next()
            .is_some(),
        "No select found with name \"{name}\""
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    assert!(
        form.select(&selector("button[type='submit']")).next().is_some(),
        "No submit button found"
    );
}
