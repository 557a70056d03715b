//! Stateless form helpers: edit form population, create-form type switch,
//! post and enrollment list filtering, `datetime-local` to ISO conversion.

use js_sys::Date;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::config::{attrs, ids, routes};
use crate::error::DomError;
use crate::utils::dom;

const RESOURCE: &str = "RESOURCE";
const ASSIGNMENT: &str = "ASSIGNMENT";
const ALL_POSTS: &str = "ALL";

// ============================================================================
// Pure helpers
// ============================================================================

/// `datetime-local` value for a local calendar time (month is 1-based).
pub fn local_input_value(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("{:04}-{:02}-{:02}T{:02}:{:02}", year, month, day, hour, minute)
}

/// Whether a post of `post_type` stays visible under `filter`.
pub fn shows_post(filter: &str, post_type: &str) -> bool {
    filter == ALL_POSTS || filter == post_type
}

/// Whether an enrollment list section stays visible under `selected`.
pub fn shows_list(selected: &str, list: Option<&str>) -> bool {
    list == Some(selected)
}

/// Max score field value; the templates render a missing score as `"null"`.
pub fn max_score_value(raw: &str) -> &str {
    if raw == "null" { "" } else { raw }
}

// ============================================================================
// Date conversion
// ============================================================================

fn parse_date(raw: &str) -> Option<Date> {
    if raw.is_empty() {
        return None;
    }
    let date = Date::new(&JsValue::from_str(raw));
    (!date.get_time().is_nan()).then_some(date)
}

/// ISO instant of a `datetime-local` value, read in the browser's zone.
///
/// Empty and unparseable values give an empty string.
pub fn iso_from_local(value: &str) -> String {
    parse_date(value)
        .map(|date| String::from(date.to_iso_string()))
        .unwrap_or_default()
}

/// `(datetime-local value, ISO value)` for a server timestamp.
fn due_fields(raw: &str) -> (String, String) {
    match parse_date(raw) {
        Some(date) => (
            local_input_value(
                date.get_full_year(),
                date.get_month() + 1,
                date.get_date(),
                date.get_hours(),
                date.get_minutes(),
            ),
            String::from(date.to_iso_string()),
        ),
        None => (String::new(), String::new()),
    }
}

// ============================================================================
// Edit form
// ============================================================================

/// Set a form control's value by id, logging when the control is missing.
pub fn fill(id: &str, value: &str) {
    if let Err(err) = dom::set_value(id, value) {
        tracing::debug!(field = id, error = %err, "field not filled");
    }
}

/// Fill the post edit form from the `data-post-*` attributes of `control`.
pub fn populate_edit_form(control: &Element) {
    let read = |name: &str| control.get_attribute(name).unwrap_or_default();
    let post_type = read(attrs::POST_TYPE);
    let is_resource = post_type == RESOURCE;

    fill(ids::EDIT_POST_ID, &read(attrs::POST_ID));
    fill(ids::EDIT_TITLE, &read(attrs::POST_TITLE));
    fill(ids::EDIT_DESC, &read(attrs::POST_DESC));

    if let Ok(fields) = dom::by_id(ids::EDIT_ASSIGNMENT_FIELDS) {
        dom::set_display(&fields, if is_resource { "none" } else { "block" });
    }
    if let Ok(fields) = dom::by_id(ids::EDIT_RESOURCE_FIELDS) {
        dom::set_display(&fields, if is_resource { "block" } else { "none" });
    }

    if is_resource {
        if let Ok(input) = dom::by_id_as::<HtmlInputElement>(ids::EDIT_RESOURCE_FILE) {
            input.set_value("");
        }
        if let Ok(flag) = dom::by_id_as::<HtmlInputElement>(ids::EDIT_REPLACE_ATTACHMENTS) {
            flag.set_checked(false);
        }
    } else {
        fill(ids::EDIT_TTC, &read(attrs::POST_TTC));
        let (local, iso) = due_fields(&read(attrs::POST_DUE));
        fill(ids::EDIT_DUE_LOCAL, &local);
        fill(ids::EDIT_DUE_HIDDEN, &iso);
        fill(ids::EDIT_MAX, max_score_value(&read(attrs::POST_MAX)));
    }

    if let Ok(form) = dom::by_id_as::<HtmlFormElement>(ids::POST_EDIT_FORM) {
        form.set_action(if is_resource {
            routes::RESOURCE_EDIT
        } else {
            routes::ASSIGNMENT_EDIT
        });
    }
    tracing::debug!(post_type = %post_type, "edit form populated");
}

// ============================================================================
// Setup
// ============================================================================

/// Copy a `datetime-local` input into its hidden ISO field.
fn sync_due(local_id: &str, hidden_id: &str) {
    let local = dom::by_id_as::<HtmlInputElement>(local_id)
        .map(|input| input.value())
        .unwrap_or_default();
    fill(hidden_id, &iso_from_local(&local));
}

fn setup_type_switch() -> Result<(), DomError> {
    let select = dom::by_id_as::<HtmlSelectElement>(ids::CREATE_TYPE)?;
    let type_select = select.clone();
    dom::listen(&select, "change", move |_| {
        let is_assignment = type_select.value() == ASSIGNMENT;
        if let Ok(form) = dom::by_id(ids::ASSIGNMENT_FORM) {
            dom::set_display(&form, if is_assignment { "block" } else { "none" });
        }
        if let Ok(form) = dom::by_id(ids::RESOURCE_FORM) {
            dom::set_display(&form, if is_assignment { "none" } else { "block" });
        }
    })
}

fn setup_create_due() -> Result<(), DomError> {
    let form = dom::by_id(ids::ASSIGNMENT_FORM)?;
    dom::listen(&form, "submit", |_| sync_due(ids::CREATE_DUE_LOCAL, ids::CREATE_DUE_HIDDEN))
}

fn setup_edit_due() -> Result<(), DomError> {
    let edit_due = dom::by_id(ids::EDIT_DUE_LOCAL)?;
    dom::listen(&edit_due, "change", |_| sync_due(ids::EDIT_DUE_LOCAL, ids::EDIT_DUE_HIDDEN))
}

fn setup_post_filter() -> Result<(), DomError> {
    let select = dom::by_id_as::<HtmlSelectElement>(ids::POST_FILTER)?;
    let filter = select.clone();
    let selector = format!("[{}]", attrs::POST_TYPE_FILTER);
    dom::listen(&select, "change", move |_| {
        let value = filter.value();
        for post in dom::query_document(&selector) {
            let post_type = post.get_attribute(attrs::POST_TYPE_FILTER).unwrap_or_default();
            dom::set_visible(&post, shows_post(&value, &post_type));
        }
    })
}

/// Show only the `[data-list]` section matching `selected`.
fn show_enrollment_list(selected: &str) {
    let selector = format!("[{}]", attrs::ENROLLMENT_LIST);
    for section in dom::query_document(&selector) {
        let list = section.get_attribute(attrs::ENROLLMENT_LIST);
        dom::set_visible(&section, shows_list(selected, list.as_deref()));
    }
}

/// Apply the enrollment switch now and on every change.
fn setup_enrollment_filter() -> Result<(), DomError> {
    let select = dom::by_id_as::<HtmlSelectElement>(ids::ENROLLMENT_FILTER)?;
    show_enrollment_list(&select.value());
    let filter = select.clone();
    dom::listen(&select, "change", move |_| show_enrollment_list(&filter.value()))
}

/// Wire the form helpers present on the page.
pub fn setup_all() {
    for (name, result) in [
        ("type switch", setup_type_switch()),
        ("create due", setup_create_due()),
        ("edit due", setup_edit_due()),
        ("post filter", setup_post_filter()),
        ("enrollment filter", setup_enrollment_filter()),
    ] {
        if let Err(err) = result {
            tracing::debug!(helper = name, error = %err, "form helper skipped");
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;
    use web_sys::Event;

    use super::*;
    use crate::utils::testing::{by_id, display, mount};

    #[wasm_bindgen_test]
    fn enrollment_switch_shows_selected_list() {
        let host = mount(
            r#"<select id="enrollmentFilter">
                 <option value="students">Students</option>
                 <option value="pending">Pending</option>
               </select>
               <section id="studentsList" data-list="students"></section>
               <section id="pendingList" data-list="pending"></section>"#,
        );
        let students: Element = by_id("studentsList");
        let pending: Element = by_id("pendingList");

        setup_enrollment_filter().unwrap();
        assert_eq!(display(&students), "");
        assert_eq!(display(&pending), "none");

        let select: HtmlSelectElement = by_id(ids::ENROLLMENT_FILTER);
        select.set_value("pending");
        select.dispatch_event(&Event::new("change").unwrap()).unwrap();
        assert_eq!(display(&students), "none");
        assert_eq!(display(&pending), "");

        host.remove();
    }
}
