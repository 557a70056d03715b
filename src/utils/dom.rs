//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the page document.
pub fn document() -> Result<Document, DomError> {
    window()
        .and_then(|w| w.document())
        .ok_or(DomError::NoDocument)
}

/// Look up an element by id.
pub fn by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Look up an element by id and cast it to a concrete element type.
pub fn by_id_as<T: JsCast>(id: &str) -> Result<T, DomError> {
    by_id(id)?.dyn_into::<T>().map_err(|_| DomError::WrongElement {
        id: id.to_string(),
        expected: std::any::type_name::<T>(),
    })
}

/// Collect the elements of a `NodeList`.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements under `root` matching `selector`.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// All elements in the document matching `selector`.
pub fn query_document(selector: &str) -> Vec<Element> {
    document()
        .ok()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()?
}

/// Selector matching controls that carry `data-action="{action}"`.
pub fn action_selector(action: &str) -> String {
    format!("[data-action=\"{}\"]", action)
}

/// Attribute value, treating an empty attribute as absent.
pub fn attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name).filter(|value| !value.is_empty())
}

/// Set the `value` property of a form control by id.
///
/// Works for inputs, textareas and selects alike.
pub fn set_value(id: &str, value: &str) -> Result<(), DomError> {
    let element = by_id(id)?;
    js_sys::Reflect::set(&element, &"value".into(), &value.into())?;
    Ok(())
}

/// Set the text content of an element by id, if it exists.
pub fn set_text(id: &str, text: &str) {
    if let Ok(element) = by_id(id) {
        element.set_text_content(Some(text));
    }
}

/// Set the inline `display` style (`""` restores the stylesheet value).
pub fn set_display(element: &Element, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>()
        && let Err(err) = html.style().set_property("display", value)
    {
        tracing::debug!(error = %DomError::from(err), "display not set");
    }
}

/// Show (stylesheet default) or hide an element.
pub fn set_visible(element: &Element, visible: bool) {
    set_display(element, if visible { "" } else { "none" });
}

/// Show as a block or hide an element, overriding any stylesheet `display`.
pub fn set_block(element: &Element, visible: bool) {
    set_display(element, if visible { "block" } else { "none" });
}

/// Toggle `aria-hidden`.
pub fn set_aria_hidden(element: &Element, hidden: bool) {
    let value = if hidden { "true" } else { "false" };
    if let Err(err) = element.set_attribute("aria-hidden", value) {
        tracing::debug!(error = %DomError::from(err), "aria-hidden not set");
    }
}

/// Create an element with a class name.
pub fn create(tag: &str, class: &str) -> Result<Element, DomError> {
    let element = document()?.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// Attach an event listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

    // Keep the closure alive for the lifetime of the page
    closure.forget();
    Ok(())
}
