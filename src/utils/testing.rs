//! Fixtures for browser tests: mounted markup, picked files, user gestures.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, Element, Event, File, FilePropertyBag, HtmlElement, HtmlInputElement};

use crate::utils::dom;

/// Append `html` to the body inside a fresh host element.
///
/// Call `remove()` on the host at the end of the test; ids are page-global.
pub fn mount(html: &str) -> Element {
    let document = dom::document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

pub fn by_id<T: JsCast>(id: &str) -> T {
    dom::by_id_as::<T>(id).unwrap()
}

/// An in-memory file as a file picker would return it.
pub fn file(name: &str, mime: &str, body: &str) -> File {
    let parts = Array::of1(&JsValue::from_str(body));
    let bag = FilePropertyBag::new();
    bag.set_type(mime);
    File::new_with_str_sequence_and_options(&parts, name, &bag).unwrap()
}

/// Put `files` on `input` and fire `change`, like a native selection.
pub fn choose(input: &HtmlInputElement, files: &[File]) {
    let transfer = DataTransfer::new().unwrap();
    for file in files {
        transfer.items().add_with_file(file).unwrap();
    }
    input.set_files(Some(&transfer.files()));
    input.dispatch_event(&Event::new("change").unwrap()).unwrap();
}

pub fn click(element: &Element) {
    element.unchecked_ref::<HtmlElement>().click();
}

/// Names reported by the input's file list.
pub fn file_names(input: &HtmlInputElement) -> Vec<String> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| file.name())
        .collect()
}

pub fn query(root: &Element, selector: &str) -> Vec<Element> {
    dom::query_all(root, selector)
}

/// Inline `display` value of an element.
pub fn display(element: &Element) -> String {
    element
        .unchecked_ref::<HtmlElement>()
        .style()
        .get_property_value("display")
        .unwrap()
}
