//! Browser tests for the exported entry points.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use binder_ui::{close_modal, open_modal, setup_carousel};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Element {
    let host = document().create_element("div").unwrap();
    host.set_inner_html(html);
    document().body().unwrap().append_child(&host).unwrap();
    host
}

fn by_id(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

fn options(prefix: &str) -> JsValue {
    let object = Object::new();
    for (key, value) in [
        ("filterId", format!("{prefix}Filter")),
        ("prevId", format!("{prefix}Prev")),
        ("nextId", format!("{prefix}Next")),
        ("statusId", format!("{prefix}Status")),
        ("cardSelector", format!("[data-{prefix}-card]")),
        ("emptyId", format!("{prefix}Empty")),
    ] {
        Reflect::set(&object, &key.into(), &value.into()).unwrap();
    }
    Reflect::set(&object, &"dueData".into(), &true.into()).unwrap();
    object.into()
}

fn active_cards(prefix: &str) -> Vec<String> {
    let list = document()
        .query_selector_all(&format!("[data-{prefix}-card].is-active"))
        .unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.id())
        .collect()
}

#[wasm_bindgen_test]
fn modal_toggles_aria_hidden() {
    mount(r#"<div id="testModal" aria-hidden="true"></div>"#);

    open_modal("testModal");
    assert_eq!(by_id("testModal").get_attribute("aria-hidden").as_deref(), Some("false"));

    close_modal("testModal");
    assert_eq!(by_id("testModal").get_attribute("aria-hidden").as_deref(), Some("true"));

    // unknown ids are ignored
    open_modal("noSuchModal");
}

#[wasm_bindgen_test]
fn carousel_pages_through_selected_group() {
    mount(
        r#"
        <select id="pgFilter">
          <option value="a1" data-due="2025-01-10T00:00:00Z">A1</option>
          <option value="a2">A2</option>
        </select>
        <button id="pgPrev">prev</button>
        <button id="pgNext">next</button>
        <span id="pgStatus"></span>
        <div id="pgEmpty">none</div>
        <div id="c1" data-pg-card data-assignment-id="a1"
             data-submitted-at="2025-01-09T00:00:00Z"></div>
        <div id="c2" data-pg-card data-assignment-id="a1"
             data-submitted-at="2025-01-11T00:00:00Z"></div>
        "#,
    );

    setup_carousel(options("pg")).unwrap();
    assert_eq!(active_cards("pg"), ["c1"]);
    assert_eq!(by_id("pgStatus").text_content().as_deref(), Some("1 / 2"));
    let prev: HtmlButtonElement = by_id("pgPrev").dyn_into().unwrap();
    assert!(prev.disabled());

    by_id("pgNext").unchecked_into::<HtmlElement>().click();
    assert_eq!(active_cards("pg"), ["c2"]);
    assert!(by_id("c2").class_list().contains("is-overdue"));
    assert_eq!(by_id("pgStatus").text_content().as_deref(), Some("2 / 2"));
}

#[wasm_bindgen_test]
fn carousel_rejects_malformed_options() {
    assert!(setup_carousel(JsValue::from_str("not options")).is_err());
}
