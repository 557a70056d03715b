//! Browser binding layer for the classroom post pages.
//!
//! Boots once per page: wires every preview-enabled file input, the
//! configured pagers, the form helpers and document-level actions. A few
//! entry points are exported for page scripts that add controls later.

mod app;
mod components;
mod config;
mod error;
mod utils;

use std::cell::OnceCell;
use std::rc::Rc;

use binder_core::CarouselOptions;
use wasm_bindgen::prelude::*;

use app::PageContext;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static PAGE: OnceCell<Rc<PageContext>> = const { OnceCell::new() };
}

fn page() -> Rc<PageContext> {
    PAGE.with(|page| Rc::clone(page.get_or_init(app::boot)))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    utils::log::init(config::LOG_LEVEL);

    let Ok(document) = utils::dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let ready = utils::dom::listen(&document, "DOMContentLoaded", |_| {
            page();
        });
        if let Err(err) = ready {
            tracing::error!(error = %err, "page boot unavailable");
        }
    } else {
        page();
    }
}

/// Wire an extra pager from a plain options object.
#[wasm_bindgen(js_name = setupCarousel)]
pub fn setup_carousel(options: JsValue) -> Result<(), JsValue> {
    let options: CarouselOptions = serde_wasm_bindgen::from_value(options)?;
    components::carousel::setup_carousel(&page(), options)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Show a modal, clearing its staged files.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) {
    components::modal::open_modal(&page(), id);
}

/// Hide a modal.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) {
    components::modal::close_modal(id);
}
