//! Modal visibility, per-open reset of staged files, and the manage side panel.

use std::rc::Rc;

use binder_core::StagingCommand;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::app::PageContext;
use crate::components::file_preview::input_key;
use crate::config::{self, classes, ids};
use crate::error::DomError;
use crate::utils::dom;

/// Show a modal and clear every staged-file input inside it.
///
/// Staged files never survive a close/open cycle: each input's value is
/// cleared and its store entry reset, which releases all preview handles
/// and brings back the placeholder.
pub fn open_modal(ctx: &Rc<PageContext>, id: &str) {
    let Ok(modal) = dom::by_id(id) else {
        tracing::debug!(modal = id, "open for missing modal");
        return;
    };
    dom::set_aria_hidden(&modal, false);

    for element in dom::query_all(&modal, config::FILE_INPUT_SELECTOR) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        }
        if let Some(key) = input_key(&element) {
            ctx.dispatch_staging(key, StagingCommand::Reset);
        }
    }
}

/// Hide a modal. Missing modals are ignored.
pub fn close_modal(id: &str) {
    if let Ok(modal) = dom::by_id(id) {
        dom::set_aria_hidden(&modal, true);
    }
}

/// Open or close the manage side panel. No-op unless both `#main` and
/// `#manageSide` exist.
pub fn set_manage_open(open: bool) {
    let (Ok(main), Ok(side)) = (dom::by_id(ids::MAIN), dom::by_id(ids::MANAGE_SIDE)) else {
        tracing::debug!("manage panel not on page");
        return;
    };
    if let Err(err) = main.class_list().toggle_with_force(classes::MANAGE_OPEN, open) {
        tracing::debug!(error = %DomError::from(err), "manage class not toggled");
    }
    dom::set_aria_hidden(&side, !open);
}

/// Whether the manage side panel is open.
pub fn manage_open() -> bool {
    dom::by_id(ids::MAIN).is_ok_and(|main| main.class_list().contains(classes::MANAGE_OPEN))
}

/// Flip the manage side panel.
pub fn toggle_manage() {
    set_manage_open(!manage_open());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::components::file_preview::setup_file_preview;
    use crate::utils::testing::{by_id, choose, file, file_names, mount, query};

    #[wasm_bindgen_test]
    fn reopening_clears_staged_inputs() {
        let host = mount(
            r#"<div id="uploadModal" aria-hidden="true">
                 <input type="file" id="uploadInput" data-preview-target="uploadArea">
                 <div id="uploadArea"></div>
               </div>"#,
        );
        let ctx = Rc::new(PageContext::new());
        let input: HtmlInputElement = by_id("uploadInput");
        setup_file_preview(&ctx, input.clone()).unwrap();

        open_modal(&ctx, "uploadModal");
        choose(&input, &[file("a.png", "image/png", "a"), file("b.txt", "text/plain", "b")]);
        let area = by_id::<web_sys::Element>("uploadArea");
        assert_eq!(query(&area, ".file-preview-item").len(), 2);

        close_modal("uploadModal");
        open_modal(&ctx, "uploadModal");
        assert!(file_names(&input).is_empty());
        assert!(query(&area, ".file-preview-item").is_empty());
        assert_eq!(area.text_content().as_deref(), Some(config::EMPTY_PREVIEW_TEXT));
        assert_eq!(ctx.staging.borrow().live_previews(), 0);
        assert_eq!(ctx.staged_len(0), 0);

        host.remove();
    }

    #[wasm_bindgen_test]
    fn manage_panel_toggles() {
        let host = mount(
            r#"<div id="main"></div>
               <aside id="manageSide" aria-hidden="true"></aside>"#,
        );
        let side = by_id::<web_sys::Element>(ids::MANAGE_SIDE);

        toggle_manage();
        assert!(manage_open());
        assert_eq!(side.get_attribute("aria-hidden").as_deref(), Some("false"));

        toggle_manage();
        assert!(!manage_open());
        assert_eq!(side.get_attribute("aria-hidden").as_deref(), Some("true"));

        host.remove();
        // without the panel markup nothing happens
        toggle_manage();
        assert!(!manage_open());
    }
}
