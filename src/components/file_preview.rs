//! File inputs with per-file previews and removal.
//!
//! Each `input[type=file][data-preview-target]` gets a key in the shared
//! [`StagingStore`]. Selection changes replace the staged sequence; removal
//! buttons in the preview area splice one entry and rebuild the input's
//! `FileList` through a `DataTransfer`, since the native selection cannot
//! drop a single file.

use std::rc::Rc;

use binder_core::{
    FileStagingStore, LocalFile, PreviewError, PreviewList, PreviewUrls, StagingCommand,
    StagingView,
};
use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, Element, File, HtmlInputElement, Url};

use crate::app::PageContext;
use crate::components::preview_list::render_into;
use crate::config::{self, actions, attrs};
use crate::error::DomError;
use crate::utils::dom;

/// Identity of a staged input, written to its `data-staging-key`.
pub type InputKey = u32;

/// Staging store holding browser files.
pub type StagingStore = FileStagingStore<InputKey, ObjectUrls>;

// ============================================================================
// Platform adapters
// ============================================================================

/// A file picked through a native file input.
#[derive(Clone, Debug)]
pub struct SelectedFile(pub File);

impl LocalFile for SelectedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> f64 {
        self.0.size()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

/// Object URLs (`blob:`) as preview handles.
#[derive(Debug, Default)]
pub struct ObjectUrls;

impl PreviewUrls for ObjectUrls {
    type Source = SelectedFile;

    fn create(&mut self, source: &SelectedFile) -> Result<String, PreviewError> {
        Url::create_object_url_with_blob(&source.0)
            .map_err(|err| PreviewError::Unavailable(DomError::from(err).to_string()))
    }

    fn revoke(&mut self, url: &str) {
        if let Err(err) = Url::revoke_object_url(url) {
            tracing::warn!(url, error = %DomError::from(err), "failed to revoke preview url");
        }
    }
}

/// DOM side of one staged input: the control and its preview area.
#[derive(Clone, Debug)]
pub struct InputView {
    pub input: HtmlInputElement,
    pub area: Element,
}

impl StagingView<SelectedFile> for InputView {
    fn sync_files(&mut self, files: &[&SelectedFile]) {
        let transfer = match DataTransfer::new() {
            Ok(transfer) => transfer,
            Err(err) => {
                tracing::warn!(error = %DomError::from(err), "cannot rebuild file list");
                return;
            }
        };
        let items = transfer.items();
        for file in files {
            if let Err(err) = items.add_with_file(&file.0) {
                tracing::warn!(
                    file = %file.0.name(),
                    error = %DomError::from(err),
                    "file dropped from resync"
                );
            }
        }
        self.input.set_files(transfer.files().as_ref());
    }

    fn show_previews(&mut self, previews: &PreviewList) {
        if let Err(err) = render_into(&self.area, previews, Some(config::EMPTY_PREVIEW_TEXT)) {
            tracing::warn!(error = %err, "preview render failed");
        }
    }
}

/// Files currently reported by a native input.
pub fn selected_files(input: &HtmlInputElement) -> Vec<SelectedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(SelectedFile)
        .collect()
}

/// Staging key previously assigned to `input`.
pub fn input_key(input: &Element) -> Option<InputKey> {
    input.get_attribute(attrs::STAGING_KEY)?.parse().ok()
}

// ============================================================================
// Setup
// ============================================================================

/// Wire one file input to its preview area.
///
/// Skipped entirely when the input names no target or the target is missing.
pub fn setup_file_preview(
    ctx: &Rc<PageContext>,
    input: HtmlInputElement,
) -> Result<(), DomError> {
    let target = dom::attr(&input, attrs::PREVIEW_TARGET)
        .ok_or(DomError::MissingAttribute(attrs::PREVIEW_TARGET))?;
    let area = dom::by_id(&target)?;

    let key = ctx.register_input(InputView {
        input: input.clone(),
        area: area.clone(),
    });
    input.set_attribute(attrs::STAGING_KEY, &key.to_string())?;
    let replace_flag = config::replace_flag_for(&input.id());

    {
        let ctx = Rc::clone(ctx);
        let input_el = input.clone();
        dom::listen(&input, "change", move |_| {
            let files = selected_files(&input_el);
            let selected_any = !files.is_empty();
            ctx.dispatch_staging(key, StagingCommand::AddFiles(files));
            if selected_any && let Some(flag) = replace_flag {
                set_checked(flag, |_| true);
            }
        })?;
    }

    {
        let ctx = Rc::clone(ctx);
        let selector = dom::action_selector(actions::REMOVE_FILE_PREVIEW);
        dom::listen(&area, "click", move |event| {
            let Some(button) = dom::closest(&event, &selector) else {
                return;
            };
            let Some(index) = parse_index(button.get_attribute(attrs::INDEX).as_deref()) else {
                tracing::debug!(input = key, "removal control without index");
                return;
            };
            if !ctx.dispatch_staging(key, StagingCommand::RemoveFileAt(index)) {
                return;
            }
            if let Some(flag) = replace_flag {
                let remaining = ctx.staged_len(key);
                let policy = config::STAGING.replace_flag;
                set_checked(flag, |checked| policy.after_removal(checked, remaining));
            }
        })?;
    }

    ctx.dispatch_staging(key, StagingCommand::Reset);
    tracing::debug!(input = key, target = %target, "file preview ready");
    Ok(())
}

/// Parse a removal control's positional index.
fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

fn set_checked(id: &str, update: impl FnOnce(bool) -> bool) {
    match dom::by_id_as::<HtmlInputElement>(id) {
        Ok(checkbox) => checkbox.set_checked(update(checkbox.checked())),
        Err(err) => tracing::debug!(error = %err, "replace flag unavailable"),
    }
}

/// Wire every preview-enabled file input on the page.
pub fn setup_all(ctx: &Rc<PageContext>) {
    for element in dom::query_document(config::FILE_INPUT_SELECTOR) {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        if let Err(err) = setup_file_preview(ctx, input) {
            tracing::debug!(error = %err, "file preview skipped");
        }
    }
}
