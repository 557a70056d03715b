//! Root application module.
//!
//! Contains the [`PageContext`] shared by every event handler, the
//! document-level [`PageAction`] dispatch, and page boot.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use binder_core::{ExistingAttachments, StagingCommand};
use web_sys::{Event, KeyboardEvent};
use wasm_bindgen::JsCast;

use crate::components::carousel::{self, Carousel};
use crate::components::file_preview::{self, InputKey, InputView, ObjectUrls, StagingStore};
use crate::components::{attachments, forms, modal};
use crate::config::{self, actions, attrs};
use crate::utils::dom;

// ============================================================================
// PageContext
// ============================================================================

/// Page-wide state.
///
/// The page itself is only an output sink; everything a handler needs to
/// decide lives here. Handlers run to completion one at a time, so each
/// `RefCell` is borrowed for the duration of a single transition only.
pub struct PageContext {
    /// Staged files of every wired file input.
    pub staging: RefCell<StagingStore>,
    /// DOM views of the wired inputs, by staging key.
    inputs: RefCell<HashMap<InputKey, InputView>>,
    /// Pagers, by group selector id.
    pub carousels: RefCell<HashMap<String, Rc<RefCell<Carousel>>>>,
    /// Existing attachments of the post open in the edit modal.
    pub existing: RefCell<ExistingAttachments>,
    next_key: Cell<InputKey>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            staging: RefCell::new(StagingStore::new(ObjectUrls)),
            inputs: RefCell::new(HashMap::new()),
            carousels: RefCell::new(HashMap::new()),
            existing: RefCell::new(ExistingAttachments::default()),
            next_key: Cell::new(0),
        }
    }

    /// Assign a staging key to an input view and register it with the store.
    pub fn register_input(&self, view: InputView) -> InputKey {
        let key = self.next_key.get();
        self.next_key.set(key + 1);
        self.staging.borrow_mut().register(key);
        self.inputs.borrow_mut().insert(key, view);
        key
    }

    /// Apply a staging command and render the result.
    ///
    /// Returns `false` when the command was ignored.
    pub fn dispatch_staging(
        &self,
        key: InputKey,
        command: StagingCommand<file_preview::SelectedFile>,
    ) -> bool {
        let Some(mut view) = self.inputs.borrow().get(&key).cloned() else {
            tracing::debug!(input = key, "staging command for unknown input");
            return false;
        };
        match self.staging.borrow_mut().dispatch(key, command, &mut view) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(input = key, error = %err, "staging command ignored");
                false
            }
        }
    }

    /// Number of files staged on an input.
    pub fn staged_len(&self, key: InputKey) -> usize {
        self.staging.borrow().len(&key)
    }

    /// Register a pager under its selector id.
    pub fn add_carousel(&self, filter_id: &str, carousel: Carousel) -> Rc<RefCell<Carousel>> {
        let carousel = Rc::new(RefCell::new(carousel));
        self.carousels
            .borrow_mut()
            .insert(filter_id.to_string(), Rc::clone(&carousel));
        carousel
    }

    pub fn carousel(&self, filter_id: &str) -> Option<Rc<RefCell<Carousel>>> {
        self.carousels.borrow().get(filter_id).cloned()
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PageAction
// ============================================================================

/// A click on a `[data-action]` control, decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    OpenModal(String),
    CloseModal(String),
    /// Populate and open the post edit modal from the clicked control.
    OpenEditPost,
    RemoveExistingAttachment(String),
    OpenSubmitModal(String),
    RemoveSubmissionAttachment,
    /// Open the review pager on an assignment.
    OpenReviewModal(String),
    /// Open the student result pager on an assignment.
    OpenStudentResult(String),
    ToggleManage,
}

impl PageAction {
    /// Decode an action name plus attribute lookup into an action.
    ///
    /// Unknown actions and actions missing a required attribute yield `None`.
    pub fn parse(action: &str, attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let assignment = || attr(attrs::ASSIGNMENT_ID).unwrap_or_default();
        let action = match action {
            actions::OPEN_MODAL => Self::OpenModal(attr(attrs::MODAL_ID)?),
            actions::CLOSE_MODAL => Self::CloseModal(attr(attrs::MODAL_ID)?),
            actions::OPEN_EDIT_POST => Self::OpenEditPost,
            actions::REMOVE_EXISTING_ATTACHMENT => {
                Self::RemoveExistingAttachment(attr(attrs::ATTACHMENT_ID)?)
            }
            actions::OPEN_SUBMIT_MODAL => Self::OpenSubmitModal(assignment()),
            actions::REMOVE_SUBMISSION_ATTACHMENT => Self::RemoveSubmissionAttachment,
            actions::OPEN_REVIEW_MODAL => Self::OpenReviewModal(assignment()),
            actions::OPEN_STUDENT_RESULT => Self::OpenStudentResult(assignment()),
            actions::TOGGLE_MANAGE => Self::ToggleManage,
            _ => return None,
        };
        Some(action)
    }
}

fn handle_click(ctx: &Rc<PageContext>, event: &Event) {
    let selector = format!("[{}]", attrs::ACTION);
    let Some(control) = dom::closest(event, &selector) else {
        return;
    };
    let name = control.get_attribute(attrs::ACTION).unwrap_or_default();
    let Some(action) = PageAction::parse(&name, |attr| dom::attr(&control, attr)) else {
        return;
    };
    tracing::debug!(?action, "page action");

    match action {
        PageAction::OpenModal(id) => modal::open_modal(ctx, &id),
        PageAction::CloseModal(id) => modal::close_modal(&id),
        PageAction::OpenEditPost => attachments::open_edit_post(ctx, &control),
        PageAction::RemoveExistingAttachment(id) => attachments::remove_existing(ctx, &id),
        PageAction::OpenSubmitModal(assignment) => attachments::open_submit_modal(ctx, &assignment),
        PageAction::RemoveSubmissionAttachment => attachments::remove_submission_attachment(),
        PageAction::OpenReviewModal(assignment) => {
            carousel::show_group(ctx, config::ids::SUBMISSION_FILTER, &assignment);
            modal::open_modal(ctx, config::ids::SUBMISSION_REVIEW_MODAL);
        }
        PageAction::OpenStudentResult(assignment) => {
            carousel::show_group(ctx, config::ids::STUDENT_RESULT_FILTER, &assignment);
            modal::open_modal(ctx, config::ids::STUDENT_RESULT_MODAL);
        }
        PageAction::ToggleManage => modal::toggle_manage(),
    }
}

fn handle_escape(event: &Event) {
    if !event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Escape") {
        return;
    }
    for id in config::ESCAPE_CLOSES {
        modal::close_modal(id);
    }
    if modal::manage_open() {
        modal::set_manage_open(false);
    }
}

// ============================================================================
// Boot
// ============================================================================

/// Wire every control on the page and return the shared context.
pub fn boot() -> Rc<PageContext> {
    let ctx = Rc::new(PageContext::new());

    file_preview::setup_all(&ctx);
    for options in config::carousels() {
        let filter_id = options.filter_id.clone();
        if let Err(err) = carousel::setup_carousel(&ctx, options) {
            tracing::debug!(filter = %filter_id, error = %err, "carousel skipped");
        }
    }
    forms::setup_all();

    if let Ok(document) = dom::document() {
        let click_ctx = Rc::clone(&ctx);
        let clicks = dom::listen(&document, "click", move |event| {
            handle_click(&click_ctx, &event);
        });
        if let Err(err) = clicks {
            tracing::warn!(error = %err, "page actions unavailable");
        }

        if let Err(err) = dom::listen(&document, "keydown", |event| handle_escape(&event)) {
            tracing::warn!(error = %err, "escape handling unavailable");
        }
    }

    tracing::info!(
        inputs = ctx.inputs.borrow().len(),
        carousels = ctx.carousels.borrow().len(),
        "page wired"
    );
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_parse_modal_actions() {
        let pairs = [(attrs::MODAL_ID, "postCreateModal")];
        assert_eq!(
            PageAction::parse(actions::OPEN_MODAL, lookup(&pairs)),
            Some(PageAction::OpenModal("postCreateModal".into()))
        );
        assert_eq!(
            PageAction::parse(actions::CLOSE_MODAL, lookup(&pairs)),
            Some(PageAction::CloseModal("postCreateModal".into()))
        );
        assert_eq!(PageAction::parse(actions::OPEN_MODAL, lookup(&[])), None);
    }

    #[test]
    fn test_parse_attachment_actions() {
        let pairs = [(attrs::ATTACHMENT_ID, "9f1c")];
        assert_eq!(
            PageAction::parse(actions::REMOVE_EXISTING_ATTACHMENT, lookup(&pairs)),
            Some(PageAction::RemoveExistingAttachment("9f1c".into()))
        );
        assert_eq!(PageAction::parse(actions::REMOVE_EXISTING_ATTACHMENT, lookup(&[])), None);
        assert_eq!(
            PageAction::parse(actions::REMOVE_SUBMISSION_ATTACHMENT, lookup(&[])),
            Some(PageAction::RemoveSubmissionAttachment)
        );
    }

    #[test]
    fn test_parse_assignment_actions_default_to_empty() {
        assert_eq!(
            PageAction::parse(actions::OPEN_SUBMIT_MODAL, lookup(&[])),
            Some(PageAction::OpenSubmitModal(String::new()))
        );
        let pairs = [(attrs::ASSIGNMENT_ID, "a7")];
        assert_eq!(
            PageAction::parse(actions::OPEN_REVIEW_MODAL, lookup(&pairs)),
            Some(PageAction::OpenReviewModal("a7".into()))
        );
        assert_eq!(
            PageAction::parse(actions::OPEN_STUDENT_RESULT, lookup(&pairs)),
            Some(PageAction::OpenStudentResult("a7".into()))
        );
    }

    #[test]
    fn test_parse_toggle_manage() {
        assert_eq!(
            PageAction::parse(actions::TOGGLE_MANAGE, lookup(&[])),
            Some(PageAction::ToggleManage)
        );
    }

    #[test]
    fn test_parse_ignores_local_and_unknown_actions() {
        assert_eq!(PageAction::parse(actions::REMOVE_FILE_PREVIEW, lookup(&[])), None);
        assert_eq!(PageAction::parse("toggle-everything", lookup(&[])), None);
    }
}
