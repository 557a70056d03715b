//! Existing attachments in the post edit and submission modals.
//!
//! Descriptors are read from `data-attachment-*` attributes the templates
//! put on each post. Removal never deletes anything client side: the edit
//! form gains one hidden `removeAttachmentIds` input per removed id, and the
//! submission form flips `smRemoveAttachment` to `"true"`.

use std::rc::Rc;

use binder_core::{AttachmentKind, ExistingAttachment, render};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::app::PageContext;
use crate::components::preview_list::render_into;
use crate::components::{forms, modal};
use crate::config::{self, attrs, classes, ids};
use crate::error::DomError;
use crate::utils::dom;

/// Where a descriptor element was rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorSource {
    /// An attachment listed on a post; previews need `data-attachment-inline`.
    Post,
    /// The student's current submission; PDF-aware, inline URL derived from the id.
    Submission,
}

/// Build a descriptor from an element's `data-attachment-*` attributes.
pub fn descriptor(element: &Element, source: DescriptorSource) -> ExistingAttachment {
    let flag = |name: &str| element.get_attribute(name).as_deref() == Some("true");
    let id = dom::attr(element, attrs::ATTACHMENT_ID).unwrap_or_default();
    let is_pdf = source == DescriptorSource::Submission && flag(attrs::ATTACHMENT_PDF);
    let kind = AttachmentKind::from_flags(flag(attrs::ATTACHMENT_IMAGE), is_pdf);
    let inline_url = match source {
        DescriptorSource::Post => dom::attr(element, attrs::ATTACHMENT_INLINE),
        DescriptorSource::Submission => {
            (!id.is_empty()).then(|| ExistingAttachment::inline_url_for(&id))
        }
    };
    ExistingAttachment {
        name: dom::attr(element, attrs::ATTACHMENT_NAME),
        kind,
        inline_url,
        id,
    }
}

// ============================================================================
// Post edit modal
// ============================================================================

/// Populate the edit form from `control` and show the post's attachments.
pub fn open_edit_post(ctx: &Rc<PageContext>, control: &Element) {
    forms::populate_edit_form(control);

    let form = dom::by_id(ids::POST_EDIT_FORM).ok();
    if let Some(form) = &form {
        let stale = format!("input[name=\"{}\"]", config::REMOVE_ATTACHMENT_FIELD);
        for input in dom::query_all(form, &stale) {
            input.remove();
        }
    }

    let post_selector = format!(".{}", classes::POST_NOTE);
    let attachment_selector = format!("[{}]", attrs::ATTACHMENT_ID);
    let found = control
        .closest(&post_selector)
        .ok()
        .flatten()
        .map(|post| dom::query_all(&post, &attachment_selector))
        .unwrap_or_default()
        .iter()
        .map(|el| descriptor(el, DescriptorSource::Post))
        .collect();
    ctx.existing.borrow_mut().load(found);

    if let Err(err) = show_existing(ctx) {
        tracing::debug!(error = %err, "existing attachments not shown");
    }
    modal::open_modal(ctx, ids::POST_EDIT_MODAL);
}

/// Mark an existing attachment for removal on the edit form.
pub fn remove_existing(ctx: &Rc<PageContext>, id: &str) {
    let Ok(form) = dom::by_id(ids::POST_EDIT_FORM) else {
        tracing::debug!(attachment = id, "removal without edit form");
        return;
    };
    if ctx.existing.borrow_mut().remove(id)
        && let Err(err) = append_removal(&form, id)
    {
        tracing::warn!(attachment = id, error = %err, "removal not recorded");
    }
    if let Err(err) = show_existing(ctx) {
        tracing::debug!(error = %err, "existing attachments not shown");
    }
}

fn append_removal(form: &Element, id: &str) -> Result<(), DomError> {
    let hidden = dom::document()?
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| DomError::Js("input element expected".into()))?;
    hidden.set_type("hidden");
    hidden.set_name(config::REMOVE_ATTACHMENT_FIELD);
    hidden.set_value(id);
    form.append_child(&hidden)?;
    Ok(())
}

/// Render the remaining existing attachments; the section hides when none are left.
fn show_existing(ctx: &PageContext) -> Result<(), DomError> {
    let section = dom::by_id(ids::EDIT_EXISTING_SECTION)?;
    let list = dom::by_id(ids::EDIT_EXISTING_LIST)?;
    let existing = ctx.existing.borrow();
    render_into(&list, &render::existing(existing.items()), None)?;
    dom::set_block(&section, !existing.is_empty());
    Ok(())
}

// ============================================================================
// Submission modal
// ============================================================================

/// Prepare and open the submission modal for `assignment`.
pub fn open_submit_modal(ctx: &Rc<PageContext>, assignment: &str) {
    forms::fill(ids::SUBMIT_ASSIGNMENT_ID, assignment);
    forms::fill(ids::SUBMIT_REMOVE_ATTACHMENT, "false");

    let post = dom::document()
        .ok()
        .and_then(|doc| {
            doc.query_selector(&format!("[{}=\"{}-missing\"]", attrs::POST_ID, assignment))
                .ok()
                .flatten()
        });
    for (id, part) in [
        (ids::SUBMIT_POST_TITLE, "title"),
        (ids::SUBMIT_POST_DESC, "body"),
        (ids::SUBMIT_POST_META, "meta"),
    ] {
        dom::set_text(id, &post_text(post.as_ref(), part));
    }

    let current = dom::by_id(ids::STUDENT_SUBMISSION_DATA)
        .ok()
        .and_then(|data| {
            data.query_selector(&format!("[{}=\"{}\"]", attrs::ASSIGNMENT_ID, assignment))
                .ok()
                .flatten()
        })
        .map(|el| descriptor(&el, DescriptorSource::Submission));
    if let Err(err) = show_submission(current.as_ref()) {
        tracing::debug!(error = %err, "submission attachment not shown");
    }

    modal::open_modal(ctx, ids::SUBMIT_MODAL);
}

/// Trimmed text of `.post-note-{part}` inside `post`, or empty.
fn post_text(post: Option<&Element>, part: &str) -> String {
    post.and_then(|post| {
        post.query_selector(&format!(".{}-{}", classes::POST_NOTE, part))
            .ok()
            .flatten()
    })
    .and_then(|el| el.text_content())
    .map(|text| text.trim().to_string())
    .unwrap_or_default()
}

fn show_submission(attachment: Option<&ExistingAttachment>) -> Result<(), DomError> {
    let section = dom::by_id(ids::SUBMIT_EXISTING_SECTION)?;
    let preview = dom::by_id(ids::SUBMIT_EXISTING_PREVIEW)?;
    let list = render::submission(attachment);
    render_into(&preview, &list, None)?;
    dom::set_block(&section, !list.is_empty());
    Ok(())
}

/// Drop the current submission attachment from the form.
pub fn remove_submission_attachment() {
    if let Err(err) = show_submission(None) {
        tracing::debug!(error = %err, "submission attachment section missing");
    }
    forms::fill(ids::SUBMIT_REMOVE_ATTACHMENT, "true");
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::utils::testing::{by_id, display, mount, query};

    const EDIT_PAGE: &str = r#"
        <div id="postEditModal" aria-hidden="true">
          <form id="postEditForm">
            <div id="peExistingAttachmentsSection" style="display: none">
              <div id="peExistingAttachments"></div>
            </div>
          </form>
        </div>
        <article class="post-note">
          <button id="editPost" data-post-id="p1" data-post-type="RESOURCE"></button>
          <a data-attachment-id="a1" data-attachment-name="diagram.png"
             data-attachment-image="true" data-attachment-inline="/attachments/a1/inline"></a>
          <a data-attachment-id="a2" data-attachment-name="syllabus.pdf"></a>
          <a data-attachment-id="" data-attachment-name="ghost"></a>
        </article>"#;

    fn removal_fields(form: &Element) -> Vec<String> {
        query(form, &format!("input[name=\"{}\"]", config::REMOVE_ATTACHMENT_FIELD))
            .iter()
            .map(|input| input.unchecked_ref::<HtmlInputElement>().value())
            .collect()
    }

    #[wasm_bindgen_test]
    fn edit_flow_marks_each_removal_once() {
        let host = mount(EDIT_PAGE);
        let ctx = Rc::new(PageContext::new());
        let form: Element = by_id(ids::POST_EDIT_FORM);
        let section: Element = by_id(ids::EDIT_EXISTING_SECTION);
        let list: Element = by_id(ids::EDIT_EXISTING_LIST);

        open_edit_post(&ctx, &by_id::<Element>("editPost"));
        assert_eq!(display(&section), "block");
        assert_eq!(query(&list, ".file-preview-item").len(), 2);
        assert_eq!(query(&list, "img").len(), 1);
        let modal: Element = by_id(ids::POST_EDIT_MODAL);
        assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("false"));

        remove_existing(&ctx, "a1");
        remove_existing(&ctx, "a1");
        assert_eq!(removal_fields(&form), ["a1"]);
        assert_eq!(query(&list, ".file-preview-item").len(), 1);
        assert_eq!(display(&section), "block");

        remove_existing(&ctx, "a2");
        assert_eq!(removal_fields(&form), ["a1", "a2"]);
        assert!(query(&list, ".file-preview-item").is_empty());
        assert_eq!(display(&section), "none");

        // reopening starts from the post's attachments again
        open_edit_post(&ctx, &by_id::<Element>("editPost"));
        assert!(removal_fields(&form).is_empty());
        assert_eq!(query(&list, ".file-preview-item").len(), 2);

        host.remove();
    }

    #[wasm_bindgen_test]
    fn submission_attachment_shows_and_removes() {
        let host = mount(
            r#"<div id="submitModal" aria-hidden="true">
                 <input type="hidden" id="smAssignmentId">
                 <input type="hidden" id="smRemoveAttachment" value="true">
                 <h3 id="smPostTitle"></h3><p id="smPostDesc"></p><p id="smPostMeta"></p>
                 <div id="smExistingAttachmentSection" style="display: none">
                   <div id="smExistingAttachment"></div>
                 </div>
               </div>
               <article data-post-id="as1-missing">
                 <h4 class="post-note-title"> Essay </h4>
                 <p class="post-note-body">Write 500 words.</p>
               </article>
               <div id="studentSubmissionData">
                 <span data-assignment-id="as1" data-attachment-id="s9"
                       data-attachment-name="essay.pdf" data-attachment-pdf="true"></span>
               </div>"#,
        );
        let ctx = Rc::new(PageContext::new());
        let section: Element = by_id(ids::SUBMIT_EXISTING_SECTION);
        let preview: Element = by_id(ids::SUBMIT_EXISTING_PREVIEW);
        let flag: HtmlInputElement = by_id(ids::SUBMIT_REMOVE_ATTACHMENT);

        open_submit_modal(&ctx, "as1");
        assert_eq!(by_id::<HtmlInputElement>(ids::SUBMIT_ASSIGNMENT_ID).value(), "as1");
        assert_eq!(flag.value(), "false");
        let title: Element = by_id(ids::SUBMIT_POST_TITLE);
        assert_eq!(title.text_content().as_deref(), Some("Essay"));
        let meta: Element = by_id(ids::SUBMIT_POST_META);
        assert_eq!(meta.text_content().as_deref(), Some(""));
        assert_eq!(display(&section), "block");
        let badges = query(&preview, ".file-preview-file");
        assert_eq!(badges[0].text_content().as_deref(), Some("PDF"));

        remove_submission_attachment();
        assert_eq!(flag.value(), "true");
        assert_eq!(display(&section), "none");
        assert!(query(&preview, ".file-preview-item").is_empty());

        host.remove();
    }
}
