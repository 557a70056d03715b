//! Application configuration.
//!
//! Centralizes the attribute protocol shared with the server-rendered
//! templates: element ids, `data-*` attribute names, action names and
//! class names.

use binder_core::{CarouselOptions, ReplaceFlagPolicy, StagingOptions};
use tracing::Level;

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

// =============================================================================
// Staging Configuration
// =============================================================================

/// File inputs wired to a preview area.
pub const FILE_INPUT_SELECTOR: &str = "input[type=\"file\"][data-preview-target]";

/// Placeholder shown by an empty preview area.
pub const EMPTY_PREVIEW_TEXT: &str = "No file selected.";

/// Form field carrying one id per existing attachment marked for removal.
pub const REMOVE_ATTACHMENT_FIELD: &str = "removeAttachmentIds";

/// File inputs whose selection checks a "replace attachments" box:
/// `(input id, checkbox id)`.
pub const REPLACE_FLAG_INPUTS: &[(&str, &str)] =
    &[(ids::EDIT_RESOURCE_FILE, ids::EDIT_REPLACE_ATTACHMENTS)];

/// Staging behavior for every input on the page.
pub const STAGING: StagingOptions = StagingOptions {
    replace_flag: ReplaceFlagPolicy::ClearWhenEmpty,
};

/// Checkbox id tied to a file input, if any.
pub fn replace_flag_for(input_id: &str) -> Option<&'static str> {
    REPLACE_FLAG_INPUTS
        .iter()
        .find(|(input, _)| *input == input_id)
        .map(|(_, flag)| *flag)
}

// =============================================================================
// Pager Configuration
// =============================================================================

/// Pagers set up on every page load.
pub fn carousels() -> Vec<CarouselOptions> {
    vec![
        CarouselOptions::submission_review(),
        CarouselOptions::student_result(),
    ]
}

// =============================================================================
// Attribute Protocol
// =============================================================================

/// `data-*` attribute names.
pub mod attrs {
    pub const ACTION: &str = "data-action";
    pub const PREVIEW_TARGET: &str = "data-preview-target";
    /// Identity assigned to each staged input at setup.
    pub const STAGING_KEY: &str = "data-staging-key";
    pub const INDEX: &str = "data-index";
    pub const MODAL_ID: &str = "data-modal-id";
    pub const ASSIGNMENT_ID: &str = "data-assignment-id";
    pub const SUBMITTED_AT: &str = "data-submitted-at";
    pub const DUE: &str = "data-due";
    pub const POST_TYPE_FILTER: &str = "data-type";
    pub const ENROLLMENT_LIST: &str = "data-list";

    pub const ATTACHMENT_ID: &str = "data-attachment-id";
    pub const ATTACHMENT_NAME: &str = "data-attachment-name";
    pub const ATTACHMENT_IMAGE: &str = "data-attachment-image";
    pub const ATTACHMENT_PDF: &str = "data-attachment-pdf";
    pub const ATTACHMENT_INLINE: &str = "data-attachment-inline";

    pub const POST_ID: &str = "data-post-id";
    pub const POST_TYPE: &str = "data-post-type";
    pub const POST_TITLE: &str = "data-post-title";
    pub const POST_DESC: &str = "data-post-desc";
    pub const POST_TTC: &str = "data-post-ttc";
    pub const POST_DUE: &str = "data-post-due";
    pub const POST_MAX: &str = "data-post-max";
}

/// `data-action` values.
pub mod actions {
    pub const REMOVE_FILE_PREVIEW: &str = "remove-file-preview";
    pub const REMOVE_EXISTING_ATTACHMENT: &str = "remove-existing-attachment";
    pub const REMOVE_SUBMISSION_ATTACHMENT: &str = "remove-submission-attachment";
    pub const OPEN_MODAL: &str = "open-modal";
    pub const CLOSE_MODAL: &str = "close-modal";
    pub const OPEN_EDIT_POST: &str = "open-edit-post";
    pub const OPEN_SUBMIT_MODAL: &str = "open-submit-modal";
    pub const OPEN_REVIEW_MODAL: &str = "open-review-modal";
    pub const OPEN_STUDENT_RESULT: &str = "open-student-result";
    pub const TOGGLE_MANAGE: &str = "toggle-manage";
}

/// Class names.
pub mod classes {
    pub const PREVIEW_ITEM: &str = "file-preview-item";
    pub const PREVIEW_IMAGE: &str = "file-preview-image";
    pub const PREVIEW_FILE: &str = "file-preview-file";
    pub const PREVIEW_META: &str = "file-preview-meta";
    pub const PREVIEW_REMOVE: &str = "file-preview-remove";
    pub const PREVIEW_EMPTY: &str = "file-preview-empty";
    pub const ACTIVE: &str = "is-active";
    pub const OVERDUE: &str = "is-overdue";
    pub const POST_NOTE: &str = "post-note";
    pub const MANAGE_OPEN: &str = "manage-open";
}

/// Element ids rendered by the templates.
pub mod ids {
    // Modals
    pub const POST_EDIT_MODAL: &str = "postEditModal";
    pub const SUBMIT_MODAL: &str = "submitModal";
    pub const SUBMISSION_REVIEW_MODAL: &str = "submissionReviewModal";
    pub const STUDENT_RESULT_MODAL: &str = "studentResultModal";

    // Post edit form
    pub const POST_EDIT_FORM: &str = "postEditForm";
    pub const EDIT_POST_ID: &str = "pePostId";
    pub const EDIT_TITLE: &str = "peTitle";
    pub const EDIT_DESC: &str = "peDesc";
    pub const EDIT_TTC: &str = "peTtc";
    pub const EDIT_MAX: &str = "peMax";
    pub const EDIT_DUE_LOCAL: &str = "peDueLocal";
    pub const EDIT_DUE_HIDDEN: &str = "peDueHidden";
    pub const EDIT_ASSIGNMENT_FIELDS: &str = "peAssignmentFields";
    pub const EDIT_RESOURCE_FIELDS: &str = "peResourceFields";
    pub const EDIT_RESOURCE_FILE: &str = "peResourceFile";
    pub const EDIT_REPLACE_ATTACHMENTS: &str = "peReplaceAtts";
    pub const EDIT_EXISTING_SECTION: &str = "peExistingAttachmentsSection";
    pub const EDIT_EXISTING_LIST: &str = "peExistingAttachments";

    // Submit form
    pub const SUBMIT_ASSIGNMENT_ID: &str = "smAssignmentId";
    pub const SUBMIT_REMOVE_ATTACHMENT: &str = "smRemoveAttachment";
    pub const SUBMIT_POST_TITLE: &str = "smPostTitle";
    pub const SUBMIT_POST_DESC: &str = "smPostDesc";
    pub const SUBMIT_POST_META: &str = "smPostMeta";
    pub const SUBMIT_EXISTING_SECTION: &str = "smExistingAttachmentSection";
    pub const SUBMIT_EXISTING_PREVIEW: &str = "smExistingAttachment";
    pub const STUDENT_SUBMISSION_DATA: &str = "studentSubmissionData";

    // Pager filters
    pub const SUBMISSION_FILTER: &str = "submissionFilter";
    pub const STUDENT_RESULT_FILTER: &str = "studentResultFilter";

    // Create form and post list
    pub const CREATE_TYPE: &str = "pcType";
    pub const ASSIGNMENT_FORM: &str = "assignmentForm";
    pub const RESOURCE_FORM: &str = "resourceForm";
    pub const CREATE_DUE_LOCAL: &str = "dueLocal";
    pub const CREATE_DUE_HIDDEN: &str = "dueHidden";
    pub const POST_FILTER: &str = "postFilter";
    pub const ENROLLMENT_FILTER: &str = "enrollmentFilter";

    // Manage side panel
    pub const MAIN: &str = "main";
    pub const MANAGE_SIDE: &str = "manageSide";
}

/// Modals closed by the Escape key.
pub const ESCAPE_CLOSES: &[&str] = &[
    "postCreateModal",
    ids::POST_EDIT_MODAL,
    ids::SUBMIT_MODAL,
    ids::SUBMISSION_REVIEW_MODAL,
    ids::STUDENT_RESULT_MODAL,
    "classroomEditModal",
];

/// Form actions of the post edit form.
pub mod routes {
    pub const RESOURCE_EDIT: &str = "/classroom/post/resource/edit";
    pub const ASSIGNMENT_EDIT: &str = "/classroom/post/assignment/edit";
}
