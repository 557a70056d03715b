//! Configuration for the staging store and pagers.
//!
//! Pager options arrive from page scripts as plain objects, so
//! [`CarouselOptions`] deserializes from camelCase keys.

use serde::Deserialize;

// =============================================================================
// Pager Configuration
// =============================================================================

/// Element ids and selectors wiring one pager to the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Group selector (`<select>`) id.
    pub filter_id: String,
    pub prev_id: String,
    pub next_id: String,
    /// Element receiving the `"i / n"` status text.
    pub status_id: String,
    /// CSS selector enumerating the cards.
    pub card_selector: String,
    /// Element shown while the selected group is empty.
    #[serde(default)]
    pub empty_id: Option<String>,
    /// Read `data-due` from selector options and mark late cards.
    #[serde(default)]
    pub due_data: bool,
}

impl CarouselOptions {
    /// Submission review pager (instructor view, with overdue marking).
    pub fn submission_review() -> Self {
        Self {
            filter_id: "submissionFilter".into(),
            prev_id: "submissionPrev".into(),
            next_id: "submissionNext".into(),
            status_id: "submissionNavStatus".into(),
            card_selector: "[data-submission-card]".into(),
            empty_id: Some("submissionReviewEmpty".into()),
            due_data: true,
        }
    }

    /// Student result pager (no overdue marking).
    pub fn student_result() -> Self {
        Self {
            filter_id: "studentResultFilter".into(),
            prev_id: "studentResultPrev".into(),
            next_id: "studentResultNext".into(),
            status_id: "studentResultStatus".into(),
            card_selector: "[data-student-result-card]".into(),
            empty_id: Some("studentResultEmpty".into()),
            due_data: false,
        }
    }
}

// =============================================================================
// Staging Configuration
// =============================================================================

/// What happens to a checked "replace attachments" flag when a staged file
/// is removed from the same input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReplaceFlagPolicy {
    /// Leave the flag as the user set it.
    Keep,
    /// Uncheck once no staged file remains.
    #[default]
    ClearWhenEmpty,
    /// Uncheck on every removal.
    ClearOnRemoval,
}

impl ReplaceFlagPolicy {
    /// Flag value after a removal leaving `remaining` staged files.
    pub fn after_removal(self, checked: bool, remaining: usize) -> bool {
        match self {
            Self::Keep => checked,
            Self::ClearWhenEmpty => checked && remaining > 0,
            Self::ClearOnRemoval => false,
        }
    }
}

/// Staging behavior knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagingOptions {
    #[serde(default)]
    pub replace_flag: ReplaceFlagPolicy,
}
