//! Projection from staged files and existing attachments to preview entries.
//!
//! Rendering is a full replace: the browser layer drops the target's
//! children and builds one node per [`PreviewEntry`]. Nothing here touches
//! preview handles; image entries only borrow the URL of a live
//! [`PreviewResource`](crate::PreviewResource).

use crate::format::human_size;
use crate::models::{AttachmentKind, ExistingAttachment, StagedFile};
use crate::staging::StagedEntry;

/// Visual part of a preview entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewVisual {
    /// Inline image.
    Image { url: String, alt: String },
    /// Text badge standing in for non-image files.
    Badge(String),
}

/// What the entry's removal control does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveControl {
    /// Splice the staged file at this position.
    Staged(usize),
    /// Mark this server-known attachment id for removal.
    Existing(String),
    /// Drop the single existing submission attachment.
    Submission,
}

/// One rendered preview entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewEntry {
    pub visual: PreviewVisual,
    /// `name • size`, or just the name.
    pub meta: String,
    pub remove: RemoveControl,
}

/// Full contents of a preview target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewList {
    /// Nothing staged; the target shows its placeholder.
    #[default]
    Empty,
    Entries(Vec<PreviewEntry>),
}

impl PreviewList {
    fn from_entries(entries: Vec<PreviewEntry>) -> Self {
        if entries.is_empty() {
            Self::Empty
        } else {
            Self::Entries(entries)
        }
    }

    pub fn entries(&self) -> &[PreviewEntry] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Metadata line for a staged file.
pub fn meta_line(file: &StagedFile) -> String {
    match file.size {
        Some(bytes) => format!("{} • {}", file.name, human_size(bytes)),
        None => file.name.clone(),
    }
}

/// Project a staged sequence, in order.
pub fn staged<F>(entries: &[StagedEntry<F>]) -> PreviewList {
    let entries = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let file = entry.meta();
            let visual = match entry.preview().and_then(|p| p.url()) {
                Some(url) => PreviewVisual::Image {
                    url: url.to_string(),
                    alt: non_empty_or(&file.name, "Selected image"),
                },
                None => PreviewVisual::Badge(non_empty_or(&file.name, "Selected file")),
            };
            PreviewEntry {
                visual,
                meta: meta_line(file),
                remove: RemoveControl::Staged(index),
            }
        })
        .collect();
    PreviewList::from_entries(entries)
}

/// Project the existing attachments of a post being edited.
pub fn existing(attachments: &[ExistingAttachment]) -> PreviewList {
    let entries = attachments
        .iter()
        .filter(|att| !att.id.is_empty())
        .map(|att| existing_entry(att, RemoveControl::Existing(att.id.clone())))
        .collect();
    PreviewList::from_entries(entries)
}

/// Project the single existing attachment of a submission.
pub fn submission(attachment: Option<&ExistingAttachment>) -> PreviewList {
    match attachment.filter(|att| !att.id.is_empty()) {
        Some(att) => PreviewList::Entries(vec![existing_entry(att, RemoveControl::Submission)]),
        None => PreviewList::Empty,
    }
}

fn existing_entry(att: &ExistingAttachment, remove: RemoveControl) -> PreviewEntry {
    let name = att.name.as_deref().unwrap_or_default();
    let visual = match (&att.inline_url, att.shows_image()) {
        (Some(url), true) => PreviewVisual::Image {
            url: url.clone(),
            alt: non_empty_or(name, "Existing image"),
        },
        _ => PreviewVisual::Badge(badge_label(att.kind).to_string()),
    };
    PreviewEntry {
        visual,
        meta: non_empty_or(name, "Attachment"),
        remove,
    }
}

fn badge_label(kind: AttachmentKind) -> &'static str {
    match kind {
        AttachmentKind::Pdf => "PDF",
        AttachmentKind::Image | AttachmentKind::Other => "File",
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
