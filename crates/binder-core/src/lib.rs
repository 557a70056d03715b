//! Client-side state for the classroom pages.
//!
//! This crate holds the target-independent half of the browser layer:
//! every state machine and projection lives here so it can be tested
//! without a DOM.
//!
//! - [`FileStagingStore`] - per-input ordered list of staged files
//! - [`PreviewResource`] - revocable display handle for one staged image
//! - [`render`] - projection from staged files / existing attachments to
//!   preview entries
//! - [`Pager`] - `(group, index)` cursor over pre-grouped cards
//! - [`human_size`] - byte counts for preview metadata lines

pub mod config;
pub mod error;
mod format;
pub mod models;
mod pager;
mod preview;
pub mod render;
mod staging;
pub mod time;
pub mod view;

pub use config::{CarouselOptions, ReplaceFlagPolicy, StagingOptions};
pub use error::{PreviewError, StagingError};
pub use format::human_size;
pub use models::{
    AttachmentKind, Card, ExistingAttachment, ExistingAttachments, GroupOption, LocalFile,
    RemovalSet, StagedFile,
};
pub use pager::{Pager, PagerCommand, PagerState, PagerView};
pub use preview::{PreviewResource, PreviewUrls};
pub use render::{PreviewEntry, PreviewList, PreviewVisual, RemoveControl};
pub use staging::{FileStagingStore, StagedEntry, StagingCommand};
pub use view::{PagerSink, StagingView};
