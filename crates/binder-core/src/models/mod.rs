//! Data models shared by the staging, preview and pager state machines.
//!
//! - [`StagedFile`], [`LocalFile`] - files selected in the current session
//! - [`ExistingAttachment`], [`AttachmentKind`], [`RemovalSet`] - server-known attachments
//! - [`Card`], [`GroupOption`] - pager data source

mod attachment;
mod card;
mod staged_file;

pub use attachment::{AttachmentKind, ExistingAttachment, ExistingAttachments, RemovalSet};
pub use card::{Card, GroupOption};
pub use staged_file::{LocalFile, StagedFile};
