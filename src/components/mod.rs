//! Page components, each wiring one kind of control to the core state machines.
//!
//! - [`file_preview`] - File inputs with staged previews and removal
//! - [`preview_list`] - DOM rendering of preview lists
//! - [`carousel`] - Filtered pagers over submission cards
//! - [`attachments`] - Existing attachments in the edit and submit modals
//! - [`modal`] - Modal visibility and staged-file reset on open
//! - [`forms`] - Stateless form helpers

pub mod attachments;
pub mod carousel;
pub mod file_preview;
pub mod forms;
pub mod modal;
pub mod preview_list;
