//! Output side of the state machines.
//!
//! The page is a sink, not a store of truth: state lives in
//! [`FileStagingStore`](crate::FileStagingStore) and [`Pager`](crate::Pager),
//! and these traits receive the projections after every transition.

use crate::pager::PagerView;
use crate::render::PreviewList;

/// Receives staging projections for one file input.
pub trait StagingView<F> {
    /// Replace the control's reportable file set with `files`, in order.
    fn sync_files(&mut self, files: &[&F]);

    /// Replace the preview area's children with `previews`.
    fn show_previews(&mut self, previews: &PreviewList);
}

/// Receives pager projections.
pub trait PagerSink {
    fn show_pager(&mut self, view: &PagerView);
}
