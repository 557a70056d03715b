//! Per-input staging of locally selected files.
//!
//! The native file picker only reports whole selections and cannot drop a
//! single file. The store is therefore authoritative: it keeps one ordered
//! sequence per input, and after a removal the control is rebuilt from the
//! sequence through [`StagingView::sync_files`].
//!
//! Every image entry owns exactly one live [`PreviewResource`], acquired when
//! the entry is staged and released on the same path that drops the entry.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::StagingError;
use crate::models::{LocalFile, StagedFile};
use crate::preview::{PreviewResource, PreviewUrls};
use crate::render::{self, PreviewList};
use crate::view::StagingView;

/// One user gesture against a file input.
#[derive(Debug)]
pub enum StagingCommand<F> {
    /// Native selection changed; replaces the whole sequence.
    AddFiles(Vec<F>),
    /// Removal control clicked for the entry at this position.
    RemoveFileAt(usize),
    /// Hosting modal (re)opened.
    Reset,
}

// ============================================================================
// StagedEntry
// ============================================================================

/// A staged file together with its platform object and preview handle.
#[derive(Debug)]
pub struct StagedEntry<F> {
    file: F,
    meta: StagedFile,
    preview: Option<PreviewResource>,
}

impl<F: LocalFile> StagedEntry<F> {
    fn stage<U: PreviewUrls<Source = F>>(file: F, urls: &mut U) -> Self {
        let meta = StagedFile::from_local(&file);
        let preview = if meta.is_image() {
            match PreviewResource::acquire(urls, &file) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    tracing::warn!(file = %meta.name, error = %err, "image staged without preview");
                    None
                }
            }
        } else {
            None
        };
        Self { file, meta, preview }
    }
}

impl<F> StagedEntry<F> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn meta(&self) -> &StagedFile {
        &self.meta
    }

    pub fn preview(&self) -> Option<&PreviewResource> {
        self.preview.as_ref()
    }

    fn release<U: PreviewUrls<Source = F>>(&mut self, urls: &mut U) {
        if let Some(preview) = self.preview.as_mut() {
            preview.release(urls);
        }
        self.preview = None;
    }
}

// ============================================================================
// FileStagingStore
// ============================================================================

/// Staged files for every registered input, keyed by input identity.
pub struct FileStagingStore<K, U: PreviewUrls> {
    inputs: HashMap<K, Vec<StagedEntry<U::Source>>>,
    urls: U,
}

impl<K, U> FileStagingStore<K, U>
where
    K: Eq + Hash + Clone + Debug,
    U: PreviewUrls,
    U::Source: LocalFile,
{
    pub fn new(urls: U) -> Self {
        Self {
            inputs: HashMap::new(),
            urls,
        }
    }

    /// Register an input with an empty sequence.
    pub fn register(&mut self, key: K) {
        self.inputs.entry(key).or_default();
    }

    pub fn is_registered(&self, key: &K) -> bool {
        self.inputs.contains_key(key)
    }

    /// Set the sequence to exactly `files`, releasing every previous handle first.
    pub fn replace_all(&mut self, key: K, files: Vec<U::Source>) {
        let Self { inputs, urls } = self;
        let entries = inputs.entry(key).or_default();
        release_all(entries, urls);
        *entries = files
            .into_iter()
            .map(|file| StagedEntry::stage(file, urls))
            .collect();
    }

    /// Remove the entry at `index`, release its handle and resync the control.
    ///
    /// Out-of-range indices and unknown inputs leave the store untouched.
    pub fn remove_at(
        &mut self,
        key: &K,
        index: usize,
        view: &mut impl StagingView<U::Source>,
    ) -> Result<StagedFile, StagingError> {
        let entries = self
            .inputs
            .get_mut(key)
            .ok_or_else(|| StagingError::UnknownInput(format!("{:?}", key)))?;
        if index >= entries.len() {
            return Err(StagingError::IndexOutOfRange {
                index,
                len: entries.len(),
            });
        }

        let mut removed = entries.remove(index);
        removed.release(&mut self.urls);
        self.resync(key, view)?;
        Ok(removed.meta)
    }

    /// Push the current sequence to the control so a form submission
    /// transmits exactly the staged files.
    pub fn resync(
        &self,
        key: &K,
        view: &mut impl StagingView<U::Source>,
    ) -> Result<(), StagingError> {
        let entries = self
            .inputs
            .get(key)
            .ok_or_else(|| StagingError::UnknownInput(format!("{:?}", key)))?;
        let files: Vec<&U::Source> = entries.iter().map(StagedEntry::file).collect();
        view.sync_files(&files);
        Ok(())
    }

    /// Clear the sequence and release every handle. Unknown inputs are ignored.
    pub fn reset(&mut self, key: &K) {
        let Self { inputs, urls } = self;
        if let Some(entries) = inputs.get_mut(key) {
            release_all(entries, urls);
        }
    }

    /// Apply one command, then hand the fresh projection to `view`.
    ///
    /// A rejected command changes nothing and renders nothing.
    pub fn dispatch(
        &mut self,
        key: K,
        command: StagingCommand<U::Source>,
        view: &mut impl StagingView<U::Source>,
    ) -> Result<(), StagingError> {
        match command {
            StagingCommand::AddFiles(files) => self.replace_all(key.clone(), files),
            StagingCommand::RemoveFileAt(index) => {
                let removed = self.remove_at(&key, index, view)?;
                tracing::debug!(input = ?key, index, file = %removed.name, "unstaged file");
            }
            StagingCommand::Reset => self.reset(&key),
        }
        view.show_previews(&self.render(&key));
        Ok(())
    }

    /// Staged entries for `key`, empty when unknown.
    pub fn entries(&self, key: &K) -> &[StagedEntry<U::Source>] {
        self.inputs.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Staged file metadata for `key`, in display order.
    pub fn staged(&self, key: &K) -> impl Iterator<Item = &StagedFile> {
        self.entries(key).iter().map(StagedEntry::meta)
    }

    pub fn len(&self, key: &K) -> usize {
        self.entries(key).len()
    }

    /// Live preview handles across all inputs.
    pub fn live_previews(&self) -> usize {
        self.inputs
            .values()
            .flatten()
            .filter(|entry| entry.preview.as_ref().is_some_and(PreviewResource::is_live))
            .count()
    }

    /// Staged image files across all inputs.
    pub fn staged_images(&self) -> usize {
        self.inputs
            .values()
            .flatten()
            .filter(|entry| entry.meta.is_image())
            .count()
    }

    /// Current projection for `key`.
    pub fn render(&self, key: &K) -> PreviewList {
        render::staged(self.entries(key))
    }

    pub fn urls(&self) -> &U {
        &self.urls
    }
}

impl<K, U: PreviewUrls> Drop for FileStagingStore<K, U> {
    fn drop(&mut self) {
        let Self { inputs, urls } = self;
        for entries in inputs.values_mut() {
            release_all(entries, urls);
        }
    }
}

fn release_all<U: PreviewUrls>(entries: &mut Vec<StagedEntry<U::Source>>, urls: &mut U) {
    for entry in entries.iter_mut() {
        entry.release(urls);
    }
    entries.clear();
}
