//! Server-known attachments shown next to newly staged files.

/// Preview style of an existing attachment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Pdf,
    #[default]
    Other,
}

impl AttachmentKind {
    /// Resolve from the `data-attachment-image` / `data-attachment-pdf` flags.
    pub fn from_flags(is_image: bool, is_pdf: bool) -> Self {
        match (is_image, is_pdf) {
            (true, _) => Self::Image,
            (false, true) => Self::Pdf,
            (false, false) => Self::Other,
        }
    }
}

/// Read-only descriptor of a persisted attachment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExistingAttachment {
    pub id: String,
    pub name: Option<String>,
    pub kind: AttachmentKind,
    pub inline_url: Option<String>,
}

impl ExistingAttachment {
    /// Inline URL served for an attachment id.
    pub fn inline_url_for(id: &str) -> String {
        format!("/attachments/{}/inline", id)
    }

    /// Whether the attachment previews as an image (needs an inline URL).
    pub fn shows_image(&self) -> bool {
        self.kind == AttachmentKind::Image && self.inline_url.is_some()
    }
}

/// Ordered, duplicate-free set of attachment ids marked for removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovalSet {
    ids: Vec<String>,
}

impl RemovalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an id. Returns `false` if it was already marked or is empty.
    pub fn mark(&mut self, id: &str) -> bool {
        if id.is_empty() || self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|marked| marked == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Existing attachments of the post being edited, minus the ones marked for removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExistingAttachments {
    items: Vec<ExistingAttachment>,
    removed: RemovalSet,
}

impl ExistingAttachments {
    /// Start over with `items`, dropping descriptors without an id and
    /// forgetting earlier removals.
    pub fn load(&mut self, items: Vec<ExistingAttachment>) {
        self.items = items.into_iter().filter(|att| !att.id.is_empty()).collect();
        self.removed.clear();
    }

    /// Mark `id` for removal and drop it from the list.
    ///
    /// Returns `true` only the first time an id is marked.
    pub fn remove(&mut self, id: &str) -> bool {
        self.items.retain(|att| att.id != id);
        self.removed.mark(id)
    }

    pub fn items(&self) -> &[ExistingAttachment] {
        &self.items
    }

    pub fn removed(&self) -> &RemovalSet {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_flags() {
        assert_eq!(AttachmentKind::from_flags(true, true), AttachmentKind::Image);
        assert_eq!(AttachmentKind::from_flags(false, true), AttachmentKind::Pdf);
        assert_eq!(AttachmentKind::from_flags(false, false), AttachmentKind::Other);
    }

    #[test]
    fn test_image_needs_inline_url() {
        let mut att = ExistingAttachment {
            id: "a1".into(),
            kind: AttachmentKind::Image,
            ..Default::default()
        };
        assert!(!att.shows_image());
        att.inline_url = Some(ExistingAttachment::inline_url_for("a1"));
        assert!(att.shows_image());
        assert_eq!(att.inline_url.as_deref(), Some("/attachments/a1/inline"));
    }

    #[test]
    fn test_removal_set_dedupes() {
        let mut set = RemovalSet::new();
        assert!(set.mark("a"));
        assert!(set.mark("b"));
        assert!(!set.mark("a"));
        assert!(!set.mark(""));
        assert_eq!(set.ids(), ["a".to_string(), "b".to_string()]);

        set.clear();
        assert!(set.is_empty());
        assert!(set.mark("a"));
    }

    fn attachment(id: &str) -> ExistingAttachment {
        ExistingAttachment {
            id: id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_existing_attachments_load_filters_ids() {
        let mut list = ExistingAttachments::default();
        list.load(vec![attachment("a"), attachment(""), attachment("b")]);
        let ids: Vec<_> = list.items().iter().map(|att| att.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_existing_attachments_remove() {
        let mut list = ExistingAttachments::default();
        list.load(vec![attachment("a"), attachment("b")]);

        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert_eq!(list.items().len(), 1);
        assert!(list.removed().contains("a"));

        assert!(list.remove("b"));
        assert!(list.is_empty());
        assert_eq!(list.removed().ids().len(), 2);

        list.load(vec![attachment("c")]);
        assert!(list.removed().is_empty());
    }
}
