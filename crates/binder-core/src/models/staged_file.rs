//! Locally selected files.

/// A platform file object the staging store can hold.
///
/// Implemented by the browser layer for `web_sys::File` and by test doubles.
pub trait LocalFile {
    /// File name as reported by the picker.
    fn name(&self) -> String;
    /// Size in bytes; may be non-finite if the platform does not know it.
    fn size(&self) -> f64;
    /// MIME type, empty when unknown.
    fn mime_type(&self) -> String;
}

/// Immutable metadata of one staged file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    /// Size in bytes, `None` when the picker reported no usable size.
    pub size: Option<u64>,
    pub mime_type: String,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, size: Option<u64>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Snapshot the metadata of a platform file.
    pub fn from_local(file: &impl LocalFile) -> Self {
        Self::new(file.name(), size_from_f64(file.size()), file.mime_type())
    }

    /// Whether the file gets an image preview.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Convert a platform size to whole bytes, rejecting non-finite and negative values.
fn size_from_f64(size: f64) -> Option<u64> {
    (size.is_finite() && size >= 0.0).then_some(size as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Picked(&'static str, f64, &'static str);

    impl LocalFile for Picked {
        fn name(&self) -> String {
            self.0.to_string()
        }
        fn size(&self) -> f64 {
            self.1
        }
        fn mime_type(&self) -> String {
            self.2.to_string()
        }
    }

    #[test]
    fn test_from_local() {
        let file = StagedFile::from_local(&Picked("cat.png", 2048.0, "image/png"));
        assert_eq!(file, StagedFile::new("cat.png", Some(2048), "image/png"));
        assert!(file.is_image());
    }

    #[test]
    fn test_unknown_size() {
        assert_eq!(StagedFile::from_local(&Picked("a", f64::NAN, "")).size, None);
        assert_eq!(StagedFile::from_local(&Picked("a", f64::INFINITY, "")).size, None);
        assert_eq!(StagedFile::from_local(&Picked("a", -1.0, "")).size, None);
    }

    #[test]
    fn test_is_image() {
        assert!(!StagedFile::new("doc.pdf", Some(1), "application/pdf").is_image());
        assert!(!StagedFile::new("blob", Some(1), "").is_image());
        assert!(StagedFile::new("x.webp", None, "image/webp").is_image());
    }
}
