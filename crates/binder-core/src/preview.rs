//! Revocable display handles for staged images.
//!
//! A [`PreviewResource`] wraps one URL minted by a [`PreviewUrls`]
//! implementation (object URLs in the browser). The handle is owned by the
//! staging entry that created it and is released on the same code path that
//! drops the entry.

use crate::error::PreviewError;

/// Mints and revokes preview URLs for platform files.
pub trait PreviewUrls {
    /// Platform file type the URLs point at.
    type Source;

    /// Create a URL valid until [`revoke`](Self::revoke) is called.
    fn create(&mut self, source: &Self::Source) -> Result<String, PreviewError>;

    /// Invalidate a URL previously returned by [`create`](Self::create).
    fn revoke(&mut self, url: &str);
}

/// A live (or already released) preview handle.
///
/// Not `Clone`: exactly one owner may release it.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewResource {
    url: Option<String>,
}

impl PreviewResource {
    /// Acquire a handle for `source`.
    pub fn acquire<U: PreviewUrls>(urls: &mut U, source: &U::Source) -> Result<Self, PreviewError> {
        let url = urls.create(source)?;
        Ok(Self { url: Some(url) })
    }

    /// URL to display, `None` once released.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.url.is_some()
    }

    /// Revoke the URL. Releasing twice is a no-op.
    pub fn release<U: PreviewUrls>(&mut self, urls: &mut U) {
        if let Some(url) = self.url.take() {
            urls.revoke(&url);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory files and a URL minter that tracks live handles.

    use std::collections::BTreeSet;

    use super::*;
    use crate::models::LocalFile;

    #[derive(Clone, Debug, PartialEq)]
    pub struct TestFile {
        pub name: &'static str,
        pub size: f64,
        pub mime: &'static str,
    }

    impl TestFile {
        pub fn image(name: &'static str) -> Self {
            Self { name, size: 2048.0, mime: "image/png" }
        }

        pub fn pdf(name: &'static str) -> Self {
            Self { name, size: 1536.0, mime: "application/pdf" }
        }
    }

    impl LocalFile for TestFile {
        fn name(&self) -> String {
            self.name.to_string()
        }
        fn size(&self) -> f64 {
            self.size
        }
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    #[derive(Debug, Default)]
    pub struct CountingUrls {
        next: usize,
        pub live: BTreeSet<String>,
        pub revoked: Vec<String>,
    }

    impl CountingUrls {
        pub fn live_count(&self) -> usize {
            self.live.len()
        }
    }

    impl PreviewUrls for CountingUrls {
        type Source = TestFile;

        fn create(&mut self, source: &TestFile) -> Result<String, PreviewError> {
            self.next += 1;
            let url = format!("blob:test/{}/{}", self.next, source.name);
            self.live.insert(url.clone());
            Ok(url)
        }

        fn revoke(&mut self, url: &str) {
            assert!(self.live.remove(url), "revoked unknown or dead url {url}");
            self.revoked.push(url.to_string());
        }
    }
}
