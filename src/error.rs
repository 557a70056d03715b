//! Error types for the browser binding layer.
//!
//! Every variant degrades to a logged no-op at the event handler that hit
//! it; a failure in one control never stops the others.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// DOM lookup and browser API failures.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// Browser window or document not available.
    #[error("browser document not available")]
    NoDocument,
    /// Referenced element id does not exist on the page.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// Element exists but has the wrong type.
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    /// Required attribute absent or empty.
    #[error("missing attribute {0}")]
    MissingAttribute(&'static str),
    /// A browser call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
