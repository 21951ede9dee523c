//! Small wrappers over the browser globals the page needs.

use bridgeline_core::RevealError;
use web_sys::{Document, Element, Window};

/// Errors from DOM access and browser API calls.
#[derive(Debug)]
pub enum DomError {
    /// No `window` global (e.g. running in a worker).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// No element with the given id (in the document, or under a page root).
    MissingElement(String),
    /// A browser API call threw.
    JsCall(String),
    /// A reveal slot could not be turned into an effect.
    InvalidEffect(String, RevealError),
}

impl std::fmt::Display for DomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::NoWindow => write!(f, "No window object"),
            DomError::NoDocument => write!(f, "No document on window"),
            DomError::MissingElement(id) => write!(f, "No element with id '{}'", id),
            DomError::JsCall(e) => write!(f, "Browser call failed: {}", e),
            DomError::InvalidEffect(slot, e) => write!(f, "Reveal slot '{}': {}", slot, e),
        }
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Find a descendant of `root` by id, so pages mounted side by side never
/// reach into each other. Ids must be valid CSS identifiers.
pub fn element_in(root: &Element, id: &str) -> Result<Element, DomError> {
    root.query_selector(&format!("#{}", id))
        .map_err(|e| DomError::JsCall(format!("querySelector: {:?}", e)))?
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}
