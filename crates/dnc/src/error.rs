//! The single error kind raised by hover-activated elements

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Diagnostic tag naming the kind of widget an element belongs to
///
/// Only used for labeling (e.g. `"button"`, `"menu"`, `"carousel"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementType(Cow<'static, str>);

impl ElementType {
    /// Create a new element type tag
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// Get the tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ElementType {
    fn default() -> Self {
        Self::new("element")
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ElementType {
    fn from(tag: &'static str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

/// A direct activation gesture (click) reached a hover-activated element
///
/// Clicking is never how these widgets are operated, so every click is
/// reported to the caller. The engine does not recover from, log or swallow
/// it: hosts are expected to catch it (for example to show a message
/// explaining that the element must be hovered).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("click detected on {element_type}")]
pub struct InteractionRejected {
    /// Tag of the element that was clicked
    pub element_type: ElementType,
}

impl InteractionRejected {
    /// Create a rejection for the given element type
    pub fn new(element_type: impl Into<ElementType>) -> Self {
        Self {
            element_type: element_type.into(),
        }
    }
}
