//! Selection state: at most one timeline element highlighted for editing.

use serde::{Deserialize, Serialize};

/// Kind of selectable timeline element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Video,
    Audio,
    Subtitle,
    Text,
    Image,
}

/// The active selection. Selecting a new element replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// ID of the selected element
    pub id: String,
    /// What collection it lives in
    pub kind: ElementKind,
}

impl Selection {
    /// Create a selection.
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}
