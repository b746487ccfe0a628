use serde::{Deserialize, Serialize};

/// A single text replacement within the requested document.
///
/// Offsets are byte offsets into the document text the assist was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEdit {
    pub offset: usize,
    pub length: usize,
    pub replacement: String,
}

/// An assist suggested by the analysis backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceChange {
    /// Human readable description, shown as the code action title
    pub message: String,
    #[serde(default)]
    pub edits: Vec<SourceEdit>,
}

impl SourceChange {
    pub fn new(message: impl Into<String>, edits: Vec<SourceEdit>) -> Self {
        Self {
            message: message.into(),
            edits,
        }
    }
}
