use std::fmt;

/// Opaque identity of a document, as supplied by the document source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The exact request a cached assist result is valid for.
///
/// Two keys match only if all four fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub document: DocumentId,
    /// Document version, monotonically increasing per document
    pub version: i64,
    /// Selection start
    pub offset: usize,
    /// Selection length (0 for a caret)
    pub length: usize,
}

impl QueryKey {
    pub fn new(document: DocumentId, version: i64, offset: usize, length: usize) -> Self {
        Self {
            document,
            version,
            offset,
            length,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@v{} [{}+{}]",
            self.document, self.version, self.offset, self.length
        )
    }
}
