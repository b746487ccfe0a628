//! Open document store: the source of document text and versions

use std::collections::HashMap;

use tokio::sync::RwLock;
use tower_lsp::lsp_types::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub version: i32,
}

#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<HashMap<Url, Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, uri: Url, text: String, version: i32) {
        self.documents
            .write()
            .await
            .insert(uri, Document { text, version });
    }

    /// Replace the text of a document. Stale versions are ignored.
    pub async fn change(&self, uri: Url, text: String, version: i32) {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&uri) {
            Some(document) if document.version > version => {}
            Some(document) => {
                document.text = text;
                document.version = version;
            }
            None => {
                documents.insert(uri, Document { text, version });
            }
        }
    }

    pub async fn close(&self, uri: &Url) -> Option<Document> {
        self.documents.write().await.remove(uri)
    }

    pub async fn get(&self, uri: &Url) -> Option<Document> {
        self.documents.read().await.get(uri).cloned()
    }
}
