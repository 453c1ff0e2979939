//! Document state management for the DQL LSP.

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

/// State for a single open document.
///
/// The server advertises full-document sync, so `content` is always the
/// complete text as last delivered by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    /// The full current text of the document.
    pub content: String,
    /// True once a change has been applied without an intervening save.
    pub modified: bool,
}

/// Thread-safe storage for open documents.
///
/// Every mutation replaces the whole entry (last write wins); no merging of
/// partial edits happens here.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, DocumentState>,
}

impl DocumentStore {
    /// Create a new empty document store.
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Track a newly opened document.
    pub fn open(&self, uri: Url, text: String) {
        self.documents.insert(
            uri,
            DocumentState {
                content: text,
                modified: false,
            },
        );
    }

    /// Replace a document's content after a change notification.
    ///
    /// Creates the entry if the open notification never arrived, tolerating
    /// out-of-order delivery.
    pub fn update(&self, uri: Url, text: String) {
        self.documents.insert(
            uri,
            DocumentState {
                content: text,
                modified: true,
            },
        );
    }

    /// Replace a document's content after a save, clearing the modified flag.
    pub fn save(&self, uri: Url, text: String) {
        self.documents.insert(
            uri,
            DocumentState {
                content: text,
                modified: false,
            },
        );
    }

    /// Stop tracking a document. A no-op if the URI is already closed.
    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Get a snapshot of a document's state.
    pub fn get(&self, uri: &Url) -> Option<DocumentState> {
        self.documents.get(uri).map(|r| r.clone())
    }
}
