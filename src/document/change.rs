//! Change-event shapes delivered by `textDocument/didChange`.

use tower_lsp::lsp_types::TextDocumentContentChangeEvent;

/// The shape of a single content change.
///
/// The server only advertises full-document sync, so a well-behaved client
/// sends whole replacements. Incremental range patches are still possible on
/// the wire and must be rejected explicitly rather than misapplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentChange {
    /// The full replacement text of the document.
    Whole(String),
    /// A range-scoped patch, unsupported under full sync.
    Incremental,
}

impl From<TextDocumentContentChangeEvent> for ContentChange {
    fn from(event: TextDocumentContentChangeEvent) -> Self {
        if event.range.is_none() {
            ContentChange::Whole(event.text)
        } else {
            ContentChange::Incremental
        }
    }
}
