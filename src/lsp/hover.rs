//! Hover information for DQL documents.
//!
//! Resolves the word under the cursor and renders a templated Markdown
//! description. No symbol table is consulted.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::document::{extract_word_at_offset, position_to_offset};
use crate::error::Error;

/// Placeholder shown when the cursor does not touch a word.
const NO_WORD: &str = "(no word)";

/// Generate hover content for a cursor position.
///
/// Fails with `OutOfRange` variants when the position does not exist in the
/// document.
pub fn hover_at_position(text: &str, position: Position) -> Result<Hover, Error> {
    let offset = position_to_offset(text, position)?;

    let mut word = extract_word_at_offset(text, offset);
    if word.is_empty() {
        word = NO_WORD;
    }

    Ok(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format!("Information about the word: `{}`", word),
        }),
        range: None,
    })
}
