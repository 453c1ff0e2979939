//! Completion support for DQL documents.
//!
//! Classifies the cursor context, then maps the zone to a fixed set of
//! snippet or keyword items.

use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionList, CompletionResponse, InsertTextFormat,
    Position,
};

use super::context::{classify, ContextZone};

/// Build a snippet completion item.
fn snippet(insert: &str, detail: &str) -> CompletionItem {
    CompletionItem {
        label: insert.to_string(),
        kind: Some(CompletionItemKind::SNIPPET),
        detail: Some(detail.to_string()),
        insert_text: Some(insert.to_string()),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..Default::default()
    }
}

/// Build a plain keyword completion item.
fn keyword(word: &str, detail: &str) -> CompletionItem {
    CompletionItem {
        label: word.to_string(),
        kind: Some(CompletionItemKind::KEYWORD),
        detail: Some(detail.to_string()),
        insert_text: Some(word.to_string()),
        insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
        ..Default::default()
    }
}

/// The fixed completion set for a zone.
pub fn items_for_zone(zone: ContextZone) -> Vec<CompletionItem> {
    match zone {
        ContextZone::Empty => vec![snippet("query { }", "Create a new query block")],
        ContextZone::InsideQuery => vec![snippet("me (func: ) { }", "Add query block")],
        ContextZone::InsideFunc => vec![
            keyword("eq()", "Equality function"),
            keyword("lt()", "Less than function"),
        ],
        ContextZone::InsideEq => vec![keyword("name", "Field name")],
        ContextZone::Unknown => Vec::new(),
    }
}

/// Generate the completion response for a cursor position.
///
/// The full item set is returned in one shot; the list is never marked
/// incomplete.
pub fn completion_at_position(text: &str, position: Position) -> CompletionResponse {
    let zone = classify(text, position);
    tracing::debug!(?zone, ?position, "completion context");

    CompletionResponse::List(CompletionList {
        is_incomplete: false,
        items: items_for_zone(zone),
    })
}
