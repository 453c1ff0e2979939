//! Heuristic cursor-context classification for DQL documents.
//!
//! This is a substring scan over the raw text, not a parse. It only needs to
//! be good enough to pick a completion set.

use tower_lsp::lsp_types::Position;

/// The syntactic zone the cursor sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextZone {
    /// The document (or everything up to the cursor) is blank.
    Empty,
    /// Inside a `query` block, before any `func:` argument.
    InsideQuery,
    /// Inside a `func:` argument list.
    InsideFunc,
    /// Inside an `eq()` call. Kept for the completion mapping even though
    /// the current heuristic never reaches it.
    InsideEq,
    /// No recognizable context.
    Unknown,
}

/// Classify the cursor context.
///
/// The scan looks at every line from the top of the document through the
/// cursor's line inclusive. The cursor's own line is taken whole, so text
/// after the cursor on that line still participates in the match.
pub fn classify(text: &str, position: Position) -> ContextZone {
    if text.trim().is_empty() {
        return ContextZone::Empty;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let line = position.line as usize;
    if line >= lines.len() {
        return ContextZone::Unknown;
    }

    let prefix = lines[..=line].join("\n");

    if prefix.contains("query") {
        if prefix.contains("func:") {
            return ContextZone::InsideFunc;
        }
        return ContextZone::InsideQuery;
    }

    if prefix.trim().is_empty() {
        return ContextZone::Empty;
    }

    ContextZone::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_document_is_empty() {
        assert_eq!(classify("", Position::new(0, 0)), ContextZone::Empty);
        assert_eq!(classify("  \n\t\n", Position::new(0, 0)), ContextZone::Empty);
    }

    #[test]
    fn line_past_document_is_unknown() {
        assert_eq!(classify("query {", Position::new(5, 0)), ContextZone::Unknown);
    }

    #[test]
    fn query_block() {
        assert_eq!(
            classify("query {\n  \n}", Position::new(1, 2)),
            ContextZone::InsideQuery
        );
    }

    #[test]
    fn func_argument() {
        assert_eq!(
            classify("query { me (func: eq(name, \"x\")) }", Position::new(0, 5)),
            ContextZone::InsideFunc
        );
    }

    #[test]
    fn cursor_line_is_scanned_whole() {
        // "func:" appears after the cursor column but on the cursor's line,
        // so it still matches
        assert_eq!(
            classify("query {\n  me (func: ) {\n}", Position::new(1, 0)),
            ContextZone::InsideFunc
        );
    }

    #[test]
    fn blank_prefix_before_content_is_empty() {
        assert_eq!(
            classify("\n\nmutation {}", Position::new(0, 0)),
            ContextZone::Empty
        );
    }

    #[test]
    fn unrecognized_text_is_unknown() {
        assert_eq!(
            classify("mutation {}", Position::new(0, 3)),
            ContextZone::Unknown
        );
    }
}
