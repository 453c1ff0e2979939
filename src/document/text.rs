//! Text offset utilities for position conversion and word extraction.
//!
//! Positions are interpreted byte-wise: the LSP `character` column is used
//! directly as an index into the line's byte sequence. For ASCII documents
//! this matches UTF-16 column semantics; multi-byte text diverges, which is
//! acceptable for the DQL surface this server targets.

use tower_lsp::lsp_types::Position;

use crate::error::Error;

/// Characters that delimit a word during extraction.
fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'(' | b')' | b'{' | b'}' | b',' | b';')
}

/// Convert an LSP position to a byte offset into `text`.
///
/// Splits on `\n` and sums the byte lengths of all preceding lines (plus one
/// per consumed newline). `character` equal to the line length is valid and
/// denotes end-of-line.
pub fn position_to_offset(text: &str, position: Position) -> Result<usize, Error> {
    let lines: Vec<&str> = text.split('\n').collect();
    let line = position.line as usize;

    if line >= lines.len() {
        return Err(Error::LineOutOfRange {
            line: position.line,
        });
    }
    if position.character as usize > lines[line].len() {
        return Err(Error::CharacterOutOfRange {
            character: position.character,
        });
    }

    let preceding: usize = lines[..line].iter().map(|l| l.len() + 1).sum();
    Ok(preceding + position.character as usize)
}

/// Convert a byte offset back to an LSP position.
///
/// Inverse of [`position_to_offset`] for any offset within bounds.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    let before = &text[..offset.min(text.len())];
    let line = before.bytes().filter(|&b| b == b'\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    Position::new(line as u32, (offset - line_start) as u32)
}

/// Extract the word touching `offset`.
///
/// Clamps `offset` into the text, then scans backward while the preceding
/// byte is not a separator and forward while the byte at the cursor is not a
/// separator. Returns an empty string when the offset lands on a separator
/// with no adjacent word bytes, or when `text` is empty.
pub fn extract_word_at_offset(text: &str, offset: usize) -> &str {
    if text.is_empty() {
        return "";
    }
    let bytes = text.as_bytes();
    let offset = offset.min(text.len() - 1);

    let mut start = offset;
    while start > 0 && !is_word_separator(bytes[start - 1]) {
        start -= 1;
    }

    let mut end = offset;
    while end < bytes.len() && !is_word_separator(bytes[end]) {
        end += 1;
    }

    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_single_line() {
        assert_eq!(position_to_offset("hello world", Position::new(0, 0)), Ok(0));
        assert_eq!(position_to_offset("hello world", Position::new(0, 5)), Ok(5));
        // character == line length denotes end-of-line
        assert_eq!(
            position_to_offset("hello world", Position::new(0, 11)),
            Ok(11)
        );
    }

    #[test]
    fn offset_multi_line() {
        let text = "query {\n  me\n}";
        assert_eq!(position_to_offset(text, Position::new(1, 0)), Ok(8));
        assert_eq!(position_to_offset(text, Position::new(1, 4)), Ok(12));
        assert_eq!(position_to_offset(text, Position::new(2, 1)), Ok(14));
    }

    #[test]
    fn offset_out_of_range() {
        assert_eq!(
            position_to_offset("hello", Position::new(1, 0)),
            Err(Error::LineOutOfRange { line: 1 })
        );
        assert_eq!(
            position_to_offset("hello", Position::new(0, 6)),
            Err(Error::CharacterOutOfRange { character: 6 })
        );
        assert_eq!(
            position_to_offset("", Position::new(1, 0)),
            Err(Error::LineOutOfRange { line: 1 })
        );
    }

    #[test]
    fn offset_round_trip() {
        let text = "query {\n  me (func: eq(name, \"x\"))\n}";
        for line in 0..3u32 {
            let line_len = text.split('\n').nth(line as usize).unwrap().len() as u32;
            for character in 0..=line_len {
                let pos = Position::new(line, character);
                let offset = position_to_offset(text, pos).unwrap();
                assert_eq!(offset_to_position(text, offset), pos);
            }
        }
    }

    #[test]
    fn word_at_offset() {
        assert_eq!(extract_word_at_offset("query { me }", 1), "query");
        assert_eq!(extract_word_at_offset("query { me }", 8), "me");
        assert_eq!(extract_word_at_offset("query { me }", 0), "query");
    }

    #[test]
    fn word_on_separator() {
        // offset 5 is the space after "query"; the backward scan still
        // reaches the word touching the cursor
        assert_eq!(extract_word_at_offset("query { me }", 5), "query");
        // offset 7 sits between two separators, so nothing is adjacent
        assert_eq!(extract_word_at_offset("query { me }", 7), "");
    }

    #[test]
    fn word_empty_and_clamped() {
        assert_eq!(extract_word_at_offset("", 0), "");
        // offset past the end clamps to the last byte
        assert_eq!(extract_word_at_offset("me", 10), "me");
    }
}
