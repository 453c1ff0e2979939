//! Error types surfaced by the core to the LSP runtime.

use tower_lsp::jsonrpc;
use tower_lsp::lsp_types::Url;

/// Errors produced while servicing a request against tracked document state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested line does not exist in the document.
    #[error("line {line} out of range")]
    LineOutOfRange { line: u32 },

    /// The requested column lies past the end of its line.
    #[error("character {character} out of range")]
    CharacterOutOfRange { character: u32 },

    /// A request referenced a URI with no tracked state.
    #[error("document not found: {uri}")]
    DocumentNotFound { uri: Url },
}

impl From<Error> for jsonrpc::Error {
    fn from(err: Error) -> Self {
        jsonrpc::Error::invalid_params(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_jsonrpc_invalid_params() {
        let err: jsonrpc::Error = Error::LineOutOfRange { line: 7 }.into();
        assert_eq!(err.code, jsonrpc::ErrorCode::InvalidParams);
        assert_eq!(err.message, "line 7 out of range");
    }
}
