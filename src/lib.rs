//! DQL Language Server implementation.

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};

mod document;
mod error;
mod lsp;

pub use document::{
    extract_word_at_offset, offset_to_position, position_to_offset, ContentChange, DocumentState,
    DocumentStore,
};
pub use error::Error;
pub use lsp::{classify, completion_at_position, hover_at_position, items_for_zone, ContextZone};

const SERVER_NAME: &str = "dqlsp";

pub struct Backend {
    client: Client,
    documents: DocumentStore,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(
                        [" ", "\n", "{", "(", ":", "\""]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    ),
                    resolve_provider: Some(false),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "DQL language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("client requested shutdown");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        tracing::debug!(uri = %params.text_document.uri, "document opened");
        self.documents
            .open(params.text_document.uri, params.text_document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        for change in params.content_changes {
            match ContentChange::from(change) {
                ContentChange::Whole(text) => {
                    tracing::debug!(uri = %uri, "document changed");
                    self.documents.update(uri.clone(), text);
                }
                ContentChange::Incremental => {
                    // Full sync is advertised; a ranged patch cannot be
                    // applied and is dropped rather than misapplied.
                    tracing::warn!(uri = %uri, "ignoring incremental change event");
                    self.client
                        .log_message(
                            MessageType::WARNING,
                            format!("ignoring unsupported incremental change for {}", uri),
                        )
                        .await;
                }
            }
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!(uri = %uri, "document saved");
        if let Some(text) = params.text {
            self.documents.save(uri, text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        tracing::debug!(uri = %params.text_document.uri, "document closed");
        self.documents.close(&params.text_document.uri);
    }

    async fn did_change_configuration(&self, _: DidChangeConfigurationParams) {
        tracing::debug!("workspace configuration changed");
    }

    async fn did_change_watched_files(&self, _: DidChangeWatchedFilesParams) {
        tracing::debug!("watched files changed");
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let doc = self
            .documents
            .get(&uri)
            .ok_or(Error::DocumentNotFound { uri })?;

        Ok(Some(completion_at_position(&doc.content, position)))
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let doc = self
            .documents
            .get(&uri)
            .ok_or(Error::DocumentNotFound { uri })?;

        let hover = hover_at_position(&doc.content, position)?;
        Ok(Some(hover))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
