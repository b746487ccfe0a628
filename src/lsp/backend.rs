use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, error, info, warn};

use crate::assist::{AssistCache, AssistProvider, CommandAssistProvider, SourceChange};
use crate::config::LspConfig;
use crate::lsp::code_action::{
    PUB_ACTION_KIND, generate_assist_code_actions, generate_pub_code_actions, is_pubspec,
};
use crate::lsp::documents::DocumentStore;
use crate::lsp::notifier::{BufferedNotifier, show_notifications};
use crate::pub_tool::{PubCommand, PubRunner, module_root};

/// Collaborators configured from `initializationOptions`
struct ServerState {
    provider: Option<Arc<dyn AssistProvider>>,
    pub_runner: Arc<PubRunner>,
}

pub struct Backend {
    client: Client,
    documents: DocumentStore,
    assist_cache: Arc<AssistCache<SourceChange>>,
    state: RwLock<ServerState>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::with_state(
            client,
            ServerState {
                provider: None,
                pub_runner: Arc::new(PubRunner::new(None)),
            },
        )
    }

    /// Build a Backend with a custom assist provider.
    ///
    /// The provider takes precedence over any assist command in the client
    /// configuration.
    pub fn build(client: Client, provider: Arc<dyn AssistProvider>) -> Self {
        Self::with_state(
            client,
            ServerState {
                provider: Some(provider),
                pub_runner: Arc::new(PubRunner::new(None)),
            },
        )
    }

    fn with_state(client: Client, state: ServerState) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            assist_cache: Arc::new(AssistCache::new()),
            state: RwLock::new(state),
        }
    }

    pub fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    ..Default::default()
                },
            )),
            code_action_provider: Some(CodeActionProviderCapability::Options(
                CodeActionOptions {
                    code_action_kinds: Some(vec![
                        CodeActionKind::REFACTOR,
                        CodeActionKind::new(PUB_ACTION_KIND),
                    ]),
                    ..Default::default()
                },
            )),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: PubCommand::ALL
                    .iter()
                    .map(|command| command.command_id().to_string())
                    .collect(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    async fn apply_config(&self, config: LspConfig) {
        let mut state = self.state.write().await;

        if state.provider.is_none() {
            state.provider = config.assist.command.map(|command| {
                info!("Using assist command: {}", command);
                Arc::new(CommandAssistProvider::new(command, config.assist.args))
                    as Arc<dyn AssistProvider>
            });
        }

        if config.sdk_path.is_none() {
            warn!("Dart SDK path not configured, pub commands will fail");
        }
        state.pub_runner = Arc::new(PubRunner::new(config.sdk_path));
    }

    async fn assist_code_actions(&self, uri: Url, range: Range) -> Option<CodeActionResponse> {
        let Some(document) = self.documents.get(&uri).await else {
            debug!("Code action requested for unknown document {}", uri);
            return None;
        };

        let Some(provider) = self.state.read().await.provider.clone() else {
            debug!("No assist provider configured");
            return None;
        };

        let cache = self.assist_cache.clone();
        let task_uri = uri.clone();
        let result = tokio::task::spawn_blocking(move || {
            generate_assist_code_actions(&cache, &*provider, &task_uri, &document, range)
        })
        .await;

        match result {
            Ok(Ok(actions)) => Some(actions),
            Ok(Err(e)) => {
                error!("Failed to get assists for {}: {}", uri, e);
                self.client
                    .log_message(MessageType::ERROR, format!("Failed to get assists: {e}"))
                    .await;
                None
            }
            Err(e) => {
                error!("Assist task failed: {}", e);
                None
            }
        }
    }

    async fn run_pub(client: Client, runner: Arc<PubRunner>, command: PubCommand, root: PathBuf) {
        client
            .log_message(MessageType::INFO, "Running pub manager...")
            .await;

        let notifications = tokio::task::spawn_blocking(move || {
            let notifier = BufferedNotifier::default();
            // The outcome is reported through the notifier
            let _ = runner.run(command, &root, &notifier);
            notifier.into_notifications()
        })
        .await;

        match notifications {
            Ok(notifications) => show_notifications(&client, notifications).await,
            Err(e) => error!("pub task failed: {}", e),
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.client
            .log_message(MessageType::INFO, "LSP server initializing")
            .await;

        let config = LspConfig::from_initialization_options(params.initialization_options)
            .unwrap_or_else(|e| {
                warn!("Invalid initialization options, using defaults: {}", e);
                LspConfig::default()
            });
        self.apply_config(config).await;

        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "assist-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.client
            .log_message(MessageType::INFO, "LSP server shutting down")
            .await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        debug!("Document opened: {}", document.uri);
        self.documents
            .open(document.uri, document.text, document.version)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // With FULL sync mode, the last content change contains the full document text
        let Some(content) = params.content_changes.into_iter().last().map(|c| c.text) else {
            return;
        };

        debug!("Document changed: {}", params.text_document.uri);
        self.documents
            .change(
                params.text_document.uri,
                content,
                params.text_document.version,
            )
            .await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        debug!("Document closed: {}", uri);
        self.documents.close(&uri).await;

        self.assist_cache
            .clear_if(|key| key.document.as_str() == uri.as_str());
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;

        if is_pubspec(&uri) {
            return Ok(Some(generate_pub_code_actions(&uri)));
        }

        Ok(self.assist_code_actions(uri, params.range).await)
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        let Some(command) = PubCommand::from_command_id(&params.command) else {
            return Err(Error::invalid_params(format!(
                "Unknown command: {}",
                params.command
            )));
        };

        let Some(root) = params
            .arguments
            .first()
            .and_then(|arg| serde_json::from_value::<Url>(arg.clone()).ok())
            .and_then(|uri| uri.to_file_path().ok())
            .and_then(|path| module_root(&path))
        else {
            return Err(Error::invalid_params(format!(
                "{} expects a pubspec.yaml URI",
                command.command_id()
            )));
        };

        let runner = self.state.read().await.pub_runner.clone();
        let client = self.client.clone();
        tokio::spawn(Self::run_pub(client, runner, command, root));

        Ok(None)
    }
}
