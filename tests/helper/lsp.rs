//! LSP request/notification test utilities

use std::time::Duration;

use futures::StreamExt;
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tower_lsp::ClientSocket;
use tower_lsp::jsonrpc::{Request, Response};
use tower_lsp::lsp_types::*;

/// Create an LSP initialize request carrying `initializationOptions`
pub fn create_initialize_request(id: i64, options: Option<serde_json::Value>) -> Request {
    Request::build("initialize")
        .id(id)
        .params(
            serde_json::to_value(InitializeParams {
                initialization_options: options,
                ..Default::default()
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP initialized notification
pub fn create_initialized_notification() -> Request {
    Request::build("initialized")
        .params(serde_json::to_value(InitializedParams {}).unwrap())
        .finish()
}

/// Create an LSP didOpen notification
pub fn create_did_open_notification(uri: &str, content: &str, version: i32) -> Request {
    Request::build("textDocument/didOpen")
        .params(
            serde_json::to_value(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: uri.parse().unwrap(),
                    language_id: "dart".to_string(),
                    version,
                    text: content.to_string(),
                },
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP didChange notification (full sync)
#[allow(dead_code)]
pub fn create_did_change_notification(uri: &str, content: &str, version: i32) -> Request {
    Request::build("textDocument/didChange")
        .params(
            serde_json::to_value(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: uri.parse().unwrap(),
                    version,
                },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: content.to_string(),
                }],
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP didClose notification
#[allow(dead_code)]
pub fn create_did_close_notification(uri: &str) -> Request {
    Request::build("textDocument/didClose")
        .params(
            serde_json::to_value(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier {
                    uri: uri.parse().unwrap(),
                },
            })
            .unwrap(),
        )
        .finish()
}

/// Create an LSP codeAction request for the selection `start..end`
#[allow(dead_code)]
pub fn create_code_action_request(id: i64, uri: &str, start: Position, end: Position) -> Request {
    Request::build("textDocument/codeAction")
        .id(id)
        .params(
            serde_json::to_value(CodeActionParams {
                text_document: TextDocumentIdentifier {
                    uri: uri.parse().unwrap(),
                },
                range: Range { start, end },
                context: CodeActionContext::default(),
                work_done_progress_params: Default::default(),
                partial_result_params: Default::default(),
            })
            .unwrap(),
        )
        .finish()
}

/// Create a workspace/executeCommand request
#[allow(dead_code)]
pub fn create_execute_command_request(
    id: i64,
    command: &str,
    arguments: Vec<serde_json::Value>,
) -> Request {
    Request::build("workspace/executeCommand")
        .id(id)
        .params(
            serde_json::to_value(ExecuteCommandParams {
                command: command.to_string(),
                arguments,
                work_done_progress_params: Default::default(),
            })
            .unwrap(),
        )
        .finish()
}

/// Deserialize the successful result of a response
#[allow(dead_code)]
pub fn response_result<T: DeserializeOwned>(response: Option<Response>) -> T {
    let response = response.expect("Expected a response");
    let result = response
        .result()
        .cloned()
        .unwrap_or_else(|| panic!("Expected success, got {:?}", response.error()));
    serde_json::from_value(result).unwrap()
}

/// Collect notifications in background and return a receiver
pub fn spawn_notification_collector(mut socket: ClientSocket) -> mpsc::Receiver<Request> {
    let (tx, rx) = mpsc::channel(100);

    tokio::spawn(async move {
        while let Some(notification) = socket.next().await {
            if tx.send(notification).await.is_err() {
                break;
            }
        }
    });

    rx
}

/// Wait for a notification with the specified method name from the receiver
#[allow(dead_code)]
pub async fn wait_for_notification(
    rx: &mut mpsc::Receiver<Request>,
    method: &str,
) -> Option<Request> {
    let timeout_duration = Duration::from_secs(5);

    loop {
        match timeout(timeout_duration, rx.recv()).await {
            Ok(Some(notification)) => {
                if notification.method() == method {
                    return Some(notification);
                }
                // Skip other notifications (like log_message)
            }
            _ => return None,
        }
    }
}
