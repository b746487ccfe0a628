//! Code action generation for assists and pub commands

use std::collections::HashMap;
use std::path::PathBuf;

use tower_lsp::lsp_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, Command, Range, TextEdit, Url, WorkspaceEdit,
};

use crate::assist::{
    AssistCache, AssistError, AssistProvider, AssistRequest, DocumentId, QueryKey, SourceChange,
};
use crate::lsp::documents::Document;
use crate::lsp::position::{offset_at, position_at};
use crate::pub_tool::{PubCommand, module_root};

/// Code action kind for pub commands
pub const PUB_ACTION_KIND: &str = "source.pub";

/// Local path of a document, if it has one
fn document_path(uri: &Url) -> Option<PathBuf> {
    (uri.scheme() == "file")
        .then(|| uri.to_file_path().ok())
        .flatten()
}

/// Returns true if pub actions apply to this document
pub fn is_pubspec(uri: &Url) -> bool {
    document_path(uri).is_some_and(|path| module_root(&path).is_some())
}

/// Generate one command action per pub command for a `pubspec.yaml`
pub fn generate_pub_code_actions(uri: &Url) -> Vec<CodeActionOrCommand> {
    PubCommand::ALL
        .into_iter()
        .map(|command| {
            CodeActionOrCommand::CodeAction(CodeAction {
                title: command.title().to_string(),
                kind: Some(CodeActionKind::new(PUB_ACTION_KIND)),
                command: Some(Command {
                    title: command.title().to_string(),
                    command: command.command_id().to_string(),
                    arguments: Some(vec![serde_json::Value::String(uri.to_string())]),
                }),
                ..Default::default()
            })
        })
        .collect()
}

/// Build the cache key and backend request for a selection in a document
pub fn build_assist_query(uri: &Url, document: &Document, range: Range) -> (QueryKey, AssistRequest) {
    let path = document_path(uri).unwrap_or_else(|| PathBuf::from(uri.path()));
    let start = offset_at(&document.text, range.start);
    let end = offset_at(&document.text, range.end);
    let (offset, length) = (start.min(end), start.abs_diff(end));

    let key = QueryKey::new(
        DocumentId::new(uri.as_str()),
        i64::from(document.version),
        offset,
        length,
    );
    let request = AssistRequest {
        path,
        content: document.text.clone(),
        offset,
        length,
    };
    (key, request)
}

/// Fetch assists for the selection (through the cache) and turn them into code actions
pub fn generate_assist_code_actions<P: AssistProvider + ?Sized>(
    cache: &AssistCache<SourceChange>,
    provider: &P,
    uri: &Url,
    document: &Document,
    range: Range,
) -> Result<Vec<CodeActionOrCommand>, AssistError> {
    let (key, request) = build_assist_query(uri, document, range);
    let changes = cache.get_assists(key, || provider.get_assists(&request))?;

    Ok(changes
        .iter()
        .map(|change| {
            CodeActionOrCommand::CodeAction(create_assist_action(change, uri, &document.text))
        })
        .collect())
}

fn create_assist_action(change: &SourceChange, uri: &Url, text: &str) -> CodeAction {
    let text_edits = change
        .edits
        .iter()
        .map(|edit| TextEdit {
            range: Range {
                start: position_at(text, edit.offset),
                end: position_at(text, edit.offset.saturating_add(edit.length)),
            },
            new_text: edit.replacement.clone(),
        })
        .collect();

    let mut changes = HashMap::new();
    changes.insert(uri.clone(), text_edits);

    CodeAction {
        title: change.message.clone(),
        kind: Some(CodeActionKind::REFACTOR),
        edit: Some(WorkspaceEdit {
            changes: Some(changes),
            ..Default::default()
        }),
        ..Default::default()
    }
}
