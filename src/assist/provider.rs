//! Analysis backend interface for fetching assists

#[cfg(test)]
use mockall::automock;

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::assist::error::AssistError;
use crate::assist::types::SourceChange;

/// A single assist query against the analysis backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistRequest {
    pub path: PathBuf,
    /// Current (possibly unsaved) document text
    pub content: String,
    pub offset: usize,
    pub length: usize,
}

/// Trait for computing assists at a location in a document
#[cfg_attr(test, automock)]
pub trait AssistProvider: Send + Sync {
    /// Fetches assists for the selection described by `request`
    ///
    /// # Returns
    /// * `Ok(Vec<SourceChange>)` - Assists in the order the backend ranked them
    /// * `Err(AssistError)` - If the backend could not be reached or failed
    fn get_assists(&self, request: &AssistRequest) -> Result<Vec<SourceChange>, AssistError>;
}

/// Computes assists by running an external analysis command.
///
/// The command is invoked as `<program> <args..> <path> <offset> <length>`,
/// receives the document text on stdin and must print a JSON array of
/// [`SourceChange`] on stdout.
pub struct CommandAssistProvider {
    program: String,
    args: Vec<String>,
}

impl CommandAssistProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl AssistProvider for CommandAssistProvider {
    fn get_assists(&self, request: &AssistRequest) -> Result<Vec<SourceChange>, AssistError> {
        debug!(
            "Running {} for {:?} at {}+{}",
            self.program, request.path, request.offset, request.length
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(&request.path)
            .arg(request.offset.to_string())
            .arg(request.length.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(AssistError::Spawn)?;

        // Feed stdin from another thread so a chatty backend can't fill its
        // stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let content = request.content.clone();
            std::thread::spawn(move || stdin.write_all(content.as_bytes()))
        });

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(result) => {
                    // The backend may exit without reading stdin
                    if let Err(e) = result {
                        debug!("Analysis command did not consume stdin: {}", e);
                    }
                }
                Err(_) => debug!("Stdin writer thread panicked"),
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AssistError::Backend(if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            }));
        }

        let changes: Vec<SourceChange> = serde_json::from_slice(&output.stdout)?;
        debug!("Analysis command returned {} assists", changes.len());
        Ok(changes)
    }
}
