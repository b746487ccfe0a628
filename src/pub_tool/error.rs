use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a pub failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubErrorKind {
    /// The SDK or executable is missing or misconfigured; fix settings and retry
    Configuration,
    /// pub ran but did not report success
    Execution,
}

#[derive(Debug, Error)]
pub enum PubError {
    #[error("Dart SDK is not configured")]
    SdkNotConfigured,

    #[error("Dart SDK directory does not exist: {0}")]
    SdkNotFound(PathBuf),

    #[error("pub executable not found at {0}")]
    ExecutableNotFound(PathBuf),

    #[error("Failed to launch {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pub failed (exit code {exit_code:?})\n{stdout}\n{stderr}")]
    Execution {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl PubError {
    pub fn kind(&self) -> PubErrorKind {
        match self {
            Self::SdkNotConfigured
            | Self::SdkNotFound(_)
            | Self::ExecutableNotFound(_)
            | Self::Launch { .. } => PubErrorKind::Configuration,
            Self::Execution { .. } => PubErrorKind::Execution,
        }
    }
}
