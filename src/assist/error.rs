use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Failed to start analysis command: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Failed to communicate with analysis command: {0}")]
    Io(#[from] std::io::Error),

    #[error("Analysis backend failed: {0}")]
    Backend(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
