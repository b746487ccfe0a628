//! LSP server initialization and logging

use anyhow::Context;
use clap::ValueEnum;
use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, log_path};
use crate::lsp::backend::Backend;

/// Log line format written to the log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize file logging. stdout is reserved for the LSP transport.
///
/// The returned guard flushes buffered log lines when dropped.
pub fn init_logging(format: LogFormat) -> anyhow::Result<WorkerGuard> {
    let log_path = log_path();
    let log_dir = log_path
        .parent()
        .context("log path has no parent directory")?;
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_name = log_path
        .file_name()
        .context("log path has no file name")?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, file_name));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(guard)
}

pub async fn run_server(format: LogFormat) -> anyhow::Result<()> {
    let _guard = init_logging(format)?;
    info!("Starting assist-lsp {}", env!("CARGO_PKG_VERSION"));

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;

    info!("assist-lsp stopped");
    Ok(())
}
