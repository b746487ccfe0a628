use assist_lsp::lsp::server::LogFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "assist-lsp")]
#[command(version, about = "Language Server for cached Dart assists and pub commands")]
struct Cli {
    /// Format of the lines written to the log file
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(assist_lsp::lsp::server::run_server(cli.log_format))
}
