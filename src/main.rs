use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use quake::render;
use quake_core::config::{Config, OutputFormat};
use quake_core::ReportBatch;
use quake_feeds::{load_reports, FeedError, FileFeed, HttpFeed, StdinFeed};

#[derive(Parser)]
#[command(name = "quake", about = "Fetch and normalize earthquake report feeds")]
struct Cli {
    /// Feed URL (overrides `[feed] url`).
    #[arg(long, conflicts_with_all = ["file", "stdin"])]
    url: Option<String>,

    /// Read the feed payload from a file instead of HTTP.
    #[arg(long, conflicts_with = "stdin")]
    file: Option<PathBuf>,

    /// Read the feed payload from stdin instead of HTTP.
    #[arg(long)]
    stdin: bool,

    /// Output format (overrides `[output] format`).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Request timeout in seconds (overrides `[feed] timeout_secs`).
    #[arg(long)]
    timeout: Option<u64>,

    /// Config file to use instead of ~/.config/quake/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/quake-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/quake-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("quake debug log started, tail -f /tmp/quake-debug.log");
    }

    let config = load_config(&cli)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let batch = runtime
        .block_on(fetch(&cli, &config))
        .context("failed to load report feed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render::render_batch(&mut out, &batch, &config.output)?;
    out.flush()?;
    Ok(())
}

/// Config file (explicit or default location) with CLI overrides applied.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|_| Config::defaults()),
    };

    if let Some(url) = &cli.url {
        config.feed.url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.feed.timeout_secs = timeout;
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    Ok(config)
}

async fn fetch(cli: &Cli, config: &Config) -> Result<ReportBatch, FeedError> {
    if let Some(path) = &cli.file {
        load_reports(&FileFeed::new(path)).await
    } else if cli.stdin {
        load_reports(&StdinFeed::new()).await
    } else {
        load_reports(&HttpFeed::new(&config.feed)?).await
    }
}
