//! Main entry point for the LikeGraph CLI.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use likegraph_cli::{render_text, Settings};
use likegraph_core::{aggregate, extract};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Analyze like patterns by day of week and hour of day from a text export
#[derive(Debug, Parser)]
#[command(name = "likegraph", version, about)]
struct Cli {
    /// Path to the activity export; "-" or absent reads stdin
    input: Option<PathBuf>,

    /// IANA timezone to display the data in (e.g. "US/Pacific")
    #[arg(short, long)]
    timezone: Option<String>,

    /// Path to an optional TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Include the row-per-post table in text output
    #[arg(long)]
    show_table: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "likegraph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let timezone = cli.timezone.unwrap_or(settings.timezone);
    debug!(%timezone, "resolved settings");

    let text = read_input(cli.input.as_deref())?;
    let records = extract(&text);
    let output = aggregate(&records, &timezone)?;

    match cli.format {
        Format::Text => print!("{}", render_text(&output, cli.show_table || settings.show_table)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
