use anyhow::Result;
use citefetch::client::{CrossrefClient, LookupError};
use citefetch::config::{find_config_file, load_config, Config};
use citefetch::models::{Work, WorkQuery};
use citefetch::{ui, utils};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// citefetch - Look up bibliographic metadata on CrossRef by DOI or field query
#[derive(Parser, Debug)]
#[command(name = "citefetch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Look up bibliographic metadata on CrossRef by DOI or field query", long_about = None)]
struct Cli {
    /// Query type: "doi" for an exact lookup, or a CrossRef query field
    /// (title, author, bibliographic, ...) for a fielded search
    query_type: String,

    /// Query value: the DOI, or the text to search the field for
    query_value: String,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Output format for the matched work
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Labeled text block
    Text,
    /// BibTeX entry
    Bibtex,
    /// Extracted metadata as JSON
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing arguments exit 1 with the usage message; --help/--version
    // exit 0. Nothing touches the network before this point.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("citefetch={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    let query = WorkQuery::new(&cli.query_type, &cli.query_value)?;
    let client = CrossrefClient::new(&config)?;

    // Fetch failures are reported and degrade to the no-result outcome;
    // the process still exits 0.
    let envelope = match client.fetch(&query).await {
        Ok(envelope) => Some(envelope),
        Err(LookupError::Http(status)) => {
            println!("HTTP error occurred: {}", status);
            None
        }
        Err(err) => {
            println!("Error occurred: {}", err);
            None
        }
    };

    let work = match envelope {
        Some(envelope) if envelope.status == "ok" => utils::resolve(envelope.message, ui::choose)?,
        Some(envelope) => {
            tracing::warn!(status = %envelope.status, "API reported a non-ok status");
            None
        }
        None => None,
    };

    match work {
        Some(work) => output_work(&work, cli.format)?,
        None => println!("No results found or an error occurred."),
    }

    Ok(())
}

/// Print the selected work in the requested format
fn output_work(work: &Work, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", utils::format_block(work)),
        OutputFormat::Bibtex => println!("{}", utils::format_bibtex(work)),
        OutputFormat::Json => println!("{}", utils::format_json(work)?),
    }
    Ok(())
}
