//! CLI binary for layout-reader.
//!
//! A thin shim over the library crate. With no flags it runs `read_pdf` and
//! prints its status line; `--greet` and `--parse` select the other paths.

use anyhow::{Context, Result};
use clap::Parser;
use layout_reader::{greetings, read_pdf, Document, LayoutPdfReader, ReaderConfig};
use std::io;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Bind a reader to the hosted parser and print its status
  layout-reader

  # Same, naming a document (the document is not sent)
  layout-reader /home/downloads/xyz.pdf

  # Print a greeting
  layout-reader --greet World

  # Actually parse a document and list its sections
  layout-reader --parse https://arxiv.org/pdf/1910.13461.pdf

  # Parse against a self-hosted parser, JSON output
  layout-reader --parse --json \
    --api-url "http://localhost:5010/api/parseDocument?renderFormat=all" paper.pdf

ENVIRONMENT VARIABLES:
  LAYOUT_READER_API_URL   Parser endpoint used by --parse
  RUST_LOG                Log filter (overrides -v / -q)
"#;

/// Client for a hosted PDF layout-parsing API.
#[derive(Parser, Debug)]
#[command(
    name = "layout-reader",
    version,
    about = "Client for a hosted PDF layout-parsing API",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path or HTTP/HTTPS URL.
    #[arg(default_value = "")]
    input: String,

    /// Print a greeting for NAME instead of reading.
    #[arg(long, value_name = "NAME", conflicts_with = "parse")]
    greet: Option<String>,

    /// Send INPUT to the parser and print the resulting layout.
    #[arg(long)]
    parse: bool,

    /// With --parse: print the parsed document as JSON.
    #[arg(long, requires = "parse")]
    json: bool,

    /// Parser endpoint used by --parse.
    #[arg(long, env = "LAYOUT_READER_API_URL")]
    api_url: Option<String>,

    /// HTTP download timeout in seconds for URL inputs.
    #[arg(long, env = "LAYOUT_READER_DOWNLOAD_TIMEOUT", default_value_t = 120)]
    download_timeout: u64,

    /// Parser request timeout in seconds.
    #[arg(long, env = "LAYOUT_READER_API_TIMEOUT", default_value_t = 300)]
    api_timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logs except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Logs go to stderr; stdout carries only the command's result.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Some(ref name) = cli.greet {
        println!("{}", greetings(name));
        return Ok(());
    }

    if !cli.parse {
        let status = read_pdf(&cli.input).context("Failed to create layout reader")?;
        println!("{status}");
        return Ok(());
    }

    // ── Parse mode ───────────────────────────────────────────────────────
    if cli.input.is_empty() {
        anyhow::bail!("--parse needs a PDF path or URL");
    }

    let reader = build_reader(&cli)?;
    let doc = reader
        .read_pdf(&cli.input)
        .await
        .with_context(|| format!("Failed to parse '{}'", cli.input))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&doc).context("Failed to serialise document")?;
        println!("{json}");
    } else {
        print_summary(&doc);
    }

    Ok(())
}

fn build_reader(cli: &Cli) -> Result<LayoutPdfReader> {
    let mut builder = ReaderConfig::builder()
        .download_timeout_secs(cli.download_timeout)
        .api_timeout_secs(cli.api_timeout);
    if let Some(ref url) = cli.api_url {
        builder = builder.api_url(url);
    }
    let config = builder.build().context("Invalid configuration")?;
    LayoutPdfReader::with_config(config).context("Failed to create layout reader")
}

fn print_summary(doc: &Document) {
    println!(
        "Blocks:    {}\nSections:  {}\nTables:    {}",
        doc.len(),
        doc.sections().len(),
        doc.tables().len()
    );
    for section in doc.sections() {
        let depth = section.parents.len();
        println!("{}{}", "  ".repeat(depth), section.title());
    }
}
