use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use doc_redaction::cli;

/// doc-redaction -- find and redact sensitive data in markdown documents.
#[derive(Parser, Debug)]
#[command(name = "doc-redaction", version, about)]
struct Cli {
    /// Config file (defaults to .doc-redaction/config.yml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report sensitive values found in a document
    Detect {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Write the JSON report to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// List every category, including those with no matches
        #[arg(long)]
        keep_empty: bool,
    },

    /// Redact a document according to free-text rules
    Redact {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Redaction rules, e.g. "redact all emails and 'Project Falcon'"
        #[arg(long, short)]
        rules: String,

        /// Replacement text for each match
        #[arg(long)]
        symbol: Option<String>,

        /// Replace each matched character with a mask glyph
        #[arg(long)]
        preserve_structure: bool,

        /// Write the redacted document to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Drop empty entries from a JSON object
    Compact {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Answer a single tool-use request envelope
    Invoke {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Serve the tools over MCP on stdio
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Detect {
            input,
            output,
            keep_empty,
        } => cli::detect::run(&input, output.as_deref(), keep_empty, &config).await?,
        Commands::Redact {
            input,
            rules,
            symbol,
            preserve_structure,
            output,
        } => {
            cli::redact::run(
                &input,
                &rules,
                symbol.as_deref(),
                preserve_structure,
                output.as_deref(),
                &config,
            )
            .await?
        }
        Commands::Compact { input } => cli::compact::run(&input, config.output.pretty).await?,
        Commands::Invoke { input } => cli::invoke::run(&input).await?,
        Commands::Serve => doc_redaction::mcp::serve_stdio().await?,
    }

    Ok(())
}
