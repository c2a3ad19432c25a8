//! Citekit CLI - Command-line converter for Word bibliography files

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "citekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Word Sources.xml file to a citation format
    Convert {
        /// Input file path
        input: String,

        /// Output file path (defaults to sources_converted.<ext>)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (bib, ris)
        #[arg(short, long, default_value = "bib")]
        format: String,
    },

    /// Display information about the sources in a file
    Info {
        /// Input file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "citekit_cli=debug,citekit_core=debug"
    } else {
        "citekit_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => commands::convert(&input, output.as_deref(), &format),

        Commands::Info { input, json } => commands::info(&input, json),
    }
}
