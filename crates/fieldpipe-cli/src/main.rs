//! fieldpipe CLI
//!
//! Developer tool for running and validating document pipelines.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// fieldpipe - document field processing pipelines
#[derive(Parser)]
#[command(name = "fieldpipe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pipeline definition file
    #[arg(short, long, default_value = "pipeline.yaml", env = "FIELDPIPE_PIPELINE")]
    pipeline: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline against one JSON document
    Run {
        /// JSON document to process
        document: String,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the resulting JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Validate the pipeline definition without running it
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries documents, so logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Run {
            document,
            output,
            pretty,
        } => {
            commands::run::run(&cli.pipeline, &document, output.as_deref(), pretty)?;
        }
        Commands::Validate => {
            commands::validate::run(&cli.pipeline)?;
        }
    }

    Ok(())
}
