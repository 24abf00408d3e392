//! CLI for the urlmatch live/staging URL matcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlmatch_core::{config, logging};

use commands::{run_match, run_normalize, run_score};

/// Top-level CLI for urlmatch.
#[derive(Debug, Parser)]
#[command(name = "urlmatch")]
#[command(about = "urlmatch: pair live URLs with their staging counterparts", long_about = None)]
pub struct Cli {
    /// Log per-candidate decisions (debug level).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Match a CSV of live/staging URLs and write reports.
    Match {
        /// CSV with Live_URL and Staging_URL columns (or exactly two columns).
        csv_file: PathBuf,

        /// Directory for report files (default from config).
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Similarity threshold for partial matches (default from config).
        #[arg(short, long, value_name = "T", allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Score a single live/staging pair.
    Score {
        /// Live URL.
        live: String,

        /// Staging URL.
        staging: String,

        /// Similarity threshold (default from config).
        #[arg(short, long, value_name = "T", allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Print the normalized form of each URL.
    Normalize {
        /// URLs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Initialize logging as early as possible.
        if let Err(err) = logging::init_logging(cli.verbose) {
            logging::init_logging_stderr(cli.verbose);
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Match {
                csv_file,
                output_dir,
                threshold,
                json,
            } => {
                let output_dir = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
                let threshold = threshold.unwrap_or(cfg.similarity_threshold);
                run_match(&csv_file, &output_dir, threshold, json)?;
            }
            CliCommand::Score {
                live,
                staging,
                threshold,
            } => run_score(&live, &staging, threshold.unwrap_or(cfg.similarity_threshold)),
            CliCommand::Normalize { urls } => run_normalize(&urls),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
