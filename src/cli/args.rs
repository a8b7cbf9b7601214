//! CLI argument structures
//!
//! Defines the main CLI structure and the subcommand per summary table.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::format::OutputFormat;
use crate::store::{DataFormat, MalformedPolicy};

/// Compute sentiment and score statistics over app review datasets
#[derive(Parser)]
#[command(name = "review-stats")]
#[command(about = "review-stats - Sentiment and score statistics for app review datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Review dataset to analyze, CSV or JSON (falls back to REVIEW_STATS_INPUT)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Override the input format detected from the file extension
    #[arg(long, value_enum, global = true)]
    pub input_format: Option<DataFormat>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// How to handle records with missing or invalid fields
    #[arg(long, value_enum, default_value = "skip", global = true)]
    pub on_malformed: MalformedPolicy,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all four summary tables (default command)
    Report,
    /// Proportion of reviews per sentiment label
    Sentiment,
    /// Review counts per score (1-5)
    Scores,
    /// Sentiment breakdown per application
    Apps,
    /// Score vs sentiment cross tabulation
    Matrix,
}
