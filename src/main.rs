use std::sync::Arc;

use clap::Parser;
use tracing::{debug, error};

use review_stats::analytics::AnalyticsEngine;
use review_stats::cli::args::{Cli, Commands};
use review_stats::cli::format::{self, OutputFormat};
use review_stats::config::AnalyticsConfig;
use review_stats::store::ReviewStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("review-stats started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        AnalyticsConfig::resolve(cli.input, cli.input_format, cli.format, cli.on_malformed)?;
    let store: Arc<dyn ReviewStore> = Arc::new(config.open_store()?);
    let engine = AnalyticsEngine::new(store);

    let output = match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => {
            let summary = engine.summarize().await?;
            match config.output {
                OutputFormat::Json => format::render_json(&summary)?,
                OutputFormat::Table => format::format_summary_table(&summary),
            }
        }
        Commands::Sentiment => {
            let rows = engine.sentiment_proportion().await?;
            match config.output {
                OutputFormat::Json => format::render_json(&rows)?,
                OutputFormat::Table => format::format_sentiment_table(&rows),
            }
        }
        Commands::Scores => {
            let rows = engine.score_totals().await?;
            match config.output {
                OutputFormat::Json => format::render_json(&rows)?,
                OutputFormat::Table => format::format_scores_table(&rows),
            }
        }
        Commands::Apps => {
            let rows = engine.sentiment_by_app().await?;
            match config.output {
                OutputFormat::Json => format::render_json(&rows)?,
                OutputFormat::Table => format::format_apps_table(&rows),
            }
        }
        Commands::Matrix => {
            let rows = engine.score_vs_sentiment().await?;
            match config.output {
                OutputFormat::Json => format::render_json(&rows)?,
                OutputFormat::Table => format::format_matrix_table(&rows),
            }
        }
    };

    println!("{output}");
    Ok(())
}
