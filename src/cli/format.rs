//! Output formatting for the summary tables
//!
//! Pure functions turning aggregation rows into human-readable tables or
//! JSON. JSON output preserves the field names used by the source
//! aggregation pipelines (`sentimento`, `contagem`, `sentimentos`).

use clap::ValueEnum;
use serde::Serialize;

use crate::analytics::{
    AppSentiments, ReviewSummary, ScoreCount, ScoreSentimentCount, SentimentCount,
};
use crate::error::Result;

const RULE_WIDTH: usize = 44;

/// Output rendering selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Serialize any table or summary as pretty JSON
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format sentiment proportions as a table with percentages
pub fn format_sentiment_table(rows: &[SentimentCount]) -> String {
    let total: u64 = rows.iter().map(|r| r.count).sum();
    let mut lines = vec!["Sentiment Proportion".to_string(), "=".repeat(RULE_WIDTH)];

    for row in rows {
        let percentage = if total == 0 {
            0.0
        } else {
            row.count as f64 / total as f64 * 100.0
        };
        lines.push(format!(
            "{:<12} {:>10} ({:>5.1}%)",
            row.sentiment, row.count, percentage
        ));
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Total reviews: {total}"));
    lines.join("\n")
}

/// Format per-score counts as a table, ascending by score
pub fn format_scores_table(rows: &[ScoreCount]) -> String {
    let total: u64 = rows.iter().map(|r| r.count).sum();
    let mut lines = vec!["Score Totals".to_string(), "=".repeat(RULE_WIDTH)];

    for row in rows {
        lines.push(format!("score {:<6} {:>10}", row.score, row.count));
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Total reviews: {total}"));
    lines.join("\n")
}

/// Format the per-app sentiment breakdown
pub fn format_apps_table(rows: &[AppSentiments]) -> String {
    let mut lines = vec!["Sentiment by App".to_string(), "=".repeat(RULE_WIDTH)];

    for row in rows {
        lines.push(row.app.clone());
        for entry in &row.sentiments {
            lines.push(format!("  {:<12} {:>8}", entry.sentiment, entry.count));
        }
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Total apps: {}", rows.len()));
    lines.join("\n")
}

/// Format the score vs sentiment cross tabulation
pub fn format_matrix_table(rows: &[ScoreSentimentCount]) -> String {
    let mut lines = vec!["Score vs Sentiment".to_string(), "=".repeat(RULE_WIDTH)];

    for row in rows {
        lines.push(format!(
            "score {}  {:<12} {:>8}",
            row.score, row.sentiment, row.count
        ));
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines.join("\n")
}

/// Format the full summary: all four tables with a header
pub fn format_summary_table(summary: &ReviewSummary) -> String {
    [
        format!(
            "Review summary - {} reviews (generated {})",
            summary.total_reviews,
            summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format_sentiment_table(&summary.sentiment_proportion),
        format_scores_table(&summary.score_totals),
        format_apps_table(&summary.sentiment_by_app),
        format_matrix_table(&summary.score_vs_sentiment),
    ]
    .join("\n\n")
}
