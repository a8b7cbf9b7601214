//! Sentiment and score statistics for app review datasets
//!
//! Provides a small analytics engine that computes four summary tables over
//! a collection of review records: sentiment proportions, score totals,
//! per-app sentiment breakdowns, and a score vs sentiment cross tabulation.

/// Aggregation engine and data models
pub mod analytics;
/// CLI argument structures and output formatting
pub mod cli;
/// Runtime configuration
pub mod config;
/// Read-only access to review collections
pub mod store;

mod error;

pub use analytics::{
    AnalyticsEngine, AppSentiments, ReviewRecord, ReviewSummary, ScoreCount, ScoreSentimentCount,
    Sentiment, SentimentCount,
};
pub use config::AnalyticsConfig;
pub use error::{Error, Result};
pub use store::{DataFormat, FileStore, InMemoryStore, MalformedPolicy, ReviewStore};
