//! Review aggregation analytics
//!
//! Computes descriptive statistics over a collection of review records:
//! sentiment proportions, score distributions, per-app sentiment breakdowns,
//! and a score vs sentiment cross tabulation.

pub mod engine;
pub mod models;

pub use engine::{
    score_totals, score_vs_sentiment, sentiment_by_app, sentiment_proportion, AnalyticsEngine,
};
pub use models::{
    AppSentiments, ReviewRecord, ReviewSummary, ScoreCount, ScoreSentimentCount, Sentiment,
    SentimentCount,
};
