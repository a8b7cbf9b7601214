//! Analytics engine for review aggregation
//!
//! Each aggregation is a pure reduction over a slice of records. The engine
//! wraps them behind a [`ReviewStore`] so callers can run them against any
//! backing collection. The four tables are independent; `summarize` computes
//! all of them from a single fetch.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::models::{
    AppSentiments, ReviewRecord, ReviewSummary, ScoreCount, ScoreSentimentCount, Sentiment,
    SentimentCount,
};
use crate::error::Result;
use crate::store::ReviewStore;

/// Analytics engine computing summary tables over a review store
pub struct AnalyticsEngine {
    store: Arc<dyn ReviewStore>,
}

impl AnalyticsEngine {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Count reviews per sentiment label across the whole collection
    pub async fn sentiment_proportion(&self) -> Result<Vec<SentimentCount>> {
        let reviews = self.store.fetch_reviews().await?;
        Ok(sentiment_proportion(&reviews))
    }

    /// Count reviews per score value, ascending by score
    pub async fn score_totals(&self) -> Result<Vec<ScoreCount>> {
        let reviews = self.store.fetch_reviews().await?;
        Ok(score_totals(&reviews))
    }

    /// Sentiment breakdown per application
    pub async fn sentiment_by_app(&self) -> Result<Vec<AppSentiments>> {
        let reviews = self.store.fetch_reviews().await?;
        Ok(sentiment_by_app(&reviews))
    }

    /// Count reviews per (score, sentiment) pair, ascending by score
    pub async fn score_vs_sentiment(&self) -> Result<Vec<ScoreSentimentCount>> {
        let reviews = self.store.fetch_reviews().await?;
        Ok(score_vs_sentiment(&reviews))
    }

    /// Compute all four tables from a single fetch of the collection
    pub async fn summarize(&self) -> Result<ReviewSummary> {
        let reviews = self.store.fetch_reviews().await?;
        let apps = sentiment_by_app(&reviews);

        info!(
            "Summarized {} reviews across {} apps",
            reviews.len(),
            apps.len()
        );

        Ok(ReviewSummary {
            generated_at: Utc::now(),
            total_reviews: reviews.len() as u64,
            sentiment_proportion: sentiment_proportion(&reviews),
            score_totals: score_totals(&reviews),
            sentiment_by_app: apps,
            score_vs_sentiment: score_vs_sentiment(&reviews),
        })
    }
}

/// Group reviews by sentiment label and count each group
///
/// Rows come out in the fixed label order; absent labels are omitted.
pub fn sentiment_proportion(reviews: &[ReviewRecord]) -> Vec<SentimentCount> {
    let mut counts: BTreeMap<Sentiment, u64> = BTreeMap::new();
    for review in reviews {
        *counts.entry(review.sentiment).or_insert(0) += 1;
    }

    debug!("Sentiment proportion over {} labels", counts.len());
    counts
        .into_iter()
        .map(|(sentiment, count)| SentimentCount { sentiment, count })
        .collect()
}

/// Group reviews by score and count each group, strictly ascending by score
pub fn score_totals(reviews: &[ReviewRecord]) -> Vec<ScoreCount> {
    let mut counts: BTreeMap<u8, u64> = BTreeMap::new();
    for review in reviews {
        *counts.entry(review.score).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(score, count)| ScoreCount { score, count })
        .collect()
}

/// Per-app sentiment breakdown
///
/// Single pass building app -> sentiment -> count, then flattened into one
/// row per app with its nested sentiment counts. Rows are ascending by app
/// name, nested entries in the fixed label order.
pub fn sentiment_by_app(reviews: &[ReviewRecord]) -> Vec<AppSentiments> {
    let mut by_app: BTreeMap<&str, BTreeMap<Sentiment, u64>> = BTreeMap::new();
    for review in reviews {
        *by_app
            .entry(review.app.as_str())
            .or_default()
            .entry(review.sentiment)
            .or_insert(0) += 1;
    }

    by_app
        .into_iter()
        .map(|(app, counts)| AppSentiments {
            app: app.to_string(),
            sentiments: counts
                .into_iter()
                .map(|(sentiment, count)| SentimentCount { sentiment, count })
                .collect(),
        })
        .collect()
}

/// Count reviews per (score, sentiment) pair
///
/// Rows are ascending by score; ties within a score follow the fixed label
/// order.
pub fn score_vs_sentiment(reviews: &[ReviewRecord]) -> Vec<ScoreSentimentCount> {
    let mut counts: BTreeMap<(u8, Sentiment), u64> = BTreeMap::new();
    for review in reviews {
        *counts.entry((review.score, review.sentiment)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((score, sentiment), count)| ScoreSentimentCount {
            score,
            sentiment,
            count,
        })
        .collect()
}
