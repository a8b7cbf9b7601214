//! Data models for review analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest valid review score
pub const SCORE_MIN: u8 = 1;
/// Highest valid review score
pub const SCORE_MAX: u8 = 5;

/// Sentiment label assigned to a review by an external classifier
///
/// Variant order is the fixed display order used wherever the source
/// pipelines left ordering unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// Bucket for records whose label is missing or unrecognized
    Unknown,
}

impl Sentiment {
    /// Parse a classifier label. Accepts the English labels and the
    /// Portuguese spellings found in the original dataset.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" | "positivo" => Some(Self::Positive),
            "negative" | "negativo" => Some(Self::Negative),
            "neutral" | "neutro" => Some(Self::Neutral),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user review of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub app: String,
    /// Integer rating in the range 1-5
    pub score: u8,
    #[serde(rename = "model_sentiment")]
    pub sentiment: Sentiment,
}

impl ReviewRecord {
    pub fn new(app: impl Into<String>, score: u8, sentiment: Sentiment) -> Self {
        Self {
            app: app.into(),
            score,
            sentiment,
        }
    }
}

/// Review count for one sentiment label
///
/// Serialized field names match the source aggregation pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCount {
    #[serde(rename = "sentimento")]
    pub sentiment: Sentiment,
    #[serde(rename = "contagem")]
    pub count: u64,
}

/// Review count for one score value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCount {
    pub score: u8,
    #[serde(rename = "contagem")]
    pub count: u64,
}

/// Sentiment breakdown for one application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSentiments {
    pub app: String,
    #[serde(rename = "sentimentos")]
    pub sentiments: Vec<SentimentCount>,
}

/// Review count for one (score, sentiment) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSentimentCount {
    pub score: u8,
    #[serde(rename = "sentimento")]
    pub sentiment: Sentiment,
    #[serde(rename = "contagem")]
    pub count: u64,
}

/// All four summary tables computed from a single fetch of the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub generated_at: DateTime<Utc>,
    pub total_reviews: u64,
    pub sentiment_proportion: Vec<SentimentCount>,
    pub score_totals: Vec<ScoreCount>,
    pub sentiment_by_app: Vec<AppSentiments>,
    pub score_vs_sentiment: Vec<ScoreSentimentCount>,
}
