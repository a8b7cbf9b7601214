//! File-backed review store
//!
//! Loads review records from a CSV file (with `app`, `score` and
//! `model_sentiment` header columns; extra columns are ignored) or from a
//! JSON array of objects. The format is detected from the file extension
//! unless overridden.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use clap::ValueEnum;
use serde_json::Value;
use tracing::{info, warn};

use super::ReviewStore;
use crate::analytics::models::{ReviewRecord, Sentiment, SCORE_MAX, SCORE_MIN};
use crate::error::{Error, Result};

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::Config(format!(
                "cannot detect input format from '{}': use a .csv or .json file or pass --input-format",
                path.display()
            ))),
        }
    }
}

/// How to treat records with missing or invalid fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MalformedPolicy {
    /// Drop the record and log a warning
    #[default]
    Skip,
    /// Keep the record with sentiment bucketed as `unknown`; records with an
    /// invalid score or missing app cannot be bucketed and are skipped
    Bucket,
    /// Fail on the first malformed record
    Fail,
}

/// Review store backed by a CSV or JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: DataFormat,
    policy: MalformedPolicy,
}

impl FileStore {
    /// Open a file store, detecting the format from the file extension
    pub fn open(path: impl Into<PathBuf>, policy: MalformedPolicy) -> Result<Self> {
        let path = path.into();
        let format = DataFormat::from_path(&path)?;
        Ok(Self {
            path,
            format,
            policy,
        })
    }

    /// Open a file store with an explicit format
    pub fn with_format(
        path: impl Into<PathBuf>,
        format: DataFormat,
        policy: MalformedPolicy,
    ) -> Self {
        Self {
            path: path.into(),
            format,
            policy,
        }
    }
}

#[async_trait]
impl ReviewStore for FileStore {
    async fn fetch_reviews(&self) -> Result<Vec<ReviewRecord>> {
        let data = tokio::fs::read_to_string(&self.path).await?;
        let reviews = match self.format {
            DataFormat::Csv => parse_csv(&data, self.policy)?,
            DataFormat::Json => parse_json(&data, self.policy)?,
        };

        info!(
            "Loaded {} reviews from {}",
            reviews.len(),
            self.path.display()
        );
        Ok(reviews)
    }
}

fn parse_csv(data: &str, policy: MalformedPolicy) -> Result<Vec<ReviewRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::Parse(format!("missing '{name}' column in CSV header")))
    };
    let app_col = column("app")?;
    let score_col = column("score")?;
    let sentiment_col = column("model_sentiment")?;

    let mut reviews = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // Header occupies line 1
        let location = format!("line {}", index + 2);
        let app = row.get(app_col);
        let score = row.get(score_col).and_then(|s| s.parse::<i64>().ok());
        let sentiment = row.get(sentiment_col);

        if let Some(record) = build_record(&location, app, score, sentiment, policy)? {
            reviews.push(record);
        }
    }
    Ok(reviews)
}

fn parse_json(data: &str, policy: MalformedPolicy) -> Result<Vec<ReviewRecord>> {
    let values: Vec<Value> = serde_json::from_str(data)?;

    let mut reviews = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let location = format!("record {index}");
        let app = value.get("app").and_then(Value::as_str);
        let score = value.get("score").and_then(Value::as_i64);
        let sentiment = value.get("model_sentiment").and_then(Value::as_str);

        if let Some(record) = build_record(&location, app, score, sentiment, policy)? {
            reviews.push(record);
        }
    }
    Ok(reviews)
}

/// Validate one record's fields against the schema and the malformed policy
///
/// Returns `Ok(None)` for records dropped under the skip policy.
fn build_record(
    location: &str,
    app: Option<&str>,
    score: Option<i64>,
    sentiment_label: Option<&str>,
    policy: MalformedPolicy,
) -> Result<Option<ReviewRecord>> {
    let malformed = |reason: &str| Error::MalformedRecord {
        location: location.to_string(),
        reason: reason.to_string(),
    };

    let app = match app.map(str::trim).filter(|a| !a.is_empty()) {
        Some(a) => a.to_string(),
        None => return reject(policy, malformed("missing app")),
    };

    let score = match score {
        Some(s) if s >= i64::from(SCORE_MIN) && s <= i64::from(SCORE_MAX) => s as u8,
        _ => {
            return reject(
                policy,
                malformed(&format!(
                    "score missing or outside {SCORE_MIN}-{SCORE_MAX}"
                )),
            )
        }
    };

    let sentiment = match sentiment_label
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(Sentiment::parse)
    {
        Some(s) => s,
        None => match policy {
            MalformedPolicy::Bucket => Sentiment::Unknown,
            _ => return reject(policy, malformed("missing or unrecognized model_sentiment")),
        },
    };

    Ok(Some(ReviewRecord {
        app,
        score,
        sentiment,
    }))
}

fn reject(policy: MalformedPolicy, error: Error) -> Result<Option<ReviewRecord>> {
    match policy {
        MalformedPolicy::Fail => Err(error),
        MalformedPolicy::Skip | MalformedPolicy::Bucket => {
            warn!("Skipping record: {error}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CSV_FIXTURE: &str = "\
app,score,model_sentiment
WhatsApp,5,positive
WhatsApp,4,positivo
Skype,1,negative
Viber,3,neutral
Viber,9,positive
Skype,2,angry
,3,neutral
";

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn csv_skip_policy_drops_malformed_rows() {
        let file = temp_file(".csv", CSV_FIXTURE);
        let store = FileStore::open(file.path(), MalformedPolicy::Skip).unwrap();

        let reviews = store.fetch_reviews().await.unwrap();
        // Out-of-range score, unrecognized label, and empty app are dropped
        assert_eq!(reviews.len(), 4);
        assert_eq!(reviews[0], ReviewRecord::new("WhatsApp", 5, Sentiment::Positive));
        assert_eq!(reviews[1], ReviewRecord::new("WhatsApp", 4, Sentiment::Positive));
    }

    #[tokio::test]
    async fn csv_bucket_policy_keeps_unknown_sentiment() {
        let file = temp_file(".csv", CSV_FIXTURE);
        let store = FileStore::open(file.path(), MalformedPolicy::Bucket).unwrap();

        let reviews = store.fetch_reviews().await.unwrap();
        // The unrecognized label is bucketed; bad score and empty app still drop
        assert_eq!(reviews.len(), 5);
        assert!(reviews
            .iter()
            .any(|r| r.app == "Skype" && r.sentiment == Sentiment::Unknown));
    }

    #[tokio::test]
    async fn csv_fail_policy_surfaces_malformed_record() {
        let file = temp_file(".csv", CSV_FIXTURE);
        let store = FileStore::open(file.path(), MalformedPolicy::Fail).unwrap();

        let err = store.fetch_reviews().await.unwrap_err();
        match err {
            Error::MalformedRecord { location, reason } => {
                assert_eq!(location, "line 6");
                assert!(reason.contains("score"));
            }
            other => panic!("expected MalformedRecord, got {other}"),
        }
    }

    #[tokio::test]
    async fn csv_missing_column_is_a_parse_error() {
        let file = temp_file(".csv", "app,score\nWhatsApp,5\n");
        let store = FileStore::open(file.path(), MalformedPolicy::Skip).unwrap();

        let err = store.fetch_reviews().await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn json_array_parses_records() {
        let file = temp_file(
            ".json",
            r#"[
                {"app": "WhatsApp", "score": 5, "model_sentiment": "positive"},
                {"app": "Skype", "score": 1, "model_sentiment": "negative"},
                {"app": "Skype", "score": "bad", "model_sentiment": "negative"}
            ]"#,
        );
        let store = FileStore::open(file.path(), MalformedPolicy::Skip).unwrap();

        let reviews = store.fetch_reviews().await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1], ReviewRecord::new("Skype", 1, Sentiment::Negative));
    }

    #[tokio::test]
    async fn json_fail_policy_rejects_wrong_type() {
        let file = temp_file(
            ".json",
            r#"[{"app": "Skype", "score": 1, "model_sentiment": 42}]"#,
        );
        let store = FileStore::open(file.path(), MalformedPolicy::Fail).unwrap();

        let err = store.fetch_reviews().await.unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn format_detection_requires_known_extension() {
        assert_eq!(
            DataFormat::from_path(Path::new("reviews.CSV")).unwrap(),
            DataFormat::Csv
        );
        assert_eq!(
            DataFormat::from_path(Path::new("reviews.json")).unwrap(),
            DataFormat::Json
        );
        assert!(DataFormat::from_path(Path::new("reviews.txt")).is_err());
        assert!(DataFormat::from_path(Path::new("reviews")).is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let store = FileStore::with_format(
            "/nonexistent/reviews.csv",
            DataFormat::Csv,
            MalformedPolicy::Skip,
        );
        let err = store.fetch_reviews().await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
