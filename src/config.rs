//! Runtime configuration
//!
//! Assembled from CLI arguments with environment fallbacks; the input path
//! may come from `REVIEW_STATS_INPUT` when `--input` is not passed.

use std::path::PathBuf;

use crate::cli::format::OutputFormat;
use crate::error::{Error, Result};
use crate::store::{DataFormat, FileStore, MalformedPolicy};

/// Environment variable consulted when `--input` is not passed
pub const INPUT_ENV_VAR: &str = "REVIEW_STATS_INPUT";

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Path to the review dataset
    pub input: PathBuf,
    /// Explicit input format, overriding extension detection
    pub input_format: Option<DataFormat>,
    /// Output rendering
    pub output: OutputFormat,
    /// Policy for records with missing or invalid fields
    pub on_malformed: MalformedPolicy,
}

impl AnalyticsConfig {
    /// Resolve configuration from CLI values and the environment
    pub fn resolve(
        input: Option<PathBuf>,
        input_format: Option<DataFormat>,
        output: OutputFormat,
        on_malformed: MalformedPolicy,
    ) -> Result<Self> {
        let input = input
            .or_else(|| std::env::var(INPUT_ENV_VAR).ok().map(PathBuf::from))
            .ok_or_else(|| {
                Error::Config(format!(
                    "no input file: pass --input or set {INPUT_ENV_VAR}"
                ))
            })?;

        Ok(Self {
            input,
            input_format,
            output,
            on_malformed,
        })
    }

    /// Open the file store described by this configuration
    pub fn open_store(&self) -> Result<FileStore> {
        match self.input_format {
            Some(format) => Ok(FileStore::with_format(
                &self.input,
                format,
                self.on_malformed,
            )),
            None => FileStore::open(&self.input, self.on_malformed),
        }
    }
}
