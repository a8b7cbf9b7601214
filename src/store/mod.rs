//! Read-only access to review record collections
//!
//! The engine only ever consumes reviews, so the store trait exposes a
//! single fetch method. Backends exist for files (CSV and JSON) and for
//! in-memory collections used in tests and embedding.

pub mod file;
pub mod memory;

pub use file::{DataFormat, FileStore, MalformedPolicy};
pub use memory::InMemoryStore;

use async_trait::async_trait;

use crate::analytics::ReviewRecord;
use crate::error::Result;

/// Read-only source of review records
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Fetch every review in the collection
    async fn fetch_reviews(&self) -> Result<Vec<ReviewRecord>>;
}
