//! In-memory review store

use async_trait::async_trait;

use super::ReviewStore;
use crate::analytics::ReviewRecord;
use crate::error::Result;

/// Review store backed by an in-memory vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    reviews: Vec<ReviewRecord>,
}

impl InMemoryStore {
    pub fn new(reviews: Vec<ReviewRecord>) -> Self {
        Self { reviews }
    }
}

#[async_trait]
impl ReviewStore for InMemoryStore {
    async fn fetch_reviews(&self) -> Result<Vec<ReviewRecord>> {
        Ok(self.reviews.clone())
    }
}
