use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{PortalError, Result};
use crate::types::CommentRecord;

/// Repository for visitor comments.
///
/// Implementations own their concurrency discipline and are injected
/// where needed instead of living as an ambient module-level list.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Validate and append a comment, returning the stored record.
    async fn add_comment(&self, shop_id: &str, rating: u8, comment: &str)
        -> Result<CommentRecord>;

    /// All comments for one shop, in arrival order.
    async fn comments_for_shop(&self, shop_id: &str) -> Result<Vec<CommentRecord>>;

    /// Total number of stored comments.
    async fn comment_count(&self) -> Result<usize>;
}

/// Mutex-guarded in-memory store. Contents are lost on restart.
pub struct InMemoryCommentStore {
    comments: Arc<Mutex<Vec<CommentRecord>>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self {
            comments: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for InMemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn add_comment(
        &self,
        shop_id: &str,
        rating: u8,
        comment: &str,
    ) -> Result<CommentRecord> {
        if !(1..=5).contains(&rating) {
            return Err(PortalError::Rating(rating));
        }

        let record = CommentRecord {
            id: Uuid::new_v4(),
            shop_id: shop_id.to_string(),
            rating,
            comment: comment.to_string(),
            created_at: Utc::now(),
        };

        let mut comments = self.comments.lock().unwrap();
        comments.push(record.clone());
        debug!("Stored comment {} for shop {}", record.id, shop_id);
        Ok(record)
    }

    async fn comments_for_shop(&self, shop_id: &str) -> Result<Vec<CommentRecord>> {
        let comments = self.comments.lock().unwrap();
        Ok(comments
            .iter()
            .filter(|record| record.shop_id == shop_id)
            .cloned()
            .collect())
    }

    async fn comment_count(&self) -> Result<usize> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.len())
    }
}
