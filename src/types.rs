use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the published sheet, cleaned up for display.
///
/// Optional fields are filled with the sentinel at construction time,
/// so consumers never have to deal with absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub status: String,
    pub message: String,
    pub recommendation: String,
    pub ec_url: String,
    pub map_url: String,
}

/// A visitor comment attached to a shop. Held in process memory only;
/// the store is emptied on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: Uuid,
    pub shop_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Source of raw CSV text for the directory.
#[async_trait::async_trait]
pub trait SheetSource: Send + Sync {
    /// Short identifier for this source, used in logging.
    fn source_name(&self) -> &'static str;

    /// Fetch the sheet's CSV export. A single attempt; no retries.
    async fn fetch_csv(&self) -> Result<String>;
}
