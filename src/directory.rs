use tracing::{info, instrument};

use crate::config::SheetConfig;
use crate::error::{PortalError, Result};
use crate::sheet::fetcher::PublishedSheet;
use crate::sheet::schema::ColumnMap;
use crate::sheet::{normalizer, parser};
use crate::types::{SheetSource, ShopRecord};

/// Consumer-facing view of the sheet: list and detail lookups.
///
/// The spreadsheet is the sole system of record, so every call performs
/// a fresh fetch-and-normalize pass; nothing is cached between requests
/// and a failed fetch is never papered over with stale data.
pub struct ShopDirectory {
    source: Box<dyn SheetSource>,
    config: SheetConfig,
}

impl ShopDirectory {
    /// Directory backed by the published CSV export named in the config.
    pub fn from_config(config: SheetConfig) -> Result<Self> {
        let source = PublishedSheet::new(&config)?;
        Ok(Self::with_source(Box::new(source), config))
    }

    /// Directory over an arbitrary sheet source (test doubles included).
    pub fn with_source(source: Box<dyn SheetSource>, config: SheetConfig) -> Self {
        Self { source, config }
    }

    /// All shops on the sheet, in row order.
    #[instrument(skip(self))]
    pub async fn list_shops(&self) -> Result<Vec<ShopRecord>> {
        let csv_text = self.source.fetch_csv().await?;
        let rows = parser::parse_rows(&csv_text)?;
        let header_index = parser::find_header_row(&rows, self.config.header)?;
        let map = ColumnMap::resolve(&rows[header_index], self.config.columns)?;
        let records = normalizer::build_records(&rows, header_index, &map);
        info!(
            "Normalized {} shop records from {}",
            records.len(),
            self.source.source_name()
        );
        Ok(records)
    }

    /// First shop whose canonical id equals `id`. Both sides were
    /// canonicalized at construction time, so the comparison is plain
    /// string equality.
    #[instrument(skip(self))]
    pub async fn get_shop(&self, id: &str) -> Result<ShopRecord> {
        let records = self.list_shops().await?;
        records
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| PortalError::NotFound(id.to_string()))
    }
}
