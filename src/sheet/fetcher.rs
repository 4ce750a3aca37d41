use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::config::SheetConfig;
use crate::error::Result;
use crate::types::SheetSource;

/// Fetches the published CSV export of a spreadsheet over HTTP.
///
/// The client carries a request timeout so a stalled sheet endpoint
/// surfaces as a fetch error instead of hanging the caller.
pub struct PublishedSheet {
    client: reqwest::Client,
    url: String,
}

impl PublishedSheet {
    pub fn new(config: &SheetConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            url: config.csv_url.clone(),
        })
    }
}

#[async_trait]
impl SheetSource for PublishedSheet {
    fn source_name(&self) -> &'static str {
        "published_sheet"
    }

    #[instrument(skip(self))]
    async fn fetch_csv(&self) -> Result<String> {
        debug!("Fetching sheet CSV from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        info!("Fetched {} bytes of CSV", body.len());
        Ok(body)
    }
}
