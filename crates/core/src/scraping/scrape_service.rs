//! Scrape job: read targets from the sheet, fetch each bond's unit limit,
//! append one timestamped snapshot column.

use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use log::{error, info};

use crate::constants::{DEFAULT_SNAPSHOT_PREFIX, DEFAULT_TZ, LABEL_TIMESTAMP_FORMAT};
use crate::errors::{Error, Result};
use crate::sheets::SnapshotStoreTrait;

use super::scrape_client::BondPageClient;

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub snapshot_prefix: String,
    pub tz: Tz,
    /// Politeness delay between page fetches.
    pub request_delay_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            snapshot_prefix: DEFAULT_SNAPSHOT_PREFIX.to_string(),
            tz: DEFAULT_TZ,
            request_delay_ms: 2000,
        }
    }
}

#[derive(Debug)]
pub struct ScrapeSummary {
    /// Header label the new column was written under.
    pub label: String,
    /// Link targets found in the sheet.
    pub targets: usize,
    /// Pages that yielded a numeric limit.
    pub fetched: usize,
}

pub struct ScrapeService {
    store: Arc<dyn SnapshotStoreTrait>,
    pages: BondPageClient,
    config: ScrapeConfig,
}

impl ScrapeService {
    pub fn new(
        store: Arc<dyn SnapshotStoreTrait>,
        pages: BondPageClient,
        config: ScrapeConfig,
    ) -> Self {
        ScrapeService {
            store,
            pages,
            config,
        }
    }

    /// Runs one scrape pass. A page that fails leaves a blank cell so row
    /// alignment with the sheet is preserved; store failures abort the run.
    pub async fn run(&self) -> Result<ScrapeSummary> {
        let targets = self.store.get_link_targets().await?;
        if targets.is_empty() {
            return Err(Error::Unexpected(
                "no link targets found in the sheet".to_string(),
            ));
        }

        let mut values = Vec::with_capacity(targets.len());
        let mut fetched = 0usize;
        for (position, url) in targets.iter().enumerate() {
            info!("Scraping {}/{}: {}", position + 1, targets.len(), url);
            match self.pages.fetch_unit_limit(url).await {
                Ok(Some(limit)) => {
                    fetched += 1;
                    values.push(limit.to_string());
                }
                Ok(None) => values.push(String::new()),
                Err(e) => {
                    error!("Error scraping {}: {}", url, e);
                    values.push(String::new());
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(self.config.request_delay_ms))
                .await;
        }

        let now = Utc::now().with_timezone(&self.config.tz);
        let label = format!(
            "{} ({})",
            self.config.snapshot_prefix,
            now.format(LABEL_TIMESTAMP_FORMAT)
        );
        self.store.append_snapshot_column(&label, &values).await?;
        info!(
            "Scrape complete: {}/{} limits recorded under {:?}",
            fetched,
            targets.len(),
            label
        );

        Ok(ScrapeSummary {
            label,
            targets: targets.len(),
            fetched,
        })
    }
}
