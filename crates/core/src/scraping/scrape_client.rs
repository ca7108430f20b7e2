//! Bond product-page client.
//!
//! Each bond page exposes the purchasable-unit limit as the `max` attribute
//! of its numeric unit-selector input. The markup drifts between deploys,
//! so a fixed fallback list of selectors is tried in order.

use std::time::Duration;

use log::{debug, warn};
use scraper::{Html, Selector};

use super::scrape_errors::ScrapeError;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const UNIT_LIMIT_SELECTORS: &[&str] = &[
    "input.unit-selector-input[type='number']",
    "aside input[type='number']",
    "input[type='number'][inputmode='numeric']",
];

pub struct BondPageClient {
    client: reqwest::Client,
}

impl BondPageClient {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(BondPageClient { client })
    }

    /// Fetches the purchasable-unit limit from a bond page.
    ///
    /// `Ok(None)` means the page loaded but no recognizable unit-selector
    /// input was found, or its `max` attribute was not numeric - logged and
    /// recorded as a blank cell by the caller. Transport failures and
    /// non-success statuses are `Err`.
    pub async fn fetch_unit_limit(&self, url: &str) -> Result<Option<u32>, ScrapeError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ScrapeError::BadStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(extract_unit_limit(&body, url))
    }
}

/// Selector-fallback extraction, separated from I/O so it runs on captured
/// markup in tests. Stops at the first selector that matches an element;
/// a matched element with an unusable `max` does not fall through to later
/// selectors - they would find the same element again.
pub fn extract_unit_limit(html: &str, url: &str) -> Option<u32> {
    let document = Html::parse_document(html);
    for selector_str in UNIT_LIMIT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        let Some(element) = document.select(&selector).next() else {
            continue;
        };

        return match element
            .value()
            .attr("max")
            .map(str::trim)
            .and_then(|max| max.parse::<u32>().ok())
        {
            Some(limit) => {
                debug!("Extracted unit limit {} from {} via `{}`", limit, url, selector_str);
                Some(limit)
            }
            None => {
                warn!(
                    "Matched unit selector on {} but its max attribute is missing or not numeric",
                    url
                );
                None
            }
        };
    }
    warn!("No unit-selector input found on {}", url);
    None
}
