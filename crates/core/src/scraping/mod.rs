//! Bond inventory scraping - fetching per-bond unit limits from the
//! marketplace's product pages and appending snapshot columns.

mod scrape_client;
mod scrape_errors;
mod scrape_service;

pub use scrape_client::{extract_unit_limit, BondPageClient};
pub use scrape_errors::ScrapeError;
pub use scrape_service::{ScrapeConfig, ScrapeService, ScrapeSummary};

#[cfg(test)]
mod scrape_client_tests;
