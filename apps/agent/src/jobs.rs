//! One-shot job entry points: a scrape pass or a window-dispatched alert
//! run. Each invocation opens its own sheet connection and drops it on the
//! way out; cron owns recurrence.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing::{info, warn};

use bondwatch_core::notify::{NotifierTrait, SlackNotifier};
use bondwatch_core::schedule::{default_windows, due_jobs};
use bondwatch_core::scraping::{BondPageClient, ScrapeConfig, ScrapeService};
use bondwatch_core::sheets::GoogleSheetsStore;
use bondwatch_core::volume::{VolumeConfig, VolumeService};

use crate::config::Config;

async fn open_store(config: &Config) -> anyhow::Result<Arc<GoogleSheetsStore>> {
    let store = GoogleSheetsStore::connect(&config.credentials_path, &config.spreadsheet_id)
        .await
        .context("opening snapshot sheet")?;
    Ok(Arc::new(store))
}

pub async fn run_scrape(config: &Config) -> anyhow::Result<()> {
    info!("Starting scraping job...");
    let store = open_store(config).await?;
    let pages = BondPageClient::new()?;
    let service = ScrapeService::new(
        store,
        pages,
        ScrapeConfig {
            snapshot_prefix: config.snapshot_prefix.clone(),
            tz: config.tz,
            request_delay_ms: config.request_delay_ms,
        },
    );

    let summary = service.run().await?;
    info!(
        "Scraping job completed: {}/{} bonds captured under {:?}",
        summary.fetched, summary.targets, summary.label
    );
    Ok(())
}

pub async fn run_alerts(config: &Config) -> anyhow::Result<()> {
    let now = Utc::now().with_timezone(&config.tz);
    info!("Current time: {}", now.format("%Y-%m-%d %I:%M %p %Z"));

    let due = due_jobs(now, &default_windows());
    if due.is_empty() {
        info!("No scheduled alerts for the current time");
        return Ok(());
    }

    let webhook_url = config
        .slack_webhook_url
        .clone()
        .context("BW_SLACK_WEBHOOK_URL must be set for alerts")?;
    let store = open_store(config).await?;
    let volume = VolumeService::new(
        store,
        VolumeConfig {
            snapshot_prefix: config.snapshot_prefix.clone(),
            tz: config.tz,
            window_tolerance_minutes: config.window_tolerance_minutes,
            max_gap_minutes: config.max_gap_minutes,
        },
    );
    let notifier = SlackNotifier::new(webhook_url);

    for job in due {
        let Some((start, end)) = job.target_range(now) else {
            warn!("{}: no usable target range yet, skipping", job.title());
            continue;
        };
        info!("Calculating {}: {} to {}", job.title(), start, end);

        match volume.compute_window(start, end).await {
            Ok(report) => {
                notifier.send_volume_report(job.title(), &report).await;
            }
            Err(e) if e.is_data_unavailable() => {
                warn!("{}: {} - no alert sent", job.title(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
