//! Slack notifier - renders a volume report into attachment JSON and posts
//! it to the configured webhook.

use async_trait::async_trait;
use log::{error, info};
use rust_decimal::Decimal;

use crate::volume::VolumeReport;

use super::notify_model::{format_amount, SlackAttachment, SlackField, SlackMessage};

const COLOR_POSITIVE: &str = "#36a64f";
const COLOR_NEGATIVE: &str = "#ff0000";
const TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Delivers a rendered report. Returns success/failure and never raises
/// into the caller; a failed delivery is logged and dropped, not retried.
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    async fn send_volume_report(&self, title: &str, report: &VolumeReport) -> bool;
}

pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(webhook_url: String) -> Self {
        SlackNotifier {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    pub(crate) fn render(title: &str, report: &VolumeReport) -> SlackMessage {
        let color = if report.net_change >= Decimal::ZERO {
            COLOR_POSITIVE
        } else {
            COLOR_NEGATIVE
        };
        let snapshots = report.intervals.len() + 1;
        let start = report.start_time.format(TIME_DISPLAY_FORMAT);
        let end = report.end_time.format(TIME_DISPLAY_FORMAT);

        SlackMessage {
            attachments: vec![SlackAttachment {
                color: color.to_string(),
                title: format!("\u{1F514} {}", title),
                fields: vec![
                    SlackField {
                        title: "Time Period".to_string(),
                        value: format!("{}\n\u{2192} {}", start, end),
                        short: false,
                    },
                    SlackField {
                        title: "Raw Volume (Quantity Changes)".to_string(),
                        value: format_amount(report.raw_change),
                        short: true,
                    },
                    SlackField {
                        title: "Adjusted Volume (w/ Face Value)".to_string(),
                        value: format!("\u{20B9}{}", format_amount(report.net_change)),
                        short: true,
                    },
                    SlackField {
                        title: "Data Points".to_string(),
                        value: format!("{} snapshots, {} bonds", snapshots, report.entities),
                        short: false,
                    },
                ],
                footer: "Bondwatch Monitor".to_string(),
                ts: chrono::Utc::now().timestamp(),
            }],
        }
    }
}

#[async_trait]
impl NotifierTrait for SlackNotifier {
    async fn send_volume_report(&self, title: &str, report: &VolumeReport) -> bool {
        let message = Self::render(title, report);
        match self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                info!("Successfully sent {:?} to Slack", title);
                true
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!(
                    "Failed to send Slack alert {:?}. Status: {}, Response: {}",
                    title, status, body
                );
                false
            }
            Err(e) => {
                error!("Error sending Slack alert {:?}: {}", title, e);
                false
            }
        }
    }
}
