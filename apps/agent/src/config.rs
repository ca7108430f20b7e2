use chrono_tz::Tz;

use bondwatch_core::constants::{
    DEFAULT_MAX_GAP_MINUTES, DEFAULT_SNAPSHOT_PREFIX, DEFAULT_TZ,
    DEFAULT_WINDOW_TOLERANCE_MINUTES,
};

pub struct Config {
    pub credentials_path: String,
    pub spreadsheet_id: String,
    pub slack_webhook_url: Option<String>,
    pub tz: Tz,
    pub snapshot_prefix: String,
    pub window_tolerance_minutes: i64,
    pub max_gap_minutes: i64,
    pub request_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let credentials_path = std::env::var("GOOGLE_CREDENTIALS_PATH")
            .unwrap_or_else(|_| "service_account.json".into());
        let spreadsheet_id = std::env::var("BW_SPREADSHEET_ID").expect("BW_SPREADSHEET_ID must be set");
        let slack_webhook_url = std::env::var("BW_SLACK_WEBHOOK_URL").ok();
        let tz: Tz = std::env::var("BW_TZ")
            .unwrap_or_else(|_| DEFAULT_TZ.name().to_string())
            .parse()
            .expect("Invalid BW_TZ");
        let snapshot_prefix = std::env::var("BW_SNAPSHOT_PREFIX")
            .unwrap_or_else(|_| DEFAULT_SNAPSHOT_PREFIX.into());
        let window_tolerance_minutes: i64 = std::env::var("BW_WINDOW_TOLERANCE_MINUTES")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_WINDOW_TOLERANCE_MINUTES);
        let max_gap_minutes: i64 = std::env::var("BW_MAX_GAP_MINUTES")
            .unwrap_or_default()
            .parse()
            .unwrap_or(DEFAULT_MAX_GAP_MINUTES);
        let request_delay_ms: u64 = std::env::var("BW_REQUEST_DELAY_MS")
            .unwrap_or_default()
            .parse()
            .unwrap_or(2000);

        Self {
            credentials_path,
            spreadsheet_id,
            slack_webhook_url,
            tz,
            snapshot_prefix,
            window_tolerance_minutes,
            max_gap_minutes,
            request_delay_ms,
        }
    }
}
