//! Google Sheets implementation of the snapshot store.
//!
//! Every read is a whole-range batch fetch against the v4 values API; the
//! write side is the single column append the scrape job needs.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::json;

use crate::constants::LINK_COLUMN;
use crate::errors::Result;

use super::sheets_auth::fetch_access_token;
use super::sheets_errors::SheetsError;
use super::sheets_model::{
    cell_to_string, column_letter, extract_link_target, ServiceAccountKey, ValueRange,
};
use super::sheets_traits::SnapshotStoreTrait;

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Widest range we ever ask for; the sheet never grows past column ZZ.
const FULL_TABLE_RANGE: &str = "A1:ZZ";

pub struct GoogleSheetsStore {
    client: reqwest::Client,
    token: String,
    spreadsheet_id: String,
}

impl GoogleSheetsStore {
    /// Opens the store: loads the key file, mints a bearer token, and holds
    /// it for the lifetime of this instance (one invocation).
    pub async fn connect(credentials_path: &str, spreadsheet_id: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(credentials_path)
            .map_err(|e| SheetsError::Key(format!("cannot read {}: {}", credentials_path, e)))?;
        let key: ServiceAccountKey = serde_json::from_str(&raw)
            .map_err(|e| SheetsError::Key(format!("malformed key file: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(SheetsError::Http)?;

        let token = fetch_access_token(&client, &key).await?;
        info!(
            "Sheets connection established for spreadsheet {}",
            spreadsheet_id
        );

        Ok(GoogleSheetsStore {
            client,
            token,
            spreadsheet_id: spreadsheet_id.to_string(),
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/{}/values/{}",
            BASE_URL,
            self.spreadsheet_id,
            urlencoding::encode(range)
        )
    }

    async fn get_values(
        &self,
        range: &str,
        major_dimension: &str,
        render_option: &str,
    ) -> std::result::Result<Vec<Vec<String>>, SheetsError> {
        let response = self
            .client
            .get(self.values_url(range))
            .bearer_auth(&self.token)
            .query(&[
                ("majorDimension", major_dimension),
                ("valueRenderOption", render_option),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SheetsError::Api(format!(
                "values.get {} returned {}: {}",
                range, status, body
            )));
        }

        let payload: ValueRange = response.json().await?;
        Ok(payload
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    async fn put_values(
        &self,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> std::result::Result<(), SheetsError> {
        let response = self
            .client
            .put(self.values_url(range))
            .bearer_auth(&self.token)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({
                "range": range,
                "majorDimension": "COLUMNS",
                "values": values,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SheetsError::Api(format!(
                "values.update {} returned {}: {}",
                range, status, body
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SnapshotStoreTrait for GoogleSheetsStore {
    async fn get_header_row(&self) -> Result<Vec<String>> {
        let mut rows = self.get_values("1:1", "ROWS", "UNFORMATTED_VALUE").await?;
        let first = rows.drain(..).next().unwrap_or_default();
        Ok(first)
    }

    async fn get_column(&self, index: usize) -> Result<Vec<String>> {
        let letter = column_letter(index + 1);
        let range = format!("{}2:{}", letter, letter);
        let mut columns = self.get_values(&range, "COLUMNS", "UNFORMATTED_VALUE").await?;
        let first = columns.drain(..).next().unwrap_or_default();
        Ok(first)
    }

    async fn get_all_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self
            .get_values(FULL_TABLE_RANGE, "ROWS", "UNFORMATTED_VALUE")
            .await?)
    }

    async fn get_link_targets(&self) -> Result<Vec<String>> {
        let letter = column_letter(LINK_COLUMN + 1);
        let range = format!("{}2:{}", letter, letter);
        // FORMULA render keeps =HYPERLINK(...) intact so the URL survives.
        let mut columns = self.get_values(&range, "COLUMNS", "FORMULA").await?;
        let cells = columns.drain(..).next().unwrap_or_default();

        let mut targets: Vec<String> = Vec::new();
        for cell in &cells {
            if let Some(url) = extract_link_target(cell) {
                if !targets.contains(&url) {
                    targets.push(url);
                }
            }
        }
        debug!("Found {} link targets in the sheet", targets.len());
        Ok(targets)
    }

    async fn append_snapshot_column(&self, label: &str, values: &[String]) -> Result<()> {
        let header = self.get_header_row().await?;
        let letter = column_letter(header.len() + 1);
        let range = format!("{}1:{}{}", letter, letter, values.len() + 1);

        let mut column = Vec::with_capacity(values.len() + 1);
        column.push(label.to_string());
        column.extend(values.iter().cloned());

        self.put_values(&range, vec![column]).await?;
        info!(
            "Appended snapshot column {:?} with {} values at {}",
            label,
            values.len(),
            letter
        );
        Ok(())
    }
}
