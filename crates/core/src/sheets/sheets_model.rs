//! Sheet payload shapes and cell helpers.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// The fields we use from a Google service account key file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// `values.get` response payload. The API omits `values` entirely for an
/// empty range.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// Renders a raw API cell value as the string the calculators consume.
/// Numbers keep their JSON representation; null and anything structural
/// become the empty string.
pub(crate) fn cell_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Converts a 1-based column index to its A1 letter (1 -> A, 27 -> AA).
pub fn column_letter(mut index: usize) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        index -= 1;
        letters.push(b'A' + (index % 26) as u8);
        index /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Pulls a navigable URL out of a link cell: either a plain URL or a
/// `=HYPERLINK("url", "text")` formula. Anything else yields `None`.
pub fn extract_link_target(cell: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let formula = RE.get_or_init(|| Regex::new(r#"=HYPERLINK\("([^"]+)""#).expect("hyperlink pattern"));

    let trimmed = cell.trim();
    if let Some(captures) = formula.captures(trimmed) {
        return Some(captures[1].to_string());
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    None
}
