//! Slack webhook payload shapes.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SlackMessage {
    pub attachments: Vec<SlackAttachment>,
}

#[derive(Debug, Serialize)]
pub struct SlackAttachment {
    pub color: String,
    pub title: String,
    pub fields: Vec<SlackField>,
    pub footer: String,
    pub ts: i64,
}

#[derive(Debug, Serialize)]
pub struct SlackField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// Formats an amount with thousands separators and two decimal places.
pub(crate) fn format_amount(value: Decimal) -> String {
    let text = format!("{:.2}", value.round_dp(2));
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (position, ch) in int_part.chars().enumerate() {
        if position > 0 && (int_part.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac_part)
}
