//! Tests for report rendering.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use rust_decimal_macros::dec;

use crate::constants::DEFAULT_TZ;
use crate::notify::notify_model::format_amount;
use crate::notify::SlackNotifier;
use crate::volume::{IntervalDelta, VolumeReport};

fn ist(d: u32, h: u32) -> DateTime<Tz> {
    DEFAULT_TZ
        .with_ymd_and_hms(2025, 10, d, h, 0, 0)
        .single()
        .unwrap()
}

fn report(net: rust_decimal::Decimal) -> VolumeReport {
    VolumeReport {
        net_change: net,
        raw_change: dec!(10),
        start_time: ist(5, 11),
        end_time: ist(6, 11),
        first_label: "Snapshot (2025-10-05 11:00)".to_string(),
        last_label: "Snapshot (2025-10-06 11:00)".to_string(),
        entities: 12,
        intervals: vec![IntervalDelta {
            from_label: "Snapshot (2025-10-05 11:00)".to_string(),
            to_label: "Snapshot (2025-10-06 11:00)".to_string(),
            from_time: ist(5, 11),
            to_time: ist(6, 11),
            raw_change: dec!(10),
            net_change: net,
            entities: 12,
            missing: false,
        }],
    }
}

#[test]
fn test_format_amount_groups_thousands() {
    assert_eq!(format_amount(dec!(0)), "0.00");
    assert_eq!(format_amount(dec!(999)), "999.00");
    assert_eq!(format_amount(dec!(10000)), "10,000.00");
    assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
    assert_eq!(format_amount(dec!(-10000)), "-10,000.00");
}

#[test]
fn test_render_positive_report_is_green() {
    let message = SlackNotifier::render("24hr Volume Report (11 AM - 11 AM)", &report(dec!(10000)));
    let attachment = &message.attachments[0];

    assert_eq!(attachment.color, "#36a64f");
    assert!(attachment.title.contains("24hr Volume Report"));
    assert_eq!(attachment.fields.len(), 4);
    assert!(attachment.fields[2].value.contains("10,000.00"));
    assert!(attachment.fields[3].value.contains("2 snapshots"));
    assert!(attachment.fields[3].value.contains("12 bonds"));
}

#[test]
fn test_render_negative_report_is_red() {
    let message = SlackNotifier::render("24hr Volume Report (11 AM - 11 AM)", &report(dec!(-500)));
    assert_eq!(message.attachments[0].color, "#ff0000");
}
