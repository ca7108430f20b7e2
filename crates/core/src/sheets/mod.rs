//! Snapshot sheet access - the store trait and its Google Sheets
//! implementation.

mod google_sheets_store;
mod sheets_auth;
mod sheets_errors;
mod sheets_model;
mod sheets_traits;

pub use google_sheets_store::GoogleSheetsStore;
pub use sheets_errors::SheetsError;
pub use sheets_model::{column_letter, extract_link_target, ServiceAccountKey};
pub use sheets_traits::SnapshotStoreTrait;
