//! Store trait for the snapshot sheet.

use async_trait::async_trait;

use crate::errors::Result;

/// Read/append access to the snapshot sheet.
///
/// Reads are whole-row or whole-column batch fetches; implementations must
/// not fall back to cell-by-cell access. The sheet is append-only from the
/// calculator's point of view: nothing here mutates existing cells.
#[async_trait]
pub trait SnapshotStoreTrait: Send + Sync {
    /// The header row (row 1), one label per column.
    async fn get_header_row(&self) -> Result<Vec<String>>;

    /// All values of one column (0-based index), data rows only, in fixed
    /// row order.
    async fn get_column(&self, index: usize) -> Result<Vec<String>>;

    /// The whole table, header row included, as raw cell strings.
    async fn get_all_rows(&self) -> Result<Vec<Vec<String>>>;

    /// Product-page URLs from the link column, deduplicated, in row order.
    async fn get_link_targets(&self) -> Result<Vec<String>>;

    /// Appends one snapshot column: `label` in the header row, `values`
    /// below it in fixed row order.
    async fn append_snapshot_column(&self, label: &str, values: &[String]) -> Result<()>;
}
