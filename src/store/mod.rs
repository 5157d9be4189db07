//! Worksheet storage.
//!
//! The tracker keeps every entry as one row of a single worksheet. A
//! [`SheetStore`] reads and replaces that worksheet as a whole; rows are
//! kept as raw strings so that cells the tracker cannot interpret survive
//! a rewrite unchanged.

mod csv_sheet;
mod memory;

pub use csv_sheet::CsvSheetStore;
pub use memory::MemorySheetStore;

use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;

/// One raw worksheet row.
///
/// Columns missing from the sheet (older sheets have no `type` column)
/// deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    /// Date cell.
    #[serde(default)]
    pub date: String,
    /// Clock-in cell.
    #[serde(default)]
    pub start_time: String,
    /// Clock-out cell.
    #[serde(default)]
    pub end_time: String,
    /// Notes cell.
    #[serde(default)]
    pub notes: String,
    /// Entry type cell.
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl SheetRow {
    /// Column headers in sheet order.
    pub const HEADERS: [&'static str; 5] = ["date", "start_time", "end_time", "notes", "type"];
}

/// A whole-worksheet store.
pub trait SheetStore: Send + Sync {
    /// Reads every row of the worksheet, in sheet order.
    fn read_rows(&self) -> TrackerResult<Vec<SheetRow>>;

    /// Replaces the worksheet with `rows`.
    fn write_rows(&self, rows: &[SheetRow]) -> TrackerResult<()>;

    /// Human-readable location for logs and errors.
    fn location(&self) -> String;
}
