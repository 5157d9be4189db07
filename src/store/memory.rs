//! In-process worksheet store.

use std::sync::Mutex;

use super::{SheetRow, SheetStore};
use crate::error::{TrackerError, TrackerResult};

/// A worksheet held in memory. Used by tests and benchmarks.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    rows: Mutex<Vec<SheetRow>>,
}

impl MemorySheetStore {
    /// Creates an empty worksheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a worksheet pre-filled with `rows`.
    pub fn with_rows(rows: Vec<SheetRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    fn poisoned() -> TrackerError {
        TrackerError::StorageError {
            path: "memory".to_string(),
            message: "worksheet lock poisoned".to_string(),
        }
    }
}

impl SheetStore for MemorySheetStore {
    fn read_rows(&self) -> TrackerResult<Vec<SheetRow>> {
        let rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        Ok(rows.clone())
    }

    fn write_rows(&self, rows: &[SheetRow]) -> TrackerResult<()> {
        let mut guard = self.rows.lock().map_err(|_| Self::poisoned())?;
        *guard = rows.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
