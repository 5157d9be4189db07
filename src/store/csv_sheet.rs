//! CSV-file worksheet store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SheetRow, SheetStore};
use crate::error::{TrackerError, TrackerResult};

/// A worksheet kept as `<directory>/<worksheet>.csv`.
///
/// A missing file reads as an empty sheet. Writes go to a sibling temp
/// file which is then renamed over the worksheet.
///
/// # Example
///
/// ```no_run
/// use hours_tracker::store::{CsvSheetStore, SheetStore};
///
/// let store = CsvSheetStore::new("./data", "Sheet1");
/// let rows = store.read_rows()?;
/// println!("{} rows in {}", rows.len(), store.location());
/// # Ok::<(), hours_tracker::error::TrackerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvSheetStore {
    path: PathBuf,
}

impl CsvSheetStore {
    /// Creates a store for `worksheet` inside `directory`.
    pub fn new<P: AsRef<Path>>(directory: P, worksheet: &str) -> Self {
        Self {
            path: directory.as_ref().join(format!("{}.csv", worksheet)),
        }
    }

    /// The worksheet file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl ToString) -> TrackerError {
        TrackerError::StorageError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl SheetStore for CsvSheetStore {
    fn read_rows(&self) -> TrackerResult<Vec<SheetRow>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Worksheet missing, reading as empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.storage_error(e))?;

        // Columns are found by header name; a missing column reads as blank.
        let headers = reader
            .byte_headers()
            .map_err(|e| self.storage_error(e))?
            .clone();
        let columns = SheetRow::HEADERS.map(|name| {
            headers
                .iter()
                .position(|header| String::from_utf8_lossy(header).trim() == name)
        });

        let mut rows = Vec::new();
        for record in reader.byte_records() {
            let record = record.map_err(|e| self.storage_error(e))?;
            // Cells are kept as written; bytes that are not UTF-8 are replaced
            // in that cell only.
            let cell = |column: Option<usize>| {
                column
                    .and_then(|i| record.get(i))
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                    .unwrap_or_default()
            };
            rows.push(SheetRow {
                date: cell(columns[0]),
                start_time: cell(columns[1]),
                end_time: cell(columns[2]),
                notes: cell(columns[3]),
                kind: cell(columns[4]),
            });
        }
        Ok(rows)
    }

    fn write_rows(&self, rows: &[SheetRow]) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }

        let tmp_path = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp_path)
                .map_err(|e| self.storage_error(e))?;
            writer
                .write_record(SheetRow::HEADERS)
                .map_err(|e| self.storage_error(e))?;
            for row in rows {
                writer.serialize(row).map_err(|e| self.storage_error(e))?;
            }
            writer.flush().map_err(|e| self.storage_error(e))?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| self.storage_error(e))?;
        debug!(path = %self.path.display(), rows = rows.len(), "Worksheet written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, start: &str, end: &str, notes: &str, kind: &str) -> SheetRow {
        SheetRow {
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            notes: notes.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path(), "Sheet1");
        assert!(store.read_rows().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path().join("nested"), "Sheet1");
        let rows = vec![
            row("2026-01-13", "06:30:00", "15:30:00", "notes, with comma", "work"),
            row("2026-01-14", "", "", "", "vacation"),
        ];

        store.write_rows(&rows).unwrap();
        assert_eq!(store.read_rows().unwrap(), rows);
        assert!(!store.path().with_extension("csv.tmp").exists());
    }

    #[test]
    fn test_empty_sheet_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path(), "Sheet1");
        store.write_rows(&[]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.trim(), "date,start_time,end_time,notes,type");
        assert!(store.read_rows().unwrap().is_empty());
    }

    #[test]
    fn test_sheet_without_type_column() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path(), "Sheet1");
        fs::write(
            store.path(),
            "date,start_time,end_time,notes\n2026-01-13,07:00:00,16:00:00,\n",
        )
        .unwrap();

        let rows = store.read_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].start_time, "07:00:00");
        assert_eq!(rows[0].kind, "");
    }

    #[test]
    fn test_invalid_utf8_cell_only_affects_its_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path(), "Sheet1");
        let mut content = b"date,start_time,end_time,notes,type\n".to_vec();
        content.extend_from_slice(b"2026-01-13,07:00:00,16:00:00,fine,work\n");
        content.extend_from_slice(b"2026-01-14,07:00:00,16:00:00,bad \xff\xfe,work\n");
        fs::write(store.path(), content).unwrap();

        let rows = store.read_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].notes, "fine");
        assert_eq!(rows[1].date, "2026-01-14");
        assert!(rows[1].notes.starts_with("bad "));
        assert!(rows[1].notes.contains('\u{FFFD}'));
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path(), "Sheet1");
        fs::write(
            store.path(),
            "date,start_time,end_time,notes,type\nbad date,,,\"  padded note  \",work\n",
        )
        .unwrap();

        let rows = store.read_rows().unwrap();
        assert_eq!(rows[0].notes, "  padded note  ");

        // A rewrite keeps the cell as it was read
        store.write_rows(&rows).unwrap();
        assert_eq!(store.read_rows().unwrap(), rows);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path(), "Sheet1");
        fs::write(
            store.path(),
            "index,date,start_time,end_time,notes,type\n0,2026-01-13,07:00:00,16:00:00,x,work\n",
        )
        .unwrap();

        let rows = store.read_rows().unwrap();
        assert_eq!(rows[0].date, "2026-01-13");
        assert_eq!(rows[0].notes, "x");
    }
}
