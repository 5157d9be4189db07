//! Error types for the hours tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the tracker can report: configuration, form input,
//! overlapping entries and worksheet storage.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the hours tracker.
///
/// # Example
///
/// ```
/// use hours_tracker::error::TrackerError;
///
/// let error = TrackerError::EntryNotFound { id: 7 };
/// assert_eq!(error.to_string(), "Entry not found: 7");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day text could not be parsed.
    #[error("Invalid time '{input}': {message}")]
    InvalidTime {
        /// The text as entered.
        input: String,
        /// Why the text was rejected.
        message: String,
    },

    /// A date text could not be parsed.
    #[error("Invalid date '{input}'")]
    InvalidDate {
        /// The text as entered.
        input: String,
    },

    /// An entry field was missing or inconsistent.
    #[error("Invalid entry field '{field}': {message}")]
    InvalidEntry {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A work interval overlaps an existing work entry on the same date.
    #[error("Entry {start}-{end} on {date} overlaps existing entry {existing_id}")]
    OverlappingEntry {
        /// The date of both entries.
        date: NaiveDate,
        /// Start of the rejected interval.
        start: NaiveTime,
        /// End of the rejected interval.
        end: NaiveTime,
        /// Row id of the entry it collides with.
        existing_id: usize,
    },

    /// No entry exists with the given row id.
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// The requested row id.
        id: usize,
    },

    /// A worksheet row could not be interpreted.
    #[error("Invalid sheet row {row}: {message}")]
    InvalidRow {
        /// Zero-based row index.
        row: usize,
        /// A description of the problem.
        message: String,
    },

    /// Reading or writing the worksheet failed.
    #[error("Storage error at '{path}': {message}")]
    StorageError {
        /// The worksheet location.
        path: String,
        /// The underlying failure.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = TrackerError::ConfigNotFound {
            path: "/missing/tracker.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tracker.yaml"
        );
    }

    #[test]
    fn test_invalid_time_displays_input_and_message() {
        let error = TrackerError::InvalidTime {
            input: "2575".to_string(),
            message: "hour must be at most 23".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time '2575': hour must be at most 23"
        );
    }

    #[test]
    fn test_overlapping_entry_displays_interval() {
        let error = TrackerError::OverlappingEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            existing_id: 3,
        };
        assert_eq!(
            error.to_string(),
            "Entry 09:00:00-12:00:00 on 2026-01-13 overlaps existing entry 3"
        );
    }

    #[test]
    fn test_storage_error_displays_path() {
        let error = TrackerError::StorageError {
            path: "data/Sheet1.csv".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Storage error at 'data/Sheet1.csv': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TrackerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> TrackerResult<()> {
            Err(TrackerError::EntryNotFound { id: 1 })
        }

        fn propagates_error() -> TrackerResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
