//! Response types for the hours tracker API.
//!
//! This module defines the entry views returned by the manage endpoints
//! and the error response structures for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{format_clock, format_display_date, format_signed_hours};
use crate::error::TrackerError;
use crate::models::{Entry, EntryKind};
use crate::store::SheetRow;

/// An entry as shown in lists and the delete confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryView {
    /// Row id.
    pub id: usize,
    /// The logged date.
    pub date: NaiveDate,
    /// `date` as `DD/MM/YYYY`.
    pub display_date: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Selector label: `Work | 06:30` for work, the kind label otherwise.
    pub label: String,
    /// Clock-in as `HH:MM`.
    pub start: Option<String>,
    /// Clock-out as `HH:MM`.
    pub end: Option<String>,
    /// Worked hours for work entries.
    pub worked_hours: Option<Decimal>,
    /// Worked hours as `H:MM`.
    pub worked_display: Option<String>,
    /// Free-text notes.
    pub notes: String,
}

impl From<&Entry> for EntryView {
    fn from(entry: &Entry) -> Self {
        let label = match entry.interval {
            Some(interval) => format!("{} | {}", entry.kind.label(), format_clock(interval.start)),
            None => entry.kind.label().to_string(),
        };
        Self {
            id: entry.id,
            date: entry.date,
            display_date: format_display_date(entry.date),
            kind: entry.kind,
            label,
            start: entry.interval.map(|i| format_clock(i.start)),
            end: entry.interval.map(|i| format_clock(i.end)),
            worked_hours: entry.interval.map(|i| i.hours()),
            worked_display: entry.interval.map(|i| format_signed_hours(i.hours())),
            notes: entry.notes.clone(),
        }
    }
}

/// A logged date as offered by the date selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateView {
    /// The date.
    pub date: NaiveDate,
    /// `date` as `DD/MM/YYYY`.
    pub display_date: String,
}

/// The body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedRow {
    /// Row id the row had before deletion.
    pub id: usize,
    /// The removed cells.
    pub row: SheetRow,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        let message = error.to_string();
        match error {
            TrackerError::ConfigNotFound { .. } | TrackerError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            TrackerError::InvalidTime { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    message,
                    "Times are HHMM, HMM, HH or HH:MM with hour 0-23 and minute 0-59",
                ),
            },
            TrackerError::InvalidDate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    "Dates are YYYY-MM-DD or DD/MM/YYYY; months are YYYY-MM",
                ),
            },
            TrackerError::InvalidEntry { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ENTRY", message),
            },
            TrackerError::OverlappingEntry { existing_id, .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "OVERLAPPING_ENTRY",
                    message,
                    format!("Edit or delete entry {} first", existing_id),
                ),
            },
            TrackerError::EntryNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ENTRY_NOT_FOUND", message),
            },
            TrackerError::InvalidRow { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_ROW",
                    message,
                    "The sheet row cannot be read; it can only be deleted",
                ),
            },
            TrackerError::StorageError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Worksheet unavailable", message),
            },
        }
    }
}
