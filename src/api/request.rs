//! Request types for the hours tracker API.
//!
//! Form fields arrive as the raw text the user typed; conversion into the
//! domain types parses dates and times with the same rules everywhere.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calculation::{parse_date_text, parse_time_text};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{EntryKind, EntryUpdate, NewEntry};

/// Request body for `POST /entries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntryRequest {
    /// Date as `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub date: String,
    /// Entry kind text (`work`, `vacation`, ...); blank or absent means work.
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
    /// Clock-in text, e.g. `"0630"` or `"06:30"`.
    #[serde(default)]
    pub start: Option<String>,
    /// Clock-out text.
    #[serde(default)]
    pub end: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for `PUT /entries/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    /// New kind text; blank or absent keeps the current kind.
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// New clock-in text.
    #[serde(default)]
    pub start: Option<String>,
    /// New clock-out text.
    #[serde(default)]
    pub end: Option<String>,
}

/// Query for endpoints that take an optional date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// Date text; absent means today (or all dates when listing).
    pub date: Option<String>,
}

/// Query for `GET /summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryQuery {
    /// Reference date text; absent means today.
    pub today: Option<String>,
}

/// Query for `GET /calendar`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// Month as `YYYY-MM`; absent means the current month.
    pub month: Option<String>,
}

/// Parses optional time text; blank text counts as absent.
fn optional_time(text: Option<&str>) -> TrackerResult<Option<NaiveTime>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(t) => parse_time_text(t).map(Some),
    }
}

/// Parses optional date text; blank text counts as absent.
pub fn optional_date(text: Option<&str>) -> TrackerResult<Option<NaiveDate>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(d) => parse_date_text(d).map(Some),
    }
}

/// Parses `YYYY-MM` into a year and month.
pub fn parse_month_text(text: &str) -> TrackerResult<(i32, u32)> {
    let input = text.trim();
    let invalid = || TrackerError::InvalidDate {
        input: input.to_string(),
    };

    let (year, month) = input.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

impl TryFrom<NewEntryRequest> for NewEntry {
    type Error = TrackerError;

    fn try_from(req: NewEntryRequest) -> Result<Self, Self::Error> {
        let date = parse_date_text(&req.date)?;
        let kind = match req.kind.as_deref() {
            Some(text) => text.parse::<EntryKind>()?,
            None => EntryKind::Work,
        };
        // Times typed for a leave entry are ignored, not validated.
        let (start, end) = if kind.is_work() {
            (
                optional_time(req.start.as_deref())?,
                optional_time(req.end.as_deref())?,
            )
        } else {
            (None, None)
        };

        Ok(NewEntry {
            date,
            kind,
            start,
            end,
            notes: req.notes.unwrap_or_default(),
        })
    }
}

impl TryFrom<UpdateEntryRequest> for EntryUpdate {
    type Error = TrackerError;

    fn try_from(req: UpdateEntryRequest) -> Result<Self, Self::Error> {
        let kind = req
            .kind
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::parse::<EntryKind>)
            .transpose()?;
        // Switching to a leave kind drops the times, so they are not validated.
        let (start, end) = if kind.is_none_or(EntryKind::is_work) {
            (
                optional_time(req.start.as_deref())?,
                optional_time(req.end.as_deref())?,
            )
        } else {
            (None, None)
        };

        Ok(EntryUpdate {
            kind,
            notes: req.notes,
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_work_request() {
        let json = r#"{
            "date": "13/01/2026",
            "type": "work",
            "start": "630",
            "end": "15:30",
            "notes": "site visit"
        }"#;

        let request: NewEntryRequest = serde_json::from_str(json).unwrap();
        let entry: NewEntry = request.try_into().unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 1, 13).unwrap());
        assert_eq!(entry.start, NaiveTime::from_hms_opt(6, 30, 0));
        assert_eq!(entry.end, NaiveTime::from_hms_opt(15, 30, 0));
        assert_eq!(entry.notes, "site visit");
    }

    #[test]
    fn test_kind_defaults_to_work() {
        let request: NewEntryRequest = serde_json::from_str(r#"{"date": "2026-01-13"}"#).unwrap();
        let entry: NewEntry = request.try_into().unwrap();
        assert_eq!(entry.kind, EntryKind::Work);
    }

    #[test]
    fn test_kind_accepts_sheet_labels() {
        let request: NewEntryRequest =
            serde_json::from_str(r#"{"date": "2026-01-13", "type": "מחלה"}"#).unwrap();
        let entry: NewEntry = request.try_into().unwrap();
        assert_eq!(entry.kind, EntryKind::Sick);
    }

    #[test]
    fn test_unknown_kind_is_invalid_entry() {
        let request: NewEntryRequest =
            serde_json::from_str(r#"{"date": "2026-01-13", "type": "sabbatical"}"#).unwrap();
        let result: Result<NewEntry, _> = request.try_into();
        assert!(matches!(
            result,
            Err(TrackerError::InvalidEntry { ref field, .. }) if field == "type"
        ));
    }

    #[test]
    fn test_leave_request_ignores_bad_times() {
        let request = NewEntryRequest {
            date: "2026-01-13".to_string(),
            kind: Some("vacation".to_string()),
            start: Some("9999".to_string()),
            end: None,
            notes: None,
        };
        let entry: NewEntry = request.try_into().unwrap();
        assert_eq!(entry.start, None);
    }

    #[test]
    fn test_bad_time_is_reported() {
        let request = NewEntryRequest {
            date: "2026-01-13".to_string(),
            kind: Some("work".to_string()),
            start: Some("2575".to_string()),
            end: Some("1600".to_string()),
            notes: None,
        };
        let result: Result<NewEntry, _> = request.try_into();
        assert!(matches!(result, Err(TrackerError::InvalidTime { .. })));
    }

    #[test]
    fn test_blank_times_are_absent() {
        let request = UpdateEntryRequest {
            start: Some("  ".to_string()),
            ..UpdateEntryRequest::default()
        };
        let update: EntryUpdate = request.try_into().unwrap();
        assert_eq!(update.start, None);
    }

    #[test]
    fn test_update_to_leave_ignores_bad_times() {
        let request = UpdateEntryRequest {
            kind: Some("vacation".to_string()),
            start: Some("9999".to_string()),
            ..UpdateEntryRequest::default()
        };
        let update: EntryUpdate = request.try_into().unwrap();
        assert_eq!(update.kind, Some(EntryKind::Vacation));
        assert_eq!(update.start, None);
    }

    #[test]
    fn test_update_without_kind_still_checks_times() {
        let request = UpdateEntryRequest {
            start: Some("9999".to_string()),
            ..UpdateEntryRequest::default()
        };
        let result: Result<EntryUpdate, _> = request.try_into();
        assert!(matches!(result, Err(TrackerError::InvalidTime { .. })));
    }

    #[test]
    fn test_parse_month_text() {
        assert_eq!(parse_month_text("2026-01").unwrap(), (2026, 1));
        assert_eq!(parse_month_text("2026-12").unwrap(), (2026, 12));
        assert!(parse_month_text("2026-13").is_err());
        assert!(parse_month_text("January").is_err());
    }
}
