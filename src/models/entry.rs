//! Entry model and related types.
//!
//! An [`Entry`] is one worksheet row interpreted: a dated work interval or a
//! leave marker. Work entries always carry both times with `end > start`;
//! leave entries carry none.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{parse_date_text, parse_time_text};
use crate::error::{TrackerError, TrackerResult};
use crate::store::SheetRow;

/// Sheet format for dates.
pub const SHEET_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sheet format for times of day.
pub const SHEET_TIME_FORMAT: &str = "%H:%M:%S";

/// The kind of a logged day.
///
/// # Example
///
/// ```
/// use hours_tracker::models::EntryKind;
///
/// assert_eq!(EntryKind::parse_sheet_value(""), Some(EntryKind::Work));
/// assert_eq!(EntryKind::parse_sheet_value("day_off"), Some(EntryKind::DayOff));
/// assert_eq!(EntryKind::parse_sheet_value("חופשה"), Some(EntryKind::Vacation));
/// assert_eq!(EntryKind::parse_sheet_value("overtime"), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Clock-in/clock-out work.
    #[default]
    Work,
    /// Vacation day.
    Vacation,
    /// Sick day.
    Sick,
    /// Public or company holiday.
    Holiday,
    /// Special day off.
    DayOff,
}

impl EntryKind {
    /// Every kind, in form order.
    pub const ALL: [EntryKind; 5] = [
        EntryKind::Work,
        EntryKind::Vacation,
        EntryKind::Sick,
        EntryKind::Holiday,
        EntryKind::DayOff,
    ];

    /// The value stored in the sheet's `type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Work => "work",
            EntryKind::Vacation => "vacation",
            EntryKind::Sick => "sick",
            EntryKind::Holiday => "holiday",
            EntryKind::DayOff => "day_off",
        }
    }

    /// Human-readable label used in lists and calendar titles.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Work => "Work",
            EntryKind::Vacation => "Vacation",
            EntryKind::Sick => "Sick",
            EntryKind::Holiday => "Holiday",
            EntryKind::DayOff => "Day off",
        }
    }

    /// Returns true for clock-in/clock-out entries.
    pub fn is_work(self) -> bool {
        self == EntryKind::Work
    }

    /// Interprets a `type` cell. Blank cells are work; the legacy Hebrew
    /// labels are accepted alongside the stored names.
    pub fn parse_sheet_value(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "work" | "עבודה" => Some(EntryKind::Work),
            "vacation" | "חופשה" => Some(EntryKind::Vacation),
            "sick" | "מחלה" => Some(EntryKind::Sick),
            "holiday" | "חג" => Some(EntryKind::Holiday),
            "day_off" | "יום חופש" => Some(EntryKind::DayOff),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_sheet_value(s).ok_or_else(|| TrackerError::InvalidEntry {
            field: "type".to_string(),
            message: format!("unknown entry type '{}'", s.trim()),
        })
    }
}

/// A half-open time-of-day interval on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Clock-in time.
    pub start: NaiveTime,
    /// Clock-out time.
    pub end: NaiveTime,
}

impl TimeInterval {
    /// Creates an interval, rejecting `end <= start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> TrackerResult<Self> {
        if end <= start {
            return Err(TrackerError::InvalidEntry {
                field: "end_time".to_string(),
                message: format!(
                    "clock-out {} must be after clock-in {}",
                    end.format("%H:%M"),
                    start.format("%H:%M")
                ),
            });
        }
        Ok(Self { start, end })
    }

    /// Length of the interval in decimal hours, at minute precision.
    pub fn hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

/// A validated row of the worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Row index in the worksheet.
    pub id: usize,
    /// The logged date.
    pub date: NaiveDate,
    /// What kind of day this row records.
    pub kind: EntryKind,
    /// Work interval; `None` for leave kinds.
    pub interval: Option<TimeInterval>,
    /// Free-text notes.
    pub notes: String,
}

impl Entry {
    /// Worked hours for this entry; zero for leave kinds.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_tracker::models::{Entry, EntryKind, TimeInterval};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = Entry {
    ///     id: 0,
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     kind: EntryKind::Work,
    ///     interval: Some(TimeInterval::new(
    ///         NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
    ///         NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
    ///     ).unwrap()),
    ///     notes: String::new(),
    /// };
    /// assert_eq!(entry.worked_hours(), Decimal::new(9, 0));
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        self.interval.map(|i| i.hours()).unwrap_or(Decimal::ZERO)
    }

    /// Interprets a raw sheet row.
    pub fn from_row(id: usize, row: &SheetRow) -> TrackerResult<Self> {
        let invalid = |message: String| TrackerError::InvalidRow { row: id, message };

        let date = parse_date_text(&row.date).map_err(|e| invalid(e.to_string()))?;
        let kind = EntryKind::parse_sheet_value(&row.kind)
            .ok_or_else(|| invalid(format!("unknown entry type '{}'", row.kind.trim())))?;

        let interval = if kind.is_work() {
            let start = parse_time_text(&row.start_time).map_err(|e| invalid(e.to_string()))?;
            let end = parse_time_text(&row.end_time).map_err(|e| invalid(e.to_string()))?;
            Some(TimeInterval::new(start, end).map_err(|e| invalid(e.to_string()))?)
        } else {
            None
        };

        Ok(Self {
            id,
            date,
            kind,
            interval,
            notes: row.notes.trim().to_string(),
        })
    }

    /// Serialises the entry back into sheet columns.
    pub fn to_row(&self) -> SheetRow {
        let (start_time, end_time) = match self.interval {
            Some(i) => (
                i.start.format(SHEET_TIME_FORMAT).to_string(),
                i.end.format(SHEET_TIME_FORMAT).to_string(),
            ),
            None => (String::new(), String::new()),
        };
        SheetRow {
            date: self.date.format(SHEET_DATE_FORMAT).to_string(),
            start_time,
            end_time,
            notes: self.notes.clone(),
            kind: self.kind.as_str().to_string(),
        }
    }
}

/// A new entry as submitted from the form, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// The logged date.
    pub date: NaiveDate,
    /// What kind of day is being logged.
    pub kind: EntryKind,
    /// Clock-in time; required for work.
    pub start: Option<NaiveTime>,
    /// Clock-out time; required for work.
    pub end: Option<NaiveTime>,
    /// Free-text notes.
    pub notes: String,
}

/// Changes to an existing entry. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    /// New kind.
    pub kind: Option<EntryKind>,
    /// New notes.
    pub notes: Option<String>,
    /// New clock-in time.
    pub start: Option<NaiveTime>,
    /// New clock-out time.
    pub end: Option<NaiveTime>,
}
