//! Calendar events and month grids.
//!
//! Events follow FullCalendar's field names so a client can hand them to
//! a `dayGridMonth` view directly. The month grid is a plain table of
//! weeks for clients that draw their own calendar.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use super::{DayBalance, Period, format_signed_hours, period_bounds};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CalendarEvent, Entry, EntryKind, GridCell, MonthGrid, WeekStart};

/// Event colour for work days at or above target.
pub const COLOR_SURPLUS: &str = "#28a745";
/// Event colour for work days below target.
pub const COLOR_DEFICIT: &str = "#dc3545";
/// Event colour for vacation days.
pub const COLOR_VACATION: &str = "#007bff";
/// Event colour for every other leave kind.
pub const COLOR_LEAVE: &str = "#fd7e14";

/// Builds one calendar event per entry.
///
/// Work entries are titled with their worked hours and coloured by the
/// balance of their whole day; leave entries are titled with their kind.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::{build_events, daily_balances, COLOR_VACATION};
/// use hours_tracker::models::{Entry, EntryKind, TargetPolicy};
/// use chrono::NaiveDate;
///
/// let entries = vec![Entry {
///     id: 0,
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     kind: EntryKind::Vacation,
///     interval: None,
///     notes: String::new(),
/// }];
/// let days = daily_balances(&entries, &TargetPolicy::default());
/// let events = build_events(&entries, &days);
/// assert_eq!(events[0].title, "Vacation");
/// assert_eq!(events[0].background_color, COLOR_VACATION);
/// ```
pub fn build_events(entries: &[Entry], days: &[DayBalance]) -> Vec<CalendarEvent> {
    let balances: HashMap<NaiveDate, &DayBalance> = days.iter().map(|d| (d.date, d)).collect();

    entries
        .iter()
        .map(|entry| {
            let (title, color) = match entry.kind {
                EntryKind::Work => {
                    let in_surplus = balances
                        .get(&entry.date)
                        .is_none_or(|day| day.balance >= Decimal::ZERO);
                    let color = if in_surplus { COLOR_SURPLUS } else { COLOR_DEFICIT };
                    (format_signed_hours(entry.worked_hours()), color)
                }
                EntryKind::Vacation => (entry.kind.label().to_string(), COLOR_VACATION),
                _ => (entry.kind.label().to_string(), COLOR_LEAVE),
            };
            CalendarEvent {
                entry_id: entry.id,
                title,
                start: entry.date,
                end: entry.date,
                background_color: color.to_string(),
                border_color: color.to_string(),
            }
        })
        .collect()
}

/// Lays out a month in rows of seven days starting on `week_start`.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidDate`] when `year`/`month` is not a
/// calendar month.
pub fn month_grid(
    year: i32,
    month: u32,
    week_start: WeekStart,
    days: &[DayBalance],
) -> TrackerResult<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| TrackerError::InvalidDate {
        input: format!("{:04}-{:02}", year, month),
    })?;
    let (_, last) = period_bounds(first, Period::Month, week_start)?;
    let (mut row_start, _) = period_bounds(first, Period::Week, week_start)?;
    let balances: HashMap<NaiveDate, &DayBalance> = days.iter().map(|d| (d.date, d)).collect();

    let mut weeks = Vec::new();
    loop {
        let row: Vec<Option<GridCell>> = (0..7)
            .map(|offset| {
                // Cells past the last representable date stay blank.
                let date = row_start.checked_add_days(Days::new(offset))?;
                if date.month() != month || date.year() != year {
                    return None;
                }
                let day = balances.get(&date);
                Some(GridCell {
                    date,
                    day: date.day(),
                    balance: day.map(|d| format_signed_hours(d.balance)),
                    kinds: day.map(|d| d.kinds.clone()).unwrap_or_default(),
                })
            })
            .collect();
        weeks.push(row);

        match row_start.checked_add_days(Days::new(7)) {
            Some(next) if next <= last => row_start = next,
            _ => break,
        }
    }

    Ok(MonthGrid {
        year,
        month,
        week_start,
        weeks,
    })
}
