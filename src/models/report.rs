//! Report models: balance summaries and calendar views.
//!
//! These are the read-side outputs of the tracker. They are produced by the
//! functions in [`crate::calculation`] and serialized unchanged by the API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EntryKind, WeekStart};
use crate::calculation::DayBalance;

/// Totals over an inclusive date window.
///
/// # Example
///
/// ```
/// use hours_tracker::models::PeriodTotals;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let totals = PeriodTotals {
///     start: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     worked_hours: Decimal::new(185, 1),
///     target_hours: Decimal::new(18, 0),
///     balance: Decimal::new(5, 1),
///     balance_display: "0:30".to_string(),
///     days_logged: 2,
/// };
/// assert!(totals.balance > Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// First date of the window.
    pub start: NaiveDate,
    /// Last date of the window.
    pub end: NaiveDate,
    /// Sum of worked hours.
    pub worked_hours: Decimal,
    /// Sum of effective targets.
    pub target_hours: Decimal,
    /// Sum of day balances.
    pub balance: Decimal,
    /// `balance` as signed `H:MM`.
    pub balance_display: String,
    /// Number of dates with at least one entry.
    pub days_logged: usize,
}

/// Weekly and monthly balances around a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// The date the windows are computed around (usually today).
    pub reference: NaiveDate,
    /// The calendar week containing `reference`.
    pub week: PeriodTotals,
    /// The calendar month containing `reference`.
    pub month: PeriodTotals,
    /// Sub-totals for each week of the month, clipped to the month.
    pub weeks_of_month: Vec<PeriodTotals>,
    /// Per-day balances inside the month, oldest first.
    pub days: Vec<DayBalance>,
}

/// A calendar event in FullCalendar's field naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Row id of the entry behind this event.
    pub entry_id: usize,
    /// Event title: worked hours for work, the kind label otherwise.
    pub title: String,
    /// Event start date.
    pub start: NaiveDate,
    /// Event end date (same day).
    pub end: NaiveDate,
    /// Fill colour.
    pub background_color: String,
    /// Border colour.
    pub border_color: String,
}

/// One day cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// The date of the cell.
    pub date: NaiveDate,
    /// Day of month.
    pub day: u32,
    /// The day's balance as `H:MM`, when anything was logged.
    pub balance: Option<String>,
    /// Kinds logged on the day.
    pub kinds: Vec<EntryKind>,
}

/// A month laid out in rows of seven days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    /// First column of each row.
    pub week_start: WeekStart,
    /// Rows of seven cells; `None` pads days outside the month.
    pub weeks: Vec<Vec<Option<GridCell>>>,
}

/// Events and grid for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarView {
    /// One event per entry in the month.
    pub events: Vec<CalendarEvent>,
    /// The month grid.
    pub grid: MonthGrid,
}

/// Pre-filled values for the entry form on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// The date the form is for.
    pub date: NaiveDate,
    /// `date` as `DD/MM/YYYY`.
    pub display_date: String,
    /// Target hours for `date`.
    pub target_hours: Decimal,
    /// Target as `H:MM`, shown under the time inputs.
    pub target_display: String,
    /// Pre-filled clock-in as `HH:MM`.
    pub default_start: String,
    /// Pre-filled clock-out as `HH:MM`.
    pub default_end: String,
    /// Selectable kinds, in form order.
    pub kinds: Vec<EntryKind>,
}
