//! Calculation logic for the hours tracker.
//!
//! This module contains the pure functions behind every report: weekday
//! target lookup, parsing of typed times and dates, signed `H:MM`
//! formatting, overlap detection between work intervals, daily balances
//! with their weekly and monthly aggregates, and calendar layout.

mod balance;
mod calendar;
mod duration_format;
mod overlap;
mod target_hours;
mod time_text;

pub use balance::{
    DayBalance, Period, aggregate, daily_balances, day_balance, period_bounds, summarize,
};
pub use calendar::{
    COLOR_DEFICIT, COLOR_LEAVE, COLOR_SURPLUS, COLOR_VACATION, build_events, month_grid,
};
pub use duration_format::format_signed_hours;
pub use overlap::{find_overlap, overlaps};
pub use target_hours::target_hours;
pub use time_text::{
    CLOCK_FORMAT, DISPLAY_DATE_FORMAT, format_clock, format_display_date, parse_date_text,
    parse_time_text,
};
