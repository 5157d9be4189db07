//! Core data models for the hours tracker.
//!
//! This module contains the domain models used throughout the tracker.

mod entry;
mod policy;
mod report;

pub use entry::{
    Entry, EntryKind, EntryUpdate, NewEntry, SHEET_DATE_FORMAT, SHEET_TIME_FORMAT, TimeInterval,
};
pub use policy::{
    FULL_DAY_TARGET, LeaveTreatment, LeaveTreatments, SHORT_DAY_TARGET, TargetPolicy, WeekStart,
    WeekdayTargets,
};
pub use report::{
    BalanceSummary, CalendarEvent, CalendarView, FormDefaults, GridCell, MonthGrid, PeriodTotals,
};
