//! Daily balances and their weekly and monthly aggregates.
//!
//! Balances are computed per date rather than per row, so a day with two
//! work entries is measured against its target once:
//!
//! ```text
//! target   = weekday target, or 0 if any entry zeroes it (holiday)
//! credited = target if any entry credits it (vacation, sick)
//! balance  = worked + credited - target
//! ```
//!
//! A day off credits nothing, so its full target is charged against the
//! balance. Dates with no entries do not contribute to any aggregate.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{format_signed_hours, target_hours};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    BalanceSummary, Entry, EntryKind, LeaveTreatment, PeriodTotals, TargetPolicy, WeekStart,
};

/// The balance of a single logged date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBalance {
    /// The date.
    pub date: NaiveDate,
    /// Effective target after leave treatments.
    pub target: Decimal,
    /// Sum of work-entry hours.
    pub worked: Decimal,
    /// Hours credited by leave entries.
    pub credited: Decimal,
    /// Whether a leave entry charged the target against the balance.
    pub target_charged: bool,
    /// `worked + credited - target`.
    pub balance: Decimal,
    /// Kinds logged on the date, in row order.
    pub kinds: Vec<EntryKind>,
}

/// A balance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// The calendar week containing the reference date.
    Week,
    /// The calendar month containing the reference date.
    Month,
}

/// Computes the balance of one date from its entries.
///
/// `entries` should all fall on `date`; entries on other dates are ignored.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::day_balance;
/// use hours_tracker::models::{Entry, EntryKind, TargetPolicy, TimeInterval};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// // 2026-01-13 is a Tuesday: 9 hour target
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// let entry = Entry {
///     id: 0,
///     date,
///     kind: EntryKind::Work,
///     interval: Some(TimeInterval::new(
///         NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
///     ).unwrap()),
///     notes: String::new(),
/// };
///
/// let day = day_balance(date, &[&entry], &TargetPolicy::default());
/// assert_eq!(day.balance, Decimal::new(15, 1));
/// ```
pub fn day_balance(date: NaiveDate, entries: &[&Entry], policy: &TargetPolicy) -> DayBalance {
    let on_date: Vec<&Entry> = entries.iter().copied().filter(|e| e.date == date).collect();
    let has = |treatment: LeaveTreatment| {
        on_date
            .iter()
            .any(|e| policy.leave.for_kind(e.kind) == Some(treatment))
    };

    let target = if has(LeaveTreatment::ZeroTarget) {
        Decimal::ZERO
    } else {
        target_hours(date, policy)
    };
    let worked: Decimal = on_date.iter().map(|e| e.worked_hours()).sum();
    // A charged target wins over a credit logged on the same date.
    let target_charged = has(LeaveTreatment::DeductTarget);
    let credited = if has(LeaveTreatment::CreditTarget) && !target_charged {
        target
    } else {
        Decimal::ZERO
    };

    DayBalance {
        date,
        target,
        worked,
        credited,
        target_charged,
        balance: worked + credited - target,
        kinds: on_date.iter().map(|e| e.kind).collect(),
    }
}

/// Groups entries by date and computes each date's balance, oldest first.
pub fn daily_balances(entries: &[Entry], policy: &TargetPolicy) -> Vec<DayBalance> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Entry>> = BTreeMap::new();
    for entry in entries {
        by_date.entry(entry.date).or_default().push(entry);
    }

    by_date
        .into_iter()
        .map(|(date, day_entries)| day_balance(date, &day_entries, policy))
        .collect()
}

/// Returns the inclusive bounds of the week or month containing `reference`.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidDate`] when the week reaches past the
/// range of representable dates.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::{period_bounds, Period};
/// use hours_tracker::models::WeekStart;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
/// // 2026-01-14 is a Wednesday; its Sunday-start week is 11..=17
/// assert_eq!(period_bounds(d(14), Period::Week, WeekStart::Sunday)?, (d(11), d(17)));
/// assert_eq!(period_bounds(d(14), Period::Month, WeekStart::Sunday)?, (d(1), d(31)));
/// # Ok::<(), hours_tracker::error::TrackerError>(())
/// ```
pub fn period_bounds(
    reference: NaiveDate,
    period: Period,
    week_start: WeekStart,
) -> TrackerResult<(NaiveDate, NaiveDate)> {
    let out_of_range = || TrackerError::InvalidDate {
        input: reference.to_string(),
    };

    match period {
        Period::Week => {
            let offset = week_start.days_into_week(reference.weekday());
            let start = reference
                .checked_sub_days(Days::new(u64::from(offset)))
                .ok_or_else(out_of_range)?;
            let end = start
                .checked_add_days(Days::new(6))
                .ok_or_else(out_of_range)?;
            Ok((start, end))
        }
        Period::Month => {
            let start = reference.with_day(1).ok_or_else(out_of_range)?;
            // Only the last representable month has no successor.
            let end = start
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(NaiveDate::MAX);
            Ok((start, end))
        }
    }
}

/// Sums the day balances that fall inside `start..=end`.
pub fn aggregate(days: &[DayBalance], start: NaiveDate, end: NaiveDate) -> PeriodTotals {
    let in_window = days.iter().filter(|d| d.date >= start && d.date <= end);

    let mut worked_hours = Decimal::ZERO;
    let mut target_hours = Decimal::ZERO;
    let mut balance = Decimal::ZERO;
    let mut days_logged = 0;
    for day in in_window {
        worked_hours += day.worked;
        target_hours += day.target;
        balance += day.balance;
        days_logged += 1;
    }

    PeriodTotals {
        start,
        end,
        worked_hours,
        target_hours,
        balance,
        balance_display: format_signed_hours(balance),
        days_logged,
    }
}

/// Builds the weekly and monthly summary around `reference`.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidDate`] when a week of the summary falls
/// outside the range of representable dates.
pub fn summarize(
    days: &[DayBalance],
    reference: NaiveDate,
    week_start: WeekStart,
) -> TrackerResult<BalanceSummary> {
    let (week_from, week_to) = period_bounds(reference, Period::Week, week_start)?;
    let (month_from, month_to) = period_bounds(reference, Period::Month, week_start)?;

    let mut weeks_of_month = Vec::new();
    let (mut cursor, mut week_end) = period_bounds(month_from, Period::Week, week_start)?;
    loop {
        weeks_of_month.push(aggregate(
            days,
            cursor.max(month_from),
            week_end.min(month_to),
        ));
        match week_end.succ_opt() {
            Some(next) if next <= month_to => {
                (cursor, week_end) = period_bounds(next, Period::Week, week_start)?;
            }
            _ => break,
        }
    }

    Ok(BalanceSummary {
        reference,
        week: aggregate(days, week_from, week_to),
        month: aggregate(days, month_from, month_to),
        weeks_of_month,
        days: days
            .iter()
            .filter(|d| d.date >= month_from && d.date <= month_to)
            .cloned()
            .collect(),
    })
}
