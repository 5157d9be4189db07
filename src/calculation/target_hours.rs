//! Weekday target-hours lookup.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::TargetPolicy;

/// Returns the target hours for `date` under `policy`.
///
/// With the default policy Sunday to Wednesday expect 9 hours, Thursday
/// 8.5 hours, and Friday and Saturday nothing.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::target_hours;
/// use hours_tracker::models::TargetPolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = TargetPolicy::default();
/// // 2026-01-15 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(target_hours(thursday, &policy), Decimal::new(85, 1));
/// ```
pub fn target_hours(date: NaiveDate, policy: &TargetPolicy) -> Decimal {
    policy.targets.for_weekday(date.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sunday_through_wednesday_nine_hours() {
        let policy = TargetPolicy::default();
        // 2026-01-11 is a Sunday
        for day in ["2026-01-11", "2026-01-12", "2026-01-13", "2026-01-14"] {
            assert_eq!(target_hours(make_date(day), &policy), Decimal::new(9, 0));
        }
    }

    #[test]
    fn test_thursday_eight_and_a_half() {
        let policy = TargetPolicy::default();
        assert_eq!(
            target_hours(make_date("2026-01-15"), &policy),
            Decimal::new(85, 1)
        );
    }

    #[test]
    fn test_weekend_zero() {
        let policy = TargetPolicy::default();
        assert_eq!(target_hours(make_date("2026-01-16"), &policy), Decimal::ZERO);
        assert_eq!(target_hours(make_date("2026-01-17"), &policy), Decimal::ZERO);
    }

    #[test]
    fn test_custom_policy_is_honoured() {
        let mut policy = TargetPolicy::default();
        policy.targets.friday = Decimal::new(4, 0);
        assert_eq!(
            target_hours(make_date("2026-01-16"), &policy),
            Decimal::new(4, 0)
        );
    }
}
