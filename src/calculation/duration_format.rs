//! Signed `H:MM` formatting of decimal hour balances.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats decimal hours as `H:MM`, prefixed with `-` when negative.
///
/// Minutes are rounded to the nearest whole minute (halves away from zero)
/// and a rounded 60 carries into the hour. A value that rounds to zero
/// minutes is printed as `0:00` with no sign.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::format_signed_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_signed_hours(Decimal::new(85, 1)), "8:30");
/// assert_eq!(format_signed_hours(Decimal::new(-125, 2)), "-1:15");
/// assert_eq!(format_signed_hours(Decimal::ZERO), "0:00");
/// ```
pub fn format_signed_hours(hours: Decimal) -> String {
    let minutes = (hours.abs() * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX);

    let formatted = format!("{}:{:02}", minutes / 60, minutes % 60);
    if hours.is_sign_negative() && minutes > 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_and_half_hours() {
        assert_eq!(format_signed_hours(dec("9")), "9:00");
        assert_eq!(format_signed_hours(dec("0.5")), "0:30");
        assert_eq!(format_signed_hours(dec("12.25")), "12:15");
    }

    #[test]
    fn test_negative_balance() {
        assert_eq!(format_signed_hours(dec("-0.5")), "-0:30");
        assert_eq!(format_signed_hours(dec("-9")), "-9:00");
    }

    #[test]
    fn test_rounding_carries_into_hour() {
        // 1.9999h is 119.994 minutes, which rounds to 2:00
        assert_eq!(format_signed_hours(dec("1.9999")), "2:00");
        assert_eq!(format_signed_hours(dec("-1.9999")), "-2:00");
    }

    #[test]
    fn test_one_third_hour_rounds_to_twenty_minutes() {
        let third = Decimal::ONE / Decimal::from(3);
        assert_eq!(format_signed_hours(third), "0:20");
    }

    #[test]
    fn test_tiny_negative_prints_unsigned_zero() {
        assert_eq!(format_signed_hours(dec("-0.001")), "0:00");
    }

    #[test]
    fn test_half_minute_rounds_away_from_zero() {
        // 0.075h is exactly 4.5 minutes
        assert_eq!(format_signed_hours(dec("0.075")), "0:05");
        assert_eq!(format_signed_hours(dec("-0.075")), "-0:05");
    }
}
