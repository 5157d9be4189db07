//! Parsing and display of manually typed dates and times.
//!
//! The entry form accepts compact digit-only times (`"930"`, `"0930"`) as
//! well as the colon forms the worksheet stores (`"09:30:00"`). Dates are
//! accepted in ISO form or as `DD/MM/YYYY`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{TrackerError, TrackerResult};

/// Display format for dates in lists and confirmation previews.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Display format for clock times.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parses a typed time of day.
///
/// Digit-only input of one or two digits is an hour; three or four digits
/// are read as hours followed by two minute digits. Colon forms `H:MM`,
/// `HH:MM` and `HH:MM:SS` are accepted as well.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidTime`] for empty or non-numeric input,
/// more than four digits, an hour above 23, or a minute or second above 59.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::parse_time_text;
/// use chrono::NaiveTime;
///
/// let t = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(parse_time_text("930").unwrap(), t);
/// assert_eq!(parse_time_text("0930").unwrap(), t);
/// assert_eq!(parse_time_text("09:30:00").unwrap(), t);
/// assert!(parse_time_text("2400").is_err());
/// assert!(parse_time_text("1260").is_err());
/// ```
pub fn parse_time_text(text: &str) -> TrackerResult<NaiveTime> {
    let input = text.trim();
    let invalid = |message: &str| TrackerError::InvalidTime {
        input: input.to_string(),
        message: message.to_string(),
    };

    if input.is_empty() {
        return Err(invalid("time is empty"));
    }

    let (hour, minute, second) = if input.contains(':') {
        let parts: Vec<&str> = input.split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid("expected HH:MM or HH:MM:SS"));
        }
        let hour = digits(parts[0], 1..=2).ok_or_else(|| invalid("hour must be 1-2 digits"))?;
        let minute = digits(parts[1], 2..=2).ok_or_else(|| invalid("minute must be 2 digits"))?;
        let second = match parts.get(2) {
            Some(s) => digits(s, 2..=2).ok_or_else(|| invalid("second must be 2 digits"))?,
            None => 0,
        };
        (hour, minute, second)
    } else {
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("only digits are allowed"));
        }
        match input.len() {
            1 | 2 => (digits(input, 1..=2).unwrap_or_default(), 0, 0),
            3 | 4 => {
                let split = input.len() - 2;
                let hour = digits(&input[..split], 1..=2).unwrap_or_default();
                let minute = digits(&input[split..], 2..=2).unwrap_or_default();
                (hour, minute, 0)
            }
            _ => return Err(invalid("at most four digits are allowed")),
        }
    };

    if hour > 23 {
        return Err(invalid("hour must be at most 23"));
    }
    if minute > 59 {
        return Err(invalid("minute must be at most 59"));
    }
    if second > 59 {
        return Err(invalid("second must be at most 59"));
    }

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| invalid("not a time of day"))
}

/// Parses an all-digit field whose length is within `len`.
fn digits(part: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parses a date as `YYYY-MM-DD`, `DD/MM/YYYY`, or the date part of a
/// `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::parse_date_text;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
/// assert_eq!(parse_date_text("2026-01-13").unwrap(), d);
/// assert_eq!(parse_date_text("13/01/2026").unwrap(), d);
/// assert_eq!(parse_date_text("2026-01-13 00:00:00").unwrap(), d);
/// ```
pub fn parse_date_text(text: &str) -> TrackerResult<NaiveDate> {
    let input = text.trim();

    for format in ["%Y-%m-%d", DISPLAY_DATE_FORMAT] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date);
        }
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(datetime.date());
        }
    }

    Err(TrackerError::InvalidDate {
        input: input.to_string(),
    })
}

/// Formats a time as `HH:MM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn expect_invalid(text: &str, fragment: &str) {
        match parse_time_text(text) {
            Err(TrackerError::InvalidTime { message, .. }) => {
                assert!(
                    message.contains(fragment),
                    "'{}' rejected with '{}', expected '{}'",
                    text,
                    message,
                    fragment
                );
            }
            other => panic!("Expected InvalidTime for '{}', got {:?}", text, other),
        }
    }

    #[test]
    fn test_four_digits() {
        assert_eq!(parse_time_text("0930").unwrap(), time(9, 30));
        assert_eq!(parse_time_text("1545").unwrap(), time(15, 45));
        assert_eq!(parse_time_text("0000").unwrap(), time(0, 0));
        assert_eq!(parse_time_text("2359").unwrap(), time(23, 59));
    }

    #[test]
    fn test_three_digits() {
        assert_eq!(parse_time_text("930").unwrap(), time(9, 30));
        assert_eq!(parse_time_text("630").unwrap(), time(6, 30));
    }

    #[test]
    fn test_hour_only() {
        assert_eq!(parse_time_text("7").unwrap(), time(7, 0));
        assert_eq!(parse_time_text("17").unwrap(), time(17, 0));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_time_text("  0815 ").unwrap(), time(8, 15));
    }

    #[test]
    fn test_colon_forms() {
        assert_eq!(parse_time_text("6:30").unwrap(), time(6, 30));
        assert_eq!(parse_time_text("06:30").unwrap(), time(6, 30));
        assert_eq!(
            parse_time_text("06:30:15").unwrap(),
            NaiveTime::from_hms_opt(6, 30, 15).unwrap()
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        expect_invalid("2400", "hour must be at most 23");
        expect_invalid("25", "hour must be at most 23");
        expect_invalid("0960", "minute must be at most 59");
        expect_invalid("975", "minute must be at most 59");
        expect_invalid("10:61", "minute must be at most 59");
    }

    #[test]
    fn test_rejects_malformed() {
        expect_invalid("", "empty");
        expect_invalid("9a30", "only digits");
        expect_invalid("12345", "at most four digits");
        expect_invalid("9:3", "minute must be 2 digits");
        expect_invalid("1:2:3:4", "expected HH:MM");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date_text("31/02/2026"),
            Err(TrackerError::InvalidDate { .. })
        ));
        assert!(parse_date_text("yesterday").is_err());
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_clock(time(6, 5)), "06:05");
        assert_eq!(
            format_display_date(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()),
            "03/01/2026"
        );
    }

    proptest! {
        #[test]
        fn prop_compact_digits_parse(h in 0u32..24, m in 0u32..60) {
            let expected = time(h, m);
            prop_assert_eq!(parse_time_text(&format!("{}{:02}", h, m)).unwrap(), expected);
            prop_assert_eq!(parse_time_text(&format!("{:02}{:02}", h, m)).unwrap(), expected);
            prop_assert_eq!(parse_time_text(&format!("{:02}:{:02}", h, m)).unwrap(), expected);
        }

        #[test]
        fn prop_clock_output_reparses(h in 0u32..24, m in 0u32..60) {
            let t = time(h, m);
            prop_assert_eq!(parse_time_text(&format_clock(t)).unwrap(), t);
        }

        #[test]
        fn prop_large_hours_rejected(h in 24u32..100, m in 0u32..60) {
            let input = format!("{}{:02}", h, m);
            prop_assert!(parse_time_text(&input).is_err());
        }
    }
}
