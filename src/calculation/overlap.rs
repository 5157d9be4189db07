//! Overlap detection between work intervals on the same date.

use chrono::NaiveDate;

use crate::models::{Entry, TimeInterval};

/// Returns true when two intervals share any time.
///
/// Intervals that only touch (one ends exactly when the other starts) do
/// not overlap.
///
/// # Example
///
/// ```
/// use hours_tracker::calculation::overlaps;
/// use hours_tracker::models::TimeInterval;
/// use chrono::NaiveTime;
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let morning = TimeInterval::new(t(8), t(12)).unwrap();
/// let midday = TimeInterval::new(t(11), t(14)).unwrap();
/// let afternoon = TimeInterval::new(t(12), t(16)).unwrap();
///
/// assert!(overlaps(&morning, &midday));
/// assert!(!overlaps(&morning, &afternoon));
/// ```
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.start < b.end && b.start < a.end
}

/// Finds the first work entry on `date` whose interval overlaps `interval`.
///
/// The entry with id `exclude` is skipped so that an entry being edited
/// does not collide with its own previous version.
pub fn find_overlap<'a>(
    entries: &'a [Entry],
    date: NaiveDate,
    interval: &TimeInterval,
    exclude: Option<usize>,
) -> Option<&'a Entry> {
    entries
        .iter()
        .filter(|e| e.date == date && Some(e.id) != exclude)
        .find(|e| e.interval.is_some_and(|other| overlaps(&other, interval)))
}
