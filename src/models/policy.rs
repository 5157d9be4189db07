//! Target-hours policy types.
//!
//! The policy decides how many hours are expected on each weekday and how
//! non-work entries (vacation, sick days, holidays, days off) affect a
//! day's balance. All types deserialize from the `policy` section of
//! `tracker.yaml` and fall back to the built-in defaults field by field.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EntryKind;

/// How a non-work entry affects the balance of its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveTreatment {
    /// The day counts as a full target day; its balance is zero.
    CreditTarget,
    /// The day's target is zeroed out.
    ZeroTarget,
    /// The day's target stays charged with no credit; hours worked still count.
    DeductTarget,
}

/// The first day of a balance week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
}

impl WeekStart {
    /// Returns the chrono weekday the week starts on.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Number of days between `weekday` and the start of its week.
    pub fn days_into_week(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }
}

/// Target hours for each day of the week.
///
/// # Example
///
/// ```
/// use hours_tracker::models::WeekdayTargets;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let targets = WeekdayTargets::default();
/// assert_eq!(targets.for_weekday(Weekday::Sun), Decimal::new(90, 1));
/// assert_eq!(targets.for_weekday(Weekday::Thu), Decimal::new(85, 1));
/// assert_eq!(targets.for_weekday(Weekday::Fri), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekdayTargets {
    /// Sunday target.
    pub sunday: Decimal,
    /// Monday target.
    pub monday: Decimal,
    /// Tuesday target.
    pub tuesday: Decimal,
    /// Wednesday target.
    pub wednesday: Decimal,
    /// Thursday target.
    pub thursday: Decimal,
    /// Friday target.
    pub friday: Decimal,
    /// Saturday target.
    pub saturday: Decimal,
}

/// Default target for Sunday through Wednesday.
pub const FULL_DAY_TARGET: Decimal = Decimal::from_parts(90, 0, 0, false, 1);

/// Default target for Thursday.
pub const SHORT_DAY_TARGET: Decimal = Decimal::from_parts(85, 0, 0, false, 1);

impl Default for WeekdayTargets {
    fn default() -> Self {
        Self {
            sunday: FULL_DAY_TARGET,
            monday: FULL_DAY_TARGET,
            tuesday: FULL_DAY_TARGET,
            wednesday: FULL_DAY_TARGET,
            thursday: SHORT_DAY_TARGET,
            friday: Decimal::ZERO,
            saturday: Decimal::ZERO,
        }
    }
}

impl WeekdayTargets {
    /// Returns the target hours for a weekday.
    pub fn for_weekday(&self, weekday: Weekday) -> Decimal {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }
}

/// Balance treatment for each non-work entry kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveTreatments {
    /// Treatment of vacation days.
    pub vacation: LeaveTreatment,
    /// Treatment of sick days.
    pub sick: LeaveTreatment,
    /// Treatment of holidays.
    pub holiday: LeaveTreatment,
    /// Treatment of special unpaid days off.
    pub day_off: LeaveTreatment,
}

impl Default for LeaveTreatments {
    fn default() -> Self {
        Self {
            vacation: LeaveTreatment::CreditTarget,
            sick: LeaveTreatment::CreditTarget,
            holiday: LeaveTreatment::ZeroTarget,
            day_off: LeaveTreatment::DeductTarget,
        }
    }
}

impl LeaveTreatments {
    /// Returns the treatment for `kind`, or `None` for work entries.
    pub fn for_kind(&self, kind: EntryKind) -> Option<LeaveTreatment> {
        match kind {
            EntryKind::Work => None,
            EntryKind::Vacation => Some(self.vacation),
            EntryKind::Sick => Some(self.sick),
            EntryKind::Holiday => Some(self.holiday),
            EntryKind::DayOff => Some(self.day_off),
        }
    }
}

/// The complete target-hours policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetPolicy {
    /// First day of a balance week.
    pub week_start: WeekStart,
    /// Target hours per weekday.
    pub targets: WeekdayTargets,
    /// Balance treatment per leave kind.
    pub leave: LeaveTreatments,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_match_weekday_table() {
        let targets = WeekdayTargets::default();
        for weekday in [Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed] {
            assert_eq!(targets.for_weekday(weekday), Decimal::new(9, 0));
        }
        assert_eq!(targets.for_weekday(Weekday::Thu), Decimal::new(85, 1));
        assert_eq!(targets.for_weekday(Weekday::Fri), Decimal::ZERO);
        assert_eq!(targets.for_weekday(Weekday::Sat), Decimal::ZERO);
    }

    #[test]
    fn test_work_has_no_leave_treatment() {
        let leave = LeaveTreatments::default();
        assert_eq!(leave.for_kind(EntryKind::Work), None);
        assert_eq!(
            leave.for_kind(EntryKind::Vacation),
            Some(LeaveTreatment::CreditTarget)
        );
        assert_eq!(
            leave.for_kind(EntryKind::DayOff),
            Some(LeaveTreatment::DeductTarget)
        );
    }

    #[test]
    fn test_week_start_offsets() {
        assert_eq!(WeekStart::Sunday.days_into_week(Weekday::Sun), 0);
        assert_eq!(WeekStart::Sunday.days_into_week(Weekday::Sat), 6);
        assert_eq!(WeekStart::Monday.days_into_week(Weekday::Sun), 6);
        assert_eq!(WeekStart::Monday.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_partial_policy_yaml_keeps_defaults() {
        let yaml = r#"
week_start: monday
targets:
  thursday: 8
leave:
  day_off: zero_target
"#;
        let policy: TargetPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.week_start, WeekStart::Monday);
        assert_eq!(policy.targets.thursday, Decimal::new(8, 0));
        assert_eq!(policy.targets.sunday, FULL_DAY_TARGET);
        assert_eq!(policy.leave.day_off, LeaveTreatment::ZeroTarget);
        assert_eq!(policy.leave.sick, LeaveTreatment::CreditTarget);
    }
}
