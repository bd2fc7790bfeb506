//! Days of the week and week of year numbering.

use date_equations::gregorian;

use crate::iso::IsoDate;

/// A day of the week.
///
/// The ordinal of each day follows the Sunday based numbering used by
/// calendar engines: Sunday is 1 and Saturday is 7.
///
/// ```rust
/// use nengo_rs::Weekday;
///
/// assert_eq!(Weekday::Monday.ordinal(), 2);
/// // Renumber the week so that Sunday is 0.
/// assert_eq!(Weekday::Monday.rebase(0), 1);
/// assert_eq!(Weekday::from_ordinal(7), Some(Weekday::Saturday));
/// assert_eq!(Weekday::from_ordinal(8), None);
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// Every day of the week in ordinal order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the day for a Sunday based ordinal, 1 through 7.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        if ordinal < 1 || ordinal > 7 {
            return None;
        }
        Some(Self::ALL[(ordinal - 1) as usize])
    }

    /// Returns the day of the week of an epoch day.
    #[must_use]
    pub const fn from_epoch_days(epoch_days: i64) -> Self {
        Self::ALL[gregorian::day_of_week_from_epoch_days(epoch_days) as usize]
    }

    /// Returns the Sunday based ordinal, 1 through 7.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the ordinal renumbered so that Sunday is `start` and Saturday
    /// is `start + 6`.
    #[inline]
    #[must_use]
    pub const fn rebase(self, start: i32) -> i32 {
        self as i32 - 1 + start
    }

    /// Returns the three letter English abbreviation.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    /// Returns the English name.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Days from `other` forward to `self`, 0 through 6.
    const fn days_since(self, other: Self) -> i64 {
        (self as i64 - other as i64).rem_euclid(7)
    }
}

/// The rule that decides which week is the first week of a year.
///
/// Week 1 is the first week starting on `first_day` that has at least
/// `minimal_days` days in the new year. Days before it belong to the last
/// week of the previous year, and the last days of December that share a week
/// with the following week 1 are numbered 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRule {
    first_day: Weekday,
    minimal_days: u8,
}

impl Default for WeekRule {
    fn default() -> Self {
        Self::SUNDAY_START
    }
}

impl WeekRule {
    /// Weeks start on Sunday and week 1 contains January 1st.
    pub const SUNDAY_START: Self = Self::new_unchecked(Weekday::Sunday, 1);

    /// ISO 8601 weeks: weeks start on Monday and week 1 contains the first
    /// Thursday of the year.
    pub const ISO_8601: Self = Self::new_unchecked(Weekday::Monday, 4);

    const fn new_unchecked(first_day: Weekday, minimal_days: u8) -> Self {
        Self {
            first_day,
            minimal_days,
        }
    }

    /// Creates a new rule; `minimal_days` is clamped to 1 through 7.
    #[must_use]
    pub fn new(first_day: Weekday, minimal_days: u8) -> Self {
        Self::new_unchecked(first_day, minimal_days.clamp(1, 7))
    }

    /// Returns the first day of the week.
    #[inline]
    #[must_use]
    pub const fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Returns the minimal number of days in the first week.
    #[inline]
    #[must_use]
    pub const fn minimal_days(&self) -> u8 {
        self.minimal_days
    }

    /// Returns the epoch day that starts week 1 of `year`.
    fn first_week_start(&self, year: i32) -> i64 {
        let jan_first = gregorian::epoch_days_from_ymd(year, 1, 1);
        let offset = Weekday::from_epoch_days(jan_first).days_since(self.first_day);
        let week_start = jan_first - offset;
        if 7 - offset >= i64::from(self.minimal_days) {
            week_start
        } else {
            week_start + 7
        }
    }

    /// Returns the week of year of `date`, 1 through 53.
    #[must_use]
    pub fn week_of_year(&self, date: IsoDate) -> u8 {
        let epoch_days = date.to_epoch_days();
        let next_year_start = self.first_week_start(date.year.saturating_add(1));
        if epoch_days >= next_year_start {
            return 1;
        }
        let mut year_start = self.first_week_start(date.year);
        if epoch_days < year_start {
            year_start = self.first_week_start(date.year.saturating_sub(1));
        }
        ((epoch_days - year_start) / 7 + 1) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(day.ordinal()), i + 1);
            assert_eq!(Weekday::from_ordinal(i as i32 + 1), Some(*day));
        }
        assert_eq!(Weekday::from_ordinal(0), None);
        assert_eq!(Weekday::from_ordinal(-3), None);
    }

    #[test]
    fn rebase() {
        assert_eq!(Weekday::Sunday.rebase(1), 1);
        assert_eq!(Weekday::Monday.rebase(0), 1);
        assert_eq!(Weekday::Saturday.rebase(0), 6);
        assert_eq!(Weekday::Saturday.rebase(10), 16);
    }

    #[test]
    fn epoch_days() {
        assert_eq!(Weekday::from_epoch_days(0), Weekday::Thursday);
        assert_eq!(Weekday::from_epoch_days(-1), Weekday::Wednesday);
        assert_eq!(Weekday::from_epoch_days(3), Weekday::Sunday);
    }

    #[test]
    fn sunday_start_weeks() {
        let rule = WeekRule::SUNDAY_START;
        // 2023-01-01 is a Sunday.
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2023, 1, 1)), 1);
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2023, 1, 7)), 1);
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2023, 1, 8)), 2);
        // 2024-01-01 is a Monday, so 2023-12-31 shares week 1 of 2024.
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2023, 12, 30)), 52);
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2023, 12, 31)), 1);
        // 2022-01-01 is a Saturday and alone in week 1.
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2022, 1, 1)), 1);
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2022, 1, 2)), 2);
    }

    #[test]
    fn iso_weeks() {
        let rule = WeekRule::ISO_8601;
        // 2021-01-01 is a Friday, belonging to week 53 of 2020.
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2021, 1, 1)), 53);
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2021, 1, 4)), 1);
        // 2024-12-30 is a Monday in week 1 of 2025.
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2024, 12, 30)), 1);
        assert_eq!(rule.week_of_year(IsoDate::new_unchecked(2024, 12, 29)), 52);
    }

    #[test]
    fn rule_clamps() {
        assert_eq!(WeekRule::new(Weekday::Monday, 0).minimal_days(), 1);
        assert_eq!(WeekRule::new(Weekday::Monday, 9).minimal_days(), 7);
        assert_eq!(WeekRule::new(Weekday::Monday, 4), WeekRule::ISO_8601);
    }
}
