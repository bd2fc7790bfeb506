//! This module implements the calendar field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` holds the proleptic Gregorian year, month, and day.
//!
//! An `IsoTime` holds the hour, minute, second, and millisecond of a day.
//!
//! An `IsoDateTime` has the fields of both an `IsoDate` and `IsoTime`, and is
//! the bridge between local epoch milliseconds and calendar fields.

use date_equations::gregorian;
use num_traits::ToPrimitive;

use crate::{
    DateError, DateResult, DateUnwrap, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

/// `IsoDate` is the record of the year, month, and day fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without any validation.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting out of range fields.
    pub fn try_new(year: i32, month: u8, day: u8) -> DateResult<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > gregorian::days_in_month(year, month)
        {
            return Err(DateError::assert().with_message("IsoDate fields are out of range."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Balances possibly out of range fields into a valid `IsoDate`.
    ///
    /// Months outside of 1-12 carry into the year, and days outside of the
    /// month carry into the neighbouring months.
    pub fn balance(year: i64, month: i64, day: i64) -> DateResult<Self> {
        let epoch_days = balanced_epoch_days(year, month, day)?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the `IsoDate` for the epoch day.
    pub fn from_epoch_days(epoch_days: i64) -> DateResult<Self> {
        // Anything that fits in epoch milliseconds also fits in an `i32` year.
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days) {
            return Err(DateError::assert().with_message("epoch day is not representable."));
        }
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(&self) -> i64 {
        gregorian::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    /// Returns the day of the week counting Sunday as 0.
    #[inline]
    #[must_use]
    pub const fn day_of_week(&self) -> u8 {
        gregorian::day_of_week_from_epoch_days(self.to_epoch_days())
    }

    /// Returns the number of days in this date's month.
    #[inline]
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        gregorian::days_in_month(self.year, self.month)
    }
}

/// `IsoTime` is the record of the time of day fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl IsoTime {
    /// The first millisecond of a day.
    pub const MIN: Self = Self::new_unchecked(0, 0, 0, 0);
    /// The last millisecond of a day.
    pub const MAX: Self = Self::new_unchecked(23, 59, 59, 999);

    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Builds an `IsoTime` from the milliseconds elapsed in a day.
    pub(crate) const fn from_millisecond_of_day(ms: i64) -> Self {
        debug_assert!(0 <= ms && ms < MS_PER_DAY);
        Self::new_unchecked(
            (ms / MS_PER_HOUR) as u8,
            ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
            (ms % MS_PER_SECOND) as u16,
        )
    }

    /// Returns the milliseconds elapsed in the day.
    #[must_use]
    pub const fn millisecond_of_day(&self) -> i64 {
        self.hour as i64 * MS_PER_HOUR
            + self.minute as i64 * MS_PER_MINUTE
            + self.second as i64 * MS_PER_SECOND
            + self.millisecond as i64
    }
}

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Returns the calendar fields of local epoch milliseconds.
    #[must_use]
    pub fn from_local_epoch_milliseconds(ms: i64) -> Self {
        let epoch_days = ms.div_euclid(MS_PER_DAY);
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        let time = IsoTime::from_millisecond_of_day(ms.rem_euclid(MS_PER_DAY));
        Self::new_unchecked(IsoDate::new_unchecked(year, month, day), time)
    }

    /// Returns the local epoch milliseconds of these fields.
    pub fn to_local_epoch_milliseconds(&self) -> DateResult<i64> {
        let ms = i128::from(self.date.to_epoch_days()) * i128::from(MS_PER_DAY)
            + i128::from(self.time.millisecond_of_day());
        ms.to_i64().ok_or_else(|| {
            DateError::assert().with_message("date time is outside the representable range.")
        })
    }

    /// Balances possibly out of range fields into local epoch milliseconds.
    ///
    /// Every field carries into the next larger one, so hour 24 is midnight
    /// of the following day and month 13 is January of the following year.
    #[allow(clippy::too_many_arguments)]
    pub fn balance(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> DateResult<i64> {
        let epoch_days = balanced_epoch_days(year, month, day)?;
        let ms = i128::from(epoch_days) * i128::from(MS_PER_DAY)
            + i128::from(hour) * i128::from(MS_PER_HOUR)
            + i128::from(minute) * i128::from(MS_PER_MINUTE)
            + i128::from(second) * i128::from(MS_PER_SECOND)
            + i128::from(millisecond);
        ms.to_i64().ok_or_else(|| {
            DateError::assert().with_message("date time is outside the representable range.")
        })
    }
}

const MIN_EPOCH_DAYS: i64 = i64::MIN / MS_PER_DAY - 1;
const MAX_EPOCH_DAYS: i64 = i64::MAX / MS_PER_DAY + 1;

/// Balances the year and month, then carries the day from the first of the
/// balanced month.
fn balanced_epoch_days(year: i64, month: i64, day: i64) -> DateResult<i64> {
    let out_of_range =
        || DateError::assert().with_message("date fields are outside the representable range.");
    let month_index = month.checked_sub(1).ok_or_else(out_of_range)?;
    let year = year
        .checked_add(month_index.div_euclid(12))
        .and_then(|y| y.to_i32())
        .ok_or_else(out_of_range)?;
    let month = (month_index.rem_euclid(12) + 1).to_u8().date_unwrap()?;
    gregorian::epoch_days_from_ymd(year, month, 1)
        .checked_add(day.checked_sub(1).ok_or_else(out_of_range)?)
        .ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_month_overflow() {
        assert_eq!(
            IsoDate::balance(2023, 13, 1).unwrap(),
            IsoDate::new_unchecked(2024, 1, 1)
        );
        assert_eq!(
            IsoDate::balance(2024, 0, 1).unwrap(),
            IsoDate::new_unchecked(2023, 12, 1)
        );
        assert_eq!(
            IsoDate::balance(2024, -11, 1).unwrap(),
            IsoDate::new_unchecked(2023, 1, 1)
        );
    }

    #[test]
    fn balance_day_overflow() {
        assert_eq!(
            IsoDate::balance(2000, 2, 31).unwrap(),
            IsoDate::new_unchecked(2000, 3, 2)
        );
        assert_eq!(
            IsoDate::balance(2001, 2, 31).unwrap(),
            IsoDate::new_unchecked(2001, 3, 3)
        );
        assert_eq!(
            IsoDate::balance(2024, 3, 0).unwrap(),
            IsoDate::new_unchecked(2024, 2, 29)
        );
    }

    #[test]
    fn balance_rejects_huge_years() {
        assert!(IsoDate::balance(i64::from(i32::MAX) + 1, 1, 1).is_err());
        assert!(IsoDateTime::balance(300_000_000, 1, 1, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn try_new_validates() {
        assert!(IsoDate::try_new(2024, 2, 29).is_ok());
        assert!(IsoDate::try_new(2023, 2, 29).is_err());
        assert!(IsoDate::try_new(2023, 13, 1).is_err());
        assert!(IsoDate::try_new(2023, 1, 0).is_err());
    }

    #[test]
    fn local_epoch_milliseconds_round_trip() {
        // 2024-02-29T13:45:30.123
        let ms = 1_709_214_330_123;
        let fields = IsoDateTime::from_local_epoch_milliseconds(ms);
        assert_eq!(fields.date, IsoDate::new_unchecked(2024, 2, 29));
        assert_eq!(fields.time, IsoTime::new_unchecked(13, 45, 30, 123));
        assert_eq!(fields.to_local_epoch_milliseconds().unwrap(), ms);
    }

    #[test]
    fn pre_epoch_fields() {
        let fields = IsoDateTime::from_local_epoch_milliseconds(-1);
        assert_eq!(fields.date, IsoDate::new_unchecked(1969, 12, 31));
        assert_eq!(fields.time, IsoTime::MAX);
    }

    #[test]
    fn extreme_instants_have_fields() {
        let min = IsoDateTime::from_local_epoch_milliseconds(i64::MIN);
        assert_eq!(min.to_local_epoch_milliseconds().unwrap(), i64::MIN);
        let max = IsoDateTime::from_local_epoch_milliseconds(i64::MAX);
        assert_eq!(max.to_local_epoch_milliseconds().unwrap(), i64::MAX);
    }

    #[test]
    fn balance_time_carry() {
        let ms = IsoDateTime::balance(1970, 1, 1, 24, 0, 0, 0).unwrap();
        assert_eq!(ms, MS_PER_DAY);
        let ms = IsoDateTime::balance(1970, 1, 1, 0, 0, 0, -1).unwrap();
        assert_eq!(ms, -1);
    }
}
