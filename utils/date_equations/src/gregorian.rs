/// Gregorian Date Calculations
///
/// This module contains the logic for proleptic Gregorian date
/// calculations over the full `i64` epoch day range.
///
/// ## Cycle splitting instead of a Rata Die shift
///
/// Neri and Schneider shift the Rata Die by a whole number of
/// 400 year cycles so that the computation stays unsigned. The
/// number of cycles required grows with the supported range, and
/// an instant at `i64::MIN` milliseconds is roughly 292 million
/// years before the epoch. Rather than picking an ever larger
/// shift, the day count is split into a Euclidean quotient of
/// 400 year cycles and a non negative day of cycle, and only the
/// day of cycle runs through the affine functions.
pub mod neri_schneider;

pub use neri_schneider::{
    epoch_days_from_gregorian_date as epoch_days_from_ymd,
    gregorian_ymd_from_epoch_days as ymd_from_epoch_days,
};

/// Days in a common year.
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[inline]
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `year`.
#[inline]
#[must_use]
pub const fn days_in_year(year: i32) -> u16 {
    DAYS_IN_COMMON_YEAR + is_leap_year(year) as u16
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// Months outside of 1-12 return 0.
#[must_use]
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns the day of the week for an epoch day, counting Sunday as 0
/// and Saturday as 6.
///
/// 1970-01-01 was a Thursday.
#[inline]
#[must_use]
pub const fn day_of_week_from_epoch_days(epoch_days: i64) -> u8 {
    (epoch_days + 4).rem_euclid(7) as u8
}

/// Returns the 1 based ordinal day of the year.
#[must_use]
pub const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    (epoch_days_from_ymd(year, month, day) - epoch_days_from_ymd(year, 1, 1) + 1) as u16
}
