//! An implementation of `Instant`, the point in time every facility works on.

use core::fmt;

use num_traits::{Euclid, ToPrimitive};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    date_assert, iso::IsoDateTime, offset::UtcOffset, pattern::write_padded, DateError, DateResult,
    MS_PER_SECOND, NS_PER_MS,
};

/// An immutable point in time with millisecond resolution.
///
/// An `Instant` created from a higher precision source (epoch nanoseconds or
/// the system clock) also carries its nanosecond of second. Instants created
/// from milliseconds, or produced by arithmetic that truncates to a day
/// boundary, carry none.
///
/// ```rust
/// use nengo_rs::Instant;
///
/// let precise = Instant::from_epoch_nanoseconds(1_500_000_123).unwrap();
/// assert_eq!(precise.epoch_milliseconds(), 1_500);
/// assert_eq!(precise.nanosecond(), Some(500_000_123));
///
/// let coarse = Instant::from_epoch_milliseconds(1_500);
/// assert_eq!(coarse.nanosecond(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    epoch_milliseconds: i64,
    // Invariant: when present, the millisecond part agrees with
    // `epoch_milliseconds.rem_euclid(1000)`.
    nanosecond: Option<u32>,
}

impl Instant {
    /// The minimum representable `Instant`, used as the "unbounded start"
    /// sentinel.
    pub const MIN: Self = Self::from_epoch_milliseconds(i64::MIN);

    /// The maximum representable `Instant`, used as the "unbounded end"
    /// sentinel.
    pub const MAX: Self = Self::from_epoch_milliseconds(i64::MAX);

    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const EPOCH: Self = Self::from_epoch_milliseconds(0);

    /// Creates an `Instant` from milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn from_epoch_milliseconds(epoch_milliseconds: i64) -> Self {
        Self {
            epoch_milliseconds,
            nanosecond: None,
        }
    }

    /// Creates a nanosecond precision `Instant` from nanoseconds since the
    /// Unix epoch.
    pub fn from_epoch_nanoseconds(epoch_nanoseconds: i128) -> DateResult<Self> {
        let (ms, sub_ms) = epoch_nanoseconds.div_rem_euclid(&i128::from(NS_PER_MS));
        let epoch_milliseconds = ms.to_i64().ok_or_else(|| {
            DateError::assert().with_message("epoch nanoseconds are outside the instant range.")
        })?;
        let ms_of_second = epoch_milliseconds.rem_euclid(MS_PER_SECOND) as u32;
        let nanosecond = ms_of_second * NS_PER_MS as u32 + sub_ms as u32;
        date_assert!(
            nanosecond < 1_000_000_000,
            "nanosecond of second out of range: {nanosecond}"
        );
        Ok(Self {
            epoch_milliseconds,
            nanosecond: Some(nanosecond),
        })
    }

    /// Returns milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn epoch_milliseconds(&self) -> i64 {
        self.epoch_milliseconds
    }

    /// Returns nanoseconds since the Unix epoch.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> i128 {
        i128::from(self.epoch_milliseconds) * i128::from(NS_PER_MS)
            + i128::from(self.sub_millisecond_nanos())
    }

    /// Returns the nanosecond of second when this instant carries nanosecond
    /// precision.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> Option<u32> {
        self.nanosecond
    }

    /// Returns whether this instant carries nanosecond precision.
    #[inline]
    #[must_use]
    pub const fn is_high_precision(&self) -> bool {
        self.nanosecond.is_some()
    }

    /// Drops any nanosecond precision.
    #[inline]
    #[must_use]
    pub const fn truncate_to_milliseconds(self) -> Self {
        Self::from_epoch_milliseconds(self.epoch_milliseconds)
    }

    fn sub_millisecond_nanos(&self) -> u32 {
        self.nanosecond.map_or(0, |ns| ns % NS_PER_MS as u32)
    }

    /// Moves this instant to new epoch milliseconds, keeping the sub
    /// millisecond part of any nanosecond precision.
    pub(crate) fn with_epoch_milliseconds(self, epoch_milliseconds: i64) -> Self {
        let nanosecond = self.nanosecond.map(|ns| {
            let ms_of_second = epoch_milliseconds.rem_euclid(MS_PER_SECOND) as u32;
            ms_of_second * NS_PER_MS as u32 + ns % NS_PER_MS as u32
        });
        Self {
            epoch_milliseconds,
            nanosecond,
        }
    }

    /// Adds milliseconds, saturating at the representable bounds.
    #[must_use]
    pub fn saturating_add_milliseconds(self, milliseconds: i64) -> Self {
        self.with_epoch_milliseconds(self.epoch_milliseconds.saturating_add(milliseconds))
    }

    /// Returns the calendar fields of this instant in the provided offset.
    #[must_use]
    pub fn to_fields(&self, offset: UtcOffset) -> IsoDateTime {
        IsoDateTime::from_local_epoch_milliseconds(offset.to_local(self.epoch_milliseconds))
    }
}

impl From<i64> for Instant {
    fn from(epoch_milliseconds: i64) -> Self {
        Self::from_epoch_milliseconds(epoch_milliseconds)
    }
}

// ==== Formatting ====

// An instant displays as an ISO 8601 UTC timestamp with millisecond
// precision, or nanosecond precision when it carries it.
impl Writeable for Instant {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let fields = self.to_fields(UtcOffset::UTC);
        let year = fields.date.year;
        if (0..=9999).contains(&year) {
            write_padded(year as u64, 4, sink)?;
        } else {
            sink.write_char(if year < 0 { '-' } else { '+' })?;
            write_padded(u64::from(year.unsigned_abs()), 6, sink)?;
        }
        sink.write_char('-')?;
        write_padded(u64::from(fields.date.month), 2, sink)?;
        sink.write_char('-')?;
        write_padded(u64::from(fields.date.day), 2, sink)?;
        sink.write_char('T')?;
        write_padded(u64::from(fields.time.hour), 2, sink)?;
        sink.write_char(':')?;
        write_padded(u64::from(fields.time.minute), 2, sink)?;
        sink.write_char(':')?;
        write_padded(u64::from(fields.time.second), 2, sink)?;
        sink.write_char('.')?;
        match self.nanosecond {
            Some(ns) => write_padded(u64::from(ns), 9, sink)?,
            None => write_padded(u64::from(fields.time.millisecond), 3, sink)?,
        }
        sink.write_char('Z')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let fraction = if self.nanosecond.is_some() { 9 } else { 3 };
        LengthHint::at_least(21 + fraction)
    }
}

impl_display_with_writeable!(Instant);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn nanosecond_precision() {
        let instant = Instant::from_epoch_nanoseconds(-1).unwrap();
        assert_eq!(instant.epoch_milliseconds(), -1);
        assert_eq!(instant.nanosecond(), Some(999_999_999));
        assert_eq!(instant.epoch_nanoseconds(), -1);

        let instant = Instant::from_epoch_nanoseconds(1_000_000_007).unwrap();
        assert_eq!(instant.epoch_milliseconds(), 1_000);
        assert_eq!(instant.nanosecond(), Some(7));
    }

    #[test]
    fn nanoseconds_out_of_range() {
        assert!(Instant::from_epoch_nanoseconds(i128::MAX).is_err());
        assert!(Instant::from_epoch_nanoseconds(i128::MIN).is_err());
    }

    #[test]
    fn adding_keeps_sub_millisecond_part() {
        let instant = Instant::from_epoch_nanoseconds(1_999_000_042).unwrap();
        let moved = instant.saturating_add_milliseconds(2);
        assert_eq!(moved.epoch_milliseconds(), 2_001);
        assert_eq!(moved.nanosecond(), Some(1_000_042));

        let coarse = Instant::from_epoch_milliseconds(5).saturating_add_milliseconds(5);
        assert_eq!(coarse, Instant::from_epoch_milliseconds(10));
    }

    #[test]
    fn saturation() {
        assert_eq!(Instant::MAX.saturating_add_milliseconds(1), Instant::MAX);
        assert_eq!(Instant::MIN.saturating_add_milliseconds(-1), Instant::MIN);
    }

    #[test]
    fn ordering() {
        assert!(Instant::MIN < Instant::EPOCH);
        assert!(Instant::EPOCH < Instant::MAX);
        assert!(Instant::from(-1) < Instant::EPOCH);
    }

    #[test]
    fn display() {
        assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00.000Z");
        assert_eq!(
            Instant::from_epoch_milliseconds(1_709_214_330_123).to_string(),
            "2024-02-29T13:45:30.123Z"
        );
        assert_eq!(
            Instant::from_epoch_nanoseconds(1_500_000_123).unwrap().to_string(),
            "1970-01-01T00:00:01.500000123Z"
        );
    }
}
