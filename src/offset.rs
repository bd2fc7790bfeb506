//! The fixed UTC offset that calendar fields are evaluated in.

use core::fmt;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{DateError, DateResult, MS_PER_SECOND};

const SECONDS_PER_HOUR: i32 = 3_600;
const SECONDS_PER_MINUTE: i32 = 60;

/// The largest offset magnitude accepted, `±18:00`.
pub const MAX_OFFSET_SECONDS: i32 = 18 * SECONDS_PER_HOUR;

/// `UtcOffset` represents the amount of seconds we need to add to UTC to
/// reach the local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// Coordinated Universal Time.
    pub const UTC: Self = Self(0);

    /// Japan Standard Time, `+09:00`.
    pub const JST: Self = Self(9 * SECONDS_PER_HOUR);

    /// Creates an offset from seconds east of UTC.
    pub fn from_seconds(seconds: i32) -> DateResult<Self> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds) {
            return Err(DateError::assert().with_message("UTC offset must be within ±18:00."));
        }
        Ok(Self(seconds))
    }

    /// Creates an offset from signed hours and minutes, e.g. `(-3, -30)`.
    pub fn from_hours_minutes(hours: i8, minutes: i8) -> DateResult<Self> {
        Self::from_seconds(
            i32::from(hours) * SECONDS_PER_HOUR + i32::from(minutes) * SECONDS_PER_MINUTE,
        )
    }

    /// Returns the offset in seconds.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.0
    }

    /// Returns the offset in milliseconds.
    #[inline]
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.0 as i64 * MS_PER_SECOND
    }

    /// Converts epoch milliseconds to local epoch milliseconds, saturating at
    /// the representable bounds.
    #[inline]
    pub(crate) const fn to_local(self, epoch_milliseconds: i64) -> i64 {
        epoch_milliseconds.saturating_add(self.milliseconds())
    }

    /// Converts local epoch milliseconds back to epoch milliseconds,
    /// saturating at the representable bounds.
    #[inline]
    pub(crate) const fn to_utc(self, local_milliseconds: i64) -> i64 {
        local_milliseconds.saturating_sub(self.milliseconds())
    }
}

impl Writeable for UtcOffset {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.0 == 0 {
            return sink.write_char('Z');
        }
        sink.write_char(if self.0 < 0 { '-' } else { '+' })?;
        let abs = self.0.unsigned_abs();
        let hour = (abs / SECONDS_PER_HOUR as u32) as u8;
        let minute = ((abs % SECONDS_PER_HOUR as u32) / SECONDS_PER_MINUTE as u32) as u8;
        crate::pattern::write_padded(u64::from(hour), 2, sink)?;
        sink.write_char(':')?;
        crate::pattern::write_padded(u64::from(minute), 2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.0 == 0 {
            return LengthHint::exact(1);
        }
        LengthHint::exact(6)
    }
}

impl_display_with_writeable!(UtcOffset);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn offset_bounds() {
        assert!(UtcOffset::from_seconds(MAX_OFFSET_SECONDS).is_ok());
        assert!(UtcOffset::from_seconds(MAX_OFFSET_SECONDS + 1).is_err());
        assert_eq!(UtcOffset::from_hours_minutes(9, 0), Ok(UtcOffset::JST));
    }

    #[test]
    fn offset_display() {
        assert_eq!(UtcOffset::UTC.to_string(), "Z");
        assert_eq!(UtcOffset::JST.to_string(), "+09:00");
        let newfoundland = UtcOffset::from_hours_minutes(-3, -30).unwrap();
        assert_eq!(newfoundland.to_string(), "-03:30");
    }

    #[test]
    fn local_conversion_saturates() {
        assert_eq!(UtcOffset::JST.to_local(i64::MAX), i64::MAX);
        assert_eq!(UtcOffset::JST.to_utc(i64::MIN), i64::MIN);
        assert_eq!(UtcOffset::JST.to_local(0), 32_400_000);
    }
}
