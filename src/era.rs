//! The Japanese era (nengo) catalog.
//!
//! Every era is identified by a `JapaneseEra` variant and described by an
//! `EraRecord`: its first day, its name, and its romanized name. Start days
//! are proleptic Gregorian dates, and an era begins at local midnight of
//! its first day.
//!
//! ```rust
//! use nengo_rs::{era::JapaneseEra, Instant};
//!
//! // 1989-01-08T00:00:00Z
//! let heisei_day_one = Instant::from_epoch_milliseconds(600_220_800_000);
//! assert_eq!(JapaneseEra::match_instant(heisei_day_one), Some(JapaneseEra::Heisei));
//!
//! let showa_last_day = heisei_day_one.saturating_add_milliseconds(-1);
//! assert_eq!(JapaneseEra::match_instant(showa_last_day), Some(JapaneseEra::Showa));
//! ```

use alloc::vec::Vec;
use core::{cmp::Reverse, fmt};

use date_equations::gregorian;
use tinystr::TinyAsciiStr;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{iso::IsoDate, offset::UtcOffset, Instant, MS_PER_DAY};

macro_rules! japanese_eras {
    ($($variant:ident => ($year:literal, $month:literal, $day:literal, $name:literal, $romanized:literal),)+) => {
        /// A Japanese era.
        ///
        /// Variants are declared in table order, which is not chronological.
        /// Use [`JapaneseEra::chronological`] for eras sorted by start.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum JapaneseEra {
            $(
                #[doc = concat!($name, " (", $romanized, "), from ", $year, "-", $month, "-", $day, ".")]
                $variant,
            )+
        }

        impl JapaneseEra {
            /// Every era in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
        }

        pub(super) static RECORDS: &[$crate::era::EraRecord] = &[
            $($crate::era::EraRecord::new(
                $year,
                $month,
                $day,
                $name,
                tinystr::tinystr!(16, $romanized),
            ),)+
        ];
    };
}

mod table;

pub use table::JapaneseEra;

/// The fixed description of an era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraRecord {
    start: IsoDate,
    start_epoch_days: i64,
    name: &'static str,
    romanized: TinyAsciiStr<16>,
}

impl EraRecord {
    const fn new(
        year: i32,
        month: u8,
        day: u8,
        name: &'static str,
        romanized: TinyAsciiStr<16>,
    ) -> Self {
        Self {
            start: IsoDate::new_unchecked(year, month, day),
            start_epoch_days: gregorian::epoch_days_from_ymd(year, month, day),
            name,
            romanized,
        }
    }
}

impl JapaneseEra {
    fn record(self) -> &'static EraRecord {
        &table::RECORDS[self as usize]
    }

    /// Returns the year the era started in.
    #[inline]
    #[must_use]
    pub fn start_year(self) -> i32 {
        self.record().start.year
    }

    /// Returns the month the era started in.
    #[inline]
    #[must_use]
    pub fn start_month(self) -> u8 {
        self.record().start.month
    }

    /// Returns the day of month the era started on.
    #[inline]
    #[must_use]
    pub fn start_day(self) -> u8 {
        self.record().start.day
    }

    /// Returns the first day of the era.
    #[inline]
    #[must_use]
    pub fn start_date(self) -> IsoDate {
        self.record().start
    }

    /// Returns the display name, e.g. `平成`.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.record().name
    }

    /// Returns the romanized name, e.g. `Heisei`.
    ///
    /// Romanized names are not unique: `Jowa`, `Kasho`, `Showa` and others
    /// name two eras each.
    #[inline]
    #[must_use]
    pub fn romanized(self) -> TinyAsciiStr<16> {
        self.record().romanized
    }

    /// Returns the epoch day of the first day of the era.
    #[inline]
    #[must_use]
    pub fn start_epoch_days(self) -> i64 {
        self.record().start_epoch_days
    }

    /// Returns the UTC epoch milliseconds of the start of the era.
    #[must_use]
    pub fn start_epoch_milliseconds(self) -> i64 {
        self.start_epoch_days() * MS_PER_DAY
    }

    /// Returns the start of the era in `offset`, which is midnight local time
    /// of its first day.
    #[must_use]
    pub fn start_instant(self, offset: UtcOffset) -> Instant {
        Instant::from_epoch_milliseconds(offset.to_utc(self.start_epoch_milliseconds()))
    }

    /// Returns the year of the era for a Gregorian year, counting the
    /// starting year as year 1.
    #[must_use]
    pub fn era_year(self, year: i32) -> i32 {
        year.saturating_sub(self.start_year()).saturating_add(1)
    }

    /// Returns the era containing UTC epoch milliseconds, or `None` before
    /// the first era.
    #[must_use]
    pub fn match_epoch_milliseconds(epoch_milliseconds: i64) -> Option<Self> {
        Self::match_local_milliseconds(epoch_milliseconds)
    }

    /// Returns the era containing `instant` with era boundaries at UTC
    /// midnight.
    #[must_use]
    pub fn match_instant(instant: impl Into<Option<Instant>>) -> Option<Self> {
        let instant = instant.into()?;
        Self::match_epoch_milliseconds(instant.epoch_milliseconds())
    }

    /// Returns the latest starting era whose start is not after local epoch
    /// milliseconds.
    pub(crate) fn match_local_milliseconds(local_milliseconds: i64) -> Option<Self> {
        let epoch_days = local_milliseconds.div_euclid(MS_PER_DAY);
        // Ties keep the era listed first.
        Self::ALL
            .iter()
            .copied()
            .filter(|era| era.start_epoch_days() <= epoch_days)
            .min_by_key(|era| Reverse(era.start_epoch_days()))
    }

    /// Returns every era sorted by start, earliest first.
    #[must_use]
    pub fn chronological() -> Vec<Self> {
        let mut eras = Self::ALL.to_vec();
        eras.sort_by_key(|era| era.start_epoch_days());
        eras
    }
}

impl Writeable for JapaneseEra {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.name())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.name().len())
    }
}

impl_display_with_writeable!(JapaneseEra);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn midnight(year: i32, month: u8, day: u8) -> i64 {
        gregorian::epoch_days_from_ymd(year, month, day) * MS_PER_DAY
    }

    #[test]
    fn table_is_complete() {
        assert_eq!(JapaneseEra::ALL.len(), table::RECORDS.len());
        assert_eq!(JapaneseEra::ALL.len(), 248);
        assert_eq!(JapaneseEra::ALL[0], JapaneseEra::Taika);
        assert_eq!(JapaneseEra::ALL.last(), Some(&JapaneseEra::Reiwa));
    }

    #[test]
    fn accessors() {
        let heisei = JapaneseEra::Heisei;
        assert_eq!(heisei.start_year(), 1989);
        assert_eq!(heisei.start_month(), 1);
        assert_eq!(heisei.start_day(), 8);
        assert_eq!(heisei.name(), "平成");
        assert_eq!(heisei.romanized().as_str(), "Heisei");
        assert_eq!(heisei.start_epoch_milliseconds(), 600_220_800_000);
        assert_eq!(heisei.to_string(), "平成");
    }

    #[test]
    fn start_instant_is_local_midnight() {
        let utc = JapaneseEra::Reiwa.start_instant(UtcOffset::UTC);
        let jst = JapaneseEra::Reiwa.start_instant(UtcOffset::JST);
        assert_eq!(utc.epoch_milliseconds() - jst.epoch_milliseconds(), 32_400_000);
    }

    #[test]
    fn match_boundaries() {
        let heisei = midnight(1989, 1, 8);
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(heisei),
            Some(JapaneseEra::Heisei)
        );
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(heisei - 1),
            Some(JapaneseEra::Showa)
        );
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(midnight(2019, 5, 1)),
            Some(JapaneseEra::Reiwa)
        );
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(midnight(2019, 5, 1) - 1),
            Some(JapaneseEra::Heisei)
        );
    }

    #[test]
    fn match_before_first_era() {
        let taika = midnight(645, 7, 17);
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(taika),
            Some(JapaneseEra::Taika)
        );
        assert_eq!(JapaneseEra::match_epoch_milliseconds(taika - 1), None);
        assert_eq!(JapaneseEra::match_epoch_milliseconds(i64::MIN), None);
        assert_eq!(JapaneseEra::match_instant(None), None);
    }

    #[test]
    fn match_ignores_table_order() {
        // Ryakuo is listed after Genchu but started before it.
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(midnight(1340, 1, 1)),
            Some(JapaneseEra::Ryakuo)
        );
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(midnight(1384, 5, 18)),
            Some(JapaneseEra::Genchu)
        );
        assert_eq!(
            JapaneseEra::match_epoch_milliseconds(midnight(1392, 1, 1)),
            Some(JapaneseEra::Meitoku)
        );
    }

    #[test]
    fn match_agrees_with_sorted_scan() {
        let mut descending = JapaneseEra::ALL.to_vec();
        descending.sort_by_key(|era| Reverse(era.start_epoch_days()));
        for era in JapaneseEra::ALL {
            for delta in [-1, 0, 1] {
                let ms = era.start_epoch_milliseconds() + delta;
                let expected = descending
                    .iter()
                    .copied()
                    .find(|e| e.start_epoch_milliseconds() <= ms);
                assert_eq!(JapaneseEra::match_epoch_milliseconds(ms), expected);
            }
        }
    }

    #[test]
    fn chronological_order() {
        let eras = JapaneseEra::chronological();
        assert_eq!(eras.len(), JapaneseEra::ALL.len());
        assert!(eras
            .windows(2)
            .all(|pair| pair[0].start_epoch_days() <= pair[1].start_epoch_days()));
        assert_eq!(eras.first(), Some(&JapaneseEra::Taika));
        assert_eq!(eras.last(), Some(&JapaneseEra::Reiwa));
    }

    #[test]
    fn era_years() {
        assert_eq!(JapaneseEra::Heisei.era_year(1989), 1);
        assert_eq!(JapaneseEra::Heisei.era_year(1990), 2);
        assert_eq!(JapaneseEra::Reiwa.era_year(2024), 6);
    }
}
