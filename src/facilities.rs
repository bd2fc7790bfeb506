//! This module implements `DateFacilities`, the date helper functions.
//!
//! Every operation evaluates calendar fields in one fixed `UtcOffset`, so a
//! `DateFacilities` value is the whole configuration of the helpers. Absent
//! instants are accepted wherever a sensible "empty" answer exists: getters
//! return `0`, text projections return `""`, and predicates return `false`.

use alloc::{
    format,
    string::{String, ToString},
};

use date_equations::gregorian;
use num_traits::ToPrimitive;
use writeable::Writeable;

use crate::{
    era::JapaneseEra,
    host::HostClock,
    iso::{IsoDate, IsoDateTime},
    offset::UtcOffset,
    pattern::FormatPattern,
    weekday::{WeekRule, Weekday},
    DateError, DateResult, Instant, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

/// The pattern dates are built through.
const DATE_PATTERN: &str = "yyyy/M/d";

/// Date helper functions evaluated in a fixed UTC offset.
///
/// ```rust
/// use nengo_rs::{DateFacilities, UtcOffset};
///
/// let facilities = DateFacilities::new(UtcOffset::JST);
/// let date = facilities.parse("2024/02/29 23:30", "yyyy/MM/dd HH:mm").unwrap();
///
/// assert_eq!(facilities.format(date, "yyyy-MM-dd"), "2024-02-29");
/// assert_eq!(DateFacilities::UTC.format(date, "yyyy-MM-dd"), "2024-02-29");
///
/// let next = facilities.add_hour(date.unwrap(), 1);
/// assert_eq!(facilities.format(next, "yyyy-MM-dd"), "2024-03-01");
/// assert_eq!(DateFacilities::UTC.format(next, "yyyy-MM-dd"), "2024-02-29");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateFacilities {
    offset: UtcOffset,
    week_rule: WeekRule,
}

impl DateFacilities {
    /// Facilities evaluated in UTC with Sunday start weeks.
    pub const UTC: Self = Self::new(UtcOffset::UTC);

    /// Creates facilities evaluated in `offset` with Sunday start weeks.
    #[must_use]
    pub const fn new(offset: UtcOffset) -> Self {
        Self {
            offset,
            week_rule: WeekRule::SUNDAY_START,
        }
    }

    /// Replaces the rule used by [`Self::week_of_year`].
    #[must_use]
    pub const fn with_week_rule(mut self, week_rule: WeekRule) -> Self {
        self.week_rule = week_rule;
        self
    }

    /// Returns the offset calendar fields are evaluated in.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the week numbering rule.
    #[inline]
    #[must_use]
    pub const fn week_rule(&self) -> WeekRule {
        self.week_rule
    }

    /// Returns the calendar fields of `instant` in this offset.
    #[must_use]
    pub fn fields(&self, instant: Instant) -> IsoDateTime {
        instant.to_fields(self.offset)
    }

    fn local_fields(&self, instant: impl Into<Option<Instant>>) -> Option<IsoDateTime> {
        instant.into().map(|instant| self.fields(instant))
    }

    fn instant_from_local(&self, local_milliseconds: i64) -> Instant {
        Instant::from_epoch_milliseconds(self.offset.to_utc(local_milliseconds))
    }

    // ==== Current time ====

    /// Returns the current instant from the system clock.
    #[cfg(feature = "sys")]
    pub fn now() -> DateResult<Instant> {
        Self::now_with_clock(&crate::sys::SystemClock)
    }

    /// Returns the current instant from `clock`.
    pub fn now_with_clock(clock: &impl HostClock) -> DateResult<Instant> {
        Instant::from_epoch_nanoseconds(clock.get_host_epoch_nanoseconds()?)
    }

    // ==== Formatting and parsing ====

    /// Formats `instant` with `pattern`, or returns `""` for an absent
    /// instant.
    #[must_use]
    pub fn format(&self, instant: impl Into<Option<Instant>>, pattern: &str) -> String {
        let Some(fields) = self.local_fields(instant) else {
            return String::new();
        };
        FormatPattern::compile(pattern)
            .format(&fields)
            .write_to_string()
            .into_owned()
    }

    /// Parses `text` with `pattern`.
    ///
    /// Empty text parses to `None`. Parsing is lenient: `2000/02/31` is
    /// March 2nd, 2000.
    pub fn parse(&self, text: &str, pattern: &str) -> DateResult<Option<Instant>> {
        if text.is_empty() {
            return Ok(None);
        }
        self.parse_required(text, pattern).map(Some)
    }

    fn parse_required(&self, text: &str, pattern: &str) -> DateResult<Instant> {
        let malformed = |message: String| {
            #[cfg(feature = "log")]
            log::debug!("could not parse {text:?} as {pattern:?}: {message}");
            DateError::malformed()
                .with_pattern(String::from(pattern))
                .with_message(message)
        };
        let fields = FormatPattern::compile(pattern)
            .parse_fields(text)
            .map_err(|failure| malformed(failure.to_string()))?;
        let local = fields
            .to_local_epoch_milliseconds()
            .map_err(|err| malformed(err.into_message().into_owned()))?;
        Ok(self.instant_from_local(local))
    }

    /// Returns whether `text` is a date written exactly as `pattern` would
    /// write it.
    ///
    /// Empty text is valid. Text that only parses through rollover, such as
    /// `2000/02/31`, is not.
    #[must_use]
    pub fn is_valid_date_string(&self, text: &str, pattern: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        self.parse_required(text, pattern)
            .is_ok_and(|instant| self.format(instant, pattern) == text)
    }

    // ==== Arithmetic ====

    /// Adds years, keeping the day of month when the target month has it and
    /// clamping to the month's last day otherwise.
    #[must_use]
    pub fn add_year(&self, instant: Instant, years: i64) -> Instant {
        self.add_calendar_months(instant, years.saturating_mul(12))
    }

    /// Adds months, keeping the day of month when the target month has it
    /// and clamping to the month's last day otherwise.
    #[must_use]
    pub fn add_month(&self, instant: Instant, months: i64) -> Instant {
        self.add_calendar_months(instant, months)
    }

    fn add_calendar_months(&self, instant: Instant, months: i64) -> Instant {
        let saturated = if months < 0 {
            Instant::MIN
        } else {
            Instant::MAX
        };
        let fields = self.fields(instant);
        let month_index = i64::from(fields.date.year) * 12 + i64::from(fields.date.month - 1);
        let month_index = month_index.saturating_add(months);
        let Some(year) = month_index.div_euclid(12).to_i32() else {
            return saturated;
        };
        let month = (month_index.rem_euclid(12) + 1) as u8;
        let day = fields.date.day.min(gregorian::days_in_month(year, month));
        let date = IsoDate::new_unchecked(year, month, day);
        match IsoDateTime::new_unchecked(date, fields.time).to_local_epoch_milliseconds() {
            Ok(local) => instant.with_epoch_milliseconds(self.offset.to_utc(local)),
            Err(_) => saturated,
        }
    }

    /// Adds days.
    #[must_use]
    pub fn add_day(&self, instant: Instant, days: i64) -> Instant {
        instant.saturating_add_milliseconds(days.saturating_mul(MS_PER_DAY))
    }

    /// Adds hours.
    #[must_use]
    pub fn add_hour(&self, instant: Instant, hours: i64) -> Instant {
        instant.saturating_add_milliseconds(hours.saturating_mul(MS_PER_HOUR))
    }

    /// Adds minutes.
    #[must_use]
    pub fn add_minute(&self, instant: Instant, minutes: i64) -> Instant {
        instant.saturating_add_milliseconds(minutes.saturating_mul(MS_PER_MINUTE))
    }

    /// Adds seconds.
    #[must_use]
    pub fn add_second(&self, instant: Instant, seconds: i64) -> Instant {
        instant.saturating_add_milliseconds(seconds.saturating_mul(MS_PER_SECOND))
    }

    /// Adds milliseconds.
    #[must_use]
    pub fn add_millisecond(&self, instant: Instant, milliseconds: i64) -> Instant {
        instant.saturating_add_milliseconds(milliseconds)
    }

    /// Returns the same time one day earlier.
    #[must_use]
    pub fn yesterday(&self, instant: Instant) -> Instant {
        self.add_day(instant, -1)
    }

    /// Returns the same time one day later.
    #[must_use]
    pub fn tomorrow(&self, instant: Instant) -> Instant {
        self.add_day(instant, 1)
    }

    // ==== Field getters ====

    /// Returns the year, or `0` when absent.
    #[must_use]
    pub fn year(&self, instant: impl Into<Option<Instant>>) -> i32 {
        self.local_fields(instant).map_or(0, |f| f.date.year)
    }

    /// Returns the month, 1 through 12, or `0` when absent.
    #[must_use]
    pub fn month(&self, instant: impl Into<Option<Instant>>) -> u8 {
        self.local_fields(instant).map_or(0, |f| f.date.month)
    }

    /// Returns the day of month, or `0` when absent.
    #[must_use]
    pub fn day(&self, instant: impl Into<Option<Instant>>) -> u8 {
        self.local_fields(instant).map_or(0, |f| f.date.day)
    }

    /// Returns the hour, 0 through 23, or `0` when absent.
    #[must_use]
    pub fn hour(&self, instant: impl Into<Option<Instant>>) -> u8 {
        self.local_fields(instant).map_or(0, |f| f.time.hour)
    }

    /// Returns the hour on a 12 hour clock, 1 through 12, or `0` when
    /// absent.
    #[must_use]
    pub fn hour12(&self, instant: impl Into<Option<Instant>>) -> u8 {
        self.local_fields(instant).map_or(0, |f| match f.time.hour % 12 {
            0 => 12,
            hour => hour,
        })
    }

    /// Returns the minute, or `0` when absent.
    #[must_use]
    pub fn minute(&self, instant: impl Into<Option<Instant>>) -> u8 {
        self.local_fields(instant).map_or(0, |f| f.time.minute)
    }

    /// Returns the second, or `0` when absent.
    #[must_use]
    pub fn second(&self, instant: impl Into<Option<Instant>>) -> u8 {
        self.local_fields(instant).map_or(0, |f| f.time.second)
    }

    /// Returns the millisecond, or `0` when absent.
    #[must_use]
    pub fn millis(&self, instant: impl Into<Option<Instant>>) -> u16 {
        self.local_fields(instant).map_or(0, |f| f.time.millisecond)
    }

    /// Returns the nanosecond of second of a high precision instant, or `0`.
    #[must_use]
    pub fn nanos(&self, instant: impl Into<Option<Instant>>) -> u32 {
        instant
            .into()
            .and_then(|instant| instant.nanosecond())
            .unwrap_or(0)
    }

    /// Returns the year formatted as `yyyy`, or `""` when absent.
    #[must_use]
    pub fn yyyy(&self, instant: impl Into<Option<Instant>>) -> String {
        self.format(instant, "yyyy")
    }

    /// Returns the month formatted as `MM`, or `""` when absent.
    #[must_use]
    pub fn mm(&self, instant: impl Into<Option<Instant>>) -> String {
        self.format(instant, "MM")
    }

    /// Returns the day formatted as `dd`, or `""` when absent.
    #[must_use]
    pub fn dd(&self, instant: impl Into<Option<Instant>>) -> String {
        self.format(instant, "dd")
    }

    // ==== Month and date construction ====

    /// Returns the number of days in a month.
    ///
    /// Months outside 1 through 12 roll over into neighbouring years.
    #[must_use]
    pub fn last_day(year: i32, month: i32) -> u8 {
        let month_index = i64::from(month) - 1;
        // Leap years repeat every 400 years.
        let year = (i64::from(year) + month_index.div_euclid(12)).rem_euclid(400) as i32;
        gregorian::days_in_month(year, (month_index.rem_euclid(12) + 1) as u8)
    }

    /// Returns midnight of the last day of a month.
    pub fn last_date(&self, year: i32, month: i32) -> DateResult<Instant> {
        self.date(year, month, i32::from(Self::last_day(year, month)))
    }

    /// Returns midnight of a date. Out of range months and days, negative
    /// ones included, roll over.
    pub fn date(&self, year: i32, month: i32, day: i32) -> DateResult<Instant> {
        self.parse_required(&format!("{year}/{month}/{day}"), DATE_PATTERN)
            .map_err(|err| {
                #[cfg(feature = "log")]
                log::error!("could not build {year}/{month}/{day}: {err}");
                DateError::assert().with_message(err.into_message())
            })
    }

    // ==== Weeks and day bounds ====

    /// Returns the day of the week, or `None` when absent.
    #[must_use]
    pub fn day_of_week(&self, instant: impl Into<Option<Instant>>) -> Option<Weekday> {
        self.local_fields(instant)
            .map(|f| Weekday::from_epoch_days(f.date.to_epoch_days()))
    }

    /// Returns the week of year under this week rule, or `0` when absent.
    #[must_use]
    pub fn week_of_year(&self, instant: impl Into<Option<Instant>>) -> u8 {
        self.local_fields(instant)
            .map_or(0, |f| self.week_rule.week_of_year(f.date))
    }

    /// Returns 00:00:00.000 of the same day, or [`Instant::MIN`] when absent.
    #[must_use]
    pub fn min_of_date(&self, instant: impl Into<Option<Instant>>) -> Instant {
        let Some(instant) = instant.into() else {
            return Instant::MIN;
        };
        self.instant_from_local(self.local_day_start(instant))
    }

    /// Returns 23:59:59.999 of the same day, or [`Instant::MAX`] when absent.
    #[must_use]
    pub fn max_of_date(&self, instant: impl Into<Option<Instant>>) -> Instant {
        let Some(instant) = instant.into() else {
            return Instant::MAX;
        };
        let day_end = self
            .local_day_start(instant)
            .saturating_add(MS_PER_DAY - 1);
        self.instant_from_local(day_end)
    }

    fn local_day_start(&self, instant: Instant) -> i64 {
        self.offset
            .to_local(instant.epoch_milliseconds())
            .div_euclid(MS_PER_DAY)
            .saturating_mul(MS_PER_DAY)
    }

    // ==== Predicates ====

    /// Returns whether `instant` is on the first day of its month.
    #[must_use]
    pub fn is_start_of_month(&self, instant: impl Into<Option<Instant>>) -> bool {
        self.local_fields(instant).is_some_and(|f| f.date.day == 1)
    }

    /// Returns whether `instant` is on the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self, instant: impl Into<Option<Instant>>) -> bool {
        self.local_fields(instant)
            .is_some_and(|f| f.date.day == f.date.days_in_month())
    }

    /// Returns whether `year` is a leap year.
    #[must_use]
    pub const fn is_leap_year(year: i32) -> bool {
        gregorian::is_leap_year(year)
    }

    /// Returns whether the year of `instant` is a leap year.
    #[must_use]
    pub fn is_leap_year_of(&self, instant: impl Into<Option<Instant>>) -> bool {
        self.local_fields(instant)
            .is_some_and(|f| gregorian::is_leap_year(f.date.year))
    }

    /// Returns whether two closed periods share at least one instant.
    ///
    /// An absent start is unbounded in the past and an absent end is
    /// unbounded in the future.
    #[must_use]
    pub fn is_overlap_period(
        a_start: impl Into<Option<Instant>>,
        a_end: impl Into<Option<Instant>>,
        b_start: impl Into<Option<Instant>>,
        b_end: impl Into<Option<Instant>>,
    ) -> bool {
        Period::new(a_start, a_end).overlaps(&Period::new(b_start, b_end))
    }

    // ==== Japanese eras ====

    /// Returns the era containing `instant`, with era boundaries at local
    /// midnight.
    #[must_use]
    pub fn japanese_era(&self, instant: impl Into<Option<Instant>>) -> Option<JapaneseEra> {
        let instant = instant.into()?;
        JapaneseEra::match_local_milliseconds(self.offset.to_local(instant.epoch_milliseconds()))
    }

    /// Returns the year of the era containing `instant`, or `0` when absent
    /// or before the first era.
    #[must_use]
    pub fn japanese_year(&self, instant: impl Into<Option<Instant>>) -> i32 {
        let Some(instant) = instant.into() else {
            return 0;
        };
        self.japanese_era(instant)
            .map_or(0, |era| era.era_year(self.year(instant)))
    }
}

/// A closed period of time whose ends may be unbounded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Period {
    /// A period covering all time.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Creates a new period; `None` leaves that end unbounded.
    #[must_use]
    pub fn new(start: impl Into<Option<Instant>>, end: impl Into<Option<Instant>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the start, if bounded.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Option<Instant> {
        self.start
    }

    /// Returns the end, if bounded.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Option<Instant> {
        self.end
    }

    fn start_milliseconds(&self) -> i64 {
        self.start.map_or(i64::MIN, |i| i.epoch_milliseconds())
    }

    fn end_milliseconds(&self) -> i64 {
        self.end.map_or(i64::MAX, |i| i.epoch_milliseconds())
    }

    /// Returns whether the periods share at least one millisecond, ends
    /// included.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_milliseconds() <= other.end_milliseconds()
            && other.start_milliseconds() <= self.end_milliseconds()
    }

    /// Returns whether `instant` lies in the period, ends included.
    #[must_use]
    pub fn contains(&self, instant: Instant) -> bool {
        let ms = instant.epoch_milliseconds();
        self.start_milliseconds() <= ms && ms <= self.end_milliseconds()
    }
}
