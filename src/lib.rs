//! The `nengo_rs` crate provides date helper functions and the catalog of
//! Japanese eras (nengo).
//!
//! ```rust
//! use nengo_rs::{DateFacilities, JapaneseEra};
//!
//! let facilities = DateFacilities::UTC;
//! let date = facilities.date(1989, 1, 8).unwrap();
//!
//! assert_eq!(facilities.format(date, "yyyy/MM/dd (EEE)"), "1989/01/08 (Sun)");
//! assert_eq!(facilities.japanese_era(date), Some(JapaneseEra::Heisei));
//! assert_eq!(facilities.japanese_year(date), 1);
//!
//! let previous_day = facilities.yesterday(date);
//! assert_eq!(facilities.japanese_era(previous_day), Some(JapaneseEra::Showa));
//! assert_eq!(facilities.japanese_year(previous_day), 64);
//! ```
//!
//! Calendar fields are always proleptic Gregorian and are evaluated in the
//! fixed [`UtcOffset`] a [`DateFacilities`] value was created with.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    // Calendar fields are narrowed from range checked `i64` values.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod era;
pub mod error;
pub mod facilities;
pub mod host;
pub mod instant;
pub mod iso;
pub mod offset;
pub mod pattern;
pub mod weekday;

#[cfg(feature = "sys")]
pub mod sys;

/// Re-export of `TinyAsciiStr` from `tinystr`.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::{DateError, ErrorKind};

/// The `nengo_rs` result type
pub type DateResult<T> = Result<T, DateError>;

pub use crate::{
    era::JapaneseEra,
    facilities::{DateFacilities, Period},
    instant::Instant,
    offset::UtcOffset,
    pattern::{FormatPattern, FormattedInstant},
    weekday::{WeekRule, Weekday},
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait DateUnwrap {
    type Output;

    /// Turns a value that must be present into an `InternalInvariant`
    /// error when it is missing. Debug builds assert instead.
    fn date_unwrap(self) -> DateResult<Self::Output>;
}

impl<T> DateUnwrap for Option<T> {
    type Output = T;

    fn date_unwrap(self) -> DateResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(DateError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! date_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::DateError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::DateError::assert());
        }
    };
}

// Relevant numeric constants
/// Milliseconds per second constant
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute constant
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds per hour constant
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Nanoseconds per millisecond constant
pub const NS_PER_MS: i64 = 1_000_000;
