//! # Date Equations
//!
//! Date Equations is a library focused on implementing
//! small, highly performant proleptic Gregorian calendar
//! calculations. The conversions are informed by the work
//! done by Cassio Neri and Lorenz Schneider on applying
//! Euclidean affine functions to calendar algorithms.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! let date = gregorian::ymd_from_epoch_days(0);
//! assert_eq!(date, (1970, 1, 1));
//!
//! assert_eq!(gregorian::epoch_days_from_ymd(2000, 3, 1), 11_017);
//! assert!(gregorian::is_leap_year(2000));
//! assert_eq!(gregorian::days_in_month(2023, 2), 28);
//! ```

#![no_std]

pub mod gregorian;
