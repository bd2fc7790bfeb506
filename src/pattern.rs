//! This module implements the date format pattern language.
//!
//! A pattern is a run of field letters and literal text. Each run of the same
//! field letter is one token, and the run length controls zero padding (for
//! numbers) or the text style (for names).
//!
//! | Letter | Field | Notes |
//! |--------|-------|-------|
//! | `y` | year | `yy` formats the last two digits |
//! | `M` | month | `MMM` and `MMMM` use English names |
//! | `d` | day of month | |
//! | `H` | hour, 0-23 | |
//! | `k` | hour, 1-24 | |
//! | `K` | hour, 0-11 | |
//! | `h` | hour, 1-12 | |
//! | `m` | minute | |
//! | `s` | second | |
//! | `S` | millisecond | |
//! | `a` | `AM`/`PM` marker | |
//! | `E` | day of week | `EEEE` uses the full name |
//!
//! Text in single quotes is literal, and `''` is a single quote. Every other
//! character, including letters not listed above, is literal as well.
//!
//! Parsing is lenient: field values are not range checked, and out of range
//! values carry into the next larger field. Text after the last token is
//! ignored.

use alloc::{string::String, vec::Vec};
use core::fmt;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{iso::IsoDateTime, weekday::Weekday, DateResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar field addressed by a pattern letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    /// `H`: 0-23
    HourOfDay,
    /// `k`: 1-24
    HourOfDayFromOne,
    /// `K`: 0-11
    HourOfHalfDay,
    /// `h`: 1-12
    HourOfHalfDayFromOne,
    Minute,
    Second,
    Millisecond,
    AmPm,
    DayOfWeek,
}

impl Field {
    fn from_letter(letter: char) -> Option<Self> {
        let field = match letter {
            'y' => Self::Year,
            'M' => Self::Month,
            'd' => Self::Day,
            'H' => Self::HourOfDay,
            'k' => Self::HourOfDayFromOne,
            'K' => Self::HourOfHalfDay,
            'h' => Self::HourOfHalfDayFromOne,
            'm' => Self::Minute,
            's' => Self::Second,
            'S' => Self::Millisecond,
            'a' => Self::AmPm,
            'E' => Self::DayOfWeek,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field { field: Field, count: usize },
    Literal(String),
}

impl Token {
    /// Whether the token reads and writes digits.
    fn is_numeric(&self) -> bool {
        match self {
            Self::Field { field, count } => match field {
                Field::AmPm | Field::DayOfWeek => false,
                Field::Month => *count < 3,
                _ => true,
            },
            Self::Literal(_) => false,
        }
    }
}

/// A compiled date format pattern.
///
/// ```rust
/// use nengo_rs::{pattern::FormatPattern, iso::IsoDateTime};
///
/// let pattern = FormatPattern::compile("yyyy/MM/dd HH:mm:ss.SSS");
/// let fields = IsoDateTime::from_local_epoch_milliseconds(1_709_214_330_123);
/// assert_eq!(pattern.format(&fields).to_string(), "2024/02/29 13:45:30.123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern {
    tokens: Vec<Token>,
}

impl FormatPattern {
    /// Compiles a pattern string into tokens.
    ///
    /// Compilation never fails: unknown letters are literal text, and an
    /// unterminated quote runs to the end of the pattern.
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        let mut tokens: Vec<Token> = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                let mut literal = String::new();
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                } else {
                    while let Some(q) = chars.next() {
                        if q != '\'' {
                            literal.push(q);
                        } else if chars.peek() == Some(&'\'') {
                            chars.next();
                            literal.push('\'');
                        } else {
                            break;
                        }
                    }
                }
                push_literal(&mut tokens, &literal);
                continue;
            }

            match Field::from_letter(c) {
                Some(field) => {
                    let mut count = 1;
                    while chars.peek() == Some(&c) {
                        chars.next();
                        count += 1;
                    }
                    tokens.push(Token::Field { field, count });
                }
                None => {
                    let mut buf = [0; 4];
                    push_literal(&mut tokens, c.encode_utf8(&mut buf));
                }
            }
        }

        Self { tokens }
    }

    /// Returns a `Writeable` rendering of `fields` under this pattern.
    #[must_use]
    pub fn format<'a>(&'a self, fields: &IsoDateTime) -> FormattedInstant<'a> {
        FormattedInstant {
            pattern: self,
            fields: *fields,
        }
    }

    /// Leniently reads `text` into raw field values.
    pub fn parse_fields(&self, text: &str) -> Result<ParsedFields, ParseFailure> {
        let mut cursor = Cursor { text, position: 0 };
        let mut parsed = ParsedFields::default();

        for (index, token) in self.tokens.iter().enumerate() {
            let abutting = token.is_numeric()
                && self
                    .tokens
                    .get(index + 1)
                    .is_some_and(Token::is_numeric);
            match token {
                Token::Literal(literal) => cursor.expect_literal(literal)?,
                Token::Field { field, count } => {
                    let width = abutting.then_some(*count);
                    cursor.read_field(*field, *count, width, &mut parsed)?;
                }
            }
        }

        Ok(parsed)
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(previous)) = tokens.last_mut() {
        previous.push_str(text);
    } else if !text.is_empty() {
        tokens.push(Token::Literal(String::from(text)));
    }
}

// ==== Formatting ====

/// `FormattedInstant` renders calendar fields with a `FormatPattern`.
#[derive(Debug)]
pub struct FormattedInstant<'a> {
    pattern: &'a FormatPattern,
    fields: IsoDateTime,
}

impl Writeable for FormattedInstant<'_> {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let date = self.fields.date;
        let time = self.fields.time;
        for token in &self.pattern.tokens {
            let (field, count) = match token {
                Token::Literal(literal) => {
                    sink.write_str(literal)?;
                    continue;
                }
                Token::Field { field, count } => (*field, *count),
            };
            match field {
                Field::Year if count == 2 => {
                    write_padded(u64::from(date.year.rem_euclid(100).unsigned_abs()), 2, sink)?
                }
                Field::Year => {
                    if date.year < 0 {
                        sink.write_char('-')?;
                    }
                    write_padded(u64::from(date.year.unsigned_abs()), count, sink)?
                }
                Field::Month if count >= 4 => {
                    sink.write_str(MONTH_NAMES[usize::from(date.month - 1)])?
                }
                Field::Month if count == 3 => {
                    sink.write_str(MONTH_ABBREVIATIONS[usize::from(date.month - 1)])?
                }
                Field::Month => write_padded(u64::from(date.month), count, sink)?,
                Field::Day => write_padded(u64::from(date.day), count, sink)?,
                Field::HourOfDay => write_padded(u64::from(time.hour), count, sink)?,
                Field::HourOfDayFromOne => {
                    let hour = if time.hour == 0 { 24 } else { time.hour };
                    write_padded(u64::from(hour), count, sink)?
                }
                Field::HourOfHalfDay => write_padded(u64::from(time.hour % 12), count, sink)?,
                Field::HourOfHalfDayFromOne => {
                    let hour = match time.hour % 12 {
                        0 => 12,
                        h => h,
                    };
                    write_padded(u64::from(hour), count, sink)?
                }
                Field::Minute => write_padded(u64::from(time.minute), count, sink)?,
                Field::Second => write_padded(u64::from(time.second), count, sink)?,
                Field::Millisecond => write_padded(u64::from(time.millisecond), count, sink)?,
                Field::AmPm => sink.write_str(if time.hour < 12 { "AM" } else { "PM" })?,
                Field::DayOfWeek => {
                    let weekday = Weekday::from_epoch_days(date.to_epoch_days());
                    if count >= 4 {
                        sink.write_str(weekday.long_name())?
                    } else {
                        sink.write_str(weekday.short_name())?
                    }
                }
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.pattern
            .tokens
            .iter()
            .map(|token| match token {
                Token::Literal(literal) => LengthHint::exact(literal.len()),
                Token::Field {
                    field: Field::AmPm, ..
                } => LengthHint::exact(2),
                Token::Field {
                    field: Field::Month,
                    count,
                } if *count >= 3 => LengthHint::between(3, 9),
                Token::Field {
                    field: Field::DayOfWeek,
                    ..
                } => LengthHint::between(3, 9),
                Token::Field { count, .. } => LengthHint::at_least(*count),
            })
            .fold(LengthHint::exact(0), |total, hint| total + hint)
    }
}

impl_display_with_writeable!(FormattedInstant<'_>);

/// Writes `value` zero padded to at least `width` digits.
pub(crate) fn write_padded<W: fmt::Write + ?Sized>(
    value: u64,
    width: usize,
    sink: &mut W,
) -> fmt::Result {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest != 0 {
        digits += 1;
        rest /= 10;
    }
    for _ in digits..width {
        sink.write_char('0')?;
    }
    value.write_to(sink)
}

// ==== Parsing ====

/// The reason a text did not match a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFailure {
    /// Byte offset in the text where matching stopped.
    pub position: usize,
    /// What the pattern expected at `position`.
    pub expected: &'static str,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} at index {}", self.expected, self.position)
    }
}

/// Raw field values read from a text, before any rollover is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFields {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    /// Hour read from `H` or `k`.
    pub hour_of_day: Option<i64>,
    /// Hour read from `h` or `K`, combined with `pm`.
    pub hour_of_half_day: Option<i64>,
    pub pm: Option<bool>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
    pub millisecond: Option<i64>,
}

impl ParsedFields {
    /// Resolves the fields into local epoch milliseconds.
    ///
    /// Missing fields default to 1970-01-01T00:00:00.000.
    pub fn to_local_epoch_milliseconds(&self) -> DateResult<i64> {
        let hour = match (self.hour_of_day, self.hour_of_half_day) {
            (Some(hour), _) => hour,
            (None, half_day_hour) => {
                let base = if self.pm == Some(true) { 12 } else { 0 };
                half_day_hour.unwrap_or(0) + base
            }
        };
        IsoDateTime::balance(
            self.year.unwrap_or(1970),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.millisecond.unwrap_or(0),
        )
    }
}

struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl Cursor<'_> {
    fn fail(&self, expected: &'static str) -> ParseFailure {
        ParseFailure {
            position: self.position,
            expected,
        }
    }

    fn rest(&self) -> &str {
        &self.text[self.position..]
    }

    fn expect_literal(&mut self, literal: &str) -> Result<(), ParseFailure> {
        if !self.rest().starts_with(literal) {
            return Err(self.fail("literal text"));
        }
        self.position += literal.len();
        Ok(())
    }

    /// Consumes the first of `candidates` that prefixes the rest of the text,
    /// ignoring ASCII case, and returns its index.
    fn match_text(&mut self, candidates: &[&str]) -> Option<usize> {
        let rest = self.rest();
        let (index, len) = candidates.iter().enumerate().find_map(|(i, candidate)| {
            rest.get(..candidate.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(candidate))
                .map(|_| (i, candidate.len()))
        })?;
        self.position += len;
        Some(index)
    }

    /// Reads an unsigned number; exactly `width` digits when given, otherwise
    /// every digit available.
    fn read_digits(&mut self, width: Option<usize>) -> Result<(i64, usize), ParseFailure> {
        let available = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let take = match width {
            Some(width) if available < width => return Err(self.fail("digits")),
            Some(width) => width,
            None if available == 0 => return Err(self.fail("digits")),
            None => available,
        };
        let digits = &self.rest()[..take];
        let value = digits
            .bytes()
            .try_fold(0i64, |acc, b| {
                acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
            })
            .ok_or_else(|| self.fail("a number in range"))?;
        self.position += take;
        Ok((value, take))
    }

    /// Reads a number with an optional leading `-`, returning the signed
    /// value, the digit count, and whether it was negative.
    fn read_signed(&mut self, width: Option<usize>) -> Result<(i64, usize, bool), ParseFailure> {
        let negative = self.rest().starts_with('-');
        if negative {
            self.position += 1;
        }
        let (value, digits) = self.read_digits(width)?;
        Ok((if negative { -value } else { value }, digits, negative))
    }

    fn read_number(&mut self, width: Option<usize>) -> Result<i64, ParseFailure> {
        self.read_signed(width).map(|(value, _, _)| value)
    }

    fn read_field(
        &mut self,
        field: Field,
        count: usize,
        width: Option<usize>,
        parsed: &mut ParsedFields,
    ) -> Result<(), ParseFailure> {
        match field {
            Field::Year => {
                let (value, digits, negative) = self.read_signed(width)?;
                let year = if count == 2 && digits == 2 && !negative {
                    // Two digit years fall in 1950-2049.
                    if value < 50 {
                        2000 + value
                    } else {
                        1900 + value
                    }
                } else {
                    value
                };
                parsed.year = Some(year);
            }
            Field::Month if count >= 3 => {
                let index = self
                    .match_text(&MONTH_NAMES)
                    .or_else(|| self.match_text(&MONTH_ABBREVIATIONS))
                    .ok_or_else(|| self.fail("a month name"))?;
                parsed.month = Some(index as i64 + 1);
            }
            Field::Month => parsed.month = Some(self.read_number(width)?),
            Field::Day => parsed.day = Some(self.read_number(width)?),
            Field::HourOfDay => parsed.hour_of_day = Some(self.read_number(width)?),
            Field::HourOfDayFromOne => {
                let hour = self.read_number(width)?;
                parsed.hour_of_day = Some(if hour == 24 { 0 } else { hour });
            }
            Field::HourOfHalfDay => parsed.hour_of_half_day = Some(self.read_number(width)?),
            Field::HourOfHalfDayFromOne => {
                let hour = self.read_number(width)?;
                parsed.hour_of_half_day = Some(if hour == 12 { 0 } else { hour });
            }
            Field::Minute => parsed.minute = Some(self.read_number(width)?),
            Field::Second => parsed.second = Some(self.read_number(width)?),
            Field::Millisecond => parsed.millisecond = Some(self.read_number(width)?),
            Field::AmPm => {
                let index = self
                    .match_text(&["AM", "PM"])
                    .ok_or_else(|| self.fail("AM or PM"))?;
                parsed.pm = Some(index == 1);
            }
            Field::DayOfWeek => {
                let long = Weekday::ALL.map(Weekday::long_name);
                let short = Weekday::ALL.map(Weekday::short_name);
                self.match_text(&long)
                    .or_else(|| self.match_text(&short))
                    .ok_or_else(|| self.fail("a day of the week"))?;
            }
        }
        Ok(())
    }
}
