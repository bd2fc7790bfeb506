//! This module implements `DateError`.

use alloc::borrow::Cow;
use core::fmt;

/// `DateError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input text could not be interpreted under the supplied pattern.
    #[default]
    MalformedInput,
    /// Construction from already validated fields failed.
    ///
    /// This is an implementation error, not a user input error.
    InternalInvariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => "MalformedInputError",
            Self::InternalInvariant => "InternalInvariantError",
        }
        .fmt(f)
    }
}

/// The error type for `nengo_rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct DateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
    pattern: Option<Cow<'static, str>>,
}

impl DateError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
            pattern: None,
        }
    }

    /// Create a malformed input error.
    #[inline]
    #[must_use]
    pub fn malformed() -> Self {
        Self::new(ErrorKind::MalformedInput)
    }

    /// Create an internal invariant error.
    #[inline]
    #[must_use]
    pub fn assert() -> Self {
        Self::new(ErrorKind::InternalInvariant)
    }

    /// Create an error with the provided message.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Attach the pattern that the input was parsed against.
    #[inline]
    #[must_use]
    pub fn with_pattern<S>(mut self, pattern: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.pattern = Some(pattern.into());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the pattern a malformed input failed to match, if any.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(pattern) = &self.pattern {
            write!(f, " [{pattern}]")?;
        }

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for DateError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_pattern() {
        let err = DateError::malformed()
            .with_pattern("yyyy/MM/dd")
            .with_message("expected digits at offset 5");
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.pattern(), Some("yyyy/MM/dd"));
        assert_eq!(
            err.to_string(),
            "MalformedInputError [yyyy/MM/dd]: expected digits at offset 5"
        );
    }

    #[test]
    fn display_without_message() {
        let err = DateError::assert();
        assert_eq!(err.to_string(), "InternalInvariantError");
        assert_eq!(err.pattern(), None);
    }
}
