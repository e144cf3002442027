/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A point in time with nanosecond precision, independent of any time zone.

use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub mod epoch_seconds;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// Instant in time, measured as seconds and subsecond nanoseconds from the Unix epoch.
///
/// `Instant`s are ordered chronologically, which also makes them usable as map keys.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_epoch_millis(epoch_millis: i64) -> Self {
        Instant {
            seconds: epoch_millis.div_euclid(1000),
            subsecond_nanos: epoch_millis.rem_euclid(1000) as u32 * NANOS_PER_MILLI,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    /// Creates an `Instant` from seconds and subsecond nanoseconds.
    ///
    /// Nanoseconds beyond one second are carried into `seconds`, saturating at `i64::MAX`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add((subsecond_nanos / NANOS_PER_SECOND) as i64),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant {
                    seconds,
                    subsecond_nanos: nanos,
                }
            }
        }
    }

    /// Parses an `Instant` out of `s` using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::DateTime => DateTime::parse_from_rfc3339(s)
                .map(|parsed| {
                    Instant::from_secs_and_nanos(
                        parsed.timestamp(),
                        parsed.timestamp_subsec_nanos(),
                    )
                })
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidDateTime, s)),
            Format::EpochSeconds => s
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Instant::from_f64)
                .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidEpochSeconds, s)),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    /// Converts this `Instant` into a [`SystemTime`].
    pub fn to_system_time(self) -> SystemTime {
        if self.seconds >= 0 {
            UNIX_EPOCH + Duration::new(self.seconds as u64, self.subsecond_nanos)
        } else {
            UNIX_EPOCH - Duration::from_secs(self.seconds.unsigned_abs())
                + Duration::from_nanos(self.subsecond_nanos as u64)
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    /// Milliseconds since the epoch, rounding subsecond precision to the nearest millisecond.
    ///
    /// Instants beyond what `i64` milliseconds can hold saturate at `i64::MIN` or `i64::MAX`.
    pub fn epoch_millis(&self) -> i64 {
        let millis = (self.subsecond_nanos + NANOS_PER_MILLI / 2) / NANOS_PER_MILLI;
        self.seconds
            .saturating_mul(1000)
            .saturating_add(millis as i64)
    }

    /// Formats the `Instant` as a string in the given `format`.
    ///
    /// Returns an error if the instant is outside the range `DateTime` can represent.
    pub fn fmt(&self, format: Format) -> Result<String, FormatError> {
        match format {
            Format::DateTime => {
                let rfc3339 = self
                    .to_chrono()
                    .ok_or(FormatError { instant: *self })?
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true);
                // AutoSi keeps trailing zeros in the fraction
                let mut rfc3339 = rfc3339.trim_end_matches('Z').to_owned();
                if rfc3339.contains('.') {
                    rfc3339 = rfc3339
                        .trim_end_matches('0')
                        .trim_end_matches('.')
                        .to_owned();
                }
                rfc3339.push('Z');
                Ok(rfc3339)
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    Ok(format!("{}", self.seconds))
                } else if self.seconds < 0 {
                    // (-2, 0.5s) is -1.5
                    let fraction = format!("{:0>9}", NANOS_PER_SECOND - self.subsecond_nanos);
                    Ok(format!(
                        "-{}.{}",
                        (self.seconds + 1).unsigned_abs(),
                        fraction.trim_end_matches('0')
                    ))
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    Ok(format!("{}.{}", self.seconds, fraction.trim_end_matches('0')))
                }
            }
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Textual formats an [`Instant`] can be read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Decimal seconds since the Unix epoch, e.g. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseErrorKind {
    InvalidDateTime,
    InvalidEpochSeconds,
}

/// Error returned when a string cannot be parsed into an [`Instant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    input: String,
}

impl ParseError {
    fn new(kind: ParseErrorKind, input: &str) -> Self {
        ParseError {
            kind,
            input: input.to_owned(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::InvalidDateTime => {
                write!(f, "`{}` is not a valid RFC 3339 date-time", self.input)
            }
            ParseErrorKind::InvalidEpochSeconds => {
                write!(f, "`{}` is not a valid number of epoch seconds", self.input)
            }
        }
    }
}

impl StdError for ParseError {}

/// Error returned when an [`Instant`] cannot be represented in the requested format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    instant: Instant,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is outside the range of representable date-times",
            self.instant
        )
    }
}

impl StdError for FormatError {}
