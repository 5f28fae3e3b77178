use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use winnow::Parser;

use crate::parser::combinators::{RawTimestamp, parse_raw_timestamp};

/// Error type for timestamp parsing
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampError {
    /// The input does not follow the timestamp grammar
    Syntax { input: String, offset: usize },
    /// A field is outside its calendar range, e.g. month 13
    OutOfRange(String),
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::Syntax { input, offset } => {
                write!(f, "Invalid timestamp '{}' at offset {}", input, offset)
            }
            TimestampError::OutOfRange(input) => {
                write!(f, "Timestamp out of range: '{}'", input)
            }
        }
    }
}

impl std::error::Error for TimestampError {}

/// A timestamp string broken into calendar parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimestampParts {
    pub date: NaiveDate,
    /// Wall-clock time, absent for date-only input
    pub time: Option<NaiveTime>,
    /// Explicit UTC offset, absent for floating input
    pub offset: Option<FixedOffset>,
}

impl TimestampParts {
    /// Resolve to an instant
    ///
    /// An explicit offset wins. Date-only input is midnight UTC. Date and time
    /// without an offset is read in `zone`; an ambiguous local time takes the
    /// earlier instant and a skipped one is pushed forward an hour.
    pub fn resolve<Tz: TimeZone>(&self, zone: &Tz) -> Option<DateTime<Utc>> {
        let naive = NaiveDateTime::new(self.date, self.time.unwrap_or(NaiveTime::MIN));

        match (self.time, self.offset) {
            (_, Some(offset)) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
            (None, None) => Some(Utc.from_utc_datetime(&naive)),
            (Some(_), None) => zone
                .from_local_datetime(&naive)
                .earliest()
                .or_else(|| {
                    let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
                    zone.from_local_datetime(&shifted).earliest()
                })
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

/// Parse a timestamp string
///
/// Leading and trailing whitespace is ignored. Accepts `YYYY[-MM[-DD]]`, optionally
/// followed by `T` (or a space) and `hh:mm[:ss[.fff]]`, optionally followed by `Z` or
/// a `±hh:mm` offset.
///
/// # Examples
/// ```
/// use timestamp_format::parser::parse_timestamp_parts;
///
/// let parts = parse_timestamp_parts("2024-03-04T15:05:00Z").unwrap();
/// assert!(parts.offset.is_some());
/// ```
pub fn parse_timestamp_parts(input_str: &str) -> Result<TimestampParts, TimestampError> {
    let trimmed = input_str.trim();

    let raw = parse_raw_timestamp
        .parse(trimmed)
        .map_err(|e| TimestampError::Syntax {
            input: input_str.to_string(),
            offset: e.offset(),
        })?;

    validate(&raw).ok_or_else(|| TimestampError::OutOfRange(input_str.to_string()))
}

fn validate(raw: &RawTimestamp) -> Option<TimestampParts> {
    let date = NaiveDate::from_ymd_opt(raw.date.year as i32, raw.date.month, raw.date.day)?;

    let time = match raw.time {
        Some(t) => Some(NaiveTime::from_hms_nano_opt(
            t.hour, t.minute, t.second, t.nanos,
        )?),
        None => None,
    };

    let offset = match raw.offset_seconds {
        Some(seconds) => Some(FixedOffset::east_opt(seconds)?),
        None => None,
    };

    Some(TimestampParts { date, time, offset })
}
