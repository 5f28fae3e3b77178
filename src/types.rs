//! Type definitions for timestamp formatting
//!
//! This module defines the values that flow through the formatter: the point in time
//! being rendered, the calendar fields read from it, and the options that select
//! relative or absolute phrasing.

use chrono::{DateTime, Datelike, SubsecRound, TimeZone, Timelike, Utc};

use crate::parser::{TimestampError, parse_timestamp_parts};

/// A point in time as handed to the formatter
///
/// A `Timestamp` is either a valid instant or the "not-a-date" value produced by an
/// unparseable input. Formatting an invalid timestamp never fails; every calendar
/// field renders as an undefined marker instead.
///
/// Instants hold whole milliseconds; finer precision is truncated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    /// The "not-a-date" timestamp
    pub const fn invalid() -> Self {
        Self { instant: None }
    }

    /// Create a timestamp from milliseconds since the Unix epoch
    ///
    /// Values outside the representable range give an invalid timestamp.
    pub fn from_millis(millis: i64) -> Self {
        Self {
            instant: DateTime::from_timestamp_millis(millis),
        }
    }

    /// Parse a timestamp string, reading times without an offset in `zone`
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use timestamp_format::Timestamp;
    ///
    /// let ts = Timestamp::parse_in("1970-01-01T00:00:01.5Z", &Utc).unwrap();
    /// assert_eq!(ts.millis(), Some(1500));
    /// ```
    pub fn parse_in<Tz: TimeZone>(input: &str, zone: &Tz) -> Result<Self, TimestampError> {
        let parts = parse_timestamp_parts(input)?;
        let instant = parts
            .resolve(zone)
            .ok_or_else(|| TimestampError::OutOfRange(input.to_string()))?;
        Ok(Self::from(instant))
    }

    /// Returns true if this timestamp denotes an actual instant
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    /// The instant in UTC, if valid
    pub fn as_utc(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// Milliseconds since the Unix epoch, if valid
    pub fn millis(&self) -> Option<i64> {
        self.instant.map(|dt| dt.timestamp_millis())
    }

    /// The instant viewed in the given time zone, if valid
    pub fn in_zone<Tz: TimeZone>(&self, zone: &Tz) -> Option<DateTime<Tz>> {
        self.instant.map(|dt| dt.with_timezone(zone))
    }

    /// Calendar fields of this timestamp in the given time zone
    pub fn fields_in<Tz: TimeZone>(&self, zone: &Tz) -> Option<CalendarFields> {
        self.in_zone(zone).map(|dt| CalendarFields::of(&dt))
    }

    /// `self - earlier` in milliseconds; `None` if either side is invalid
    pub fn millis_since(&self, earlier: &Timestamp) -> Option<i64> {
        match (self.instant, earlier.instant) {
            (Some(later), Some(earlier)) => Some((later - earlier).num_milliseconds()),
            _ => None,
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self {
            instant: Some(dt.with_timezone(&Utc).trunc_subsecs(3)),
        }
    }
}

/// Calendar and clock fields of an instant in a particular zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    /// Full year, e.g. 2024
    pub year: i32,
    /// Month, 0-based (January is 0)
    pub month0: u32,
    /// Day of the month, 1-31
    pub day: u32,
    /// Day of the week, 0 = Sunday .. 6 = Saturday
    pub weekday0: u32,
    /// Hour of the day, 0-23
    pub hour: u32,
    /// Minute of the hour, 0-59
    pub minute: u32,
}

impl CalendarFields {
    /// Read the fields of a zoned datetime
    pub fn of<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month0: dt.month0(),
            day: dt.day(),
            weekday0: dt.weekday().num_days_from_sunday(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }

    /// Year, month and day all match
    pub fn same_date(&self, other: &CalendarFields) -> bool {
        self.year == other.year && self.month0 == other.month0 && self.day == other.day
    }
}

/// Options selecting the phrasing of a formatted date-time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Use relative phrasing: "today", "yesterday", "N minutes ago"
    pub use_english: bool,
    /// Prefix the date portion with "on"
    pub use_on: bool,
}

impl FormatOptions {
    /// Absolute phrasing without the "on" prefix
    pub const fn new() -> Self {
        Self {
            use_english: false,
            use_on: false,
        }
    }

    /// Builder method to enable relative phrasing
    pub const fn english(mut self) -> Self {
        self.use_english = true;
        self
    }

    /// Builder method to enable the "on" prefix
    pub const fn with_on(mut self) -> Self {
        self.use_on = true;
        self
    }
}
