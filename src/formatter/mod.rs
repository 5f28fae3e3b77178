//! Timestamp formatting module
//!
//! This module renders timestamps as display strings: relative phrasing, weekday and
//! month names, 12-hour clock times, month ranges and elapsed durations.
//! The main entry point is [`DateTimeFormatter`].

mod calendar;
mod clock_time;
mod duration;
mod relative;

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::names::Names;
use crate::types::{CalendarFields, FormatOptions, Timestamp};

pub use calendar::{format_month_range, format_month_year, format_weekday_month_day};
pub use clock_time::{format_clock_time, pad_two, twelve_hour};
pub use duration::format_duration;
pub use relative::{RELATIVE_MINUTES_LIMIT, elapsed_minutes, format_minutes_ago};

/// Formats timestamps against a clock
///
/// Every method that depends on "now" asks the clock at call time; nothing is
/// cached between calls.
///
/// # Examples
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use timestamp_format::{DateTimeFormatter, FixedClock, FormatOptions};
///
/// let zone = FixedOffset::east_opt(0).unwrap();
/// let now = zone.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
/// let formatter = DateTimeFormatter::with_clock(FixedClock::new(now));
///
/// let ts = formatter.parse_timestamp("2024-03-04T15:05:00Z");
/// let options = FormatOptions::new().english().with_on();
/// assert_eq!(formatter.format_date_time(&ts, options), "on yesterday at 3:05 PM");
/// ```
#[derive(Debug, Clone)]
pub struct DateTimeFormatter<C: Clock = SystemClock> {
    clock: C,
    names: Names,
}

impl DateTimeFormatter<SystemClock> {
    /// A formatter over the local wall clock with English names
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DateTimeFormatter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DateTimeFormatter<C> {
    /// A formatter over the given clock with English names
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            names: Names::english().clone(),
        }
    }

    /// Builder method to replace the vocabulary
    pub fn with_names(mut self, names: Names) -> Self {
        self.names = names;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    /// The clock's current instant
    pub fn now(&self) -> Timestamp {
        Timestamp::from(self.clock.now())
    }

    /// Parse a timestamp string, reading floating times in the clock's zone
    ///
    /// Unparseable input gives an invalid timestamp rather than an error.
    pub fn parse_timestamp(&self, input: &str) -> Timestamp {
        match Timestamp::parse_in(input, &self.clock.zone()) {
            Ok(ts) => ts,
            Err(e) => {
                debug!("{}", e);
                Timestamp::invalid()
            }
        }
    }

    fn fields(&self, ts: &Timestamp) -> Option<CalendarFields> {
        ts.fields_in(&self.clock.zone())
    }

    /// Floored minutes from `ts` until now, if `ts` is valid
    pub fn minutes_since(&self, ts: &Timestamp) -> Option<i64> {
        self.now().millis_since(ts).map(elapsed_minutes)
    }

    /// The relative-minutes phrase, if `ts` is recent enough to get one
    fn recent_phrase(&self, ts: &Timestamp) -> Option<String> {
        self.minutes_since(ts)
            .filter(|minutes| *minutes < RELATIVE_MINUTES_LIMIT)
            .map(|minutes| format_minutes_ago(minutes, &self.names))
    }

    /// "Tuesday, March 4", or "yesterday"/"today" with relative phrasing
    pub fn format_date(&self, ts: &Timestamp, use_english: bool) -> String {
        let fields = self.fields(ts);

        if use_english {
            if let Some(date) = &fields {
                if let Some(word) = relative::relative_day(date, &self.clock.now(), &self.names) {
                    return word.to_string();
                }
            }
        }

        format_weekday_month_day(fields, &self.names)
    }

    /// "3:05 PM", or "N minutes ago" with relative phrasing when under an hour old
    pub fn format_time(&self, ts: &Timestamp, use_english: bool) -> String {
        if use_english {
            if let Some(phrase) = self.recent_phrase(ts) {
                return phrase;
            }
        }

        format_clock_time(self.fields(ts), &self.names)
    }

    /// "[on ]<date> at <time>", or "N minutes ago" with relative phrasing
    ///
    /// The time portion is always the absolute clock time.
    pub fn format_date_time(&self, ts: &Timestamp, options: FormatOptions) -> String {
        if options.use_english {
            if let Some(phrase) = self.recent_phrase(ts) {
                return phrase;
            }
        }

        let date = self.format_date(ts, options.use_english);
        let time = self.format_time(ts, false);
        if options.use_on {
            format!("{} {} {} {}", self.names.on, date, self.names.at, time)
        } else {
            format!("{} {} {}", date, self.names.at, time)
        }
    }

    /// "March 2024"
    pub fn format_month(&self, ts: &Timestamp) -> String {
        format_month_year(self.fields(ts), &self.names)
    }

    /// "March to June 2024" or "November 2023 to February 2024"
    pub fn format_month_range(&self, start: &Timestamp, end: &Timestamp) -> String {
        format_month_range(self.fields(start), self.fields(end), &self.names)
    }

    /// "1 hour and 1 minute"
    pub fn format_duration(&self, millis: f64) -> String {
        format_duration(millis, &self.names)
    }

    /// Duration from `ts` until now; an invalid `ts` gives a NaN span
    pub fn format_elapsed(&self, ts: &Timestamp) -> String {
        let millis = self
            .now()
            .millis_since(ts)
            .map_or(f64::NAN, |ms| ms as f64);
        self.format_duration(millis)
    }
}
