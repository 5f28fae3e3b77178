use chrono::{DateTime, TimeDelta, TimeZone};

use crate::names::Names;
use crate::types::CalendarFields;

/// Anything under this many minutes old reads as "N minutes ago"
pub const RELATIVE_MINUTES_LIMIT: i64 = 60;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Whole minutes elapsed, floored toward negative infinity
pub fn elapsed_minutes(elapsed_millis: i64) -> i64 {
    elapsed_millis.div_euclid(MILLIS_PER_MINUTE)
}

/// "N minutes ago", never singular
pub fn format_minutes_ago(minutes: i64, names: &Names) -> String {
    format!("{} {}", minutes, names.minutes_ago)
}

/// "yesterday" or "today" when the date matches, checked in that order
///
/// Yesterday is the calendar date of the instant exactly 24 hours before `now`.
pub fn relative_day<'a, Tz: TimeZone>(
    date: &CalendarFields,
    now: &DateTime<Tz>,
    names: &'a Names,
) -> Option<&'a str> {
    let day_before = now
        .clone()
        .checked_sub_signed(TimeDelta::hours(24))
        .map(|dt| CalendarFields::of(&dt));

    if day_before.is_some_and(|y| date.same_date(&y)) {
        Some(&names.yesterday)
    } else if date.same_date(&CalendarFields::of(now)) {
        Some(&names.today)
    } else {
        None
    }
}
