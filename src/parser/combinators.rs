use winnow::combinator::{alt, opt, preceded};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;

/// Date fields as written, before range checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Clock fields as written, before range checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanos: u32,
}

/// Everything a timestamp string can carry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTimestamp {
    pub date: RawDate,
    pub time: Option<RawTime>,
    /// Offset from UTC in seconds
    pub offset_seconds: Option<i32>,
}

/// Parse `YYYY[-MM[-DD]]`; missing parts default to the first
pub fn parse_date(input: &mut &str) -> ModalResult<RawDate> {
    (
        parse_four_digits,
        opt((
            preceded('-', parse_two_digits),
            opt(preceded('-', parse_two_digits)),
        )),
    )
        .map(|(year, rest)| {
            let (month, day) = match rest {
                Some((month, day)) => (month, day.unwrap_or(1)),
                None => (1, 1),
            };
            RawDate { year, month, day }
        })
        .parse_next(input)
}

/// Parse `hh:mm[:ss[.fraction]]`
pub fn parse_time(input: &mut &str) -> ModalResult<RawTime> {
    (
        parse_two_digits,
        preceded(':', parse_two_digits),
        opt((
            preceded(':', parse_two_digits),
            opt(preceded(parse_fraction_separator, parse_fraction_nanos)),
        )),
    )
        .map(|(hour, minute, rest)| {
            let (second, nanos) = match rest {
                Some((second, nanos)) => (second, nanos.unwrap_or(0)),
                None => (0, 0),
            };
            RawTime {
                hour,
                minute,
                second,
                nanos,
            }
        })
        .parse_next(input)
}

/// Parse `Z` or `±hh[:]mm` into seconds east of UTC
pub fn parse_offset(input: &mut &str) -> ModalResult<i32> {
    let numeric = (
        parse_offset_sign,
        parse_two_digits,
        preceded(opt(':'), parse_two_digits),
    )
        .map(|(sign, hours, minutes)| sign * (hours as i32 * 3600 + minutes as i32 * 60));

    alt((parse_utc_designator, numeric)).parse_next(input)
}

/// Parse a whole timestamp: date, optional time, optional offset
pub fn parse_raw_timestamp(input: &mut &str) -> ModalResult<RawTimestamp> {
    (
        parse_date,
        opt(preceded(parse_date_time_separator, parse_time)),
        opt(parse_offset),
    )
        .map(|(date, time, offset_seconds)| RawTimestamp {
            date,
            time,
            offset_seconds,
        })
        .parse_next(input)
}
