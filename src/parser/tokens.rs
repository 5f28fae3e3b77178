use winnow::ascii::digit1;
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// Fixed-width numeric fields
pub fn parse_four_digits(input: &mut &str) -> ModalResult<u32> {
    take_while(4, is_digit)
        .try_map(str::parse::<u32>)
        .parse_next(input)
}

pub fn parse_two_digits(input: &mut &str) -> ModalResult<u32> {
    take_while(2, is_digit)
        .try_map(str::parse::<u32>)
        .parse_next(input)
}

/// Fractional seconds, scaled to nanoseconds
///
/// Digits past the ninth are consumed and dropped.
pub fn parse_fraction_nanos(input: &mut &str) -> ModalResult<u32> {
    digit1
        .map(|digits: &str| {
            let mut places = digits.bytes().map(|b| u32::from(b - b'0'));
            (0..9).fold(0u32, |nanos, _| nanos * 10 + places.next().unwrap_or(0))
        })
        .parse_next(input)
}

// Separators
pub fn parse_date_time_separator(input: &mut &str) -> ModalResult<char> {
    one_of(['T', 't', ' ']).parse_next(input)
}

pub fn parse_fraction_separator(input: &mut &str) -> ModalResult<char> {
    one_of(['.', ',']).parse_next(input)
}

pub fn parse_utc_designator(input: &mut &str) -> ModalResult<i32> {
    one_of(['Z', 'z']).value(0).parse_next(input)
}

/// Sign of a numeric UTC offset as a multiplier
pub fn parse_offset_sign(input: &mut &str) -> ModalResult<i32> {
    one_of(['+', '-'])
        .map(|c| if c == '-' { -1 } else { 1 })
        .parse_next(input)
}
