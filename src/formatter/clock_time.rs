use crate::names::Names;
use crate::types::CalendarFields;

/// Hour of a 12-hour clock face: 0 reads as 12, afternoon hours wrap
pub fn twelve_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

/// Last two characters of `text` after prefixing a zero
///
/// Digits 0-9 gain a leading zero; longer text keeps only its tail, so the
/// undefined-number marker "NaN" reads "aN".
pub fn pad_two(text: &str) -> String {
    let padded = format!("0{}", text);
    let skip = padded.chars().count().saturating_sub(2);
    padded.chars().skip(skip).collect()
}

/// "3:05 PM"
pub fn format_clock_time(fields: Option<CalendarFields>, names: &Names) -> String {
    let hour = fields.map(|f| f.hour);

    format!(
        "{}:{} {}",
        names.number(hour.map(twelve_hour)),
        pad_two(&names.number(fields.map(|f| f.minute))),
        names.meridian(hour),
    )
}
