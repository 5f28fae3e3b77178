use crate::names::Names;
use crate::types::CalendarFields;

/// "Tuesday, March 4"
pub fn format_weekday_month_day(fields: Option<CalendarFields>, names: &Names) -> String {
    format!(
        "{}, {} {}",
        names.day_name(fields.map(|f| f.weekday0)),
        names.month_name(fields.map(|f| f.month0)),
        names.number(fields.map(|f| f.day)),
    )
}

/// "March 2024"
pub fn format_month_year(fields: Option<CalendarFields>, names: &Names) -> String {
    format!(
        "{} {}",
        names.month_name(fields.map(|f| f.month0)),
        names.number(fields.map(|f| f.year)),
    )
}

/// "March to June 2024", or both ends in full when the years differ
///
/// An undefined year never equals another, so an invalid endpoint always takes
/// the long form.
pub fn format_month_range(
    start: Option<CalendarFields>,
    end: Option<CalendarFields>,
    names: &Names,
) -> String {
    match (start, end) {
        (Some(s), Some(e)) if s.year == e.year => format!(
            "{} {} {} {}",
            names.month_name(Some(s.month0)),
            names.to,
            names.month_name(Some(e.month0)),
            e.year,
        ),
        _ => format!(
            "{} {} {}",
            format_month_year(start, names),
            names.to,
            format_month_year(end, names),
        ),
    }
}
