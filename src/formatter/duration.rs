use crate::names::{Names, Unit};

/// Round to the nearest integer, halves toward positive infinity
///
/// Negative zero comes back as zero.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.0
}

fn count(value: f64, unit: Unit, names: &Names) -> String {
    format!("{:.0} {}", value, names.unit(unit, value))
}

/// Format an elapsed span of milliseconds
///
/// Under a minute reads in seconds, under an hour in minutes, otherwise in hours and
/// minutes. The hour count is floored while the leftover minutes are rounded, so a
/// span just short of two hours reads "1 hour and 60 minutes".
pub fn format_duration(millis: f64, names: &Names) -> String {
    let seconds = millis / 1000.0;
    if seconds < 60.0 {
        return count(round_half_up(seconds), Unit::Second, names);
    }

    let minutes = seconds / 60.0;
    if minutes < 60.0 {
        return count(round_half_up(minutes), Unit::Minute, names);
    }

    let hours = (minutes / 60.0).floor();
    let remainder = round_half_up(minutes % 60.0);
    format!(
        "{} {} {}",
        count(hours, Unit::Hour, names),
        names.and,
        count(remainder, Unit::Minute, names),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert!(round_half_up(f64::NAN).is_nan());
        assert!(round_half_up(-0.0).is_sign_positive());
    }

    #[test]
    fn test_negative_zero_span() {
        let names = Names::english();
        assert_eq!(format_duration(-0.0, names), "0 seconds");
        assert_eq!(format_duration(-400.0, names), "0 seconds");
    }

    #[test]
    fn test_singular_forms() {
        let names = Names::english();
        assert_eq!(format_duration(1000.0, names), "1 second");
        assert_eq!(format_duration(60_000.0, names), "1 minute");
        assert_eq!(format_duration(3_660_000.0, names), "1 hour and 1 minute");
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            format_duration(f64::NAN, Names::english()),
            "NaN hours and NaN minutes"
        );
    }
}
