use chrono::{FixedOffset, TimeDelta, TimeZone};
use timestamp_format::{DateTimeFormatter, FixedClock, FormatOptions, Names, Timestamp};

// Monday 2024-01-01 18:00:00 in a UTC-5 zone
const NOW: &str = "2024-01-01T18:00:00-05:00";

fn zone() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

fn fmt() -> DateTimeFormatter<FixedClock<FixedOffset>> {
    let now = zone().with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
    DateTimeFormatter::with_clock(FixedClock::new(now))
}

fn minutes_before_now(minutes: i64) -> Timestamp {
    let now = Timestamp::parse_in(NOW, &zone()).unwrap();
    Timestamp::from_millis(now.millis().unwrap() - minutes * 60_000)
}

// --- Relative minutes ---
#[test]
fn test_minutes_ago_for_the_last_hour() {
    let f = fmt();
    for minutes in [0, 1, 2, 30, 59] {
        let ts = minutes_before_now(minutes);
        let expected = format!("{} minutes ago", minutes);
        assert_eq!(f.format_time(&ts, true), expected);
        assert_eq!(
            f.format_date_time(&ts, FormatOptions::new().english()),
            expected
        );
        assert_eq!(
            f.format_date_time(&ts, FormatOptions::new().english().with_on()),
            expected
        );
    }
}

#[test]
fn test_minutes_are_floored() {
    let f = fmt();
    let now = Timestamp::parse_in(NOW, &zone()).unwrap();
    let almost_two = Timestamp::from_millis(now.millis().unwrap() - 119_999);
    assert_eq!(f.format_time(&almost_two, true), "1 minutes ago");
    assert_eq!(f.minutes_since(&almost_two), Some(1));
}

#[test]
fn test_an_hour_ago_is_absolute() {
    let f = fmt();
    let ts = minutes_before_now(60);
    assert_eq!(f.format_time(&ts, true), "5:00 PM");
    assert_eq!(
        f.format_date_time(&ts, FormatOptions::new().english().with_on()),
        "on today at 5:00 PM"
    );
}

// --- Calendar dates ---
#[test]
fn test_yesterday_and_today() {
    let f = fmt();
    let yesterday_morning = f.parse_timestamp("2023-12-31T08:30:00");
    let early_today = f.parse_timestamp("2024-01-01T00:05:00");
    assert_eq!(f.format_date(&yesterday_morning, true), "yesterday");
    assert_eq!(f.format_date(&early_today, true), "today");
}

#[test]
fn test_absolute_dates_never_relative() {
    let f = fmt();
    for raw in ["2023-12-31T08:30:00", "2024-01-01T00:05:00", "2024-01-01T17:59:00"] {
        let ts = f.parse_timestamp(raw);
        let date = f.format_date(&ts, false);
        assert_ne!(date, "today");
        assert_ne!(date, "yesterday");
    }
    assert_eq!(
        f.format_date(&f.parse_timestamp("2023-12-31T08:30:00"), false),
        "Sunday, December 31"
    );
}

#[test]
fn test_year_boundary_date_time() {
    let f = fmt();
    let ts = f.parse_timestamp("2023-12-29T00:07:00");
    assert_eq!(
        f.format_date_time(&ts, FormatOptions::new().english().with_on()),
        "on Friday, December 29 at 12:07 AM"
    );
}

// --- 12-hour clock ---
#[test]
fn test_twelve_hour_boundaries() {
    let f = fmt();
    let cases = [
        ("2023-06-01T00:15:00", "12:15 AM"),
        ("2023-06-01T12:15:00", "12:15 PM"),
        ("2023-06-01T13:15:00", "1:15 PM"),
        ("2023-06-01T23:15:00", "11:15 PM"),
        ("2023-06-01T15:05:00", "3:05 PM"),
    ];
    for (raw, expected) in cases {
        assert_eq!(f.format_time(&f.parse_timestamp(raw), false), expected);
    }
}

// --- Months ---
#[test]
fn test_month_ranges() {
    let f = fmt();
    let march = f.parse_timestamp("2024-03-10T12:00:00");
    let june = f.parse_timestamp("2024-06-10T12:00:00");
    let november = f.parse_timestamp("2023-11-10T12:00:00");
    let february = f.parse_timestamp("2024-02-10T12:00:00");

    assert_eq!(f.format_month_range(&march, &june), "March to June 2024");
    assert_eq!(
        f.format_month_range(&november, &february),
        "November 2023 to February 2024"
    );
    assert_eq!(f.format_month_range(&march, &march), "March to March 2024");
}

// --- Custom vocabulary ---
#[test]
fn test_names_from_toml() {
    let names = Names::from_toml_str(
        r#"
        [phrases]
        on = "le"
        at = "à"
        "#,
    )
    .unwrap();
    let f = fmt().with_names(names);
    let ts = f.parse_timestamp("2023-12-29T09:00:00");
    assert_eq!(
        f.format_date_time(&ts, FormatOptions::new().with_on()),
        "le Friday, December 29 à 9:00 AM"
    );
}

#[test]
fn test_clock_advance_changes_relative_output() {
    let now = zone().with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
    let mut clock = FixedClock::new(now);
    let ts = Timestamp::from(now);

    let before = DateTimeFormatter::with_clock(clock.clone()).format_time(&ts, true);
    clock.advance(TimeDelta::minutes(45));
    let after = DateTimeFormatter::with_clock(clock).format_time(&ts, true);

    assert_eq!(before, "0 minutes ago");
    assert_eq!(after, "45 minutes ago");
}
