//! Vocabulary for formatted timestamps
//!
//! This module loads the words the formatter emits (weekday and month names,
//! meridian markers, phrase words, unit names) from an embedded TOML table. Callers
//! may layer their own partial table over the English defaults.

use std::fmt;
use std::sync::OnceLock;

use log::warn;

/// Error type for vocabulary tables
#[derive(Debug, Clone, PartialEq)]
pub enum NamesError {
    /// The TOML text could not be parsed
    Parse(String),
    /// A key holds a value of the wrong shape
    Invalid { key: String, reason: String },
    /// An array has the wrong number of entries
    Length {
        key: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for NamesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamesError::Parse(msg) => write!(f, "Error parsing names table: {}", msg),
            NamesError::Invalid { key, reason } => write!(f, "Invalid value for '{}': {}", key, reason),
            NamesError::Length {
                key,
                expected,
                found,
            } => write!(
                f,
                "Expected {} entries for '{}', found {}",
                expected, key, found
            ),
        }
    }
}

impl std::error::Error for NamesError {}

type Result<T> = std::result::Result<T, NamesError>;

/// Time units used by duration phrasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Second,
    Minute,
    Hour,
}

/// The words used when rendering timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct Names {
    /// Full weekday names, Sunday first
    pub day_names: [String; 7],
    /// Full month names, January first
    pub month_names: [String; 12],
    /// Meridian markers: [AM, PM]
    pub ampm_markers: [String; 2],
    pub yesterday: String,
    pub today: String,
    /// Suffix of the relative-minutes phrase
    pub minutes_ago: String,
    pub on: String,
    pub at: String,
    pub to: String,
    pub and: String,
    /// [singular, plural] per unit
    pub seconds: [String; 2],
    pub minutes: [String; 2],
    pub hours: [String; 2],
    /// Stands in for a name field of an invalid timestamp
    pub undefined_name: String,
    /// Stands in for a numeric field of an invalid timestamp
    pub undefined_number: String,
}

static ENGLISH: OnceLock<Names> = OnceLock::new();

impl Names {
    /// The shared English vocabulary
    pub fn english() -> &'static Names {
        ENGLISH.get_or_init(|| {
            let embedded = include_str!("names/english.toml");
            Names::blank().overlay(embedded).unwrap_or_else(|e| {
                warn!("Failed to load embedded names table: {}", e);
                Names::blank()
            })
        })
    }

    /// Parse a (possibly partial) TOML table over the English vocabulary
    pub fn from_toml_str(toml_str: &str) -> Result<Names> {
        Names::english().clone().overlay(toml_str)
    }

    /// Every word empty; the embedded table fills it in
    fn blank() -> Names {
        Names {
            day_names: Default::default(),
            month_names: Default::default(),
            ampm_markers: Default::default(),
            yesterday: String::new(),
            today: String::new(),
            minutes_ago: String::new(),
            on: String::new(),
            at: String::new(),
            to: String::new(),
            and: String::new(),
            seconds: Default::default(),
            minutes: Default::default(),
            hours: Default::default(),
            undefined_name: String::new(),
            undefined_number: String::new(),
        }
    }

    /// Apply the keys present in `toml_str` over `self`
    fn overlay(mut self, toml_str: &str) -> Result<Names> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| NamesError::Parse(e.to_string()))?;

        let table = parsed
            .as_table()
            .ok_or_else(|| NamesError::Parse("Root is not a table".to_string()))?;

        if let Some(days) = string_array::<7>(table, "day_names")? {
            self.day_names = days;
        }
        if let Some(months) = string_array::<12>(table, "month_names")? {
            self.month_names = months;
        }
        if let Some(markers) = string_array::<2>(table, "ampm")? {
            self.ampm_markers = markers;
        }

        if let Some(phrases) = sub_table(table, "phrases")? {
            for (key, slot) in [
                ("yesterday", &mut self.yesterday),
                ("today", &mut self.today),
                ("minutes_ago", &mut self.minutes_ago),
                ("on", &mut self.on),
                ("at", &mut self.at),
                ("to", &mut self.to),
                ("and", &mut self.and),
            ] {
                if let Some(word) = string_value(phrases, key)? {
                    *slot = word;
                }
            }
        }

        if let Some(units) = sub_table(table, "units")? {
            for (key, slot) in [
                ("second", &mut self.seconds),
                ("minute", &mut self.minutes),
                ("hour", &mut self.hours),
            ] {
                if let Some(forms) = string_array::<2>(units, key)? {
                    *slot = forms;
                }
            }
        }

        if let Some(invalid) = sub_table(table, "invalid")? {
            if let Some(marker) = string_value(invalid, "name")? {
                self.undefined_name = marker;
            }
            if let Some(marker) = string_value(invalid, "number")? {
                self.undefined_number = marker;
            }
        }

        Ok(self)
    }

    /// Builder method to replace the weekday names
    pub fn with_day_names(mut self, names: [&str; 7]) -> Self {
        self.day_names = names.map(str::to_string);
        self
    }

    /// Builder method to replace the month names
    pub fn with_month_names(mut self, names: [&str; 12]) -> Self {
        self.month_names = names.map(str::to_string);
        self
    }

    /// Builder method to replace the AM/PM markers
    pub fn with_ampm_markers(mut self, markers: [&str; 2]) -> Self {
        self.ampm_markers = markers.map(str::to_string);
        self
    }

    /// Weekday name for a 0-based weekday (0 = Sunday)
    pub fn day_name(&self, weekday0: Option<u32>) -> &str {
        weekday0
            .and_then(|i| self.day_names.get(i as usize))
            .unwrap_or(&self.undefined_name)
    }

    /// Month name for a 0-based month (0 = January)
    pub fn month_name(&self, month0: Option<u32>) -> &str {
        month0
            .and_then(|i| self.month_names.get(i as usize))
            .unwrap_or(&self.undefined_name)
    }

    /// Meridian marker for an hour of the day
    ///
    /// An unknown hour compares as "not before noon", giving PM.
    pub fn meridian(&self, hour: Option<u32>) -> &str {
        match hour {
            Some(h) if h < 12 => &self.ampm_markers[0],
            _ => &self.ampm_markers[1],
        }
    }

    /// Unit name, singular only when `count` is exactly 1
    pub fn unit(&self, unit: Unit, count: f64) -> &str {
        let forms = match unit {
            Unit::Second => &self.seconds,
            Unit::Minute => &self.minutes,
            Unit::Hour => &self.hours,
        };
        if count == 1.0 { &forms[0] } else { &forms[1] }
    }

    /// Render a numeric field, or the undefined-number marker
    pub fn number<T: fmt::Display>(&self, value: Option<T>) -> String {
        match value {
            Some(v) => v.to_string(),
            None => self.undefined_number.clone(),
        }
    }
}

impl Default for Names {
    fn default() -> Self {
        Names::english().clone()
    }
}

fn sub_table<'a>(table: &'a toml::Table, key: &str) -> Result<Option<&'a toml::Table>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value.as_table().map(Some).ok_or_else(|| NamesError::Invalid {
            key: key.to_string(),
            reason: "not a table".to_string(),
        }),
    }
}

fn string_value(table: &toml::Table, key: &str) -> Result<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| NamesError::Invalid {
                key: key.to_string(),
                reason: "not a string".to_string(),
            }),
    }
}

fn string_array<const N: usize>(table: &toml::Table, key: &str) -> Result<Option<[String; N]>> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };

    let items = value.as_array().ok_or_else(|| NamesError::Invalid {
        key: key.to_string(),
        reason: "not an array".to_string(),
    })?;

    if items.len() != N {
        return Err(NamesError::Length {
            key: key.to_string(),
            expected: N,
            found: items.len(),
        });
    }

    let strings = items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| NamesError::Invalid {
                key: key.to_string(),
                reason: "entries must be strings".to_string(),
            })
        })
        .collect::<Result<Vec<String>>>()?;

    // Length was checked above
    strings.try_into().map(Some).map_err(|_| NamesError::Length {
        key: key.to_string(),
        expected: N,
        found: items.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_is_complete() {
        let names = Names::english();
        let words = names
            .day_names
            .iter()
            .chain(&names.month_names)
            .chain(&names.ampm_markers)
            .chain(&names.seconds)
            .chain(&names.minutes)
            .chain(&names.hours)
            .chain([
                &names.yesterday,
                &names.today,
                &names.minutes_ago,
                &names.on,
                &names.at,
                &names.to,
                &names.and,
                &names.undefined_name,
                &names.undefined_number,
            ]);
        for word in words {
            assert!(!word.is_empty());
        }

        assert_eq!(names.day_names[0], "Sunday");
        assert_eq!(names.month_names[11], "December");
        assert_eq!(names.undefined_name, "undefined");
        assert_eq!(names.undefined_number, "NaN");
    }

    #[test]
    fn test_overlay_fills_blank_table() {
        let names = Names::blank().overlay("ampm = [\"AM\", \"PM\"]").unwrap();
        assert_eq!(names.ampm_markers, ["AM".to_string(), "PM".to_string()]);
        assert_eq!(names.today, "");
    }

    #[test]
    fn test_partial_override() {
        let names = Names::from_toml_str(
            r#"
            ampm = ["am", "pm"]
            [phrases]
            today = "this day"
            "#,
        )
        .unwrap();
        assert_eq!(names.ampm_markers, ["am".to_string(), "pm".to_string()]);
        assert_eq!(names.today, "this day");
        // Untouched keys keep the English defaults
        assert_eq!(names.yesterday, "yesterday");
        assert_eq!(names.month_names[2], "March");
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = Names::from_toml_str(r#"day_names = ["Sun", "Mon"]"#).unwrap_err();
        assert_eq!(
            err,
            NamesError::Length {
                key: "day_names".to_string(),
                expected: 7,
                found: 2,
            }
        );
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            Names::from_toml_str("day_names = ["),
            Err(NamesError::Parse(_))
        ));
        assert!(matches!(
            Names::from_toml_str("phrases = 3"),
            Err(NamesError::Invalid { .. })
        ));
    }

    #[test]
    fn test_lookups_with_undefined_fields() {
        let names = Names::english();
        assert_eq!(names.day_name(Some(2)), "Tuesday");
        assert_eq!(names.day_name(None), "undefined");
        assert_eq!(names.month_name(Some(11)), "December");
        assert_eq!(names.month_name(Some(12)), "undefined");
        assert_eq!(names.meridian(Some(0)), "AM");
        assert_eq!(names.meridian(Some(12)), "PM");
        assert_eq!(names.meridian(None), "PM");
        assert_eq!(names.number(Some(4)), "4");
        assert_eq!(names.number::<u32>(None), "NaN");
    }

    #[test]
    fn test_unit_pluralization() {
        let names = Names::english();
        assert_eq!(names.unit(Unit::Second, 1.0), "second");
        assert_eq!(names.unit(Unit::Second, 0.0), "seconds");
        assert_eq!(names.unit(Unit::Hour, 2.0), "hours");
        assert_eq!(names.unit(Unit::Minute, f64::NAN), "minutes");
    }
}
