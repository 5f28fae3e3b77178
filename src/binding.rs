//! Rendering timestamps into page elements
//!
//! A page implements [`TimeElement`] for its own element type and calls
//! [`render_time_elements`] once the elements exist.

use log::debug;

use crate::clock::Clock;
use crate::formatter::DateTimeFormatter;
use crate::types::{FormatOptions, Timestamp};

/// An element that displays a timestamp
pub trait TimeElement {
    /// The raw timestamp attribute, if the element has one
    fn timestamp(&self) -> Option<String>;

    /// Replace the element's visible text
    fn set_text(&mut self, text: String);
}

/// Options used for time elements: relative phrasing with the "on" prefix
pub const TIME_ELEMENT_OPTIONS: FormatOptions = FormatOptions::new().english().with_on();

/// Write a formatted timestamp into every element
///
/// An element with a missing or unparseable attribute still gets text, rendered
/// from an invalid timestamp. Returns the number of elements written.
pub fn render_time_elements<'a, C, E, I>(formatter: &DateTimeFormatter<C>, elements: I) -> usize
where
    C: Clock,
    E: TimeElement + 'a,
    I: IntoIterator<Item = &'a mut E>,
{
    let mut rendered = 0;
    let mut invalid = 0;

    for element in elements {
        let ts = match element.timestamp() {
            Some(raw) => formatter.parse_timestamp(&raw),
            None => Timestamp::invalid(),
        };
        if !ts.is_valid() {
            invalid += 1;
        }

        element.set_text(formatter.format_date_time(&ts, TIME_ELEMENT_OPTIONS));
        rendered += 1;
    }

    debug!("Rendered {} time elements ({} invalid)", rendered, invalid);
    rendered
}
