pub mod binding;
pub mod clock;
pub mod formatter;
pub mod names;
pub mod parser;
pub mod playlist;
pub mod types;

// Main API exports
pub use binding::{TimeElement, render_time_elements};
pub use clock::{Clock, FixedClock, SystemClock};
pub use formatter::DateTimeFormatter;
pub use names::{Names, NamesError};
pub use parser::{TimestampError, parse_timestamp_parts};
pub use types::*;
