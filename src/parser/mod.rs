//! Timestamp parsing module
//!
//! This module is responsible for reading the timestamp strings pages attach to
//! elements and turning them into calendar parts that can be resolved to an instant.
//! The main entry point is the `parse_timestamp_parts` function.

mod combinators;
mod timestamp;
mod tokens;

pub use timestamp::{TimestampError, TimestampParts, parse_timestamp_parts};
