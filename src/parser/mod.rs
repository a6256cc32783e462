//! Parsers for track-list input files.
//!
//! Two formats are supported: indented plain text (one track per line,
//! indentation is nesting depth) and JSON. The format is picked by file
//! extension.

pub mod tracklist;

pub use tracklist::{parse_tracklist, parse_tracklist_json, parse_tracklist_text};
