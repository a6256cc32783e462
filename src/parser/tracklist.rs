//! Track-list file parsing: indented text and JSON.

use crate::models::{Track, TrackList};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a track list from a file, picking the format by extension.
///
/// `.json` files are parsed as JSON (either a bare `[{"name", "depth"}]`
/// array or a `{"tracks": [...]}` object); anything else is parsed as
/// indented plain text.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn parse_tracklist(path: &Path) -> Result<TrackList> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read track list: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_tracklist_json(&content)
            .with_context(|| format!("Failed to parse JSON track list: {}", path.display()))
    } else {
        parse_tracklist_text(&content)
            .with_context(|| format!("Failed to parse track list: {}", path.display()))
    }
}

/// Parses an indented plain-text track list.
///
/// One track per line; nesting depth is the leading indentation, where one
/// tab or two spaces make one level. Blank lines and lines starting with
/// `#` are skipped.
///
/// # Examples
///
/// ```
/// use trackbow::parser::parse_tracklist_text;
///
/// let list = parse_tracklist_text("Drums\n  Kick\n  Snare\nBass\n").unwrap();
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.tracks[1].depth, 1);
/// ```
///
/// # Errors
///
/// Returns an error on odd space indentation, a first track below the top
/// level, or a depth that jumps more than one level past its predecessor —
/// all of which mean the input is not a valid pre-order tree.
pub fn parse_tracklist_text(content: &str) -> Result<TrackList> {
    let mut tracks = Vec::new();
    let mut prev_depth: Option<usize> = None;

    for (number, line) in content.lines().enumerate() {
        let number = number + 1;
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }

        let depth = indent_depth(line, number)?;

        match prev_depth {
            None => {
                if depth != 0 {
                    anyhow::bail!("Line {number}: first track must be top-level (no indentation)");
                }
            }
            Some(prev) => {
                if depth > prev + 1 {
                    anyhow::bail!(
                        "Line {number}: depth jumps from {prev} to {depth}; children can only \
                         nest one level at a time"
                    );
                }
            }
        }

        tracks.push(Track::new(name, depth));
        prev_depth = Some(depth);
    }

    Ok(TrackList::new(tracks))
}

/// Computes the nesting depth of a line from its leading indentation.
fn indent_depth(line: &str, number: usize) -> Result<usize> {
    let mut tabs = 0;
    let mut spaces = 0;

    for c in line.chars() {
        match c {
            '\t' => tabs += 1,
            ' ' => spaces += 1,
            _ => break,
        }
    }

    if spaces % 2 != 0 {
        anyhow::bail!(
            "Line {number}: odd space indentation ({spaces} spaces); use tabs or two spaces \
             per level"
        );
    }

    Ok(tabs + spaces / 2)
}

/// Parses a JSON track list.
///
/// Accepts either a bare array of `{"name", "depth"}` objects or a
/// `{"tracks": [...]}` object.
///
/// # Errors
///
/// Returns an error if the JSON does not match either shape.
pub fn parse_tracklist_json(content: &str) -> Result<TrackList> {
    if let Ok(tracks) = serde_json::from_str::<Vec<Track>>(content) {
        return Ok(TrackList::new(tracks));
    }

    serde_json::from_str::<TrackList>(content).context("Expected a JSON array of tracks or an object with a \"tracks\" field")
}
