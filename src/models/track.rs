//! Track sequence model: a pre-order flattening of a session's track tree.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single track entry: a display name and its nesting depth.
///
/// Depth 0 marks a top-level track (a group head); deeper entries belong to
/// the most recent shallower entry above them. The sequence as a whole is a
/// pre-order flattening of the session's folder tree, which is how DAW hosts
/// linearize their track lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name, used for rule matching and stereo-pair detection.
    pub name: String,
    /// Folder nesting depth; 0 is top level.
    pub depth: usize,
}

impl Track {
    /// Creates a new track entry.
    pub fn new(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
        }
    }
}

/// An ordered track sequence with group structure derived from depths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackList {
    /// Tracks in session order.
    pub tracks: Vec<Track>,
}

impl TrackList {
    /// Creates a track list from an ordered sequence of tracks.
    #[must_use]
    pub const fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Number of tracks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the list contains no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Splits the sequence into groups.
    ///
    /// A group starts at every depth-0 track and runs to the next depth-0
    /// track (or the end of the sequence). If the sequence starts below
    /// depth 0 — possible with hand-written input — the leading run still
    /// forms a group so every track belongs to exactly one.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackbow::models::{Track, TrackList};
    ///
    /// let list = TrackList::new(vec![
    ///     Track::new("Drums", 0),
    ///     Track::new("Kick", 1),
    ///     Track::new("Bass", 0),
    /// ]);
    /// assert_eq!(list.groups(), vec![0..2, 2..3]);
    /// ```
    #[must_use]
    pub fn groups(&self) -> Vec<Range<usize>> {
        let mut groups = Vec::new();
        let mut start = 0;

        for (i, track) in self.tracks.iter().enumerate() {
            if track.depth == 0 && i != start {
                groups.push(start..i);
                start = i;
            }
        }

        if start < self.tracks.len() {
            groups.push(start..self.tracks.len());
        }

        groups
    }

    /// Returns the end (exclusive) of the subtree rooted at `index`.
    ///
    /// The subtree covers every later track with a strictly greater depth;
    /// the first track at the same or a shallower depth terminates it. With
    /// a flat sequence plus depths this is all "descendant of" needs — no
    /// parent pointers.
    #[must_use]
    pub fn subtree_end(&self, index: usize) -> usize {
        let depth = match self.tracks.get(index) {
            Some(track) => track.depth,
            None => return self.tracks.len(),
        };

        self.tracks[index + 1..]
            .iter()
            .position(|t| t.depth <= depth)
            .map_or(self.tracks.len(), |offset| index + 1 + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, usize)]) -> TrackList {
        TrackList::new(
            entries
                .iter()
                .map(|(name, depth)| Track::new(*name, *depth))
                .collect(),
        )
    }

    #[test]
    fn test_groups_split_at_depth_zero() {
        let list = list(&[
            ("Drums", 0),
            ("Kick", 1),
            ("Snare", 1),
            ("Bass", 0),
            ("Keys", 0),
            ("Rhodes", 1),
        ]);

        assert_eq!(list.groups(), vec![0..3, 3..4, 4..6]);
    }

    #[test]
    fn test_groups_empty_list() {
        assert!(TrackList::default().groups().is_empty());
    }

    #[test]
    fn test_groups_single_track() {
        let list = list(&[("Master", 0)]);
        assert_eq!(list.groups(), vec![0..1]);
    }

    #[test]
    fn test_groups_leading_nested_tracks() {
        // Malformed input that starts below the top level still covers
        // every track
        let list = list(&[("Orphan", 2), ("Drums", 0), ("Kick", 1)]);
        assert_eq!(list.groups(), vec![0..1, 1..3]);
    }

    #[test]
    fn test_subtree_end_stops_at_same_depth() {
        let list = list(&[
            ("Drums", 0),
            ("Kick", 1),
            ("Kick In", 2),
            ("Snare", 1),
            ("Bass", 0),
        ]);

        // Kick's subtree covers Kick In but not Snare
        assert_eq!(list.subtree_end(1), 3);
        // Drums' subtree covers everything up to Bass
        assert_eq!(list.subtree_end(0), 4);
    }

    #[test]
    fn test_subtree_end_runs_to_end_of_sequence() {
        let list = list(&[("Drums", 0), ("Kick", 1), ("Kick In", 2)]);
        assert_eq!(list.subtree_end(0), 3);
        assert_eq!(list.subtree_end(2), 3);
    }

    #[test]
    fn test_subtree_end_out_of_bounds() {
        let list = list(&[("Drums", 0)]);
        assert_eq!(list.subtree_end(5), 1);
    }
}
