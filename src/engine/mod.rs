//! Color assignment engine: wheel slotting, brightness shading, and
//! keyword overrides.
//!
//! The engine is pure: given a track sequence, a rule set, and a scheme it
//! deterministically produces one color per track. File I/O, config, and
//! output formatting live elsewhere.

pub mod pairing;
pub mod shade;
pub mod slots;
pub mod source;

// Re-export the engine surface
pub use pairing::{PairRule, StereoPair};
pub use shade::ShadeWalk;
pub use slots::hue_slots;
pub use source::{ColorSource, Gradient, HsvWheel};

use crate::models::{RgbColor, RuleSet, TrackList};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How group hues are handed out around the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Neighboring groups take neighboring slots.
    #[default]
    Adjacent,
    /// Neighboring groups land far apart, via a coprime slot stride.
    Opposite,
}

/// How members below a group head are darkened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Shading {
    /// Brightness is a pure function of nesting depth.
    #[default]
    ByDepth,
    /// Each member darkens relative to the member before it.
    FromPrevious,
}

/// Tunable knobs for one assignment run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    /// Wheel distribution policy.
    pub distribution: Distribution,
    /// Member darkening policy.
    pub shading: Shading,
    /// Brightness lost per darkening step, in [0, 1].
    pub darken_per_step: f64,
    /// Brightness floor, in [0, 1].
    pub min_value: f64,
}

impl Default for Scheme {
    fn default() -> Self {
        Self {
            distribution: Distribution::default(),
            shading: Shading::default(),
            darken_per_step: 0.12,
            min_value: 0.25,
        }
    }
}

/// Where an assigned color came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ColorOrigin {
    /// Synthesized from the group's wheel position and the member's
    /// brightness.
    Wheel {
        /// Wheel position in turns, [0, 1).
        hue: f64,
        /// Brightness in [0, 1].
        value: f64,
    },
    /// Pinned by a keyword rule.
    Rule {
        /// The matching rule's keyword.
        keyword: String,
    },
}

/// One track's assigned color, aligned with the input sequence by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedColor {
    /// The final color.
    pub color: RgbColor,
    /// Where the color came from.
    pub origin: ColorOrigin,
}

/// Assigns a color to every track in the sequence.
///
/// Keyword rules are resolved first: the first matching rule (in rule-list
/// order) at a track pins its fixed color onto the track's whole subtree,
/// and nothing inside an already-pinned subtree is re-matched. Groups whose
/// head is pinned are excluded before wheel slots are computed, so the
/// remaining groups still spread over the full wheel. Every other member
/// gets the group hue dimmed to its walked brightness.
///
/// Out-of-range scheme knobs are a caller error; values are clamped into
/// the `min_value`..=1.0 range but not otherwise validated.
///
/// # Examples
///
/// ```
/// use trackbow::engine::{assign_colors, HsvWheel, Scheme};
/// use trackbow::models::{RuleSet, Track, TrackList};
///
/// let tracks = TrackList::new(vec![
///     Track::new("Drums", 0),
///     Track::new("Bass", 0),
/// ]);
/// let colors = assign_colors(
///     &tracks,
///     &RuleSet::default(),
///     &Scheme::default(),
///     &HsvWheel::new(1.0),
///     None,
/// );
/// assert_eq!(colors.len(), 2);
/// ```
#[must_use]
pub fn assign_colors(
    tracks: &TrackList,
    rules: &RuleSet,
    scheme: &Scheme,
    source: &dyn ColorSource,
    pairing: Option<&dyn PairRule>,
) -> Vec<AssignedColor> {
    let overrides = resolve_overrides(tracks, rules);
    let groups = tracks.groups();

    let wheel_count = groups
        .iter()
        .filter(|group| overrides[group.start].is_none())
        .count();
    let hues = hue_slots(wheel_count, scheme.distribution);

    let mut assigned = Vec::with_capacity(tracks.len());
    let mut next_slot = 0;

    for group in groups {
        let group_hue = if overrides[group.start].is_none() {
            let hue = hues.get(next_slot).copied();
            next_slot += 1;
            hue
        } else {
            None
        };

        let mut walk = ShadeWalk::new(
            scheme.shading,
            scheme.darken_per_step,
            scheme.min_value,
            pairing,
        );

        for index in group {
            match overrides[index] {
                Some(rule_index) => {
                    let rule = &rules.rules[rule_index];
                    assigned.push(AssignedColor {
                        color: rule.color,
                        origin: ColorOrigin::Rule {
                            keyword: rule.keyword.clone(),
                        },
                    });
                }
                None => {
                    let track = &tracks.tracks[index];
                    let value = walk.next(track.depth, &track.name);
                    let hue = group_hue.unwrap_or(0.0);
                    assigned.push(AssignedColor {
                        color: source.sample_at(hue, value),
                        origin: ColorOrigin::Wheel { hue, value },
                    });
                }
            }
        }
    }

    assigned
}

/// Resolves keyword rules into a per-track override: the index of the
/// winning rule, if any.
///
/// A match covers the matched track's whole subtree as one contiguous
/// range; the scan then resumes after the subtree, so the outermost match
/// wins and pinned subtrees stay uniform.
fn resolve_overrides(tracks: &TrackList, rules: &RuleSet) -> Vec<Option<usize>> {
    let mut overrides = vec![None; tracks.len()];

    let mut i = 0;
    while i < tracks.len() {
        if let Some(position) = rules
            .rules
            .iter()
            .position(|rule| rule.matches(&tracks.tracks[i].name))
        {
            let end = tracks.subtree_end(i);
            for slot in &mut overrides[i..end] {
                *slot = Some(position);
            }
            i = end;
        } else {
            i += 1;
        }
    }

    overrides
}
