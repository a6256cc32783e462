//! Sibling pairing predicates for equal-brightness track pairs.

/// Decides whether two same-depth siblings form a pair that should share
/// one brightness value.
///
/// The shading walk consults this for each non-head member against the most
/// recent member it saw at the same depth; a positive answer copies that
/// member's value instead of attenuating further.
pub trait PairRule {
    /// Whether `prev` (seen earlier at the same depth) and `curr` are a
    /// pair.
    fn is_pair(&self, prev: &str, curr: &str) -> bool;
}

/// Stereo left/right pairing by name suffix.
///
/// Recognizes a trailing side marker — `L`/`R`, `left`/`right`, plain or
/// parenthesized, after a space, underscore, hyphen, or dot — and pairs two
/// names whose stems match case-insensitively with complementary sides.
///
/// # Examples
///
/// ```
/// use trackbow::engine::{PairRule, StereoPair};
///
/// assert!(StereoPair.is_pair("Guitar L", "Guitar R"));
/// assert!(StereoPair.is_pair("Room (Left)", "room (right)"));
/// assert!(!StereoPair.is_pair("Guitar L", "Bass R"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StereoPair;

/// Which side of a stereo pair a name claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

const SEPARATORS: &[char] = &[' ', '_', '-', '.'];

/// Splits a track name into (lowercased stem, side) if it carries a side
/// suffix.
fn split_side(name: &str) -> Option<(String, Side)> {
    let lower = name.trim().to_lowercase();

    // Parenthesized markers need no separator: "Room(L)" is fine
    for (suffix, side) in [
        ("(left)", Side::Left),
        ("(right)", Side::Right),
        ("(l)", Side::Left),
        ("(r)", Side::Right),
    ] {
        if lower.ends_with(suffix) {
            let stem = lower[..lower.len() - suffix.len()]
                .trim_end_matches(SEPARATORS)
                .to_string();
            if stem.is_empty() {
                return None;
            }
            return Some((stem, side));
        }
    }

    // Bare markers must follow a separator so "Hall" is not a left channel
    for (token, side) in [
        ("left", Side::Left),
        ("right", Side::Right),
        ("l", Side::Left),
        ("r", Side::Right),
    ] {
        if let Some(rest) = lower.strip_suffix(token) {
            if rest.ends_with(SEPARATORS) {
                let stem = rest.trim_end_matches(SEPARATORS).to_string();
                if stem.is_empty() {
                    return None;
                }
                return Some((stem, side));
            }
        }
    }

    None
}

impl PairRule for StereoPair {
    fn is_pair(&self, prev: &str, curr: &str) -> bool {
        match (split_side(prev), split_side(curr)) {
            (Some((prev_stem, prev_side)), Some((curr_stem, curr_side))) => {
                prev_stem == curr_stem && prev_side != curr_side
            }
            _ => false,
        }
    }
}
