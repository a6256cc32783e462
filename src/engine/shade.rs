//! Brightness assignment for the members of one group.

use crate::engine::{PairRule, Shading};
use std::collections::BTreeMap;

/// Last member seen at a given depth, kept for pair lookback.
#[derive(Debug, Clone)]
struct DepthMemo {
    name: String,
    value: f64,
}

/// Stateful brightness walk over one group's members, in sequence order.
///
/// Create one walk per group: the walk owns the "previous member" state and
/// the depth-indexed pair memory, both of which reset at group boundaries.
/// Feed it each member's depth and name in order; it hands back the
/// member's value in [0, 1].
///
/// The pair memory maps depth to the last member seen there. Descending
/// into a subtree leaves shallower entries alone; ascending invalidates
/// every entry deeper than the depth returned to, so a pair is never
/// matched across unrelated branches.
pub struct ShadeWalk<'a> {
    shading: Shading,
    darken_per_step: f64,
    min_value: f64,
    pairing: Option<&'a dyn PairRule>,
    prev_value: Option<f64>,
    prev_depth: Option<usize>,
    memory: BTreeMap<usize, DepthMemo>,
}

impl<'a> ShadeWalk<'a> {
    /// Creates a fresh walk for one group.
    #[must_use]
    pub fn new(
        shading: Shading,
        darken_per_step: f64,
        min_value: f64,
        pairing: Option<&'a dyn PairRule>,
    ) -> Self {
        Self {
            shading,
            darken_per_step,
            min_value,
            pairing,
            prev_value: None,
            prev_depth: None,
            memory: BTreeMap::new(),
        }
    }

    /// Computes the value for the next member in sequence order.
    pub fn next(&mut self, depth: usize, name: &str) -> f64 {
        // Returning to a shallower depth invalidates deeper pair memory
        if let Some(prev_depth) = self.prev_depth {
            if depth < prev_depth {
                self.memory.split_off(&(depth + 1));
            }
        }

        let value = if depth == 0 {
            1.0
        } else if let Some(paired) = self.paired_value(depth, name) {
            paired
        } else {
            self.attenuated(depth)
        };

        self.memory.insert(
            depth,
            DepthMemo {
                name: name.to_string(),
                value,
            },
        );
        self.prev_value = Some(value);
        self.prev_depth = Some(depth);

        value
    }

    /// Value copied from a same-depth pair sibling, if one matches.
    fn paired_value(&self, depth: usize, name: &str) -> Option<f64> {
        let rule = self.pairing?;
        self.memory
            .get(&depth)
            .filter(|memo| rule.is_pair(&memo.name, name))
            .map(|memo| memo.value)
    }

    /// Normal (non-paired) value for a member below the group head.
    fn attenuated(&self, depth: usize) -> f64 {
        let raw = match self.shading {
            Shading::ByDepth => 1.0 - self.darken_per_step * depth as f64,
            Shading::FromPrevious => match self.prev_value {
                Some(prev) => prev * (1.0 - self.darken_per_step),
                None => 1.0 - self.darken_per_step,
            },
        };

        let floor = self.min_value.clamp(0.0, 1.0);
        raw.clamp(floor, 1.0)
    }
}
