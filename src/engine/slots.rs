//! Hue slot distribution around the color wheel.

use crate::engine::Distribution;

/// Computes the hue (in turns, [0, 1)) for each of `count` groups.
///
/// Hues are always drawn from the evenly spaced set {0, 1/count, ...,
/// (count-1)/count}; the distribution policy only decides which group gets
/// which slot. `Adjacent` hands slots out in order, so neighboring groups
/// sit next to each other on the wheel. `Opposite` walks the slots with a
/// stride coprime to `count`, so neighboring groups land far apart — easier
/// to tell apart in a crowded session.
///
/// # Examples
///
/// ```
/// use trackbow::engine::{hue_slots, Distribution};
///
/// assert_eq!(
///     hue_slots(4, Distribution::Adjacent),
///     vec![0.0, 0.25, 0.5, 0.75]
/// );
/// assert_eq!(
///     hue_slots(5, Distribution::Opposite),
///     vec![0.0, 0.6, 0.2, 0.8, 0.4]
/// );
/// ```
#[must_use]
pub fn hue_slots(count: usize, distribution: Distribution) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0.0];
    }

    let wheel = count as f64;
    match distribution {
        Distribution::Adjacent => (0..count).map(|p| p as f64 / wheel).collect(),
        Distribution::Opposite => {
            let step = coprime_step(count);
            (0..count)
                .map(|p| ((p * step) % count) as f64 / wheel)
                .collect()
        }
    }
}

/// Picks the slot stride for the `Opposite` distribution.
///
/// Starts just past the halfway point and advances (wrapping to 1 at
/// `count`) until the stride is coprime to `count`, so the walk visits
/// every slot exactly once. Some integer in [1, count) is always coprime
/// to `count`, so the search terminates for every `count` >= 2.
pub(crate) fn coprime_step(count: usize) -> usize {
    debug_assert!(count >= 2);

    let mut step = count / 2 + 1;
    while gcd(step, count) != 1 {
        step += 1;
        if step >= count {
            step = 1;
        }
    }
    step
}

/// Greatest common divisor by Euclid's algorithm.
fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
