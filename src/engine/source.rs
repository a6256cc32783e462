//! Pluggable hue-to-color sources: HSV synthesis and stop gradients.

use crate::models::RgbColor;
use anyhow::Result;

/// Maps a wheel position to a color.
///
/// The engine computes *where* on the wheel a group sits (`t` in [0, 1])
/// and *how bright* each member is; this trait owns the remaining step. The
/// single seam keeps the slot and brightness logic identical whichever
/// source is plugged in.
pub trait ColorSource {
    /// Full-brightness color at wheel position `t` in [0, 1].
    fn sample(&self, t: f64) -> RgbColor;

    /// Color at wheel position `t`, dimmed to `value` in [0, 1].
    ///
    /// The default scales the sampled color's channels, which matches
    /// lowering the HSV value component.
    fn sample_at(&self, t: f64, value: f64) -> RgbColor {
        self.sample(t).dimmed(value)
    }
}

/// HSV color wheel at a fixed saturation.
///
/// Saturation is the run-wide pastel control: 1.0 gives fully saturated
/// rainbow colors, lower values wash them out.
#[derive(Debug, Clone, Copy)]
pub struct HsvWheel {
    saturation: f64,
}

impl HsvWheel {
    /// Creates a wheel with the given saturation, clamped to [0, 1].
    #[must_use]
    pub fn new(saturation: f64) -> Self {
        Self {
            saturation: saturation.clamp(0.0, 1.0),
        }
    }
}

impl ColorSource for HsvWheel {
    fn sample(&self, t: f64) -> RgbColor {
        RgbColor::from_hsv(t, self.saturation, 1.0)
    }

    fn sample_at(&self, t: f64, value: f64) -> RgbColor {
        // Synthesize directly at the target value instead of dimming the
        // quantized full-brightness color
        RgbColor::from_hsv(t, self.saturation, value)
    }
}

/// Piecewise-linear gradient over a list of color stops.
///
/// Stops are spread evenly over [0, 1]; sampling interpolates between the
/// two surrounding stops. Stands in for the stored-gradient-image source
/// some hosts ship, without any image decoding.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<RgbColor>,
}

impl Gradient {
    /// Creates a gradient from ordered color stops.
    ///
    /// # Errors
    ///
    /// Returns an error with fewer than two stops — there is nothing to
    /// interpolate between.
    pub fn from_stops(stops: Vec<RgbColor>) -> Result<Self> {
        if stops.len() < 2 {
            anyhow::bail!(
                "Gradient needs at least 2 color stops (got {})",
                stops.len()
            );
        }
        Ok(Self { stops })
    }

    /// Creates a gradient by parsing hex color stops.
    ///
    /// # Errors
    ///
    /// Returns an error if any stop fails to parse or fewer than two stops
    /// are given.
    pub fn from_hex_stops(stops: &[String]) -> Result<Self> {
        let parsed = stops
            .iter()
            .map(|hex| RgbColor::from_hex(hex))
            .collect::<Result<Vec<_>>>()?;
        Self::from_stops(parsed)
    }
}

impl ColorSource for Gradient {
    fn sample(&self, t: f64) -> RgbColor {
        let t = t.clamp(0.0, 1.0);
        let span = (self.stops.len() - 1) as f64;
        let position = t * span;
        let index = (position.floor() as usize).min(self.stops.len() - 2);
        let fraction = position - index as f64;

        self.stops[index].lerp(&self.stops[index + 1], fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_wheel_primaries() {
        let wheel = HsvWheel::new(1.0);
        assert_eq!(wheel.sample(0.0), RgbColor::new(255, 0, 0));
        assert_eq!(wheel.sample(1.0 / 3.0), RgbColor::new(0, 255, 0));
        assert_eq!(wheel.sample(2.0 / 3.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hsv_wheel_sample_at_uses_value() {
        let wheel = HsvWheel::new(1.0);
        assert_eq!(wheel.sample_at(0.0, 0.5), RgbColor::new(128, 0, 0));
        assert_eq!(wheel.sample_at(0.0, 1.0), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_hsv_wheel_clamps_saturation() {
        let wheel = HsvWheel::new(7.0);
        assert_eq!(wheel.sample(0.0), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_gradient_requires_two_stops() {
        assert!(Gradient::from_stops(vec![]).is_err());
        assert!(Gradient::from_stops(vec![RgbColor::default()]).is_err());
        assert!(Gradient::from_stops(vec![RgbColor::default(), RgbColor::default()]).is_ok());
    }

    #[test]
    fn test_gradient_samples_stops_and_midpoints() {
        let gradient = Gradient::from_stops(vec![
            RgbColor::new(0, 0, 0),
            RgbColor::new(100, 100, 100),
            RgbColor::new(200, 200, 200),
        ])
        .unwrap();

        assert_eq!(gradient.sample(0.0), RgbColor::new(0, 0, 0));
        assert_eq!(gradient.sample(0.5), RgbColor::new(100, 100, 100));
        assert_eq!(gradient.sample(1.0), RgbColor::new(200, 200, 200));
        assert_eq!(gradient.sample(0.25), RgbColor::new(50, 50, 50));
    }

    #[test]
    fn test_gradient_clamps_out_of_range() {
        let gradient =
            Gradient::from_stops(vec![RgbColor::new(0, 0, 0), RgbColor::new(255, 255, 255)])
                .unwrap();
        assert_eq!(gradient.sample(-1.0), RgbColor::new(0, 0, 0));
        assert_eq!(gradient.sample(2.0), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_gradient_from_hex_stops() {
        let gradient = Gradient::from_hex_stops(&[
            "#FF0000".to_string(),
            "#0000FF".to_string(),
        ])
        .unwrap();
        assert_eq!(gradient.sample(0.0), RgbColor::new(255, 0, 0));
        assert_eq!(gradient.sample(1.0), RgbColor::new(0, 0, 255));

        assert!(Gradient::from_hex_stops(&["#XYZ".to_string(), "#000000".to_string()]).is_err());
    }

    #[test]
    fn test_gradient_dims_via_default_method() {
        let gradient =
            Gradient::from_stops(vec![RgbColor::new(200, 100, 50), RgbColor::new(0, 0, 0)])
                .unwrap();
        assert_eq!(gradient.sample_at(0.0, 0.5), RgbColor::new(100, 50, 25));
    }
}
