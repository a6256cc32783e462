//! RGB color handling with hex parsing, HSV synthesis, and serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB), synthesis from HSV, and
/// serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use trackbow::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use trackbow::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Creates an `RgbColor` from HSV components, all in the unit range.
    ///
    /// Hue is a position on the color wheel in turns (0.0 = red, 1/3 =
    /// green, 2/3 = blue; 1.0 wraps back to red). Saturation and value are
    /// clamped to [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use trackbow::models::RgbColor;
    ///
    /// let red = RgbColor::from_hsv(0.0, 1.0, 1.0);
    /// assert_eq!(red, RgbColor::new(255, 0, 0));
    ///
    /// let green = RgbColor::from_hsv(1.0 / 3.0, 1.0, 1.0);
    /// assert_eq!(green, RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.clamp(0.0, 1.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let sector = h * 6.0;
        let i = (sector.floor() as u32) % 6;
        let f = sector.fract();

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match i {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }

    /// Returns the color scaled to the given brightness in [0, 1].
    ///
    /// Scaling RGB channels linearly is equivalent to lowering the HSV
    /// value component, so dimming a wheel color and synthesizing it at a
    /// lower value agree within quantization.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackbow::models::RgbColor;
    ///
    /// let color = RgbColor::new(200, 100, 50);
    /// assert_eq!(color.dimmed(0.5), RgbColor::new(100, 50, 25));
    /// ```
    #[must_use]
    pub fn dimmed(&self, value: f64) -> Self {
        let value = value.clamp(0.0, 1.0);
        Self {
            r: quantize(f64::from(self.r) / 255.0 * value),
            g: quantize(f64::from(self.g) / 255.0 * value),
            b: quantize(f64::from(self.b) / 255.0 * value),
        }
    }

    /// Linearly interpolates between this color and `other`.
    ///
    /// `t` is clamped to [0, 1]; 0.0 returns `self`, 1.0 returns `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| quantize((f64::from(a) + (f64::from(b) - f64::from(a)) * t) / 255.0);
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// Maps a unit-range channel to its 8-bit value.
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
