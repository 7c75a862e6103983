//! Rgba — the canonical color value every parse produces and every format
//! consumes.
//!
//! Channels are 0–255 integers and alpha is an f64 in 0.0–1.0. HSL values
//! are derived on demand and never stored.

use std::fmt;
use std::str::FromStr;

use crate::constants::FALLBACK_COLOR;
use crate::format::{ColorFormat, format_color};
use crate::math::{self, Hsl};
use crate::parse::{ColorParseError, try_parse_color};

/// RGBA color with integer channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0–1.0.
    pub a: f64,
}

/// Opaque red, the same color the parser falls back to.
impl Default for Rgba {
    fn default() -> Self {
        FALLBACK_COLOR
    }
}

impl Rgba {
    /// Create from channels and alpha. Alpha is clamped to 0.0–1.0; NaN
    /// becomes fully opaque.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    /// Create an opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Channels as an `(r, g, b)` tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Create from an HSL working value.
    pub fn from_hsl(hsl: Hsl, a: f64) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Self::new(r, g, b, a)
    }

    /// Convert to integer HSL.
    pub fn to_hsl(&self) -> Hsl {
        math::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Replace the hue (degrees, wrapped onto the circle), keeping saturation,
    /// lightness and alpha. Grays stay gray.
    pub fn with_hue(&self, h: f64) -> Self {
        let (_, s, l) = math::rgb_to_hsl_f64(self.r, self.g, self.b);
        self.with_hsl_f64(h, s, l)
    }

    /// Replace the saturation (percent, clamped to 0–100).
    pub fn with_saturation(&self, s: f64) -> Self {
        let (h, _, l) = math::rgb_to_hsl_f64(self.r, self.g, self.b);
        self.with_hsl_f64(h, s, l)
    }

    /// Replace the lightness (percent, clamped to 0–100).
    pub fn with_lightness(&self, l: f64) -> Self {
        let (h, s, _) = math::rgb_to_hsl_f64(self.r, self.g, self.b);
        self.with_hsl_f64(h, s, l)
    }

    pub fn with_alpha(&self, a: f64) -> Self {
        Self {
            a: clamp_alpha(a),
            ..*self
        }
    }

    fn with_hsl_f64(&self, h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = math::hsl_f64_to_rgb(h, s, l);
        Self { r, g, b, a: self.a }
    }

    /// Format as one of the six color string grammars.
    pub fn to_format(&self, format: ColorFormat) -> String {
        format_color(self.r, self.g, self.b, self.a, format)
    }
}

pub(crate) fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }
}

/// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if self.a < 1.0 {
            ColorFormat::Hexa
        } else {
            ColorFormat::Hex
        };
        f.write_str(&self.to_format(format))
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_color(s)
    }
}
