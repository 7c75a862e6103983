//! Fallback colors and, with the `widget` feature, sizing for the color field.

use crate::color::Rgba;

/// Returned by the total parser for input it cannot read: opaque red.
pub const FALLBACK_COLOR: Rgba = Rgba {
    r: 255,
    g: 0,
    b: 0,
    a: 1.0,
};

/// Returned by `hex_to_rgb` for anything that is not six hex digits.
pub const HEX_FALLBACK_RGB: (u8, u8, u8) = (0, 0, 0);

/// Color text field width
#[cfg(feature = "widget")]
pub const INPUT_WIDTH: f32 = 168.0;

/// Swatch edge length
#[cfg(feature = "widget")]
pub const SWATCH_SIZE: f32 = 24.0;

/// Gap between field elements
#[cfg(feature = "widget")]
pub const GAP: f32 = 6.0;

/// Padding around the whole field
#[cfg(feature = "widget")]
pub const PADDING: f32 = 8.0;

/// Border radius for the swatch, input and chips
#[cfg(feature = "widget")]
pub const RADIUS: f32 = 3.0;

/// Input font size
#[cfg(feature = "widget")]
pub const INPUT_FONT: f32 = 11.0;

/// Format chip font size
#[cfg(feature = "widget")]
pub const LABEL_FONT: f32 = 10.0;
