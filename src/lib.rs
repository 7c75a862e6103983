//! # floem-colorfmt
//!
//! Color string parsing and formatting for color pickers.
//!
//! Converts between `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()` and
//! `hsla()` strings and a canonical [`Rgba`] value. Every entry point is
//! total: unreadable input yields a fixed fallback color instead of an error,
//! and the `try_` / tagged variants report the failure for callers that need
//! to know.
//!
//! With the `widget` feature, [`color_field`] provides a [Floem](https://github.com/lapce/floem)
//! text field bound to an `RwSignal<Rgba>`.
//!
//! ## Usage
//!
//! ```rust
//! use floem_colorfmt::{ColorFormat, parse_color};
//!
//! let color = parse_color("#3b82f680");
//! assert_eq!(color.to_format(ColorFormat::Rgba), "rgba(59, 130, 246, 0.50)");
//! ```

mod color;
#[cfg(feature = "widget")]
mod color_field;
pub mod constants;
pub mod edit;
mod format;
pub mod hex;
#[cfg(feature = "widget")]
mod inputs;
pub mod math;
mod parse;

pub use color::Rgba;
pub use format::{ColorFormat, format_color, format_color_tag};
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use math::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use parse::{ColorParseError, Parsed, parse_color, parse_color_tagged, try_parse_color};

#[cfg(feature = "widget")]
use std::sync::Once;

#[cfg(feature = "widget")]
use floem::prelude::*;
#[cfg(feature = "widget")]
use floem::reactive::RwSignal;
#[cfg(feature = "widget")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "widget")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates an editable color field.
///
/// The field reads from and writes to `color` and shows it in the grammar
/// held by `format`; the format chips under the text write to `format`.
#[cfg(feature = "widget")]
pub fn color_field(color: RwSignal<Rgba>, format: RwSignal<ColorFormat>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    color_field::color_field(color, format)
}
