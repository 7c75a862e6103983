//! Commit logic for an editable color text field.
//!
//! Kept free of any UI types so the Enter / focus-lost behavior can be
//! exercised without a window.

use crate::color::Rgba;
use crate::format::ColorFormat;
use crate::parse::{Parsed, parse_color_tagged};

/// Outcome of committing the text of a color field.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Color the field should hold afterwards.
    pub color: Rgba,
    /// Text the field should show afterwards.
    pub text: String,
    /// Whether `color` differs from the color before the commit.
    pub changed: bool,
}

/// Text shown for `color` in the selected output format.
pub fn display_text(color: Rgba, format: ColorFormat) -> String {
    color.to_format(format)
}

/// Bare `rrggbb` / `rrggbbaa`, as typed without the leading `#`.
fn is_bare_hex(text: &str) -> bool {
    (text.len() == 6 || text.len() == 8) && text.bytes().all(|c| c.is_ascii_hexdigit())
}

/// Apply the text a user typed.
///
/// Readable text replaces the color and is normalized to `format`.
/// Unreadable text never paints the fallback red over the current color; the
/// field reverts to showing `current` instead.
pub fn commit_color_text(raw: &str, current: Rgba, format: ColorFormat) -> Commit {
    let trimmed = raw.trim();
    let parsed = if is_bare_hex(trimmed) {
        parse_color_tagged(&format!("#{trimmed}"))
    } else {
        parse_color_tagged(trimmed)
    };

    match parsed {
        Parsed::Ok(color) => Commit {
            color,
            text: display_text(color, format),
            changed: color != current,
        },
        Parsed::Fallback(_) => {
            log::trace!("reverting color field, {raw:?} is not a color");
            Commit {
                color: current,
                text: display_text(current, format),
                changed: false,
            }
        }
    }
}
