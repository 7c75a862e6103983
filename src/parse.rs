//! Color string input.
//!
//! Dispatch is a prefix test, not a grammar: `#` selects hex, `rgb` and `hsl`
//! select a numeric-token scan that ignores separators and parentheses and
//! only needs three numbers. Whatever cannot be read falls back to opaque red
//! in [`parse_color`]; [`try_parse_color`] and [`parse_color_tagged`] expose
//! the failure for callers that care.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::{Rgba, clamp_alpha};
use crate::constants::FALLBACK_COLOR;
use crate::hex::{hex_byte, try_hex_to_rgb};
use crate::math::Hsl;

/// ASCII integers or decimals; signs and exponents are not part of a token.
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("numeric token pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color needs 6 or 8 digits, got {0}")]
    InvalidHexLength(usize),
    #[error("invalid hex digits")]
    InvalidHexDigit,
    #[error("color function needs at least 3 numbers, found {found}")]
    MissingComponents { found: usize },
    #[error("unrecognized color syntax")]
    UnknownSyntax,
    #[error("unknown color format `{0}`")]
    UnknownFormat(String),
}

/// Result of a total parse that remembers whether the fallback was used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed {
    /// The input was read successfully.
    Ok(Rgba),
    /// The input was unreadable; carries the fallback color.
    Fallback(Rgba),
}

impl Parsed {
    /// The color to paint, parsed or not.
    pub fn color(self) -> Rgba {
        match self {
            Parsed::Ok(c) | Parsed::Fallback(c) => c,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Parsed::Fallback(_))
    }

    /// The parsed color, or `None` if the fallback was used.
    pub fn ok(self) -> Option<Rgba> {
        match self {
            Parsed::Ok(c) => Some(c),
            Parsed::Fallback(_) => None,
        }
    }
}

fn parse_hex(digits: &str) -> Result<Rgba, ColorParseError> {
    match digits.len() {
        6 => {
            let (r, g, b) = try_hex_to_rgb(digits).ok_or(ColorParseError::InvalidHexDigit)?;
            Ok(Rgba::rgb(r, g, b))
        }
        8 => {
            let (r, g, b) = digits
                .get(0..6)
                .and_then(try_hex_to_rgb)
                .ok_or(ColorParseError::InvalidHexDigit)?;
            let a = digits
                .get(6..8)
                .and_then(hex_byte)
                .ok_or(ColorParseError::InvalidHexDigit)?;
            Ok(Rgba::new(r, g, b, a as f64 / 255.0))
        }
        n => Err(ColorParseError::InvalidHexLength(n)),
    }
}

/// Scan the first four numeric tokens: three components and an optional
/// alpha. Extra tokens are ignored.
fn numeric_components(input: &str) -> Result<([f64; 3], Option<f64>), ColorParseError> {
    let mut tokens = NUMERIC_TOKEN
        .find_iter(input)
        .filter_map(|m| m.as_str().parse::<f64>().ok());

    let mut components = [0.0; 3];
    for (found, slot) in components.iter_mut().enumerate() {
        *slot = tokens
            .next()
            .ok_or(ColorParseError::MissingComponents { found })?;
    }
    Ok((components, tokens.next()))
}

fn channel(v: f64) -> u8 {
    v.trunc().clamp(0.0, 255.0) as u8
}

/// Parse any supported color string, reporting why it could not be read.
pub fn try_parse_color(input: &str) -> Result<Rgba, ColorParseError> {
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(digits) = input.strip_prefix('#') {
        log::trace!("parsing {input:?} as hex");
        return parse_hex(digits);
    }

    if input.starts_with("rgb") {
        log::trace!("parsing {input:?} as rgb");
        let ([r, g, b], a) = numeric_components(input)?;
        return Ok(Rgba::new(
            channel(r),
            channel(g),
            channel(b),
            a.map_or(1.0, clamp_alpha),
        ));
    }

    if input.starts_with("hsl") {
        log::trace!("parsing {input:?} as hsl");
        let ([h, s, l], a) = numeric_components(input)?;
        return Ok(Rgba::from_hsl(Hsl::new(h, s, l), a.unwrap_or(1.0)));
    }

    Err(ColorParseError::UnknownSyntax)
}

/// Parse, tagging whether the fallback was substituted.
pub fn parse_color_tagged(input: &str) -> Parsed {
    match try_parse_color(input) {
        Ok(color) => Parsed::Ok(color),
        Err(e) => {
            log::debug!("color {input:?} not parsed ({e}), using fallback");
            Parsed::Fallback(FALLBACK_COLOR)
        }
    }
}

/// Parse any supported color string; unreadable input yields opaque red.
pub fn parse_color(input: &str) -> Rgba {
    parse_color_tagged(input).color()
}
