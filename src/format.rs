//! Color string output: one branch per format tag.

use std::fmt;
use std::str::FromStr;

use crate::hex::rgb_to_hex;
use crate::math::rgb_to_hsl;
use crate::parse::ColorParseError;

/// The six color string grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `#rrggbbaa`
    Hexa,
    /// `rgb(R, G, B)`
    Rgb,
    /// `rgba(R, G, B, A.AA)`
    Rgba,
    /// `hsl(H, S%, L%)`
    Hsl,
    /// `hsla(H, S%, L%, A.AA)`
    Hsla,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Hex,
        ColorFormat::Hexa,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Hexa => "hexa",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
        }
    }

    /// Whether the emitted string carries the alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ColorFormat::Hexa | ColorFormat::Rgba | ColorFormat::Hsla
        )
    }

    /// Lenient tag lookup: anything unrecognized formats as `hex`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(ColorFormat::Hex)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ColorParseError::UnknownFormat(s.to_string()))
    }
}

/// Alpha as exactly two decimals, rounding the exact stored value.
///
/// `{:.2}` already rounds the exact binary value; only true ties need help,
/// since it sends those to even and they must go up.
fn fixed2(a: f64) -> String {
    // The only hundredths ties a double can hold are odd eighths (0.125, 0.375, ...).
    let eighths = a * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        return format!("{:.2}", (a * 100.0 + 0.5).floor() / 100.0);
    }
    format!("{:.2}", a)
}

fn alpha_byte(a: f64) -> u8 {
    (a * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Format a color in the given grammar.
pub fn format_color(r: u8, g: u8, b: u8, a: f64, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => rgb_to_hex(r, g, b),
        ColorFormat::Hexa => format!("{}{:02x}", rgb_to_hex(r, g, b), alpha_byte(a)),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", r, g, b),
        ColorFormat::Rgba => format!("rgba({}, {}, {}, {})", r, g, b, fixed2(a)),
        ColorFormat::Hsl => {
            let hsl = rgb_to_hsl(r, g, b);
            format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
        }
        ColorFormat::Hsla => {
            let hsl = rgb_to_hsl(r, g, b);
            format!("hsla({}, {}%, {}%, {})", hsl.h, hsl.s, hsl.l, fixed2(a))
        }
    }
}

/// Format with a string tag; unknown tags produce `hex`.
pub fn format_color_tag(r: u8, g: u8, b: u8, a: f64, tag: &str) -> String {
    format_color(r, g, b, a, ColorFormat::from_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_format() {
        let (r, g, b, a) = (59, 130, 246, 0.5);
        assert_eq!(format_color(r, g, b, a, ColorFormat::Hex), "#3b82f6");
        assert_eq!(format_color(r, g, b, a, ColorFormat::Hexa), "#3b82f680");
        assert_eq!(format_color(r, g, b, a, ColorFormat::Rgb), "rgb(59, 130, 246)");
        assert_eq!(
            format_color(r, g, b, a, ColorFormat::Rgba),
            "rgba(59, 130, 246, 0.50)"
        );
        assert_eq!(format_color(r, g, b, a, ColorFormat::Hsl), "hsl(217, 91%, 60%)");
        assert_eq!(
            format_color(r, g, b, a, ColorFormat::Hsla),
            "hsla(217, 91%, 60%, 0.50)"
        );
    }

    #[test]
    fn alpha_encoding() {
        assert_eq!(format_color(255, 0, 0, 0.5, ColorFormat::Hexa), "#ff000080");
        assert_eq!(format_color(255, 0, 0, 1.0, ColorFormat::Hexa), "#ff0000ff");
        assert_eq!(format_color(255, 0, 0, 0.0, ColorFormat::Hexa), "#ff000000");
        assert_eq!(
            format_color(0, 255, 0, 0.0, ColorFormat::Rgba),
            "rgba(0, 255, 0, 0.00)"
        );
        assert_eq!(
            format_color(0, 255, 0, 1.0, ColorFormat::Rgba),
            "rgba(0, 255, 0, 1.00)"
        );
        assert_eq!(
            format_color(0, 0, 0, 0.125, ColorFormat::Hsla),
            "hsla(0, 0%, 0%, 0.13)"
        );
    }

    #[test]
    fn alpha_rounds_the_stored_value() {
        // 0.015 and 0.185 are stored just below the halfway point.
        for (a, text) in [(0.015, "0.01"), (0.185, "0.18"), (0.125, "0.13"), (0.375, "0.38")] {
            assert_eq!(
                format_color(0, 0, 0, a, ColorFormat::Rgba),
                format!("rgba(0, 0, 0, {text})")
            );
            assert_eq!(
                format_color(0, 0, 0, a, ColorFormat::Hsla),
                format!("hsla(0, 0%, 0%, {text})")
            );
        }
        assert_eq!(fixed2(0.5), "0.50");
        assert_eq!(fixed2(128.0 / 255.0), "0.50");
        assert_eq!(fixed2(0.995), "0.99");
    }

    #[test]
    fn unknown_tag_formats_as_hex() {
        assert_eq!(format_color_tag(255, 0, 0, 0.5, "cmyk"), "#ff0000");
        assert_eq!(format_color_tag(255, 0, 0, 0.5, "RGB"), "#ff0000");
        assert_eq!(format_color_tag(255, 0, 0, 0.5, "rgba"), "rgba(255, 0, 0, 0.50)");
    }

    #[test]
    fn tags() {
        for f in ColorFormat::ALL {
            assert_eq!(f.as_str().parse::<ColorFormat>().unwrap(), f);
            assert_eq!(f.to_string(), f.as_str());
        }
        assert!("lab".parse::<ColorFormat>().is_err());
        assert!(ColorFormat::Hsla.has_alpha());
        assert!(!ColorFormat::Hsl.has_alpha());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_tag() {
        assert_eq!(serde_json::to_string(&ColorFormat::Hsla).unwrap(), "\"hsla\"");
        let f: ColorFormat = serde_json::from_str("\"rgb\"").unwrap();
        assert_eq!(f, ColorFormat::Rgb);
    }
}
