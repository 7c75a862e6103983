//! Hex ↔ RGB codec for `#rrggbb` strings.

use crate::constants::HEX_FALLBACK_RGB;

/// Decode one two-digit hex group (`"3b"` → `59`).
///
/// Both digits must be hex; signs and whitespace are rejected even though
/// `u8::from_str_radix` would accept a leading `+`.
pub fn hex_byte(pair: &str) -> Option<u8> {
    if pair.len() != 2 || !pair.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(pair, 16).ok()
}

/// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
pub fn try_hex_to_rgb(input: &str) -> Option<(u8, u8, u8)> {
    let stripped = input.strip_prefix('#').unwrap_or(input);
    if stripped.len() != 6 {
        return None;
    }
    Some((
        hex_byte(stripped.get(0..2)?)?,
        hex_byte(stripped.get(2..4)?)?,
        hex_byte(stripped.get(4..6)?)?,
    ))
}

/// Parse `#rrggbb`, returning black for anything that is not exactly six hex
/// digits.
pub fn hex_to_rgb(input: &str) -> (u8, u8, u8) {
    try_hex_to_rgb(input).unwrap_or(HEX_FALLBACK_RGB)
}

/// Format as `#rrggbb` with lowercase digits.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_and_without_prefix() {
        assert_eq!(hex_to_rgb("#3b82f6"), (59, 130, 246));
        assert_eq!(hex_to_rgb("3B82F6"), (59, 130, 246));
        assert_eq!(hex_to_rgb("#FfA500"), (255, 165, 0));
    }

    #[test]
    fn invalid_input_is_black() {
        assert_eq!(hex_to_rgb(""), (0, 0, 0));
        assert_eq!(hex_to_rgb("#fff"), (0, 0, 0));
        assert_eq!(hex_to_rgb("#3b82f680"), (0, 0, 0));
        assert_eq!(hex_to_rgb("#zz82f6"), (0, 0, 0));
        assert_eq!(hex_to_rgb("+f+f+f"), (0, 0, 0));
        // Multi-byte characters must not panic on slicing.
        assert_eq!(hex_to_rgb("#ééé"), (0, 0, 0));
        assert!(try_hex_to_rgb("#12345").is_none());
    }

    #[test]
    fn encodes_lowercase_zero_padded() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
        assert_eq!(rgb_to_hex(1, 10, 171), "#010aab");
    }

    #[test]
    fn hex_byte_rejects_signs() {
        assert_eq!(hex_byte("80"), Some(128));
        assert_eq!(hex_byte("+8"), None);
        assert_eq!(hex_byte("8"), None);
    }
}
