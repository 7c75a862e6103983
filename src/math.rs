//! RGB ↔ HSL conversion.
//!
//! All arithmetic runs in f64 on normalized components; integer outputs are
//! rounded exactly once, after the full computation.

/// Integer HSL working value: hue in degrees, saturation and lightness in
/// percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue, 0–359.
    pub h: u16,
    /// Saturation, 0–100.
    pub s: u8,
    /// Lightness, 0–100.
    pub l: u8,
}

impl Hsl {
    /// Build from arbitrary numbers: the hue wraps around the circle,
    /// saturation and lightness clamp to 0–100, fractions are truncated.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: (h.trunc().rem_euclid(360.0) as u16) % 360,
            s: s.trunc().clamp(0.0, 100.0) as u8,
            l: l.trunc().clamp(0.0, 100.0) as u8,
        }
    }

    /// Same as [`rgb_to_hsl`].
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        rgb_to_hsl(r, g, b)
    }

    /// Same as [`hsl_to_rgb`].
    pub fn to_rgb(self) -> (u8, u8, u8) {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

/// RGB → unrounded HSL as `(degrees, percent, percent)`.
///
/// Hue is in `[0, 360)`; achromatic colors report a hue and saturation of 0.
pub fn rgb_to_hsl_f64(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    ((sector / 6.0 * 360.0).rem_euclid(360.0), s * 100.0, l * 100.0)
}

/// RGB → integer HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (h, s, l) = rgb_to_hsl_f64(r, g, b);
    Hsl {
        // 359.5 and up rounds onto the wrap point.
        h: (h.round() as u16) % 360,
        s: s.round() as u8,
        l: l.round() as u8,
    }
}

/// Evaluate one channel from the `p`/`q` anchors at hue offset `t`.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// HSL `(degrees, percent, percent)` → RGB. Accepts fractional components.
pub fn hsl_f64_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Integer HSL → RGB.
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> (u8, u8, u8) {
    hsl_f64_to_rgb(h as f64, s as f64, l as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_colors_to_hsl() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl { h: 240, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(59, 130, 246), Hsl { h: 217, s: 91, l: 60 });
    }

    #[test]
    fn known_colors_to_rgb() {
        assert_eq!(hsl_to_rgb(120, 100, 50), (0, 255, 0));
        assert_eq!(hsl_to_rgb(0, 100, 50), (255, 0, 0));
        assert_eq!(hsl_to_rgb(240, 100, 50), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0, 0, 100), (255, 255, 255));
        assert_eq!(hsl_to_rgb(60, 100, 25), (128, 128, 0));
    }

    #[test]
    fn magenta_side_hue_wraps_positive() {
        // max == r with g < b lands in the last sector.
        let (h, _, _) = rgb_to_hsl_f64(255, 0, 128);
        assert!(h > 300.0 && h < 360.0, "h = {h}");
        assert_eq!(rgb_to_hsl(255, 0, 1).h, 0);
    }

    #[test]
    fn gray_ignores_hue() {
        for h in [0u16, 45, 180, 359] {
            assert_eq!(hsl_to_rgb(h, 0, 50), (128, 128, 128));
        }
    }

    #[test]
    fn fractional_path_round_trips_exactly() {
        for (r, g, b) in [(59, 130, 246), (255, 11, 0), (1, 2, 3), (200, 100, 50)] {
            let (h, s, l) = rgb_to_hsl_f64(r, g, b);
            assert_eq!(hsl_f64_to_rgb(h, s, l), (r, g, b));
        }
    }

    #[test]
    fn struct_methods_match_free_functions() {
        let hsl = Hsl::from_rgb(59, 130, 246);
        assert_eq!(hsl, rgb_to_hsl(59, 130, 246));
        assert_eq!(hsl.to_rgb(), hsl_to_rgb(217, 91, 60));
    }

    #[test]
    fn new_normalizes_components() {
        assert_eq!(Hsl::new(480.9, 150.0, -3.0), Hsl { h: 120, s: 100, l: 0 });
        assert_eq!(Hsl::new(360.0, 50.5, 50.0), Hsl { h: 0, s: 50, l: 50 });
    }
}
