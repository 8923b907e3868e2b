//! Colour types for gauge painting.
//!
//! `Rgba` is the value type every widget carries; `Hlsa` is the
//! hue/lightness/saturation view used to derive the lightened and darkened
//! variants the bevel borders paint with. All channels are linear `0..=1`
//! doubles.

/// An RGBA colour, channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

pub const BLACK: Rgba = Rgba::new_rgb(0.0, 0.0, 0.0);
pub const WHITE: Rgba = Rgba::new_rgb(1.0, 1.0, 1.0);
pub const RED: Rgba = Rgba::new_rgb(1.0, 0.0, 0.0);

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn new_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// View this colour in hue/lightness/saturation space.
    pub fn to_hlsa(self) -> Hlsa {
        let (h, l, s) = rgb_to_hls(self.r, self.g, self.b);
        Hlsa {
            h,
            l,
            s,
            a: self.a,
        }
    }

    /// Raise lightness by `by`, clamped to 1.
    pub fn lighten(self, by: f64) -> Rgba {
        self.to_hlsa().lighten(by).to_rgba()
    }

    /// Lower lightness by `by`, clamped to 0.
    pub fn darken(self, by: f64) -> Rgba {
        self.to_hlsa().darken(by).to_rgba()
    }
}

/// A hue/lightness/saturation view of a colour. Hue is a fraction of a
/// full turn in `0..=1`, not degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hlsa {
    pub h: f64,
    pub l: f64,
    pub s: f64,
    pub a: f64,
}

impl Hlsa {
    pub fn lighten(self, by: f64) -> Hlsa {
        Hlsa {
            l: (self.l + by).min(1.0),
            ..self
        }
    }

    pub fn darken(self, by: f64) -> Hlsa {
        Hlsa {
            l: (self.l - by).max(0.0),
            ..self
        }
    }

    pub fn to_rgba(self) -> Rgba {
        let (r, g, b) = hls_to_rgb(self.h, self.l, self.s);
        Rgba::new(r, g, b, self.a)
    }
}

// ============================================================================
// HLS <-> RGB conversions
// ============================================================================

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let l = (minc + maxc) / 2.0;
    if maxc == minc {
        return (0.0, l, 0.0);
    }
    let delta = maxc - minc;
    let s = if l <= 0.5 {
        delta / (maxc + minc)
    } else {
        delta / (2.0 - maxc - minc)
    };
    let rc = (maxc - r) / delta;
    let gc = (maxc - g) / delta;
    let bc = (maxc - b) / delta;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), l, s)
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(c1: Rgba, c2: Rgba) {
        assert!((c1.r - c2.r).abs() < 1e-9, "{c1:?} != {c2:?}");
        assert!((c1.g - c2.g).abs() < 1e-9, "{c1:?} != {c2:?}");
        assert!((c1.b - c2.b).abs() < 1e-9, "{c1:?} != {c2:?}");
        assert!((c1.a - c2.a).abs() < 1e-9, "{c1:?} != {c2:?}");
    }

    #[test]
    fn test_hls_round_trip_primaries() {
        for c in [
            BLACK,
            WHITE,
            RED,
            Rgba::new_rgb(0.0, 1.0, 0.0),
            Rgba::new_rgb(0.0, 0.0, 1.0),
            Rgba::new_rgb(0.25, 0.5, 0.75),
        ] {
            assert_close(c.to_hlsa().to_rgba(), c);
        }
    }

    #[test]
    fn test_grey_has_no_hue_or_saturation() {
        let hls = Rgba::new_rgb(0.5, 0.5, 0.5).to_hlsa();
        assert_eq!(hls.h, 0.0);
        assert_eq!(hls.s, 0.0);
        assert!((hls.l - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lighten_grey() {
        let c = Rgba::new_rgb(0.5, 0.5, 0.5).lighten(1.0 / 3.0);
        let expected = 0.5 + 1.0 / 3.0;
        assert!((c.r - expected).abs() < 1e-9);
        assert!((c.g - expected).abs() < 1e-9);
        assert!((c.b - expected).abs() < 1e-9);
    }

    #[test]
    fn test_lighten_clamps_at_white() {
        assert_close(WHITE.lighten(0.5), WHITE);
    }

    #[test]
    fn test_darken_clamps_at_black() {
        assert_close(BLACK.darken(0.5), BLACK);
    }

    #[test]
    fn test_darken_preserves_hue() {
        let dark_red = RED.darken(1.0 / 3.0);
        assert!(dark_red.r > 0.0);
        assert!(dark_red.g.abs() < 1e-9);
        assert!(dark_red.b.abs() < 1e-9);
        assert!(dark_red.r < 1.0);
    }

    #[test]
    fn test_alpha_survives_lighten_darken() {
        let c = RED.with_alpha(0.25);
        assert!((c.lighten(0.1).a - 0.25).abs() < 1e-12);
        assert!((c.darken(0.1).a - 0.25).abs() < 1e-12);
    }
}
