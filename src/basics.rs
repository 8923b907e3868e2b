//! Foundation types for gauge geometry.
//!
//! 2D coordinates with explicit named vector operations, the extents
//! rectangle used for path bounding boxes, and the shared degeneracy
//! tolerance that the ellipse math keys on.

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Half turn in radians.
pub const PI: f64 = std::f64::consts::PI;

/// `cos(45°)`, the shadow shift direction of the bordered compositor.
pub const COS45: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Degeneracy tolerance. Curvatures and divisors smaller than this are
/// treated as zero.
pub const TINY: f64 = 1e-6;

/// Returns `true` if `v` is within the degeneracy tolerance of zero.
#[inline]
pub fn tiny(v: f64) -> bool {
    v.abs() < TINY
}

// ============================================================================
// Coordinate
// ============================================================================

/// A 2D point or vector in user space. Arithmetic is spelled out as
/// named operations; there are no operator overloads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    #[inline]
    pub fn sub(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x - other.x, self.y - other.y)
    }

    /// Uniform scale.
    #[inline]
    pub fn scale(self, factor: f64) -> Coordinate {
        Coordinate::new(self.x * factor, self.y * factor)
    }

    /// Rotation about the origin, counter-clockwise.
    #[inline]
    pub fn rotated(self, angle: f64) -> Coordinate {
        let (sin_a, cos_a) = angle.sin_cos();
        Coordinate::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Coordinate) -> f64 {
        let d = self.sub(other);
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned extents rectangle: `x1 <= x2`, `y1 <= y2` once
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Swap corners if needed so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalize(mut self) -> Self {
        if self.x1 > self.x2 {
            std::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            std::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Returns `true` if the rectangle is non-empty.
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Midpoint of the rectangle.
    pub fn centre(&self) -> Coordinate {
        Coordinate::new((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    /// Grow the rectangle to cover the point `(x, y)`.
    pub fn extend(&mut self, x: f64, y: f64) {
        if x < self.x1 {
            self.x1 = x;
        }
        if y < self.y1 {
            self.y1 = y;
        }
        if x > self.x2 {
            self.x2 = x;
        }
        if y > self.y2 {
            self.y2 = y;
        }
    }

    /// Degenerate rectangle used as the seed for `extend`.
    pub fn empty() -> Self {
        Self::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_tolerance() {
        assert!(tiny(0.0));
        assert!(tiny(9.9e-7));
        assert!(tiny(-9.9e-7));
        assert!(!tiny(1.1e-6));
        assert!(!tiny(-1.1e-6));
    }

    #[test]
    fn test_coordinate_named_ops() {
        let a = Coordinate::new(1.0, 2.0);
        let b = Coordinate::new(3.0, -1.0);

        assert_eq!(a.add(b), Coordinate::new(4.0, 1.0));
        assert_eq!(a.sub(b), Coordinate::new(-2.0, 3.0));
        assert_eq!(a.scale(2.0), Coordinate::new(2.0, 4.0));
    }

    #[test]
    fn test_coordinate_rotated_quarter_turn() {
        let p = Coordinate::new(1.0, 0.0).rotated(PI / 2.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_coordinate_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rect_normalize_and_centre() {
        let r = Rect::new(4.0, 3.0, 0.0, 1.0).normalize();
        assert!(r.is_valid());
        assert_eq!(r.centre(), Coordinate::new(2.0, 2.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
    }

    #[test]
    fn test_rect_extend_from_empty() {
        let mut r = Rect::empty();
        r.extend(1.0, -2.0);
        r.extend(-3.0, 5.0);
        assert_eq!(r, Rect::new(-3.0, -2.0, 1.0, 5.0));
    }
}
