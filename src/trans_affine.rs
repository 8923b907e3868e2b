//! 2D affine transformation matrix.
//!
//! The drawing-context boundary exposes its transform stack in terms of
//! this type; the recording backend uses it to keep real device-space
//! coordinates behind the operation log.

use crate::basics::Coordinate;

/// Epsilon for singularity checks when inverting.
const AFFINE_EPSILON: f64 = 1e-14;

/// A 2D affine transform.
///
/// Stores six components representing the matrix
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// mapping `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    /// Identity transform.
    pub const fn identity() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub const fn new(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Pure translation.
    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Counter-clockwise rotation.
    pub fn rotation(angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(cos_a, sin_a, -sin_a, cos_a, 0.0, 0.0)
    }

    /// Non-uniform scaling.
    pub const fn scaling(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// `self = self * m`: the combined transform applies `self` first,
    /// then `m`.
    pub fn multiply(&mut self, m: &TransAffine) {
        let t0 = self.sx * m.sx + self.shy * m.shx;
        let t2 = self.shx * m.sx + self.sy * m.shx;
        let t4 = self.tx * m.sx + self.ty * m.shx + m.tx;
        self.shy = self.sx * m.shy + self.shy * m.sy;
        self.sy = self.shx * m.shy + self.sy * m.sy;
        self.ty = self.tx * m.shy + self.ty * m.sy + m.ty;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
    }

    /// `self = m * self`: the combined transform applies `m` first,
    /// then `self`. This is how new operations land on a context's
    /// current transform.
    pub fn premultiply(&mut self, m: &TransAffine) {
        let mut t = *m;
        t.multiply(self);
        *self = t;
    }

    /// Map a point through the transform.
    pub fn transform(&self, p: Coordinate) -> Coordinate {
        Coordinate::new(
            p.x * self.sx + p.y * self.shx + self.tx,
            p.x * self.shy + p.y * self.sy + self.ty,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<TransAffine> {
        let d = self.determinant();
        if d.abs() < AFFINE_EPSILON {
            return None;
        }
        let d = 1.0 / d;
        let sx = self.sy * d;
        let sy = self.sx * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        Some(TransAffine::new(
            sx,
            shy,
            shx,
            sy,
            -self.tx * sx - self.ty * shx,
            -self.tx * shy - self.ty * sy,
        ))
    }
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::identity()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PI;

    fn assert_point(p: Coordinate, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-9, "{p:?} != ({x}, {y})");
        assert!((p.y - y).abs() < 1e-9, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn test_identity_is_noop() {
        let m = TransAffine::identity();
        assert_point(m.transform(Coordinate::new(3.0, -2.0)), 3.0, -2.0);
    }

    #[test]
    fn test_translation() {
        let m = TransAffine::translation(10.0, -5.0);
        assert_point(m.transform(Coordinate::new(1.0, 1.0)), 11.0, -4.0);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let m = TransAffine::rotation(PI / 2.0);
        assert_point(m.transform(Coordinate::new(1.0, 0.0)), 0.0, 1.0);
    }

    #[test]
    fn test_scaling() {
        let m = TransAffine::scaling(2.0, 3.0);
        assert_point(m.transform(Coordinate::new(1.0, 1.0)), 2.0, 3.0);
    }

    #[test]
    fn test_premultiply_applies_new_op_first() {
        // Context discipline: translate then rotate means the rotation is
        // applied to points first, then the translation.
        let mut ctm = TransAffine::identity();
        ctm.premultiply(&TransAffine::translation(10.0, 0.0));
        ctm.premultiply(&TransAffine::rotation(PI / 2.0));
        assert_point(ctm.transform(Coordinate::new(1.0, 0.0)), 10.0, 1.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let mut m = TransAffine::rotation(0.7);
        m.premultiply(&TransAffine::scaling(2.0, 0.5));
        m.multiply(&TransAffine::translation(3.0, 4.0));

        let inv = m.inverse().unwrap();
        let p = Coordinate::new(1.25, -0.75);
        assert_point(inv.transform(m.transform(p)), p.x, p.y);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(TransAffine::scaling(0.0, 1.0).inverse().is_none());
    }
}
