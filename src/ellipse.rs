//! Ellipse parametrization.
//!
//! An ellipse is encoded by its centre, the curvature of the major axis
//! (`1 / semi-major-axis`), the minor radius, and a rotation. Zero
//! curvature is the degenerate case: the "ellipse" collapses to a straight
//! line through the centre at the given rotation, and points on it are
//! found by intersecting a ray with that line.
//!
//! Two kinds of angle appear throughout. The *visual* angle is the
//! clock-style angle a caller means; the *native* angle is the parameter
//! fed to the trigonometric point formulas. [`EllipseParameters::native_angle`]
//! converts visual to native; the `get_*` accessors all take native
//! angles.

use crate::basics::{tiny, Coordinate};
use crate::error::DrawError;

/// One ellipse, or its degenerate linear case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParameters {
    pub centre: Coordinate,
    /// Curvature of the major axis, `1 / semi-major-axis`. Zero (within
    /// tolerance) means the degenerate straight-line case.
    pub major_curve: f64,
    pub minor_radius: f64,
    /// Rotation of the major axis, radians.
    pub angle: f64,
}

impl EllipseParameters {
    pub const fn new(centre: Coordinate, major_curve: f64, minor_radius: f64, angle: f64) -> Self {
        Self {
            centre,
            major_curve,
            minor_radius,
            angle,
        }
    }

    /// An unrotated circle of the given radius.
    pub fn circle(centre: Coordinate, radius: f64) -> Self {
        Self::new(centre, 1.0 / radius, radius, 0.0)
    }

    /// Degeneracy test: a zero-curvature major axis collapses the ellipse
    /// to a line.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        tiny(self.major_curve)
    }

    /// Convert a visual angle to this ellipse's native parametrization
    /// angle.
    pub fn native_angle(&self, visual: f64) -> f64 {
        if self.is_degenerate() {
            return visual - self.angle;
        }
        let (sin_ellipse, cos_ellipse) = self.angle.sin_cos();
        let (sin_angle, cos_angle) = visual.sin_cos();
        (sin_ellipse * cos_angle + cos_ellipse * sin_angle).atan2(
            self.major_curve * self.minor_radius * (cos_ellipse * cos_angle - sin_ellipse * sin_angle),
        )
    }

    /// Degenerate-branch divisor: the angle `beta` of the requested ray
    /// and the cosine between that ray and the line's normal. A near-zero
    /// cosine means the ray never meets the line: the point is at
    /// infinity.
    fn cos_gamma(&self, angle: f64) -> Result<(f64, f64), DrawError> {
        let beta = self.angle + angle;
        let cos_gamma = (std::f64::consts::FRAC_PI_2 + self.angle - beta).cos();
        if tiny(cos_gamma) {
            return Err(DrawError::DegenerateGeometry { cos_gamma });
        }
        Ok((beta, cos_gamma))
    }

    /// X coordinate of the boundary point at a native angle.
    pub fn get_x(&self, angle: f64) -> Result<f64, DrawError> {
        if self.is_degenerate() {
            let (beta, cos_gamma) = self.cos_gamma(angle)?;
            Ok(self.centre.x + self.minor_radius * beta.cos() / cos_gamma)
        } else {
            let (sin_angle, cos_angle) = angle.sin_cos();
            Ok(self.centre.x + cos_angle * self.angle.cos() / self.major_curve
                - sin_angle * self.angle.sin() * self.minor_radius)
        }
    }

    /// Y coordinate of the boundary point at a native angle.
    pub fn get_y(&self, angle: f64) -> Result<f64, DrawError> {
        if self.is_degenerate() {
            let (beta, cos_gamma) = self.cos_gamma(angle)?;
            Ok(self.centre.y + self.minor_radius * beta.sin() / cos_gamma)
        } else {
            let (sin_angle, cos_angle) = angle.sin_cos();
            Ok(self.centre.y + cos_angle * self.angle.sin() / self.major_curve
                + sin_angle * self.angle.cos() * self.minor_radius)
        }
    }

    /// Absolute boundary point at a native angle, via the closed-form
    /// per-coordinate expressions.
    pub fn get(&self, angle: f64) -> Result<Coordinate, DrawError> {
        Ok(Coordinate::new(self.get_x(angle)?, self.get_y(angle)?))
    }

    /// Absolute boundary point at a native angle.
    pub fn get_point(&self, angle: f64) -> Result<Coordinate, DrawError> {
        Ok(self.centre.add(self.get_relative_point(angle)?))
    }

    /// Boundary point at a native angle, relative to the centre.
    pub fn get_relative_point(&self, angle: f64) -> Result<Coordinate, DrawError> {
        if self.is_degenerate() {
            let (beta, cos_gamma) = self.cos_gamma(angle)?;
            Ok(Coordinate::new(
                self.minor_radius * beta.cos() / cos_gamma,
                self.minor_radius * beta.sin() / cos_gamma,
            ))
        } else {
            let (sin_angle, cos_angle) = angle.sin_cos();
            let (sin_ellipse, cos_ellipse) = self.angle.sin_cos();
            Ok(Coordinate::new(
                cos_angle * cos_ellipse / self.major_curve
                    - sin_angle * sin_ellipse * self.minor_radius,
                cos_angle * sin_ellipse / self.major_curve
                    + sin_angle * cos_ellipse * self.minor_radius,
            ))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{PI, TAU};

    const ORIGIN: Coordinate = Coordinate::new(0.0, 0.0);

    #[test]
    fn test_degenerate_native_angle_is_offset_only() {
        let line = EllipseParameters::new(ORIGIN, 0.0, 0.5, 0.3);
        for i in 0..32 {
            let phi = i as f64 * TAU / 32.0;
            assert_eq!(line.native_angle(phi), phi - 0.3);
        }
    }

    #[test]
    fn test_circle_native_angle_matches_visual() {
        // For a circle the parametrization is the identity (mod full
        // turns): major_curve * minor_radius == 1 and angle == 0.
        let circle = EllipseParameters::circle(ORIGIN, 0.25);
        for i in 0..16 {
            let phi = -PI + i as f64 * PI / 8.0 + 0.01;
            let native = circle.native_angle(phi);
            let diff = (native - phi).rem_euclid(TAU);
            assert!(
                diff < 1e-9 || (TAU - diff) < 1e-9,
                "phi={phi} native={native}"
            );
        }
    }

    #[test]
    fn test_circle_points_at_radius() {
        let centre = Coordinate::new(0.5, 0.5);
        let circle = EllipseParameters::circle(centre, 0.43);
        for i in 0..24 {
            let theta = i as f64 * TAU / 24.0;
            let p = circle.get_point(theta).unwrap();
            assert!((p.distance_to(centre) - 0.43).abs() < 1e-12);
        }
    }

    #[test]
    fn test_point_satisfies_implicit_equation() {
        // Rotated, genuinely elliptic case: map the point back into the
        // axis frame and check x²/a² + y²/b² == 1.
        let e = EllipseParameters::new(Coordinate::new(1.0, -2.0), 1.0 / 0.8, 0.3, 0.6);
        let a = 1.0 / e.major_curve;
        let b = e.minor_radius;
        for i in 0..24 {
            let phi = i as f64 * TAU / 24.0;
            let p = e.get_point(e.native_angle(phi)).unwrap();
            let local = p.sub(e.centre).rotated(-e.angle);
            let lhs = (local.x / a).powi(2) + (local.y / b).powi(2);
            assert!((lhs - 1.0).abs() < 1e-9, "phi={phi} lhs={lhs}");
        }
    }

    #[test]
    fn test_get_matches_get_point() {
        let e = EllipseParameters::new(Coordinate::new(0.2, 0.7), 1.0 / 0.5, 0.4, 1.1);
        for i in 0..12 {
            let theta = i as f64 * TAU / 12.0;
            let via_get = e.get(theta).unwrap();
            let via_point = e.get_point(theta).unwrap();
            assert!((via_get.x - via_point.x).abs() < 1e-12);
            assert!((via_get.y - via_point.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_get_y_branches_on_curvature_not_angle() {
        // Non-degenerate ellipse queried at native angle 0 must use the
        // elliptic formula, not the straight-line one.
        let e = EllipseParameters::new(ORIGIN, 1.0 / 2.0, 1.0, 0.5);
        let y = e.get_y(0.0).unwrap();
        let expected = 2.0 * 0.5_f64.sin();
        assert!((y - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_points_lie_on_line() {
        // A degenerate "ellipse" at rotation 0 is the horizontal line
        // y = minor_radius: the divisor works out to sin(native angle), so
        // every reachable point has y == minor_radius exactly.
        let line = EllipseParameters::new(ORIGIN, 0.0, 0.25, 0.0);

        let p = line.get_relative_point(PI / 2.0).unwrap();
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 0.25).abs() < 1e-12);

        for i in 1..8 {
            let theta = i as f64 * PI / 8.0;
            let p = line.get_relative_point(theta).unwrap();
            assert!((p.y - 0.25).abs() < 1e-12, "theta={theta} {p:?}");
        }
    }

    #[test]
    fn test_degenerate_point_at_infinity_errors() {
        let line = EllipseParameters::new(ORIGIN, 0.0, 0.25, 0.0);
        // Ray parallel to the line: cos gamma == 0.
        let err = line.get_relative_point(0.0).unwrap_err();
        assert!(matches!(err, DrawError::DegenerateGeometry { .. }));
        assert!(line.get_x(0.0).is_err());
        assert!(line.get_y(0.0).is_err());
        assert!(line.get(0.0).is_err());
    }

    #[test]
    fn test_non_degenerate_never_hits_infinity() {
        let e = EllipseParameters::circle(ORIGIN, 1.0);
        for i in 0..64 {
            let theta = i as f64 * TAU / 64.0;
            assert!(e.get_point(theta).is_ok());
        }
    }
}
