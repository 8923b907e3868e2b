//! Draw-time error model.
//!
//! Every kind here is a programming or configuration defect, never a
//! transient condition: errors are raised synchronously at the point of
//! detection and propagate up through the draw call with no local recovery.
//! A composite gauge may catch one and skip the offending widget; the
//! widgets themselves never do.

use thiserror::Error;

use crate::annotation::AnnotationMode;
use crate::surface::SurfaceFormat;

/// Errors raised while drawing a widget.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DrawError {
    /// Ellipse math hit a near-zero divisor: the requested point is at
    /// infinity and must not be silently approximated.
    #[error("degenerate geometry: point at infinity (cos gamma = {cos_gamma})")]
    DegenerateGeometry { cos_gamma: f64 },

    /// A structural invariant of the requested geometry cannot be met.
    #[error("constraint violation: {0}")]
    ConstraintViolation(&'static str),

    /// A needle end cap outside the butt/round/square set. Unreachable
    /// through [`crate::context::LineCap`], kept so callers with their own
    /// cap vocabulary have a defined failure to map onto.
    #[error("unsupported cap style: {0}")]
    UnsupportedCapStyle(&'static str),

    /// The annotation mode is recognized but its geometry is not
    /// implemented.
    #[error("annotation mode {0:?} is not implemented")]
    UnimplementedAnnotationMode(AnnotationMode),

    /// The backend surface pixel format is outside the conversion contract
    /// expected by the compositor.
    #[error("unsupported surface format {0:?}")]
    UnsupportedSurfaceFormat(SurfaceFormat),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = DrawError::DegenerateGeometry { cos_gamma: 0.0 };
        assert!(e.to_string().contains("point at infinity"));

        let e = DrawError::ConstraintViolation("arc longer than a half turn on a degenerate ellipse");
        assert!(e.to_string().starts_with("constraint violation"));

        let e = DrawError::UnsupportedCapStyle("triangle");
        assert!(e.to_string().contains("triangle"));

        let e = DrawError::UnimplementedAnnotationMode(AnnotationMode::Rotated);
        assert!(e.to_string().contains("Rotated"));

        let e = DrawError::UnsupportedSurfaceFormat(SurfaceFormat::Rgb24);
        assert!(e.to_string().contains("Rgb24"));
    }
}
