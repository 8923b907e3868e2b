//! Drawing surface boundary.
//!
//! The engine draws through [`Context`], a 2D raster context with a path
//! API, an affine transform stack, and solid/gradient paint. The concrete
//! backend is an external collaborator; nothing in this crate assumes one
//! beyond this capability set. Text never goes through a dedicated context
//! call: a [`crate::font_face::FontFace`] draws glyphs with the same path
//! operations.
//!
//! Angle conventions follow the usual raster layout: y grows downwards and
//! positive arc sweeps are clockwise on screen, counter-clockwise in the
//! mathematical sense of the coordinates.

use crate::basics::{Coordinate, Rect};
use crate::color::Rgba;
use crate::trans_affine::TransAffine;

// ============================================================================
// Stroke and gradient descriptors
// ============================================================================

/// Line cap style for stroked segments and needle ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Square,
    Round,
}

/// One colour stop of a gradient. Offsets run `0..=1` along the gradient
/// axis; an offset just past 1 describes the abrupt edge of a padded
/// gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub colour: Rgba,
}

/// A linear gradient between two points in pattern space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: Coordinate,
    pub to: Coordinate,
    pub stops: Vec<GradientStop>,
}

/// A radial gradient between two circles in pattern space.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub inner_centre: Coordinate,
    pub inner_radius: f64,
    pub outer_centre: Coordinate,
    pub outer_radius: f64,
    pub stops: Vec<GradientStop>,
}

// ============================================================================
// Recorded paths
// ============================================================================

/// One flattened path segment in user-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Coordinate),
    LineTo(Coordinate),
    Close,
}

/// A path copied out of a context, in the user space current at copy
/// time. Re-appending it under a different transform rescales it; the
/// bordered compositor leans on exactly this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

// ============================================================================
// Context
// ============================================================================

/// The 2D drawing surface the widgets render onto.
///
/// Transform semantics match the usual stack discipline: `save` pushes the
/// current state, `restore` pops it, and `translate`/`rotate`/`scale`
/// compose onto the current matrix so they apply to subsequently appended
/// geometry first.
pub trait Context {
    // ------------------------------------------------------------------
    // Path construction
    // ------------------------------------------------------------------

    /// Discard the current path.
    fn new_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Append a counter-clockwise circular arc. If the end angle is less
    /// than the start angle it is advanced by full turns first. A current
    /// point, if any, is joined to the arc start with a line.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, a2: f64);

    /// Append a clockwise circular arc; the mirror of [`Context::arc`].
    fn arc_negative(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, a2: f64);

    fn close_path(&mut self);

    /// Bounding box of the current path in current user space.
    fn path_extents(&self) -> Rect;

    /// Copy the current path out, in current user space.
    fn copy_path(&self) -> Path;

    /// Append a previously copied path under the current transform.
    fn append_path(&mut self, path: &Path);

    // ------------------------------------------------------------------
    // Transform stack
    // ------------------------------------------------------------------

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    fn rotate(&mut self, angle: f64);

    fn scale(&mut self, sx: f64, sy: f64);

    /// The current transform matrix.
    fn matrix(&self) -> TransAffine;

    /// Replace the current transform matrix outright.
    fn set_matrix(&mut self, matrix: TransAffine);

    // ------------------------------------------------------------------
    // Paint
    // ------------------------------------------------------------------

    fn set_source_rgba(&mut self, colour: Rgba);

    fn set_source_linear_gradient(&mut self, gradient: &LinearGradient);

    fn set_line_width(&mut self, width: f64);

    fn set_line_cap(&mut self, cap: LineCap);

    /// Stroke the current path with the current source, then clear it.
    fn stroke(&mut self);

    /// Fill the current path with the current source, then clear it.
    fn fill(&mut self);

    /// Paint the current source everywhere the mask gradient's alpha
    /// allows. Does not consume the current path.
    fn mask_radial_gradient(&mut self, mask: &RadialGradient);
}

/// Run `f` between a `save`/`restore` pair.
///
/// The restore happens on every exit path, including early `?` returns
/// inside `f`, so a failing widget cannot leak transform state into the
/// next widget of a draw list.
pub fn saved<C, R>(ctx: &mut C, f: impl FnOnce(&mut C) -> R) -> R
where
    C: Context + ?Sized,
{
    ctx.save();
    let result = f(ctx);
    ctx.restore();
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingContext};

    #[test]
    fn test_saved_restores_on_success() {
        let mut ctx = RecordingContext::new();
        let before = ctx.matrix();
        saved(&mut ctx, |ctx| {
            ctx.translate(5.0, 5.0);
            ctx.rotate(1.0);
        });
        assert_eq!(ctx.matrix(), before);
    }

    #[test]
    fn test_saved_restores_on_error() {
        let mut ctx = RecordingContext::new();
        let before = ctx.matrix();
        let result: Result<(), ()> = saved(&mut ctx, |ctx| {
            ctx.scale(3.0, 3.0);
            Err(())
        });
        assert!(result.is_err());
        assert_eq!(ctx.matrix(), before);
        assert_eq!(
            ctx.ops().first(),
            Some(&Op::Save),
            "save must be recorded before the body"
        );
        assert_eq!(ctx.ops().last(), Some(&Op::Restore));
    }
}
