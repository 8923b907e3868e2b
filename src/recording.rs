//! Recording drawing backend.
//!
//! [`RecordingContext`] implements [`Context`] by logging every drawing
//! call into an [`Op`] list while maintaining a real transform stack and a
//! flattened device-space path. The log makes draw-order assertions exact
//! (the bordered compositor's pass sequence is order-sensitive), and the
//! live path state gives `path_extents`/`copy_path`/`append_path` the same
//! user-space semantics a raster backend would: a path copied under one
//! transform and appended under another is rescaled by the ratio of the
//! two.
//!
//! Arcs are flattened into line segments at a fixed angular resolution;
//! extents computed from the flattening are accurate to well under the
//! tolerances the tests assert with.

use crate::basics::{Coordinate, Rect, TAU};
use crate::color::Rgba;
use crate::context::{
    Context, LineCap, LinearGradient, Path, PathSegment, RadialGradient,
};
use crate::trans_affine::TransAffine;

/// Segments per full turn when flattening arcs.
const ARC_STEPS_PER_TURN: f64 = 64.0;

/// One recorded drawing call, with the arguments as the caller passed
/// them (user-space values, before the current transform).
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    NewPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64, a1: f64, a2: f64 },
    ArcNegative { cx: f64, cy: f64, radius: f64, a1: f64, a2: f64 },
    ClosePath,
    AppendPath(Path),
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Rotate { angle: f64 },
    Scale { sx: f64, sy: f64 },
    SetMatrix(TransAffine),
    SetSourceRgba(Rgba),
    SetSourceLinearGradient(LinearGradient),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    Stroke,
    Fill,
    MaskRadialGradient(RadialGradient),
}

/// A [`Context`] that records instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingContext {
    ops: Vec<Op>,
    matrix: TransAffine,
    saved_matrices: Vec<TransAffine>,
    /// Current path, flattened, in device space.
    path: Vec<PathSegment>,
    current_point: Option<Coordinate>,
    subpath_start: Option<Coordinate>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded operation log, oldest first.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    fn to_device(&self, x: f64, y: f64) -> Coordinate {
        self.matrix.transform(Coordinate::new(x, y))
    }

    fn to_user(&self) -> TransAffine {
        self.matrix
            .inverse()
            .expect("recording backend requires an invertible transform")
    }

    fn push_point(&mut self, device: Coordinate) {
        if self.current_point.is_some() {
            self.path.push(PathSegment::LineTo(device));
        } else {
            self.path.push(PathSegment::MoveTo(device));
            self.subpath_start = Some(device);
        }
        self.current_point = Some(device);
    }

    /// Flatten a circular arc into device-space line segments. `sweep`
    /// carries the traversal direction in its sign.
    fn flatten_arc(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, sweep: f64) {
        let steps = ((sweep.abs() / TAU) * ARC_STEPS_PER_TURN).ceil().max(4.0) as usize;
        for i in 0..=steps {
            let theta = a1 + sweep * (i as f64) / (steps as f64);
            let device = self.to_device(
                cx + radius * theta.cos(),
                cy + radius * theta.sin(),
            );
            if i == 0 {
                match self.current_point {
                    // A current point joins to the arc start with a line.
                    Some(_) => self.path.push(PathSegment::LineTo(device)),
                    None => {
                        self.path.push(PathSegment::MoveTo(device));
                        self.subpath_start = Some(device);
                    }
                }
            } else {
                self.path.push(PathSegment::LineTo(device));
            }
            self.current_point = Some(device);
        }
    }

    fn clear_path(&mut self) {
        self.path.clear();
        self.current_point = None;
        self.subpath_start = None;
    }
}

impl Context for RecordingContext {
    fn new_path(&mut self) {
        self.ops.push(Op::NewPath);
        self.clear_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo { x, y });
        let device = self.to_device(x, y);
        self.path.push(PathSegment::MoveTo(device));
        self.subpath_start = Some(device);
        self.current_point = Some(device);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo { x, y });
        let device = self.to_device(x, y);
        self.push_point(device);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, a2: f64) {
        self.ops.push(Op::Arc { cx, cy, radius, a1, a2 });
        let mut end = a2;
        while end < a1 {
            end += TAU;
        }
        self.flatten_arc(cx, cy, radius, a1, end - a1);
    }

    fn arc_negative(&mut self, cx: f64, cy: f64, radius: f64, a1: f64, a2: f64) {
        self.ops.push(Op::ArcNegative { cx, cy, radius, a1, a2 });
        let mut end = a2;
        while end > a1 {
            end -= TAU;
        }
        self.flatten_arc(cx, cy, radius, a1, end - a1);
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
        if self.subpath_start.is_some() {
            self.path.push(PathSegment::Close);
            self.current_point = self.subpath_start;
        }
    }

    fn path_extents(&self) -> Rect {
        let to_user = self.to_user();
        let mut bounds = Rect::empty();
        for segment in &self.path {
            match segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    let user = to_user.transform(*p);
                    bounds.extend(user.x, user.y);
                }
                PathSegment::Close => {}
            }
        }
        if bounds.is_valid() {
            bounds
        } else {
            Rect::new(0.0, 0.0, 0.0, 0.0)
        }
    }

    fn copy_path(&self) -> Path {
        let to_user = self.to_user();
        let segments = self
            .path
            .iter()
            .map(|segment| match segment {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(to_user.transform(*p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(to_user.transform(*p)),
                PathSegment::Close => PathSegment::Close,
            })
            .collect();
        Path { segments }
    }

    fn append_path(&mut self, path: &Path) {
        self.ops.push(Op::AppendPath(path.clone()));
        for segment in &path.segments {
            match segment {
                PathSegment::MoveTo(p) => {
                    let device = self.matrix.transform(*p);
                    self.path.push(PathSegment::MoveTo(device));
                    self.subpath_start = Some(device);
                    self.current_point = Some(device);
                }
                PathSegment::LineTo(p) => {
                    let device = self.matrix.transform(*p);
                    self.push_point(device);
                }
                PathSegment::Close => {
                    self.path.push(PathSegment::Close);
                    self.current_point = self.subpath_start;
                }
            }
        }
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
        self.saved_matrices.push(self.matrix);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
        if let Some(matrix) = self.saved_matrices.pop() {
            self.matrix = matrix;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(Op::Translate { dx, dy });
        self.matrix.premultiply(&TransAffine::translation(dx, dy));
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate { angle });
        self.matrix.premultiply(&TransAffine::rotation(angle));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(Op::Scale { sx, sy });
        self.matrix.premultiply(&TransAffine::scaling(sx, sy));
    }

    fn matrix(&self) -> TransAffine {
        self.matrix
    }

    fn set_matrix(&mut self, matrix: TransAffine) {
        self.ops.push(Op::SetMatrix(matrix));
        self.matrix = matrix;
    }

    fn set_source_rgba(&mut self, colour: Rgba) {
        self.ops.push(Op::SetSourceRgba(colour));
    }

    fn set_source_linear_gradient(&mut self, gradient: &LinearGradient) {
        self.ops.push(Op::SetSourceLinearGradient(gradient.clone()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(Op::SetLineCap(cap));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
        self.clear_path();
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
        self.clear_path();
    }

    fn mask_radial_gradient(&mut self, mask: &RadialGradient) {
        self.ops.push(Op::MaskRadialGradient(mask.clone()));
        // Masking paints the source; the current path is untouched.
    }
}

// ============================================================================
// Tests
// ============================================================================
