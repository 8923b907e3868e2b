//! Bounded elliptic arc.
//!
//! An [`Arc`] is a span of an [`EllipseParameters`] starting at a native
//! angle and extending by a signed length; the sign selects the traversal
//! direction. Drawing appends to the context's current path without
//! stroking or filling, so arcs compose into larger outlines.

use crate::basics::TAU;
use crate::context::{saved, Context};
use crate::ellipse::EllipseParameters;
use crate::error::DrawError;

/// A bounded span of an ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub ellipse: EllipseParameters,
    /// Start angle, native parametrization.
    pub start: f64,
    /// Signed angular length; negative runs the arc backwards.
    pub length: f64,
}

impl Arc {
    pub const fn new(ellipse: EllipseParameters, start: f64, length: f64) -> Self {
        Self {
            ellipse,
            start,
            length,
        }
    }

    /// The complete ellipse outline.
    pub const fn full(ellipse: EllipseParameters) -> Self {
        Self::new(ellipse, 0.0, TAU)
    }

    /// Append this arc to the current path.
    ///
    /// A zero-length arc is excluded from stroking outright: it returns
    /// without touching the path.
    pub fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        if self.length == 0.0 {
            return Ok(());
        }

        let to = self.start + self.length;

        // End angle in native terms, folded into the rotational direction
        // the sign of `length` asks for. A span of a whole turn or more is
        // pinned to exactly one turn: the native end angle coincides with
        // the start modulo 2pi there, and its rounding direction must not
        // decide between an empty arc and a full circle.
        let mut sweep = self.ellipse.native_angle(to) - self.start;
        if self.length.abs() >= TAU {
            sweep = TAU.copysign(self.length);
        } else if self.length > 0.0 && sweep < 0.0 {
            sweep += TAU;
        } else if self.length < 0.0 && sweep > 0.0 {
            sweep -= TAU;
        }
        let end = self.start + sweep;

        if self.ellipse.is_degenerate() {
            // A straight "ellipse" cannot represent more than a half turn
            // unambiguously.
            if self.length.abs() > std::f64::consts::PI {
                return Err(DrawError::ConstraintViolation(
                    "arc longer than a half turn on a degenerate ellipse",
                ));
            }
            let from = self.ellipse.get(self.start)?;
            let until = self.ellipse.get(to)?;
            ctx.line_to(from.x, from.y);
            ctx.line_to(until.x, until.y);
            return Ok(());
        }

        tracing::trace!(start = self.start, end, "arc segment");

        saved(ctx, |ctx| {
            ctx.translate(self.ellipse.centre.x, self.ellipse.centre.y);
            ctx.rotate(self.ellipse.angle);
            ctx.scale(1.0 / self.ellipse.major_curve, self.ellipse.minor_radius);
            if self.length > 0.0 {
                ctx.arc(0.0, 0.0, 1.0, self.start, end);
            } else {
                ctx.arc_negative(0.0, 0.0, 1.0, self.start, end);
            }
        });
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
