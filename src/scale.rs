//! Tick scales along an elliptic band.
//!
//! An [`EllipticScale`] strokes radial tick marks between an inner and an
//! outer ellipse at a fixed angular cadence. The `first`/`skipped` pair of
//! [`TickParameters`] drives a repeating counter that drops every
//! `skipped`-th tick, which is how a fine minor scale leaves gaps for the
//! major ticks drawn over it.

use crate::basics::{tiny, Coordinate};
use crate::color::{Rgba, WHITE};
use crate::context::{saved, Context, LineCap};
use crate::ellipse::EllipseParameters;
use crate::error::DrawError;

/// Angular cadence of a tick scale or annotation ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickParameters {
    /// Visual angle between consecutive ticks.
    pub step: f64,
    /// Starting value of the skip counter.
    pub first: u32,
    /// Counter value at which a tick is dropped and the counter resets.
    pub skipped: u32,
}

impl TickParameters {
    pub const fn new(step: f64, first: u32, skipped: u32) -> Self {
        Self { step, first, skipped }
    }
}

/// Stroke styling applied before a run of segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    pub width: f64,
    pub colour: Rgba,
    pub cap: LineCap,
}

impl LineParameters {
    pub const fn new(width: f64) -> Self {
        Self {
            width,
            colour: WHITE,
            cap: LineCap::Butt,
        }
    }

    pub fn apply_to(&self, ctx: &mut dyn Context) {
        ctx.set_source_rgba(self.colour);
        ctx.set_line_cap(self.cap);
        ctx.set_line_width(self.width);
    }
}

/// Radial tick marks between two concentric ellipses.
#[derive(Debug, Clone)]
pub struct EllipticScale {
    pub inner: EllipseParameters,
    pub outer: EllipseParameters,
    pub tick: TickParameters,
    pub line: LineParameters,
    pub start: f64,
    /// Swept angle plus a small margin so the tick at the exact end of
    /// the span is not lost to rounding.
    length: f64,
}

impl EllipticScale {
    pub fn new(
        inner: EllipseParameters,
        outer: EllipseParameters,
        tick: TickParameters,
        line: LineParameters,
        length: f64,
    ) -> Self {
        Self {
            inner,
            outer,
            tick,
            line,
            start: 0.0,
            length: length + tick.step * 0.05,
        }
    }

    /// Tick positions that fit the span, used as the iteration ceiling.
    /// A step within the degeneracy tolerance of zero fits no cadence at
    /// all, rather than an unbounded one.
    fn tick_count(&self) -> usize {
        if self.tick.step > 0.0 && !tiny(self.tick.step) {
            (self.length / self.tick.step).ceil() as usize + 1
        } else {
            0
        }
    }

    pub fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        tracing::trace!(start = self.start, length = self.length, "scale draw");

        saved(ctx, |ctx| {
            ctx.new_path();
            self.line.apply_to(ctx);

            let mut thick = self.tick.first;

            for i in 0..self.tick_count() {
                let value = self.tick.step * i as f64;
                if value >= self.length {
                    break;
                }

                if thick == self.tick.skipped {
                    thick = 1;
                    continue;
                }
                thick += 1;

                let angle = self.start + value;
                let from = self.tick_point(&self.inner, angle)?;
                let to = self.tick_point(&self.outer, angle)?;

                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
            }

            ctx.stroke();
            Ok(())
        })
    }

    fn tick_point(
        &self,
        ellipse: &EllipseParameters,
        visual: f64,
    ) -> Result<Coordinate, DrawError> {
        ellipse.get_point(ellipse.native_angle(visual))
    }
}

// ============================================================================
// Tests
// ============================================================================
