//! Value-driven needle.
//!
//! A [`Needle`] renders a filled polygon pointing at
//! `start + value() * length`, with independently shaped tip and rear
//! ends. The value provider is sampled fresh on every draw, so the needle
//! tracks a live external signal without owning its update cadence.

use crate::basics::Coordinate;
use crate::color::Rgba;
use crate::context::{saved, Context, LineCap};
use crate::error::DrawError;

/// Shape of one needle end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleParameter {
    pub width: f64,
    /// Distance of this end from the rotation centre.
    pub length: f64,
    pub cap: LineCap,
}

impl NeedleParameter {
    pub const fn new(width: f64, length: f64) -> Self {
        Self {
            width,
            length,
            cap: LineCap::Butt,
        }
    }

    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }
}

/// Scalar source a needle or annotation reads its position from.
pub type ValueProvider = Box<dyn Fn() -> f64>;

/// A gauge needle rotating about `centre`.
pub struct Needle {
    pub centre: Coordinate,
    value: ValueProvider,
    pub start: f64,
    pub length: f64,
    pub tip: NeedleParameter,
    pub rear: NeedleParameter,
    pub colour: Rgba,
}

impl Needle {
    pub fn new(
        centre: Coordinate,
        value: ValueProvider,
        start: f64,
        length: f64,
        tip: NeedleParameter,
        rear: NeedleParameter,
        colour: Rgba,
    ) -> Self {
        Self {
            centre,
            value,
            start,
            length,
            tip,
            rear,
            colour,
        }
    }

    pub fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        let value = (self.value)();
        tracing::trace!(value, "needle draw");

        saved(ctx, |ctx| {
            ctx.new_path();
            ctx.translate(self.centre.x, self.centre.y);
            ctx.rotate(self.start + value * self.length);

            self.trace_tip(ctx);
            self.trace_rear(ctx);

            ctx.close_path();
            ctx.set_source_rgba(self.colour);
            ctx.fill();
        });
        Ok(())
    }

    /// Outline of the tip end, drawn from the negative-y side across to
    /// the positive-y side.
    fn trace_tip(&self, ctx: &mut dyn Context) {
        let tip = self.tip;
        let rear = self.rear;
        match tip.cap {
            LineCap::Butt => {
                ctx.move_to(tip.length, -tip.radius());
                ctx.line_to(tip.length, tip.radius());
            }
            LineCap::Round => {
                // The flank lines are tangents of the end disc, so the
                // arc starts where the tangent from the rear disc meets
                // it.
                let angle = f64::atan2(
                    tip.radius() - rear.radius(),
                    tip.length + rear.length,
                );
                let (sin_angle, cos_angle) = angle.sin_cos();

                ctx.move_to(
                    tip.length + tip.radius() * sin_angle,
                    -tip.radius() * cos_angle,
                );
                ctx.arc(
                    tip.length,
                    0.0,
                    tip.radius(),
                    angle - std::f64::consts::FRAC_PI_2,
                    std::f64::consts::FRAC_PI_2 - angle,
                );
                ctx.line_to(
                    tip.length + tip.radius() * sin_angle,
                    tip.radius() * cos_angle,
                );
            }
            LineCap::Square => {
                ctx.move_to(tip.length, -tip.radius());
                ctx.line_to(tip.length + tip.radius() * std::f64::consts::SQRT_2, 0.0);
                ctx.line_to(tip.length, tip.radius());
            }
        }
    }

    /// Outline of the rear end, continuing from the tip's positive-y side
    /// back around to the negative-y side.
    fn trace_rear(&self, ctx: &mut dyn Context) {
        let tip = self.tip;
        let rear = self.rear;
        match rear.cap {
            LineCap::Butt => {
                ctx.line_to(-rear.length, rear.radius());
                ctx.line_to(-rear.length, -rear.radius());
            }
            LineCap::Round => {
                let angle = f64::atan2(
                    rear.radius() - tip.radius(),
                    tip.length + rear.length,
                );
                let (sin_angle, cos_angle) = angle.sin_cos();

                ctx.line_to(
                    -rear.length - rear.radius() * sin_angle,
                    rear.radius() * cos_angle,
                );
                ctx.arc(
                    -rear.length,
                    0.0,
                    rear.radius(),
                    std::f64::consts::FRAC_PI_2 - angle,
                    angle - std::f64::consts::FRAC_PI_2,
                );
                ctx.line_to(
                    -rear.length - rear.radius() * sin_angle,
                    -rear.radius() * cos_angle,
                );
            }
            LineCap::Square => {
                ctx.line_to(-rear.length, rear.radius());
                ctx.line_to(-rear.length - rear.radius() * std::f64::consts::SQRT_2, 0.0);
                ctx.line_to(-rear.length, -rear.radius());
            }
        }
    }
}

impl std::fmt::Debug for Needle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Needle")
            .field("centre", &self.centre)
            .field("start", &self.start)
            .field("length", &self.length)
            .field("tip", &self.tip)
            .field("rear", &self.rear)
            .field("colour", &self.colour)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
