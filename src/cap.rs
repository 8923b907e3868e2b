//! Needle pivot cap.
//!
//! A [`Cap`] is a circular bordered ornament covering the needle pivot: a
//! diagonal linear gradient across the 45 degree axis, masked to a flat
//! disc by a radial gradient that is opaque inside radius 1 and cuts off
//! abruptly just past it. The gradient pair is built once on first draw
//! and reused; rebuilding it would change nothing but speed.

use std::cell::OnceCell;

use crate::basics::{Coordinate, COS45, TAU};
use crate::bordered::{BorderOptions, BorderedShape};
use crate::color::{Rgba, BLACK};
use crate::context::{Context, GradientStop, LinearGradient, RadialGradient};
use crate::error::DrawError;

/// A circular cap over the needle pivot.
#[derive(Debug)]
pub struct Cap {
    pub centre: Coordinate,
    pub radius: f64,
    pub cfrom: Rgba,
    pub cto: Rgba,
    pub border: BorderOptions,
    paint: OnceCell<(LinearGradient, RadialGradient)>,
}

impl Cap {
    pub fn new(centre: Coordinate, radius: f64, cfrom: Rgba, cto: Rgba) -> Self {
        Self {
            centre,
            radius,
            cfrom,
            cto,
            border: BorderOptions::default(),
            paint: OnceCell::new(),
        }
    }

    fn paint(&self) -> &(LinearGradient, RadialGradient) {
        self.paint.get_or_init(|| {
            let pattern = LinearGradient {
                from: Coordinate::new(-COS45, -COS45),
                to: Coordinate::new(COS45, COS45),
                stops: vec![
                    GradientStop { offset: 0.0, colour: self.cfrom },
                    GradientStop { offset: 1.0, colour: self.cto },
                ],
            };

            let mask = RadialGradient {
                inner_centre: Coordinate::new(0.0, 0.0),
                inner_radius: 0.0,
                outer_centre: Coordinate::new(0.0, 0.0),
                outer_radius: 1.0,
                stops: vec![
                    GradientStop { offset: 0.0, colour: BLACK },
                    GradientStop { offset: 1.0, colour: BLACK },
                    GradientStop { offset: 1.01, colour: BLACK.with_alpha(0.0) },
                ],
            };

            (pattern, mask)
        })
    }
}

impl BorderedShape for Cap {
    fn border(&self) -> BorderOptions {
        self.border
    }

    fn set_contents_path(&self, ctx: &mut dyn Context) {
        ctx.arc(self.centre.x, self.centre.y, self.radius, 0.0, TAU);
    }

    fn draw_contents(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        let (pattern, mask) = self.paint();

        // Recentre pattern space on the disc and scale both axes to its
        // radius, so the unit gradients cover it exactly.
        let bounds = ctx.path_extents();
        let radius = 0.5 * bounds.width();

        let mut matrix = ctx.matrix();
        matrix.sx = radius;
        matrix.sy = radius;
        matrix.tx += 0.5 * (bounds.x1 + bounds.x2);
        matrix.ty += 0.5 * (bounds.y1 + bounds.y2);
        ctx.set_matrix(matrix);

        ctx.set_source_linear_gradient(pattern);
        ctx.mask_radial_gradient(mask);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
