//! Bordered-shape compositor.
//!
//! Generic multi-pass border drawing: a shape contributes its outline
//! (`set_contents_path`) and an innermost fill (`draw_contents`); the
//! provided [`BorderedShape::draw`] renders concentric rescaled copies of
//! that outline to fake a flat, inset, outset, or etched bevel out of
//! lightened and darkened strokes.
//!
//! The pass ordering per shadow mode is load-bearing: later passes paint
//! over earlier ones to produce the bevel illusion, and a failure mid
//! sequence aborts the whole widget rather than leave a half-bevelled
//! result on screen.

use crate::basics::{Coordinate, COS45};
use crate::color::{Rgba, RED};
use crate::context::{saved, Context, Path};
use crate::error::DrawError;

/// How much the bevel strokes are lightened or darkened.
const SHADE_BY: f64 = 1.0 / 3.0;

/// Bevel style of a bordered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowMode {
    None,
    In,
    Out,
    EtchedIn,
    EtchedOut,
}

/// Border configuration shared by every bordered shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderOptions {
    pub width: f64,
    /// Shadow thickness; ignored when `width` is zero.
    pub depth: f64,
    pub shadow: ShadowMode,
    pub colour: Rgba,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            width: 0.1,
            depth: 1.0,
            shadow: ShadowMode::None,
            colour: RED,
        }
    }
}

/// Colour variant a single border pass strokes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shade {
    Normal,
    Light,
    Dark,
}

/// One stroked ring of the bevel sequence: shadow shift direction,
/// target boundary size, stroke width, colour variant.
#[derive(Debug, Clone, Copy)]
struct RingPass {
    shift: f64,
    bound: f64,
    width: f64,
    shade: Shade,
}

/// A shape drawn with the multi-pass bevel border.
pub trait BorderedShape {
    /// Border configuration for this shape.
    fn border(&self) -> BorderOptions;

    /// Define the shape's outline as the current path.
    fn set_contents_path(&self, ctx: &mut dyn Context);

    /// Fill the innermost region. Called with the transform already
    /// rescaled to the contents size and the outline appended as the
    /// current path.
    fn draw_contents(&self, ctx: &mut dyn Context) -> Result<(), DrawError>;

    /// Render border rings and contents in the mode's prescribed order.
    fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        let options = self.border();
        let shadow_depth = if options.width > 0.0 {
            options.depth
        } else {
            0.0
        };

        saved(ctx, |ctx| {
            ctx.new_path();
            self.set_contents_path(ctx);
            ctx.close_path();

            let bounds = ctx.path_extents();
            let extent = bounds.width().abs();
            let centre = bounds.centre();

            let inner_size = extent;
            let mut outer_size = extent + 2.0 * options.width;
            let middle_size = match options.shadow {
                ShadowMode::None => outer_size,
                ShadowMode::In => {
                    outer_size += 2.0 * shadow_depth;
                    outer_size
                }
                ShadowMode::Out => {
                    outer_size += shadow_depth;
                    outer_size - 2.0 * shadow_depth
                }
                ShadowMode::EtchedIn | ShadowMode::EtchedOut => {
                    outer_size += 2.0 * shadow_depth;
                    outer_size - 2.0 * shadow_depth
                }
            };

            if inner_size <= 0.0 {
                return Ok(());
            }

            let outline = ctx.copy_path();
            let rings = ring_sequence(&options, shadow_depth, inner_size, middle_size, outer_size);

            tracing::debug!(shadow = ?options.shadow, rings = rings.len(), "bordered draw");

            for ring in &rings {
                saved(ctx, |ctx| {
                    place_ring(ctx, &outline, centre, extent, shadow_depth, ring.shift, ring.bound, ring.width);
                    ctx.set_source_rgba(shade_colour(options.colour, ring.shade));
                    ctx.stroke();
                });
            }

            // The contents pass always comes last, at inner size with no
            // extra stroke width.
            saved(ctx, |ctx| {
                place_ring(ctx, &outline, centre, extent, shadow_depth, 0.0, inner_size, 0.0);
                self.draw_contents(ctx)
            })
        })
    }
}

/// The mode → pass-sequence table. Order matters; see the module docs.
fn ring_sequence(
    options: &BorderOptions,
    shadow_depth: f64,
    inner_size: f64,
    middle_size: f64,
    outer_size: f64,
) -> Vec<RingPass> {
    let middle = RingPass {
        shift: 0.0,
        bound: middle_size,
        width: 0.0,
        shade: Shade::Normal,
    };
    let ring = |shift: f64, bound: f64, shade: Shade| RingPass {
        shift,
        bound,
        width: shadow_depth,
        shade,
    };

    let mut passes = Vec::new();
    match options.shadow {
        ShadowMode::None => {
            if options.width > 0.0 {
                passes.push(middle);
            }
        }
        ShadowMode::In => {
            if options.width > 0.0 {
                passes.push(middle);
            }
            passes.push(ring(-1.0, inner_size + shadow_depth, Shade::Dark));
            passes.push(ring(1.0, inner_size + shadow_depth, Shade::Light));
        }
        ShadowMode::Out => {
            passes.push(ring(-1.0, outer_size - shadow_depth, Shade::Light));
            passes.push(ring(1.0, outer_size - shadow_depth, Shade::Dark));
            if options.width > 0.0 {
                passes.push(middle);
            }
        }
        ShadowMode::EtchedIn => {
            passes.push(ring(-1.0, outer_size - shadow_depth, Shade::Dark));
            passes.push(ring(1.0, outer_size - shadow_depth, Shade::Light));
            if options.width > 0.0 {
                passes.push(middle);
            }
            passes.push(ring(-1.0, inner_size + shadow_depth, Shade::Light));
            passes.push(ring(1.0, inner_size + shadow_depth, Shade::Dark));
        }
        ShadowMode::EtchedOut => {
            passes.push(ring(-1.0, outer_size - shadow_depth, Shade::Light));
            passes.push(ring(1.0, outer_size - shadow_depth, Shade::Dark));
            if options.width > 0.0 {
                passes.push(middle);
            }
            passes.push(ring(-1.0, inner_size + shadow_depth, Shade::Dark));
            passes.push(ring(1.0, inner_size + shadow_depth, Shade::Light));
        }
    }
    passes
}

/// Rescale and shift the cached outline onto the context as the current
/// path, and set the stroke width to `width` in pre-scale units.
#[allow(clippy::too_many_arguments)]
fn place_ring(
    ctx: &mut dyn Context,
    outline: &Path,
    centre: Coordinate,
    extent: f64,
    shadow_depth: f64,
    shift: f64,
    bound: f64,
    width: f64,
) {
    let factor = (bound - width) / extent;
    let offset = shift * shadow_depth * 0.5;

    ctx.new_path();
    ctx.scale(factor, factor);
    ctx.translate(
        centre.x * (1.0 / factor - 1.0) + offset * COS45 / factor,
        centre.y * (1.0 / factor - 1.0) + offset * COS45 / factor,
    );
    ctx.append_path(outline);
    ctx.set_line_width(width / factor);
}

fn shade_colour(base: Rgba, shade: Shade) -> Rgba {
    match shade {
        Shade::Normal => base,
        Shade::Light => base.lighten(SHADE_BY),
        Shade::Dark => base.darken(SHADE_BY),
    }
}

// ============================================================================
// Tests
// ============================================================================
