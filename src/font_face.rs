//! Text-shaping provider boundary.
//!
//! Font loading and glyph shaping live outside this crate: callers hand
//! annotations a [`FontFace`] that can measure a string and draw it onto a
//! [`Context`] using ordinary path operations (outline fonts) or whatever
//! the backend supports natively.

use crate::context::Context;

/// Measured extents of a rendered string: bearings are the offset from
/// the origin to the inked box, width/height the inked size, advances
/// the pen movement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

/// A text shaper and renderer supplied by the caller.
pub trait FontFace {
    /// Measure `text` as it would be drawn at the current transform.
    fn text_extents(&self, ctx: &mut dyn Context, text: &str) -> TextExtents;

    /// Draw `text` with its origin at the current point.
    fn show(&self, ctx: &mut dyn Context, text: &str);
}
