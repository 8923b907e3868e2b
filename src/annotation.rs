//! Text labels along an elliptic band.
//!
//! An [`EllipticAnnotation`] walks the same tick cadence as the scale it
//! accompanies and draws one string per non-skipped position, scaled to a
//! fixed target height and placed per [`AnnotationMode`]. Only the two
//! "moved" placements are implemented; the remaining enumerants are
//! recognized but drawing with them fails up front, before any surface
//! call, so a misconfigured widget leaves the canvas untouched.

use crate::basics::tiny;
use crate::color::Rgba;
use crate::context::{saved, Context};
use crate::ellipse::EllipseParameters;
use crate::error::DrawError;
use crate::font_face::FontFace;
use crate::scale::TickParameters;

/// Label placement relative to its tick position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationMode {
    /// Offset toward the ellipse interior by half the label size
    /// projected along the tick angle.
    MovedInside,
    MovedOutside,
    /// Centred on the tick point.
    MovedCentred,
    Rotated,
    Skewed,
}

impl AnnotationMode {
    fn supported(self) -> Result<(), DrawError> {
        match self {
            AnnotationMode::MovedInside | AnnotationMode::MovedCentred => Ok(()),
            other => Err(DrawError::UnimplementedAnnotationMode(other)),
        }
    }
}

impl std::fmt::Display for AnnotationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnnotationMode::MovedInside => "moved-inside",
            AnnotationMode::MovedOutside => "moved-outside",
            AnnotationMode::MovedCentred => "moved-centred",
            AnnotationMode::Rotated => "rotated",
            AnnotationMode::Skewed => "skewed",
        };
        f.write_str(name)
    }
}

/// Target label height in logical (0..1 canvas) units.
const LABEL_HEIGHT: f64 = 0.05;
/// Horizontal squeeze applied to every label.
const LABEL_STRETCH: f64 = 0.8;

/// A ring of text labels at tick positions.
pub struct EllipticAnnotation {
    pub ellipse: EllipseParameters,
    pub tick: TickParameters,
    pub colour: Rgba,
    face: Box<dyn FontFace>,
    pub mode: AnnotationMode,
    pub texts: Vec<String>,
    pub start: f64,
    original_length: f64,
    /// Span plus the epsilon margin, like the scale's.
    length: f64,
}

impl EllipticAnnotation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ellipse: EllipseParameters,
        tick: TickParameters,
        colour: Rgba,
        face: Box<dyn FontFace>,
        mode: AnnotationMode,
        texts: Vec<String>,
        start: f64,
        length: f64,
    ) -> Self {
        Self {
            ellipse,
            tick,
            colour,
            face,
            mode,
            texts,
            start,
            original_length: length,
            length: length.abs() + tick.step * 0.05,
        }
    }

    // Iteration ceiling; a step within the degeneracy tolerance of zero
    // fits no cadence, like the scale's.
    fn tick_count(&self) -> usize {
        if self.tick.step > 0.0 && !tiny(self.tick.step) {
            (self.length / self.tick.step).ceil() as usize + 1
        } else {
            0
        }
    }

    pub fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        self.mode.supported()?;
        tracing::trace!(mode = %self.mode, labels = self.texts.len(), "annotation draw");

        ctx.set_source_rgba(self.colour);
        let mut thick = self.tick.first;

        for i in 0..self.tick_count() {
            let mut angle = self.tick.step * i as f64;
            if angle > self.length {
                break;
            }
            if self.original_length < 0.0 {
                angle = -angle;
            }

            if thick == self.tick.skipped {
                thick = 1;
                continue;
            }
            thick += 1;

            // Labels are indexed by tick position, skipped ones included.
            let Some(text) = self.texts.get(i) else {
                break;
            };

            let angle = self.start + angle;
            let point = self.ellipse.get_point(self.ellipse.native_angle(angle))?;
            let extents = self.face.text_extents(ctx, text);

            saved(ctx, |ctx| {
                if extents.height <= 0.0 {
                    return;
                }
                let gain = LABEL_HEIGHT / extents.height;

                ctx.translate(point.x, point.y);
                if self.mode == AnnotationMode::MovedInside {
                    ctx.translate(
                        -extents.width * 0.5 * gain * angle.cos(),
                        -extents.height * 0.5 * gain * angle.sin(),
                    );
                }
                ctx.scale(gain * LABEL_STRETCH, gain);
                ctx.move_to(
                    -(extents.x_bearing + extents.width) * 0.5,
                    -(extents.y_bearing + extents.height) * 0.5,
                );
                self.face.show(ctx, text);
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for EllipticAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EllipticAnnotation")
            .field("ellipse", &self.ellipse)
            .field("mode", &self.mode)
            .field("texts", &self.texts)
            .field("start", &self.start)
            .field("length", &self.original_length)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{Coordinate, PI};
    use crate::font_face::TextExtents;
    use crate::recording::{Op, RecordingContext};

    /// Fixed-metrics font: every glyph is 0.5 wide and 1.0 tall.
    struct BlockFace;

    impl FontFace for BlockFace {
        fn text_extents(&self, _ctx: &mut dyn Context, text: &str) -> TextExtents {
            let width = 0.5 * text.chars().count() as f64;
            TextExtents {
                x_bearing: 0.0,
                y_bearing: -1.0,
                width,
                height: 1.0,
                x_advance: width,
                y_advance: 0.0,
            }
        }

        fn show(&self, ctx: &mut dyn Context, text: &str) {
            // Stand-in for glyph rendering: trace the advance box.
            let extents = TextExtents {
                x_bearing: 0.0,
                y_bearing: -1.0,
                width: 0.5 * text.chars().count() as f64,
                height: 1.0,
                x_advance: 0.0,
                y_advance: 0.0,
            };
            ctx.line_to(extents.width, 0.0);
        }
    }

    /// Font that measures everything as zero-height.
    struct EmptyFace;

    impl FontFace for EmptyFace {
        fn text_extents(&self, _ctx: &mut dyn Context, _text: &str) -> TextExtents {
            TextExtents {
                x_bearing: 0.0,
                y_bearing: 0.0,
                width: 0.0,
                height: 0.0,
                x_advance: 0.0,
                y_advance: 0.0,
            }
        }

        fn show(&self, ctx: &mut dyn Context, _text: &str) {
            ctx.line_to(1.0, 1.0);
        }
    }

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| (i * 10).to_string()).collect()
    }

    fn annotation(mode: AnnotationMode, face: Box<dyn FontFace>) -> EllipticAnnotation {
        EllipticAnnotation::new(
            EllipseParameters::circle(Coordinate::new(0.0, 0.0), 0.41),
            TickParameters::new(PI / 6.0, 1, 1000),
            crate::color::BLACK,
            face,
            mode,
            labels(12),
            0.0,
            PI,
        )
    }

    #[test]
    fn test_unimplemented_mode_leaves_surface_untouched() {
        for mode in [
            AnnotationMode::MovedOutside,
            AnnotationMode::Rotated,
            AnnotationMode::Skewed,
        ] {
            let mut ctx = RecordingContext::new();
            let err = annotation(mode, Box::new(BlockFace))
                .draw(&mut ctx)
                .unwrap_err();
            assert!(matches!(err, DrawError::UnimplementedAnnotationMode(m) if m == mode));
            assert!(ctx.ops().is_empty());
        }
    }

    #[test]
    fn test_centred_mode_draws_one_label_per_tick() {
        let mut ctx = RecordingContext::new();
        annotation(AnnotationMode::MovedCentred, Box::new(BlockFace))
            .draw(&mut ctx)
            .unwrap();

        // pi span at pi/6 cadence: ticks 0..=6, one label each.
        let shown = ctx
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::MoveTo { .. }))
            .count();
        assert_eq!(shown, 7);
    }

    #[test]
    fn test_moved_inside_offsets_towards_interior() {
        let tick = TickParameters::new(PI / 6.0, 1, 1000);
        let run = |mode| {
            let mut ctx = RecordingContext::new();
            EllipticAnnotation::new(
                EllipseParameters::circle(Coordinate::new(0.0, 0.0), 0.41),
                tick,
                crate::color::BLACK,
                Box::new(BlockFace),
                mode,
                labels(1),
                0.0,
                PI,
            )
            .draw(&mut ctx)
            .unwrap();
            ctx.ops()
                .iter()
                .filter_map(|op| match op {
                    Op::Translate { dx, dy } => Some((*dx, *dy)),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };

        let centred = run(AnnotationMode::MovedCentred);
        let inside = run(AnnotationMode::MovedInside);
        assert_eq!(centred.len(), 1);
        assert_eq!(inside.len(), 2);
        // At visual angle 0 the inward shift is purely along -x.
        let (dx, dy) = inside[1];
        assert!(dx < 0.0);
        assert!(dy.abs() < 1e-12);
    }

    #[test]
    fn test_tiny_step_draws_no_labels() {
        let mut ctx = RecordingContext::new();
        EllipticAnnotation::new(
            EllipseParameters::circle(Coordinate::new(0.0, 0.0), 0.41),
            TickParameters::new(1e-12, 1, 1000),
            crate::color::BLACK,
            Box::new(BlockFace),
            AnnotationMode::MovedCentred,
            labels(12),
            0.0,
            PI,
        )
        .draw(&mut ctx)
        .unwrap();

        assert!(!ctx.ops().iter().any(|op| matches!(op, Op::MoveTo { .. })));
    }

    #[test]
    fn test_zero_height_text_is_skipped() {
        let mut ctx = RecordingContext::new();
        annotation(AnnotationMode::MovedCentred, Box::new(EmptyFace))
            .draw(&mut ctx)
            .unwrap();

        // Every tick wraps in save/restore but no glyphs are traced.
        assert!(!ctx.ops().iter().any(|op| matches!(op, Op::LineTo { .. })));
        assert!(ctx.ops().iter().any(|op| matches!(op, Op::Save)));
    }

    #[test]
    fn test_runs_out_of_labels_and_stops() {
        let mut ctx = RecordingContext::new();
        EllipticAnnotation::new(
            EllipseParameters::circle(Coordinate::new(0.0, 0.0), 0.41),
            TickParameters::new(PI / 6.0, 1, 1000),
            crate::color::BLACK,
            Box::new(BlockFace),
            AnnotationMode::MovedCentred,
            labels(3),
            0.0,
            PI,
        )
        .draw(&mut ctx)
        .unwrap();

        let shown = ctx
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::MoveTo { .. }))
            .count();
        assert_eq!(shown, 3);
    }

    #[test]
    fn test_negative_length_walks_backwards() {
        let mut ctx = RecordingContext::new();
        EllipticAnnotation::new(
            EllipseParameters::circle(Coordinate::new(0.0, 0.0), 1.0),
            TickParameters::new(PI / 2.0, 1, 1000),
            crate::color::BLACK,
            Box::new(BlockFace),
            AnnotationMode::MovedCentred,
            labels(2),
            0.0,
            -PI,
        )
        .draw(&mut ctx)
        .unwrap();

        // Second label sits at visual angle -pi/2: directly above the
        // centre rather than below.
        let translates: Vec<(f64, f64)> = ctx
            .ops()
            .iter()
            .filter_map(|op| match op {
                Op::Translate { dx, dy } => Some((*dx, *dy)),
                _ => None,
            })
            .collect();
        assert_eq!(translates.len(), 2);
        let (_, dy) = translates[1];
        assert!((dy + 1.0).abs() < 1e-9);
    }
}
