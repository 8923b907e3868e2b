//! Composite gauges.
//!
//! A [`Gauge`] is a flat, ordered list of widgets drawn back to front
//! onto a shared canvas pre-scaled to 0..1 logical coordinates. Drawing
//! stops at the first widget error; callers that prefer to skip a
//! misconfigured widget can draw the widgets themselves and catch per
//! widget.
//!
//! [`round_gauge_254`] assembles the classic round dial with a 254 degree
//! sweep: black circular face, major and minor tick rings, a red needle
//! and a domed pivot cap.

use crate::annotation::EllipticAnnotation;
use crate::arc::Arc;
use crate::basics::Coordinate;
use crate::bordered::BorderedShape;
use crate::cap::Cap;
use crate::color::{Rgba, BLACK, RED, WHITE};
use crate::context::Context;
use crate::ellipse::EllipseParameters;
use crate::error::DrawError;
use crate::needle::{Needle, NeedleParameter, ValueProvider};
use crate::scale::{EllipticScale, LineParameters, TickParameters};

/// Anything that can draw itself onto a context.
pub trait Widget {
    fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError>;
}

/// A filled elliptic (or pie-slice) face behind a gauge.
#[derive(Debug, Clone)]
pub struct EllipticBackground {
    pub arc: Arc,
    pub colour: Rgba,
}

impl EllipticBackground {
    pub fn new(arc: Arc, colour: Rgba) -> Self {
        Self { arc, colour }
    }
}

impl Widget for EllipticBackground {
    fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        self.arc.draw(ctx)?;
        ctx.set_source_rgba(self.colour);
        ctx.fill();
        Ok(())
    }
}

impl Widget for EllipticScale {
    fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        EllipticScale::draw(self, ctx)
    }
}

impl Widget for Needle {
    fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        Needle::draw(self, ctx)
    }
}

impl Widget for Cap {
    fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        BorderedShape::draw(self, ctx)
    }
}

impl Widget for EllipticAnnotation {
    fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        EllipticAnnotation::draw(self, ctx)
    }
}

/// An ordered draw list of widgets.
#[derive(Default)]
pub struct Gauge {
    pub widgets: Vec<Box<dyn Widget>>,
}

impl Gauge {
    pub fn new(widgets: Vec<Box<dyn Widget>>) -> Self {
        Self { widgets }
    }

    pub fn draw(&self, ctx: &mut dyn Context) -> Result<(), DrawError> {
        tracing::debug!(widgets = self.widgets.len(), "gauge draw");
        for widget in &self.widgets {
            widget.draw(ctx)?;
        }
        Ok(())
    }
}

/// The round 254 degree dial: face, 17-sector major ticks, half-step
/// minor ticks, needle, pivot cap.
pub fn round_gauge_254(value: ValueProvider) -> Gauge {
    let sectors = 17.0;
    let length = 254.0_f64.to_radians();
    let start = (-36.0_f64).to_radians();
    let step = length / sectors;

    let centre = Coordinate::new(0.5, 0.5);

    let background = EllipticBackground::new(
        Arc::full(EllipseParameters::circle(centre, 0.5)),
        BLACK,
    );

    let major_ticks = EllipticScale::new(
        EllipseParameters::new(centre, 1.0 / 0.43, 0.43, length),
        EllipseParameters::new(centre, 1.0 / 0.49, 0.49, length),
        TickParameters::new(step, 0, 0),
        LineParameters::new(6.0 / 4000.0),
        length,
    );

    let minor_ticks = EllipticScale::new(
        EllipseParameters::new(centre, 1.0 / 0.46, 0.46, length),
        EllipseParameters::new(centre, 1.0 / 0.49, 0.49, length),
        TickParameters::new(step / 2.0, 0, 2),
        LineParameters::new(1.0 / 4000.0),
        length,
    );

    let needle = Needle::new(
        centre,
        value,
        start,
        length,
        NeedleParameter::new(0.0175, 0.46),
        NeedleParameter::new(0.03, 0.135),
        RED,
    );

    let pin = Cap::new(centre, 0.12, WHITE, Rgba::new_rgb(0.5, 0.5, 0.5));

    Gauge::new(vec![
        Box::new(background),
        Box::new(major_ticks),
        Box::new(minor_ticks),
        Box::new(needle),
        Box::new(pin),
    ])
}

// ============================================================================
// Tests
// ============================================================================
