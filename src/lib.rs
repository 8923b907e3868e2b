//! # dialkit
//!
//! Procedural rendering of 2D gauges and dials: circular or elliptic
//! instrument faces with tick scales, value-driven needles, bevelled
//! borders, pivot caps and text annotations, drawn in a 0..1 logical
//! coordinate space onto any backend implementing the [`context::Context`]
//! trait.
//!
//! Building blocks, leaf first:
//!
//! - Parametric ellipse geometry with visual-to-native angle conversion
//! - Elliptic arcs with direction normalization and a degenerate
//!   straight-line form
//! - A multi-ring bevel compositor (flat, inset, outset, etched borders)
//! - Tick scales with a skip cadence for interleaved major/minor rings
//! - Needles with butt/round/square end caps, reading a live value
//!   provider on every draw
//! - Gradient-shaded pivot caps and elliptic text annotations
//! - A composite [`gauge::Gauge`] draw list, plus the classic 254 degree
//!   round dial via [`gauge::round_gauge_254`]
//!
//! Widgets are configured once and drawn every frame; all drawing is
//! synchronous and single-threaded, and every draw restores the transform
//! stack it pushes, even on error.

// Foundation types & math
pub mod basics;
pub mod color;
pub mod error;
pub mod trans_affine;

// Drawing surface boundary
pub mod context;
pub mod font_face;
pub mod recording;
pub mod surface;

// Geometry
pub mod arc;
pub mod ellipse;

// Widgets
pub mod annotation;
pub mod bordered;
pub mod cap;
pub mod gauge;
pub mod needle;
pub mod scale;

pub use crate::error::DrawError;
