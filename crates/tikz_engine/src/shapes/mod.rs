//! Shape constructors
//!
//! Every constructor returns a [`Figure`](crate::scene::Figure) whose points
//! are built once from a few parameters and whose
//! [`ShapeKind`](crate::scene::ShapeKind) records the metrics to keep in sync.
//!
//! - [`lines`]: polylines, polygons, rectangles, regular polygons, segments and arrows
//! - [`sampler`]: parametric curve sampling
//! - [`arcs`]: arcs, circles, dots, ellipses and angle markers
//! - [`parabola`]: parabolas, including fits from points and tangents
//! - [`physics`]: ready-made figures for mechanics and optics drawings

pub mod arcs;
pub mod lines;
pub mod parabola;
pub mod physics;
pub mod sampler;

pub use parabola::{Axis, ParabolaFit};
pub use sampler::{sample, DEFAULT_SAMPLES};
