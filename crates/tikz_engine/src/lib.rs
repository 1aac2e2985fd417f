//! # Tikz Engine
//!
//! A geometric scene model that renders to TikZ drawing markup.
//!
//! ## Features
//!
//! - **Owned Scene Trees**: figures own their points, style and subobjects; `Clone` is a deep copy
//! - **Transform Protocol**: shift, scale, rotate, reflect and arbitrary linear maps, propagated to every subobject about one pivot
//! - **Primitive Shapes**: polylines, polygons, rectangles, regular polygons, segments and arrows
//! - **Sampled Curves**: arcs, circles, ellipses, parabolas (including point/tangent fits) and user parametrics
//! - **Markup Output**: `\draw`/`\path`/`\node` commands wrapped in a standalone document by [`scene::Board`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tikz_engine::prelude::*;
//!
//! fn main() -> Result<(), GeometryError> {
//!     let mut board = Board::new(BoardConfig::default());
//!
//!     let mut square = Figure::square(2.0);
//!     square.set_color(RED).rotate(PI / 6.0, OUT, None)?;
//!
//!     let mut label = Label::math("s");
//!     label.next_to(&square, UP)?;
//!
//!     board.add(square).add(label);
//!     let document = board.render();
//!     assert!(document.contains("\\begin{tikzpicture}"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod error;
pub mod style;
pub mod scene;
pub mod shapes;

/// Common imports for scene authors
pub mod prelude {
    pub use crate::{
        config::{BoardConfig, Config, ConfigError},
        error::GeometryError,
        foundation::math::{
            constants::{PI, TAU},
            Mat3, Vec3, DL, DOWN, DR, IN, LEFT, ORIGIN, OUT, RIGHT, UL, UP, UR,
        },
        scene::{Board, BoardError, Drawable, Figure, Group, Label, Scene, ShapeKind, Transformable},
        shapes::{arcs::AngleMarker, Axis, ParabolaFit},
        style::{Style, BLACK, BLUE, BOTH, GRAY, LIGHTBLUE, LIGHTGRAY, RED, STEALTH},
    };
}
