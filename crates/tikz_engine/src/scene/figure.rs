//! Point-set drawables
//!
//! A [`Figure`] is an ordered list of points joined by straight segments,
//! plus a style, a list of owned subobjects and a [`ShapeKind`] tag. The tag
//! records what built the points and carries the metrics that must survive
//! transforms (a polygon's side, an arc's radius and center, ...).

use log::debug;

use super::{format_point, Drawable, Motion, Transformable};
use crate::error::GeometryError;
use crate::foundation::math::Vec3;
use crate::shapes::Axis;
use crate::style::Style;

/// What produced a figure's points, with the metrics it keeps in sync
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Open polyline
    Lines,
    /// Closed polyline
    Polygon,
    /// Axis-aligned rectangle at construction
    Rectangle {
        /// Width
        base: f64,
        /// Height
        height: f64,
    },
    /// Regular polygon (a square is one with four sides)
    RegularPolygon {
        /// Number of vertices
        sides: usize,
        /// Side length
        side: f64,
    },
    /// Two-point segment
    Line,
    /// Two-point segment with an arrow tip
    Arrow,
    /// Sampled parametric curve
    Curve {
        /// First parameter value
        start: f64,
        /// Upper parameter bound (never sampled)
        end: f64,
        /// Number of samples
        samples: usize,
    },
    /// Circular arc, circle or dot
    Arc {
        /// Radius
        radius: f64,
        /// Circle center
        center: Vec3,
    },
    /// Elliptical arc or ellipse
    Ellipse {
        /// Semi-axis along x at construction
        major: f64,
        /// Semi-axis along y at construction
        minor: f64,
        /// Ellipse center
        center: Vec3,
    },
    /// Parabola
    Parabola {
        /// Focal parameter `p` of `u² = 2 p w`
        parameter: f64,
        /// Axis of symmetry
        axis: Axis,
        /// Vertex
        vertex: Vec3,
    },
    /// Right-angle marker
    RightAngle {
        /// Leg length
        size: f64,
        /// Corner of the marked angle
        vertex: Vec3,
    },
}

impl ShapeKind {
    /// Keep tracked metrics consistent with a motion applied to the points
    fn follow(&mut self, motion: &Motion) {
        if let Some(factor) = motion.scale_factor() {
            match self {
                ShapeKind::Rectangle { base, height } => {
                    *base *= factor;
                    *height *= factor;
                }
                ShapeKind::RegularPolygon { side, .. } => *side *= factor,
                ShapeKind::Arc { radius, .. } => *radius *= factor,
                ShapeKind::Ellipse { major, minor, .. } => {
                    *major *= factor;
                    *minor *= factor;
                }
                ShapeKind::Parabola { parameter, .. } => *parameter *= factor,
                ShapeKind::RightAngle { size, .. } => *size *= factor,
                _ => {}
            }
        }

        match self {
            ShapeKind::Arc { center, .. } | ShapeKind::Ellipse { center, .. } => {
                *center = motion.apply_to(center);
            }
            ShapeKind::Parabola { vertex, .. } | ShapeKind::RightAngle { vertex, .. } => {
                *vertex = motion.apply_to(vertex);
            }
            _ => {}
        }
    }
}

/// Ordered point set with style and owned subobjects
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    points: Vec<Vec3>,
    style: Style,
    subobjects: Vec<Drawable>,
    closed: bool,
    draw: bool,
    kind: ShapeKind,
}

impl Figure {
    pub(crate) fn from_parts(points: Vec<Vec3>, kind: ShapeKind, closed: bool) -> Self {
        Self {
            points,
            style: Style::new(),
            subobjects: Vec::new(),
            closed,
            draw: true,
            kind,
        }
    }

    /// Merge several figures into one drawn with `style`.
    ///
    /// Points are stacked in order and subobject lists concatenated. The
    /// sources are consumed and their own styles dropped; the result is an
    /// ordinary open polyline.
    pub fn union(parts: impl IntoIterator<Item = Figure>, style: Style) -> Self {
        let mut merged = Self::lines(Vec::new()).with_style(style);
        let mut count = 0usize;
        for part in parts {
            merged.points.extend(part.points);
            merged.subobjects.extend(part.subobjects);
            count += 1;
        }
        debug!(
            "Merged {} figures into a union of {} points",
            count,
            merged.points.len()
        );
        merged
    }

    /// Points in draw order
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Style options
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable style options
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Builder pattern: replace the style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Stroke color
    pub fn set_color(&mut self, color: &str) -> &mut Self {
        self.style.set_color(color);
        self
    }

    /// Fill color
    pub fn set_fill(&mut self, color: &str) -> &mut Self {
        self.style.set_fill(color);
        self
    }

    /// Arrow tips
    pub fn set_tips(&mut self, tips: &str) -> &mut Self {
        self.style.set_tips(tips);
        self
    }

    /// Children, rendered after this figure
    pub fn subobjects(&self) -> &[Drawable] {
        &self.subobjects
    }

    /// Append children; they are owned from now on
    pub fn add_subobjects<I, D>(&mut self, objects: I) -> &mut Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Drawable>,
    {
        self.subobjects.extend(objects.into_iter().map(Into::into));
        self
    }

    /// Builder pattern: append one child
    pub fn with_subobject(mut self, object: impl Into<Drawable>) -> Self {
        self.subobjects.push(object.into());
        self
    }

    /// Whether the last point connects back to the first
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close or open the path
    pub fn set_closed(&mut self, closed: bool) -> &mut Self {
        self.closed = closed;
        self
    }

    /// Whether the path is stroked (`\draw`) or only laid out (`\path`)
    pub fn is_drawn(&self) -> bool {
        self.draw
    }

    /// Switch between `\draw` and `\path`
    pub fn set_draw(&mut self, draw: bool) -> &mut Self {
        self.draw = draw;
        self
    }

    /// Shape tag and tracked metrics
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Largest y among own points
    pub fn top(&self) -> Result<f64, GeometryError> {
        self.fold_coordinate(|p| p.y, f64::max)
    }

    /// Smallest y among own points
    pub fn bottom(&self) -> Result<f64, GeometryError> {
        self.fold_coordinate(|p| p.y, f64::min)
    }

    /// Smallest x among own points
    pub fn left(&self) -> Result<f64, GeometryError> {
        self.fold_coordinate(|p| p.x, f64::min)
    }

    /// Largest x among own points
    pub fn right(&self) -> Result<f64, GeometryError> {
        self.fold_coordinate(|p| p.x, f64::max)
    }

    fn fold_coordinate(
        &self,
        coordinate: impl Fn(&Vec3) -> f64,
        pick: impl Fn(f64, f64) -> f64,
    ) -> Result<f64, GeometryError> {
        self.points
            .iter()
            .map(coordinate)
            .reduce(pick)
            .ok_or_else(empty_figure)
    }
}

fn empty_figure() -> GeometryError {
    GeometryError::PreconditionViolation("figure has no points".to_string())
}

impl Transformable for Figure {
    /// Mean of own points; subobjects do not move the pivot.
    fn center(&self) -> Result<Vec3, GeometryError> {
        if self.points.is_empty() {
            return Err(empty_figure());
        }
        let sum: Vec3 = self.points.iter().sum();
        Ok(sum / self.points.len() as f64)
    }

    /// Ties go to the earliest point.
    fn extreme(&self, direction: &Vec3) -> Result<Vec3, GeometryError> {
        let mut best: Option<(f64, &Vec3)> = None;
        for point in &self.points {
            let value = direction.dot(point);
            if best.map_or(true, |(max, _)| value > max) {
                best = Some((value, point));
            }
        }
        best.map(|(_, point)| *point).ok_or_else(empty_figure)
    }

    fn apply(&mut self, motion: &Motion) {
        for point in &mut self.points {
            *point = motion.apply_to(point);
        }
        self.kind.follow(motion);
        for object in &mut self.subobjects {
            object.apply(motion);
        }
    }

    fn render(&self) -> String {
        let command = if self.draw { "\\draw" } else { "\\path" };

        let mut path = self
            .points
            .iter()
            .map(format_point)
            .collect::<Vec<_>>()
            .join(" -- ");
        if self.closed {
            path.push_str(" -- cycle");
        }

        let mut lines = vec![format!("{command}{} {path};", self.style.render())];
        lines.extend(self.subobjects.iter().map(Transformable::render));
        lines.join("\n")
    }
}
