//! Straight-edged figures: polylines, polygons, segments and arrows

use crate::error::GeometryError;
use crate::foundation::math::constants::{HALF_PI, QUARTER_PI, TAU};
use crate::foundation::math::utils::{rotate, unit_direction};
use crate::foundation::math::{Vec3, ORIGIN, OUT};
use crate::scene::{Figure, Label, Motion, ShapeKind, Transformable};
use crate::style::{BOTH, STEALTH};

/// Default side length of regular polygons and squares
pub const DEFAULT_SIDE: f64 = 2.0;

/// Offset of a segment label from the segment
pub const DEFAULT_LABEL_OFFSET: f64 = 0.3;

impl Figure {
    /// Open polyline through `points`
    pub fn lines(points: Vec<Vec3>) -> Self {
        Self::from_parts(points, ShapeKind::Lines, false)
    }

    /// Closed polyline through `points`
    pub fn polygon(points: Vec<Vec3>) -> Self {
        Self::from_parts(points, ShapeKind::Polygon, true)
    }

    /// Axis-aligned rectangle centered on the origin
    pub fn rectangle(base: f64, height: f64) -> Self {
        let (x, y) = (base / 2.0, height / 2.0);
        let points = vec![
            Vec3::new(x, y, 0.0),
            Vec3::new(-x, y, 0.0),
            Vec3::new(-x, -y, 0.0),
            Vec3::new(x, -y, 0.0),
        ];
        Self::from_parts(points, ShapeKind::Rectangle { base, height }, true)
    }

    /// Regular polygon centered on the origin with its first vertex on +x
    pub fn regular_polygon(sides: usize, side: f64) -> Result<Self, GeometryError> {
        if sides < 3 {
            return Err(GeometryError::PreconditionViolation(format!(
                "a regular polygon needs at least 3 sides, got {sides}"
            )));
        }
        Ok(Self::regular_polygon_unchecked(sides, side))
    }

    /// Square centered on the origin with axis-aligned sides
    pub fn square(side: f64) -> Self {
        let mut square = Self::regular_polygon_unchecked(4, side);
        square.apply(&Motion::Rotate {
            angle: QUARTER_PI,
            axis: OUT,
            about: ORIGIN,
        });
        square
    }

    fn regular_polygon_unchecked(sides: usize, side: f64) -> Self {
        let angle = TAU / sides as f64;
        let radius = side / (2.0 * (angle / 2.0).sin());
        let points = (0..sides)
            .map(|k| unit_direction(k as f64 * angle) * radius)
            .collect();
        Self::from_parts(points, ShapeKind::RegularPolygon { sides, side }, true)
    }

    /// Segment from `tail` to `head`
    pub fn line(tail: Vec3, head: Vec3) -> Self {
        Self::from_parts(vec![tail, head], ShapeKind::Line, false)
    }

    /// Segment from `tail` to `head` with an arrow tip at the head
    pub fn arrow(tail: Vec3, head: Vec3) -> Self {
        let mut arrow = Self::from_parts(vec![tail, head], ShapeKind::Arrow, false);
        arrow.set_tips(STEALTH);
        arrow
    }

    /// Arrow from the origin to `vector`
    pub fn vector(vector: Vec3) -> Self {
        Self::arrow(ORIGIN, vector)
    }

    /// First point
    pub fn tail(&self) -> Result<Vec3, GeometryError> {
        self.points().first().copied().ok_or_else(|| {
            GeometryError::PreconditionViolation("figure has no points".to_string())
        })
    }

    /// Last point
    pub fn head(&self) -> Result<Vec3, GeometryError> {
        self.points().last().copied().ok_or_else(|| {
            GeometryError::PreconditionViolation("figure has no points".to_string())
        })
    }

    /// Unit vector from tail to head
    pub fn direction(&self) -> Result<Vec3, GeometryError> {
        let span = self.head()? - self.tail()?;
        span.try_normalize(0.0).ok_or_else(|| {
            GeometryError::DegenerateGeometry("segment has zero length".to_string())
        })
    }

    /// Attach a math label beside the midpoint, `offset` along the left normal
    pub fn add_label(&mut self, text: &str, offset: f64) -> Result<&mut Self, GeometryError> {
        let normal = rotate(&self.direction()?, HALF_PI, &OUT);
        let anchor = self.center()? + normal * offset;
        Ok(self.add_subobjects([Label::math(text).at(anchor)]))
    }

    /// Attach a dimension line `offset` away along the left normal.
    ///
    /// The dimension line copies this figure's style, gets arrow tips at
    /// both ends and a label on its outer side, and is joined to the
    /// endpoints by dashed extension lines.
    pub fn mark_length(&mut self, text: &str, offset: f64) -> Result<&mut Self, GeometryError> {
        if offset == 0.0 {
            return Err(GeometryError::PreconditionViolation(
                "dimension line offset must be non-zero".to_string(),
            ));
        }

        let (tail, head) = (self.tail()?, self.head()?);
        let normal = rotate(&self.direction()?, HALF_PI, &OUT);

        let mut dimension = Self::line(tail, head).with_style(self.style().clone());
        dimension.shift(normal * offset).set_tips(BOTH);
        dimension.add_label(text, DEFAULT_LABEL_OFFSET * offset.signum())?;

        let mut extension_tail = Self::line(tail, dimension.tail()?);
        extension_tail.style_mut().set_flag("dashed", true);
        let mut extension_head = Self::line(head, dimension.head()?);
        extension_head.style_mut().set_flag("dashed", true);
        dimension.add_subobjects([extension_tail, extension_head]);

        Ok(self.add_subobjects([dimension]))
    }
}
