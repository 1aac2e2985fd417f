//! Circular and elliptical curves, plus angle markers
//!
//! Arc-family curves are sampled with [`sample`] and keep their radius and
//! center in [`ShapeKind::Arc`] so scaling and moving them leaves the
//! metadata consistent with the points.

use crate::error::GeometryError;
use crate::foundation::math::constants::{HALF_PI, TAU};
use crate::foundation::math::utils::{angle_of, rotate, unit_direction};
use crate::foundation::math::{Vec3, ORIGIN, OUT};
use crate::scene::{Figure, Label, ShapeKind, Transformable};
use crate::style::BLACK;

use super::sampler::{sample, DEFAULT_SAMPLES};

/// Radius of a [`Figure::dot`]
pub const DOT_RADIUS: f64 = 0.03;

/// Options for [`Figure::angle`]
#[derive(Debug, Clone, PartialEq)]
pub struct AngleMarker {
    /// Radius of the marking arc
    pub radius: f64,
    /// Math text placed along the bisector
    pub label: Option<String>,
    /// Distance of the label from the vertex
    pub label_distance: f64,
}

impl Default for AngleMarker {
    fn default() -> Self {
        Self {
            radius: 0.3,
            label: None,
            label_distance: 0.5,
        }
    }
}

impl AngleMarker {
    /// Builder pattern: set the arc radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Builder pattern: set the label and its distance from the vertex
    pub fn with_label(mut self, label: impl Into<String>, distance: f64) -> Self {
        self.label = Some(label.into());
        self.label_distance = distance;
        self
    }
}

impl Figure {
    /// Arc of a circle centered on the origin, from `start_angle` to `end_angle`
    pub fn arc(radius: f64, start_angle: f64, end_angle: f64) -> Self {
        let points = sample(
            |t| unit_direction(t) * radius,
            start_angle,
            end_angle,
            DEFAULT_SAMPLES,
        );
        Self::from_parts(points, ShapeKind::Arc { radius, center: ORIGIN }, false)
    }

    /// Full circle centered on the origin
    pub fn circle(radius: f64) -> Self {
        let mut circle = Self::arc(radius, 0.0, TAU);
        circle.set_closed(true);
        circle
    }

    /// Small filled circle at `position`
    pub fn dot(position: Vec3) -> Self {
        let mut dot = Self::circle(DOT_RADIUS);
        dot.set_fill(BLACK).shift(position);
        dot
    }

    /// Arc of an ellipse centered on the origin with semi-axes along x and y
    pub fn elliptical_arc(major: f64, minor: f64, start_angle: f64, end_angle: f64) -> Self {
        let points = sample(
            |t| Vec3::new(major * t.cos(), minor * t.sin(), 0.0),
            start_angle,
            end_angle,
            DEFAULT_SAMPLES,
        );
        let kind = ShapeKind::Ellipse {
            major,
            minor,
            center: ORIGIN,
        };
        Self::from_parts(points, kind, false)
    }

    /// Full ellipse centered on the origin
    pub fn ellipse(major: f64, minor: f64) -> Self {
        let mut ellipse = Self::elliptical_arc(major, minor, 0.0, TAU);
        ellipse.set_closed(true);
        ellipse
    }

    /// Arc marking the angle `a b c` at vertex `b`.
    ///
    /// The arc runs from the direction of `a` to the direction of `c`, with
    /// both angles taken from [`angle_of`]. A label, if any, sits on the
    /// bisector.
    pub fn angle(a: Vec3, b: Vec3, c: Vec3, marker: &AngleMarker) -> Result<Self, GeometryError> {
        let v = ray_direction(a, b)?;
        let u = ray_direction(c, b)?;

        let mut arc = Self::arc(marker.radius, angle_of(&v), angle_of(&u));

        if let Some(text) = &marker.label {
            // Opposite rays have no bisector; use the normal instead
            let bisector = (u + v)
                .try_normalize(1e-12)
                .unwrap_or_else(|| rotate(&v, HALF_PI, &OUT));
            arc.add_subobjects([Label::math(text).at(bisector * marker.label_distance)]);
        }

        arc.shift(b);
        Ok(arc)
    }

    /// Right-angle mark with legs of length `0.2` and a corner dot
    pub fn right_angle(a: Vec3, b: Vec3, c: Vec3) -> Result<Self, GeometryError> {
        Self::right_angle_with(a, b, c, 0.2, true)
    }

    /// Right-angle mark at `b` with legs of length `size` along `ba` and `bc`
    pub fn right_angle_with(
        a: Vec3,
        b: Vec3,
        c: Vec3,
        size: f64,
        dot: bool,
    ) -> Result<Self, GeometryError> {
        let v = ray_direction(a, b)? * size;
        let u = ray_direction(c, b)? * size;
        let corner = u + v;

        let kind = ShapeKind::RightAngle {
            size,
            vertex: ORIGIN,
        };
        let mut mark = Self::from_parts(vec![v, corner, u], kind, false);
        if dot {
            mark.add_subobjects([Self::dot(corner / 2.0)]);
        }

        mark.shift(b);
        Ok(mark)
    }
}

fn ray_direction(end: Vec3, vertex: Vec3) -> Result<Vec3, GeometryError> {
    (end - vertex).try_normalize(0.0).ok_or_else(|| {
        GeometryError::DegenerateGeometry("angle ray has zero length".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use crate::foundation::math::{RIGHT, UP};
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_is_closed_and_renders_cycle() {
        let circle = Figure::circle(2.0);
        assert!(circle.is_closed());
        assert_eq!(circle.points().len(), DEFAULT_SAMPLES);
        assert!(circle.render().ends_with("-- cycle;"));
        for point in circle.points() {
            assert_relative_eq!(point.norm(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_arc_scale_keeps_radius_and_center() {
        let mut arc = Figure::arc(1.0, 0.0, PI / 2.0);
        arc.shift(Vec3::new(3.0, 0.0, 0.0));
        arc.scale(2.0, Some(Vec3::zeros())).unwrap();

        match arc.kind() {
            ShapeKind::Arc { radius, center } => {
                assert_relative_eq!(*radius, 2.0);
                assert_relative_eq!(*center, Vec3::new(6.0, 0.0, 0.0), epsilon = 1e-12);
                for point in arc.points() {
                    assert_relative_eq!((point - center).norm(), 2.0, epsilon = 1e-9);
                }
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_dot_is_filled_at_position() {
        let dot = Figure::dot(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(dot.style().render(), "[fill=black]");
        assert_relative_eq!(dot.center().unwrap(), Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_ellipse_points() {
        let ellipse = Figure::ellipse(3.0, 1.0);
        assert!(ellipse.is_closed());
        for point in ellipse.points() {
            let value = (point.x / 3.0).powi(2) + point.y.powi(2);
            assert_relative_eq!(value, 1.0, epsilon = 1e-9);
        }
        assert_relative_eq!(ellipse.right().unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_marker() {
        let vertex = Vec3::new(1.0, 1.0, 0.0);
        let marker = AngleMarker::default().with_label("\\alpha", 0.5);
        let angle = Figure::angle(vertex + RIGHT, vertex, vertex + UP, &marker).unwrap();

        assert_relative_eq!(angle.points()[0], vertex + RIGHT * 0.3, epsilon = 1e-12);
        match angle.kind() {
            ShapeKind::Arc { center, .. } => assert_relative_eq!(*center, vertex, epsilon = 1e-12),
            other => panic!("unexpected kind {other:?}"),
        }

        let label = angle.subobjects()[0].as_label().unwrap();
        let expected = vertex + Vec3::new(1.0, 1.0, 0.0).normalize() * 0.5;
        assert_relative_eq!(label.position(), expected, epsilon = 1e-12);
        assert_eq!(label.content(), "$\\alpha$");
    }

    #[test]
    fn test_angle_rejects_degenerate_rays() {
        let result = Figure::angle(ORIGIN, ORIGIN, UP, &AngleMarker::default());
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry(_))));
    }

    #[test]
    fn test_right_angle_mark() {
        let b = Vec3::new(2.0, 0.0, 0.0);
        let mark = Figure::right_angle(b + RIGHT * 5.0, b, b + UP * 3.0).unwrap();

        assert_relative_eq!(mark.points()[0], b + RIGHT * 0.2, epsilon = 1e-12);
        assert_relative_eq!(mark.points()[1], b + Vec3::new(0.2, 0.2, 0.0), epsilon = 1e-12);
        assert_relative_eq!(mark.points()[2], b + UP * 0.2, epsilon = 1e-12);

        let dot = mark.subobjects()[0].as_figure().unwrap();
        assert_relative_eq!(dot.center().unwrap(), b + Vec3::new(0.1, 0.1, 0.0), epsilon = 1e-9);

        let bare = Figure::right_angle_with(RIGHT, ORIGIN, UP, 0.5, false).unwrap();
        assert!(bare.subobjects().is_empty());
    }
}
