//! Parabolas and parabola fitting
//!
//! A parabola is described in a "fit frame" of an independent coordinate
//! `u` and a dependent one `w`, with `w = a u² + b u + c`. [`Axis::Y`] uses
//! `u = x, w = y` (opening along y); [`Axis::X`] uses `u = y, w = x`.

use log::debug;

use crate::error::GeometryError;
use crate::foundation::math::constants::SINGULAR_EPSILON;
use crate::foundation::math::{Mat3, Vec3, ORIGIN};
use crate::scene::{Figure, ShapeKind, Transformable};

use super::sampler::{sample, DEFAULT_SAMPLES};

/// Axis of symmetry of a parabola
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Opens along x: `x = t² / 2p, y = t`
    X = 0,
    /// Opens along y: `x = t, y = t² / 2p`
    Y = 1,
}

impl TryFrom<u8> for Axis {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            other => Err(GeometryError::InvalidAxisSelector(other)),
        }
    }
}

impl Axis {
    /// `(u, w)` coordinates of a world point
    pub fn to_frame(self, point: &Vec3) -> (f64, f64) {
        match self {
            Axis::X => (point.y, point.x),
            Axis::Y => (point.x, point.y),
        }
    }

    /// World point of fit-frame coordinates
    pub fn to_world(self, u: f64, w: f64) -> Vec3 {
        match self {
            Axis::X => Vec3::new(w, u, 0.0),
            Axis::Y => Vec3::new(u, w, 0.0),
        }
    }
}

impl Figure {
    /// Parabola `u² = 2 p w` with its vertex on the origin, sampled for `u` in `[start, end)`
    pub fn parabola(parameter: f64, start: f64, end: f64, axis: Axis) -> Result<Self, GeometryError> {
        if parameter == 0.0 || !parameter.is_finite() {
            return Err(GeometryError::PreconditionViolation(format!(
                "parabola parameter must be finite and non-zero, got {parameter}"
            )));
        }

        let points = sample(
            |t| axis.to_world(t, t * t / (2.0 * parameter)),
            start,
            end,
            DEFAULT_SAMPLES,
        );
        let kind = ShapeKind::Parabola {
            parameter,
            axis,
            vertex: ORIGIN,
        };
        Ok(Self::from_parts(points, kind, false))
    }

    /// Parabola through three points
    pub fn parabola_through(
        p1: Vec3,
        p2: Vec3,
        p3: Vec3,
        axis: Axis,
    ) -> Result<Self, GeometryError> {
        ParabolaFit::from_three_points(p1, p2, p3, axis)?.to_figure()
    }

    /// Parabola through two points, tangent to `tangent` at the first
    pub fn parabola_tangent(
        tangent: Vec3,
        p1: Vec3,
        p2: Vec3,
        axis: Axis,
    ) -> Result<Self, GeometryError> {
        ParabolaFit::from_tangent(tangent, p1, p2, axis)?.to_figure()
    }
}

/// Coefficients of `w = a u² + b u + c` plus the `u` span to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolaFit {
    axis: Axis,
    a: f64,
    b: f64,
    c: f64,
    start: f64,
    end: f64,
}

impl ParabolaFit {
    /// Fit through three points with distinct `u` that are not collinear
    pub fn from_three_points(p1: Vec3, p2: Vec3, p3: Vec3, axis: Axis) -> Result<Self, GeometryError> {
        let (u1, w1) = axis.to_frame(&p1);
        let (u2, w2) = axis.to_frame(&p2);
        let (u3, w3) = axis.to_frame(&p3);

        #[rustfmt::skip]
        let system = Mat3::new(
            u1 * u1, u1, 1.0,
            u2 * u2, u2, 1.0,
            u3 * u3, u3, 1.0,
        );
        let coefficients = solve(&system, &Vec3::new(w1, w2, w3))?;

        Self::from_coefficients(axis, coefficients, u1.min(u2).min(u3), u1.max(u2).max(u3))
    }

    /// Fit through two points whose slope at `p1` satisfies `2 a u₁ + b = −tan θ`,
    /// θ being the angle of `tangent` in the fit frame
    pub fn from_tangent(tangent: Vec3, p1: Vec3, p2: Vec3, axis: Axis) -> Result<Self, GeometryError> {
        let (tangent_u, tangent_w) = axis.to_frame(&tangent);
        if tangent_u == 0.0 && tangent_w == 0.0 {
            return Err(GeometryError::PreconditionViolation(
                "tangent direction is zero".to_string(),
            ));
        }
        if tangent_u.abs() <= SINGULAR_EPSILON * tangent_w.abs() {
            return Err(GeometryError::DegenerateGeometry(
                "tangent is parallel to the parabola's axis".to_string(),
            ));
        }
        let theta = tangent_w.atan2(tangent_u);

        let (u1, w1) = axis.to_frame(&p1);
        let (u2, w2) = axis.to_frame(&p2);

        #[rustfmt::skip]
        let system = Mat3::new(
            u1 * u1, u1, 1.0,
            u2 * u2, u2, 1.0,
            2.0 * u1, 1.0, 0.0,
        );
        let coefficients = solve(&system, &Vec3::new(w1, w2, -theta.tan()))?;

        Self::from_coefficients(axis, coefficients, u1.min(u2), u1.max(u2))
    }

    fn from_coefficients(axis: Axis, coefficients: Vec3, start: f64, end: f64) -> Result<Self, GeometryError> {
        let (a, b, c) = (coefficients.x, coefficients.y, coefficients.z);
        if a.abs() <= SINGULAR_EPSILON * (1.0 + b.abs() + c.abs()) {
            return Err(GeometryError::DegenerateGeometry(
                "fitted points are collinear".to_string(),
            ));
        }
        debug!("Fitted parabola w = {a} u^2 + {b} u + {c} over [{start}, {end}] ({axis:?})");
        Ok(Self { axis, a, b, c, start, end })
    }

    /// Axis of symmetry
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// `(a, b, c)`
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// `w` at `u`
    pub fn evaluate(&self, u: f64) -> f64 {
        (self.a * u + self.b) * u + self.c
    }

    /// Focal parameter `p = 1 / 2a`
    pub fn parameter(&self) -> f64 {
        1.0 / (2.0 * self.a)
    }

    /// Vertex in world coordinates
    pub fn vertex(&self) -> Vec3 {
        let (u, w) = self.vertex_in_frame();
        self.axis.to_world(u, w)
    }

    fn vertex_in_frame(&self) -> (f64, f64) {
        let u = -self.b * self.parameter();
        (u, self.c - u * u / (2.0 * self.parameter()))
    }

    /// Sampled figure covering the fitted span.
    ///
    /// The sampling window is the span of the fitted points taken relative
    /// to the vertex, not the absolute span, so the curve runs through them.
    pub fn to_figure(&self) -> Result<Figure, GeometryError> {
        let (vertex_u, _) = self.vertex_in_frame();
        let mut figure = Figure::parabola(
            self.parameter(),
            self.start - vertex_u,
            self.end - vertex_u,
            self.axis,
        )?;
        figure.shift(self.vertex());
        Ok(figure)
    }
}

fn solve(system: &Mat3, rhs: &Vec3) -> Result<Vec3, GeometryError> {
    let scale = system.norm().powi(3);
    if scale == 0.0 || system.determinant().abs() <= SINGULAR_EPSILON * scale {
        return Err(GeometryError::DegenerateGeometry(
            "parabola system is singular".to_string(),
        ));
    }
    system.lu().solve(rhs).ok_or_else(|| {
        GeometryError::DegenerateGeometry("parabola system is singular".to_string())
    })
}
