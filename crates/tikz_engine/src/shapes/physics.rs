//! Figures for mechanics and optics drawings

use crate::error::GeometryError;
use crate::foundation::math::{Vec3, ORIGIN};
use crate::scene::{Figure, Transformable};

/// Length of the marker arrow drawn in the middle of a light ray
const RAY_MARKER_LENGTH: f64 = 0.001;

impl Figure {
    /// Ballistic trajectory `v t + g t² / 2` for `t` in `[0, time)`
    pub fn throw(velocity: Vec3, gravity: Vec3, time: f64) -> Self {
        Self::curve(move |t| velocity * t + gravity * (t * t / 2.0), 0.0, time)
    }

    /// Circle with a dot on its axle, centered on the origin
    pub fn pulley(radius: f64) -> Self {
        Self::circle(radius).with_subobject(Self::dot(ORIGIN))
    }

    /// Pulley centered on `center`, hung from the origin by a line that
    /// stops at the rim
    pub fn held_pulley(center: Vec3, radius: f64) -> Result<Self, GeometryError> {
        let distance = center.norm();
        if distance <= radius {
            return Err(GeometryError::PreconditionViolation(format!(
                "pulley center must lie outside its radius {radius} from the origin"
            )));
        }

        let mut pulley = Self::pulley(radius);
        pulley.shift(center);
        let support = Self::line(ORIGIN, center * ((distance - radius) / distance));
        Ok(pulley.with_subobject(support))
    }

    /// Ray from `tail` to `head` with an arrow tip at its midpoint
    pub fn light_ray(tail: Vec3, head: Vec3) -> Result<Self, GeometryError> {
        let mut ray = Self::line(tail, head);
        let direction = ray.direction()?;
        let middle = (tail + head) / 2.0;
        ray.add_subobjects([Self::arrow(middle - direction * RAY_MARKER_LENGTH, middle)]);
        Ok(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{DOWN, RIGHT, UP};
    use crate::shapes::DEFAULT_SAMPLES;
    use approx::assert_relative_eq;

    #[test]
    fn test_throw_follows_trajectory() {
        let velocity = Vec3::new(2.0, 3.0, 0.0);
        let gravity = DOWN * 9.8;
        let throw = Figure::throw(velocity, gravity, 0.5);

        assert_eq!(throw.points().len(), DEFAULT_SAMPLES);
        assert_eq!(throw.points()[0], ORIGIN);
        let step = 0.5 / DEFAULT_SAMPLES as f64;
        let t = 10.0 * step;
        assert_relative_eq!(throw.points()[10], velocity * t + gravity * (t * t / 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_pulley_has_axle() {
        let pulley = Figure::pulley(1.0);
        assert!(pulley.is_closed());
        let axle = pulley.subobjects()[0].as_figure().unwrap();
        assert_relative_eq!(axle.center().unwrap(), ORIGIN, epsilon = 1e-9);
    }

    #[test]
    fn test_held_pulley_support_reaches_rim() {
        let pulley = Figure::held_pulley(DOWN * 3.0, 1.0).unwrap();
        assert_relative_eq!(pulley.center().unwrap(), DOWN * 3.0, epsilon = 1e-9);

        let support = pulley.subobjects()[1].as_figure().unwrap();
        assert_eq!(support.tail().unwrap(), ORIGIN);
        assert_relative_eq!(support.head().unwrap(), DOWN * 2.0, epsilon = 1e-12);

        assert!(Figure::held_pulley(UP * 0.5, 1.0).is_err());
    }

    #[test]
    fn test_light_ray_marker() {
        let ray = Figure::light_ray(ORIGIN, RIGHT * 4.0).unwrap();
        let marker = ray.subobjects()[0].as_figure().unwrap();
        assert_eq!(marker.head().unwrap(), RIGHT * 2.0);
        assert!(marker.render().starts_with("\\draw[-stealth]"));

        assert!(Figure::light_ray(UP, UP).is_err());
    }
}
