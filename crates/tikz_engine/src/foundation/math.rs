//! Math utilities and types
//!
//! Provides the vector and quaternion types used by every drawable, the
//! direction constants scenes are written against, and the stateless helpers
//! behind the transform protocol.

pub use nalgebra::{Matrix2, Matrix3, Quaternion, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// 3D vector type, also used for points
pub type Vec3 = Vector3<f64>;

/// 2x2 matrix type
pub type Mat2 = Matrix2<f64>;

/// 3x3 matrix type, used by linear transforms
pub type Mat3 = Matrix3<f64>;

/// Raw quaternion type (not necessarily unit)
pub type Quat = Quaternion<f64>;

/// The origin
pub const ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 0.0);
/// Positive y
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Negative y
pub const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);
/// Negative x
pub const LEFT: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
/// Positive x
pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
/// Up and right
pub const UR: Vec3 = Vec3::new(1.0, 1.0, 0.0);
/// Up and left
pub const UL: Vec3 = Vec3::new(-1.0, 1.0, 0.0);
/// Down and left
pub const DL: Vec3 = Vec3::new(-1.0, -1.0, 0.0);
/// Down and right
pub const DR: Vec3 = Vec3::new(1.0, -1.0, 0.0);
/// Into the page
pub const IN: Vec3 = Vec3::new(0.0, 0.0, -1.0);
/// Out of the page, the default rotation axis
pub const OUT: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f64 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f64 = PI * 0.25;

    /// Tolerance used to decide that a linear system is singular
    pub const SINGULAR_EPSILON: f64 = 1e-12;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Mat2, Quat, Vec2, Vec3};
    use crate::error::GeometryError;

    /// Build a point from 2 or 3 coordinates; a missing z is 0.
    pub fn to_point(coords: &[f64]) -> Result<Vec3, GeometryError> {
        match *coords {
            [x, y] => Ok(Vec3::new(x, y, 0.0)),
            [x, y, z] => Ok(Vec3::new(x, y, z)),
            _ => Err(GeometryError::PreconditionViolation(format!(
                "a point needs 2 or 3 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    /// Unit vector in the xy plane at `angle` radians from the x axis.
    pub fn unit_direction(angle: f64) -> Vec3 {
        Vec3::new(angle.cos(), angle.sin(), 0.0)
    }

    /// Angle of the xy projection of `vector`.
    ///
    /// Returns the raw `atan2` value in `(-π, π]`. Every arc-family
    /// constructor orders its start and end angles with this convention.
    pub fn angle_of(vector: &Vec3) -> f64 {
        vector.y.atan2(vector.x)
    }

    /// Intersection of the line through `p1, p2` with the line through `p3, p4`.
    ///
    /// Only the xy components are used and the result has `z = 0`. Parallel
    /// (or zero-length) lines yield [`GeometryError::DegenerateGeometry`].
    pub fn line_intersection(
        p1: &Vec3,
        p2: &Vec3,
        p3: &Vec3,
        p4: &Vec3,
    ) -> Result<Vec3, GeometryError> {
        let dir_1 = p2.xy() - p1.xy();
        let dir_2 = p4.xy() - p3.xy();

        let normal_1 = Vec2::new(-dir_1.y, dir_1.x);
        let normal_2 = Vec2::new(-dir_2.y, dir_2.x);

        let system = Mat2::new(normal_1.x, normal_1.y, normal_2.x, normal_2.y);
        let rhs = Vec2::new(normal_1.dot(&p1.xy()), normal_2.dot(&p3.xy()));

        let scale = normal_1.norm() * normal_2.norm();
        if scale == 0.0 || system.determinant().abs() <= constants::SINGULAR_EPSILON * scale {
            return Err(GeometryError::DegenerateGeometry(
                "lines are parallel or have zero length".to_string(),
            ));
        }

        let inverse = system.try_inverse().ok_or_else(|| {
            GeometryError::DegenerateGeometry("line system is singular".to_string())
        })?;
        let solution = inverse * rhs;

        Ok(Vec3::new(solution.x, solution.y, 0.0))
    }

    /// Hamilton product of the given quaternions, left to right.
    ///
    /// An empty slice yields the identity.
    pub fn quaternion_mult(quats: &[Quat]) -> Quat {
        quats.iter().fold(Quat::identity(), |acc, q| acc * *q)
    }

    /// Conjugate of a quaternion.
    pub fn quaternion_conjugate(quat: &Quat) -> Quat {
        quat.conjugate()
    }

    /// Rotate `vector` by `angle` around `axis` through the origin.
    ///
    /// The axis is normalized here, so any non-zero length works. A zero
    /// axis leaves the vector unchanged.
    pub fn rotate(vector: &Vec3, angle: f64, axis: &Vec3) -> Vec3 {
        let Some(axis) = axis.try_normalize(0.0) else {
            return *vector;
        };

        let half = angle / 2.0;
        let imag = axis * half.sin();
        let q = Quat::new(half.cos(), imag.x, imag.y, imag.z);
        let p = Quat::from_imag(*vector);

        quaternion_mult(&[q, p, quaternion_conjugate(&q)]).imag()
    }

    /// Reflect `point` across the plane through `about_point` with normal `normal`.
    ///
    /// The normal does not have to be unit length. A zero normal leaves the
    /// point unchanged.
    pub fn reflect(point: &Vec3, normal: &Vec3, about_point: &Vec3) -> Vec3 {
        let norm_squared = normal.dot(normal);
        if norm_squared == 0.0 {
            return *point;
        }

        let offset = normal * (normal.dot(&(point - about_point)) / norm_squared);
        point - offset * 2.0
    }

    /// Projection of `vector` onto `direction`.
    ///
    /// Projecting onto the zero vector returns the zero vector.
    pub fn project(vector: &Vec3, direction: &Vec3) -> Vec3 {
        let norm_squared = direction.dot(direction);
        if norm_squared == 0.0 {
            return Vec3::zeros();
        }
        direction * (vector.dot(direction) / norm_squared)
    }

    /// Running sums of the given vectors.
    pub fn cumulative(vectors: &[Vec3]) -> Vec<Vec3> {
        vectors
            .iter()
            .scan(Vec3::zeros(), |acc, v| {
                *acc += v;
                Some(*acc)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{HALF_PI, PI};
    use super::utils::*;
    use super::*;
    use crate::error::GeometryError;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_unit_direction_and_angle() {
        assert_relative_eq!(unit_direction(0.0), RIGHT, epsilon = EPSILON);
        assert_relative_eq!(unit_direction(HALF_PI), UP, epsilon = EPSILON);
        assert_relative_eq!(angle_of(&UP), HALF_PI, epsilon = EPSILON);
        // Raw atan2: angles below the x axis stay negative
        assert_relative_eq!(angle_of(&DOWN), -HALF_PI, epsilon = EPSILON);
        assert_relative_eq!(angle_of(&LEFT), PI, epsilon = EPSILON);
    }

    #[test]
    fn test_line_intersection() {
        let point = line_intersection(
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(2.0, 2.0, 0.0),
            &Vec3::new(0.0, 2.0, 0.0),
            &Vec3::new(2.0, 0.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(point, Vec3::new(1.0, 1.0, 0.0), epsilon = EPSILON);

        let point = line_intersection(
            &Vec3::new(0.0, 1.0, 5.0),
            &Vec3::new(1.0, 3.0, 5.0),
            &Vec3::new(0.0, 4.0, 0.0),
            &Vec3::new(1.0, 3.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(point, Vec3::new(1.0, 3.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_lines_are_degenerate() {
        let result = line_intersection(
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(1.0, 1.0, 0.0),
            &Vec3::new(0.0, 1.0, 0.0),
            &Vec3::new(2.0, 3.0, 0.0),
        );
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry(_))));
    }

    #[test]
    fn test_quaternion_mult_identity_and_conjugate() {
        assert_eq!(quaternion_mult(&[]), Quat::identity());

        let q = Quat::new(0.5, 0.5, 0.5, 0.5);
        let product = quaternion_mult(&[q, quaternion_conjugate(&q)]);
        assert_relative_eq!(product.w, 1.0, epsilon = EPSILON);
        assert_relative_eq!(product.imag(), Vec3::zeros(), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_normalizes_axis() {
        let rotated = rotate(&RIGHT, HALF_PI, &Vec3::new(0.0, 0.0, 7.0));
        assert_relative_eq!(rotated, UP, epsilon = EPSILON);

        // 120 degrees around the diagonal cycles the axes
        let rotated = rotate(&RIGHT, 2.0 * PI / 3.0, &Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(rotated, UP, epsilon = 1e-9);
    }

    #[test]
    fn test_reflect_about_offset_plane() {
        let reflected = reflect(&Vec3::new(3.0, 1.0, 0.0), &RIGHT, &Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(reflected, Vec3::new(-1.0, 1.0, 0.0), epsilon = EPSILON);

        // Non-unit normal gives the same plane
        let reflected = reflect(&Vec3::new(3.0, 1.0, 0.0), &(RIGHT * 4.0), &Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(reflected, Vec3::new(-1.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_project() {
        let projected = project(&Vec3::new(3.0, 4.0, 0.0), &(RIGHT * 2.0));
        assert_relative_eq!(projected, Vec3::new(3.0, 0.0, 0.0), epsilon = EPSILON);
        assert_eq!(project(&UP, &Vec3::zeros()), Vec3::zeros());
    }

    #[test]
    fn test_cumulative_and_to_point() {
        let sums = cumulative(&[RIGHT, UP, RIGHT]);
        assert_eq!(sums, vec![RIGHT, UR, Vec3::new(2.0, 1.0, 0.0)]);

        assert_eq!(to_point(&[1.0, 2.0]).unwrap(), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(to_point(&[1.0, 2.0, 3.0]).unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert!(matches!(
            to_point(&[1.0]),
            Err(GeometryError::PreconditionViolation(_))
        ));
    }
}
