//! Scene object model
//!
//! Every drawable owns its points, its style and its children outright, so
//! `Clone` is a deep copy and a branch of a scene never aliases another.
//!
//! ## Transform protocol
//!
//! ```text
//! Transformable::rotate / scale / reflect / linear_transform
//!      ↓  resolve pivot (the only fallible step)
//! Motion
//!      ↓  applied to own points, tracked shape metrics
//! subobjects (same Motion, same pivot)
//! ```
//!
//! Resolving the pivot before touching any point makes every transform
//! all-or-nothing: either the whole tree moves or nothing does.

mod board;
mod figure;
mod group;
mod label;

pub use board::{Board, BoardError, Scene};
pub use figure::{Figure, ShapeKind};
pub use group::Group;
pub use label::{Label, LABEL_MARGIN};

use crate::error::GeometryError;
use crate::foundation::math::utils::{reflect, rotate};
use crate::foundation::math::{Mat3, Vec3};

/// A single rigid or linear motion with its pivot already resolved
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Translate by a vector
    Shift(Vec3),
    /// Apply a matrix about a pivot (`p' = M (p - about) + about`)
    Linear {
        /// The linear map
        matrix: Mat3,
        /// Pivot
        about: Vec3,
    },
    /// Uniform scaling about a pivot
    Scale {
        /// Scale factor
        factor: f64,
        /// Pivot
        about: Vec3,
    },
    /// Rotation around an axis through a pivot
    Rotate {
        /// Angle in radians
        angle: f64,
        /// Rotation axis, any non-zero length
        axis: Vec3,
        /// Pivot
        about: Vec3,
    },
    /// Reflection across the plane through a pivot
    Reflect {
        /// Plane normal, any non-zero length
        normal: Vec3,
        /// A point on the plane
        about: Vec3,
    },
}

impl Motion {
    /// Where `point` ends up under this motion
    pub fn apply_to(&self, point: &Vec3) -> Vec3 {
        match self {
            Motion::Shift(vector) => point + vector,
            Motion::Linear { matrix, about } => matrix * (point - about) + about,
            Motion::Scale { factor, about } => (point - about) * *factor + about,
            Motion::Rotate { angle, axis, about } => rotate(&(point - about), *angle, axis) + about,
            Motion::Reflect { normal, about } => reflect(point, normal, about),
        }
    }

    /// Factor applied to lengths, for motions that scale uniformly
    pub fn scale_factor(&self) -> Option<f64> {
        match self {
            Motion::Scale { factor, .. } => Some(*factor),
            _ => None,
        }
    }
}

/// The transform and render contract shared by every drawable
///
/// Implementors provide the four required methods; every transform is built
/// on top of them. Transforms that need a pivot take `Option<Vec3>` and fall
/// back to [`Transformable::center`].
pub trait Transformable {
    /// Pivot used when a transform is given none
    fn center(&self) -> Result<Vec3, GeometryError>;

    /// Point maximizing the dot product with `direction`
    fn extreme(&self, direction: &Vec3) -> Result<Vec3, GeometryError>;

    /// Apply a resolved motion to this drawable and all of its children
    fn apply(&mut self, motion: &Motion);

    /// TikZ markup for this drawable followed by its children, one command per line
    fn render(&self) -> String;

    /// Translate by `vector`
    fn shift(&mut self, vector: Vec3) -> &mut Self {
        self.apply(&Motion::Shift(vector));
        self
    }

    /// Translate so the center lands on `target`
    fn move_to(&mut self, target: Vec3) -> Result<&mut Self, GeometryError> {
        let center = self.center()?;
        Ok(self.shift(target - center))
    }

    /// Translate along `direction` until the centers agree along it
    fn align_to<T: Transformable + ?Sized>(
        &mut self,
        other: &T,
        direction: Vec3,
    ) -> Result<&mut Self, GeometryError>
    where
        Self: Sized,
    {
        let offset = other.center()? - self.center()?;
        Ok(self.shift(crate::foundation::math::utils::project(&offset, &direction)))
    }

    /// Apply `matrix` to every point about `about` (default: own center)
    fn linear_transform(
        &mut self,
        matrix: Mat3,
        about: Option<Vec3>,
    ) -> Result<&mut Self, GeometryError> {
        let about = self.pivot(about)?;
        self.apply(&Motion::Linear { matrix, about });
        Ok(self)
    }

    /// Scale by `factor` about `about` (default: own center)
    fn scale(&mut self, factor: f64, about: Option<Vec3>) -> Result<&mut Self, GeometryError> {
        if !factor.is_finite() {
            return Err(GeometryError::PreconditionViolation(format!(
                "scale factor must be finite, got {factor}"
            )));
        }
        let about = self.pivot(about)?;
        self.apply(&Motion::Scale { factor, about });
        Ok(self)
    }

    /// Rotate by `angle` around `axis` through `about` (default: own center)
    fn rotate(
        &mut self,
        angle: f64,
        axis: Vec3,
        about: Option<Vec3>,
    ) -> Result<&mut Self, GeometryError> {
        if axis.norm_squared() == 0.0 {
            return Err(GeometryError::PreconditionViolation(
                "rotation axis is zero".to_string(),
            ));
        }
        let about = self.pivot(about)?;
        self.apply(&Motion::Rotate { angle, axis, about });
        Ok(self)
    }

    /// Reflect across the plane with `normal` through `about` (default: own center)
    fn reflect(&mut self, normal: Vec3, about: Option<Vec3>) -> Result<&mut Self, GeometryError> {
        if normal.norm_squared() == 0.0 {
            return Err(GeometryError::PreconditionViolation(
                "reflection normal is zero".to_string(),
            ));
        }
        let about = self.pivot(about)?;
        self.apply(&Motion::Reflect { normal, about });
        Ok(self)
    }

    /// Explicit pivot, or the center when none is given
    fn pivot(&self, about: Option<Vec3>) -> Result<Vec3, GeometryError> {
        match about {
            Some(point) => Ok(point),
            None => self.center(),
        }
    }
}

/// Any node of a scene tree
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Point-set primitive or sampled curve
    Figure(Figure),
    /// Text node
    Label(Label),
    /// Independent drawables moved together
    Group(Group),
}

impl From<Figure> for Drawable {
    fn from(figure: Figure) -> Self {
        Drawable::Figure(figure)
    }
}

impl From<Label> for Drawable {
    fn from(label: Label) -> Self {
        Drawable::Label(label)
    }
}

impl From<Group> for Drawable {
    fn from(group: Group) -> Self {
        Drawable::Group(group)
    }
}

impl Drawable {
    /// The figure inside, if this is one
    pub fn as_figure(&self) -> Option<&Figure> {
        match self {
            Drawable::Figure(figure) => Some(figure),
            _ => None,
        }
    }

    /// The label inside, if this is one
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Drawable::Label(label) => Some(label),
            _ => None,
        }
    }
}

impl Transformable for Drawable {
    fn center(&self) -> Result<Vec3, GeometryError> {
        match self {
            Drawable::Figure(figure) => figure.center(),
            Drawable::Label(label) => label.center(),
            Drawable::Group(group) => group.center(),
        }
    }

    fn extreme(&self, direction: &Vec3) -> Result<Vec3, GeometryError> {
        match self {
            Drawable::Figure(figure) => figure.extreme(direction),
            Drawable::Label(label) => label.extreme(direction),
            Drawable::Group(group) => group.extreme(direction),
        }
    }

    fn apply(&mut self, motion: &Motion) {
        match self {
            Drawable::Figure(figure) => figure.apply(motion),
            Drawable::Label(label) => label.apply(motion),
            Drawable::Group(group) => group.apply(motion),
        }
    }

    fn render(&self) -> String {
        match self {
            Drawable::Figure(figure) => figure.render(),
            Drawable::Label(label) => label.render(),
            Drawable::Group(group) => group.render(),
        }
    }
}

/// `(x, y, z)` with full float precision
pub(crate) fn format_point(point: &Vec3) -> String {
    format!("({:?}, {:?}, {:?})", point.x, point.y, point.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use crate::foundation::math::{OUT, RIGHT, UP};
    use approx::assert_relative_eq;

    #[test]
    fn test_motion_apply_to() {
        let point = Vec3::new(2.0, 1.0, 0.0);
        let about = Vec3::new(1.0, 1.0, 0.0);

        let shifted = Motion::Shift(UP).apply_to(&point);
        assert_eq!(shifted, Vec3::new(2.0, 2.0, 0.0));

        let scaled = Motion::Scale { factor: 3.0, about }.apply_to(&point);
        assert_relative_eq!(scaled, Vec3::new(4.0, 1.0, 0.0), epsilon = 1e-12);

        let rotated = Motion::Rotate { angle: HALF_PI, axis: OUT, about }.apply_to(&point);
        assert_relative_eq!(rotated, Vec3::new(1.0, 2.0, 0.0), epsilon = 1e-12);

        let reflected = Motion::Reflect { normal: RIGHT, about }.apply_to(&point);
        assert_relative_eq!(reflected, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_linear_motion_uses_column_form() {
        // Shear x += y
        let matrix = Mat3::new(1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let moved = Motion::Linear { matrix, about: Vec3::zeros() }.apply_to(&Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(moved, Vec3::new(3.0, 2.0, 0.0));
    }

    #[test]
    fn test_format_point_keeps_decimal() {
        assert_eq!(format_point(&Vec3::new(1.0, -0.5, 0.0)), "(1.0, -0.5, 0.0)");
    }
}
