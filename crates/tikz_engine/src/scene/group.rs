//! Groups of independent drawables
//!
//! A [`Group`] keeps its members separate (no point merging) and fans every
//! motion out to each of them. Its pivot is the mean of the members' own
//! centers, not the centroid of all their points.

use super::{Drawable, Motion, Transformable};
use crate::error::GeometryError;
use crate::foundation::math::Vec3;

/// Drawables transformed together but rendered independently
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    members: Vec<Drawable>,
}

impl Group {
    /// Create a group from its members
    pub fn new(members: impl IntoIterator<Item = Drawable>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Members in render order
    pub fn members(&self) -> &[Drawable] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Transformable for Group {
    fn center(&self) -> Result<Vec3, GeometryError> {
        if self.members.is_empty() {
            return Err(GeometryError::PreconditionViolation(
                "group has no members".to_string(),
            ));
        }
        let mut sum = Vec3::zeros();
        for member in &self.members {
            sum += member.center()?;
        }
        Ok(sum / self.members.len() as f64)
    }

    fn extreme(&self, direction: &Vec3) -> Result<Vec3, GeometryError> {
        let mut best: Option<(f64, Vec3)> = None;
        for member in &self.members {
            let point = member.extreme(direction)?;
            let value = direction.dot(&point);
            if best.map_or(true, |(max, _)| value > max) {
                best = Some((value, point));
            }
        }
        best.map(|(_, point)| point).ok_or_else(|| {
            GeometryError::PreconditionViolation("group has no members".to_string())
        })
    }

    fn apply(&mut self, motion: &Motion) {
        for member in &mut self.members {
            member.apply(motion);
        }
    }

    fn render(&self) -> String {
        self.members
            .iter()
            .map(Transformable::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use crate::foundation::math::OUT;
    use crate::scene::Figure;
    use approx::assert_relative_eq;

    fn square_at(x: f64) -> Figure {
        Figure::lines(vec![
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x + 1.0, 0.0, 0.0),
            Vec3::new(x + 1.0, 1.0, 0.0),
            Vec3::new(x, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_center_is_mean_of_member_centers() {
        // Member point counts differ, so the point centroid would be biased
        let dense = Figure::lines(vec![Vec3::zeros(); 8]);
        let single = Figure::lines(vec![Vec3::new(4.0, 0.0, 0.0)]);
        let group = Group::new([dense.into(), single.into()]);
        assert_relative_eq!(group.center().unwrap(), Vec3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_about_group_center() {
        let mut group = Group::new([square_at(0.0).into(), square_at(4.0).into()]);
        group.rotate(PI, OUT, None).unwrap();

        // Group center is (2.5, 0.5); the first square lands where the second was
        let first = group.members()[0].as_figure().unwrap();
        assert_relative_eq!(first.points()[0], Vec3::new(5.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_failed_member_center_leaves_group_untouched() {
        let empty = Figure::lines(Vec::new());
        let mut group = Group::new([square_at(0.0).into(), empty.into()]);
        let before = group.clone();

        assert!(group.scale(3.0, None).is_err());
        assert_eq!(group, before);
    }

    #[test]
    fn test_render_joins_members() {
        let group = Group::new([square_at(0.0).into(), square_at(1.0).into()]);
        assert_eq!(group.render().lines().count(), 2);
        assert!(Group::default().center().is_err());
    }
}
