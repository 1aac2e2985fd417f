//! Text labels
//!
//! A label is a single anchor point plus literal text, rendered as a TikZ
//! `\node`. It takes part in transforms like any other drawable, so labels
//! attached as subobjects follow their parent.

use super::{format_point, Motion, Transformable};
use crate::error::GeometryError;
use crate::foundation::math::utils::project;
use crate::foundation::math::Vec3;
use crate::style::Style;

/// Gap left between a label and the object it is placed next to
pub const LABEL_MARGIN: f64 = 0.2;

/// Text anchored at one point
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    position: Vec3,
    text: String,
    style: Style,
}

impl Label {
    /// Plain text at the origin
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            position: Vec3::zeros(),
            text: text.into(),
            style: Style::new(),
        }
    }

    /// Inline math (`$...$`) at the origin
    pub fn math(text: impl AsRef<str>) -> Self {
        Self::text(format!("${}$", text.as_ref()))
    }

    /// Builder pattern: set the anchor
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: replace the style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Anchor point
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Node contents
    pub fn content(&self) -> &str {
        &self.text
    }

    /// Style options
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable style options
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Place the label just outside `other` on the `direction` side.
    ///
    /// The anchor ends up at `other`'s center, pushed along `direction` to
    /// the projection of `other`'s extreme point, plus [`LABEL_MARGIN`].
    pub fn next_to<T: Transformable + ?Sized>(
        &mut self,
        other: &T,
        direction: Vec3,
    ) -> Result<&mut Self, GeometryError> {
        let extreme = other.extreme(&direction)?;
        let center = other.center()?;
        let reach = project(&(extreme - center), &direction);
        let target = center + reach + direction * LABEL_MARGIN;
        Ok(self.shift(target - self.position))
    }
}

impl Transformable for Label {
    fn center(&self) -> Result<Vec3, GeometryError> {
        Ok(self.position)
    }

    fn extreme(&self, _direction: &Vec3) -> Result<Vec3, GeometryError> {
        Ok(self.position)
    }

    fn apply(&mut self, motion: &Motion) {
        self.position = motion.apply_to(&self.position);
    }

    fn render(&self) -> String {
        format!(
            "\\node{} at {} {{{}}};",
            self.style.render(),
            format_point(&self.position),
            self.text
        )
    }
}
