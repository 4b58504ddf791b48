//! Aesthetic mappings for chart layers.
//!
//! Maps data columns to encoding channels.

use crate::color::Rgba;
use crate::scale::CategoricalScale;

/// Aesthetic mapping specification.
///
/// Column mappings (`x`, `y`, `color`, ...) become field encodings; the
/// `*_value` fields are constants applied to every mark of the layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aes {
    /// X position mapping (column name).
    pub x: Option<String>,
    /// Y position mapping (column name).
    pub y: Option<String>,
    /// Secondary x position, the far edge of a bar.
    pub x2: Option<String>,
    /// Secondary y position, the far edge of a bar.
    pub y2: Option<String>,
    /// Color mapping (column name), encoded as a nominal field.
    pub color: Option<String>,
    /// Explicit label-to-color assignment for the color mapping.
    pub color_scale: Option<CategoricalScale>,
    /// Whether the color mapping draws a legend (default: yes).
    pub legend: Option<bool>,

    // Fixed values (not data-mapped)
    /// Fixed color value.
    pub color_value: Option<Rgba>,
    /// Fixed size value (mark area in square pixels).
    pub size_value: Option<f64>,
    /// Fixed opacity value.
    pub alpha_value: Option<f64>,
}

impl Aes {
    /// Create a new aesthetic mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map x position to a column.
    #[must_use]
    pub fn x(mut self, column: &str) -> Self {
        self.x = Some(column.to_string());
        self
    }

    /// Map y position to a column.
    #[must_use]
    pub fn y(mut self, column: &str) -> Self {
        self.y = Some(column.to_string());
        self
    }

    /// Map the secondary x position to a column.
    #[must_use]
    pub fn x2(mut self, column: &str) -> Self {
        self.x2 = Some(column.to_string());
        self
    }

    /// Map the secondary y position to a column.
    #[must_use]
    pub fn y2(mut self, column: &str) -> Self {
        self.y2 = Some(column.to_string());
        self
    }

    /// Map color to a column.
    #[must_use]
    pub fn color(mut self, column: &str) -> Self {
        self.color = Some(column.to_string());
        self
    }

    /// Fix the label-to-color assignment of the color mapping.
    #[must_use]
    pub fn color_scale(mut self, scale: CategoricalScale) -> Self {
        self.color_scale = Some(scale);
        self
    }

    /// Show or hide the color legend.
    #[must_use]
    pub fn legend(mut self, show: bool) -> Self {
        self.legend = Some(show);
        self
    }

    /// Set a fixed color value.
    #[must_use]
    pub fn color_value(mut self, color: Rgba) -> Self {
        self.color_value = Some(color);
        self
    }

    /// Set a fixed size value.
    #[must_use]
    pub fn size_value(mut self, size: f64) -> Self {
        self.size_value = Some(size);
        self
    }

    /// Set a fixed opacity, clamped to `[0, 1]`.
    #[must_use]
    pub fn alpha_value(mut self, alpha: f64) -> Self {
        self.alpha_value = Some(alpha.clamp(0.0, 1.0));
        self
    }

    /// Merge another Aes, with other taking precedence.
    #[must_use]
    pub fn merge(&self, other: &Aes) -> Aes {
        Aes {
            x: other.x.clone().or_else(|| self.x.clone()),
            y: other.y.clone().or_else(|| self.y.clone()),
            x2: other.x2.clone().or_else(|| self.x2.clone()),
            y2: other.y2.clone().or_else(|| self.y2.clone()),
            color: other.color.clone().or_else(|| self.color.clone()),
            color_scale: other.color_scale.clone().or_else(|| self.color_scale.clone()),
            legend: other.legend.or(self.legend),
            color_value: other.color_value.or(self.color_value),
            size_value: other.size_value.or(self.size_value),
            alpha_value: other.alpha_value.or(self.alpha_value),
        }
    }

    /// Column names this mapping reads from the layer data.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        [&self.x, &self.y, &self.x2, &self.y2, &self.color]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect()
    }
}
