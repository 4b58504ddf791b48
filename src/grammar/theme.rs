//! Theme system for charts and layouts.
//!
//! Controls the non-data decorations: view borders, axis baselines, ticks,
//! grid lines and facet spacing. A theme belongs to the root of a layout and
//! is emitted once, as the top-level renderer configuration.

use crate::color::Rgba;

/// Theme specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Draw the border around each view.
    pub show_view_stroke: bool,
    /// Draw axis baselines.
    pub show_axis_domain: bool,
    /// Draw tick marks.
    pub show_ticks: bool,
    /// Draw grid lines.
    pub show_grid: bool,
    /// Gap between facet panels in pixels.
    pub facet_spacing: Option<f64>,
    /// Figure background color.
    pub background: Option<Rgba>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            show_view_stroke: true,
            show_axis_domain: true,
            show_ticks: true,
            show_grid: true,
            facet_spacing: None,
            background: None,
        }
    }
}

impl Theme {
    /// Classic theme: no grid.
    #[must_use]
    pub fn classic() -> Self {
        Self { show_grid: false, ..Self::default() }
    }

    /// No view borders, axis baselines, ticks or grid lines, so adjacent
    /// panels join without visible seams.
    #[must_use]
    pub fn seamless() -> Self {
        Self {
            show_view_stroke: false,
            show_axis_domain: false,
            show_ticks: false,
            show_grid: false,
            ..Self::default()
        }
    }

    /// Set background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Enable or disable grid lines.
    #[must_use]
    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Enable or disable the view border.
    #[must_use]
    pub fn view_stroke(mut self, show: bool) -> Self {
        self.show_view_stroke = show;
        self
    }

    /// Set the gap between facet panels.
    #[must_use]
    pub fn facet_spacing(mut self, spacing: f64) -> Self {
        self.facet_spacing = Some(spacing);
        self
    }

    /// Whether every decoration is stripped.
    #[must_use]
    pub fn is_seamless(&self) -> bool {
        !(self.show_view_stroke || self.show_axis_domain || self.show_ticks || self.show_grid)
    }

    /// Whether the theme changes nothing relative to renderer defaults.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Theme for a layout built from two themed parts.
    ///
    /// A decoration stripped by either part stays stripped; explicit settings
    /// of `self` win over those of `other`.
    #[must_use]
    pub fn combine(&self, other: &Theme) -> Theme {
        Theme {
            show_view_stroke: self.show_view_stroke && other.show_view_stroke,
            show_axis_domain: self.show_axis_domain && other.show_axis_domain,
            show_ticks: self.show_ticks && other.show_ticks,
            show_grid: self.show_grid && other.show_grid,
            facet_spacing: self.facet_spacing.or(other.facet_spacing),
            background: self.background.or(other.background),
        }
    }
}
