//! Axis guides.
//!
//! Every toggle is optional: an unset toggle defers to the root theme, so a
//! theme that strips decorations reaches every panel of a layout.

/// Axis title setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AxisTitle {
    /// Renderer default (derived from the field name).
    #[default]
    Auto,
    /// No title.
    Hidden,
    /// Explicit title text.
    Text(String),
}

/// Orientation of a header or axis element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    /// Above the panel.
    Top,
    /// Below the panel.
    Bottom,
    /// Left of the panel.
    Left,
    /// Right of the panel.
    Right,
}

impl Orient {
    /// Name used in chart specs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Orient::Top => "top",
            Orient::Bottom => "bottom",
            Orient::Left => "left",
            Orient::Right => "right",
        }
    }
}

/// Axis guide for one position channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    /// Draw the axis at all.
    pub visible: bool,
    /// Title setting.
    pub title: AxisTitle,
    /// Tick labels.
    pub labels: Option<bool>,
    /// Tick marks.
    pub ticks: Option<bool>,
    /// Grid lines.
    pub grid: Option<bool>,
    /// The axis baseline (domain line).
    pub domain: Option<bool>,
    /// Explicit tick values.
    pub values: Option<Vec<f64>>,
}

impl Axis {
    /// A visible axis with renderer defaults.
    #[must_use]
    pub fn new() -> Self {
        Self { visible: true, ..Self::default() }
    }

    /// No axis.
    #[must_use]
    pub fn hidden() -> Self {
        Self { visible: false, ..Self::default() }
    }

    /// Set the title text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = AxisTitle::Text(title.into());
        self
    }

    /// Remove the title.
    #[must_use]
    pub fn no_title(mut self) -> Self {
        self.title = AxisTitle::Hidden;
        self
    }

    /// Show or hide tick labels.
    #[must_use]
    pub fn labels(mut self, show: bool) -> Self {
        self.labels = Some(show);
        self
    }

    /// Show or hide tick marks.
    #[must_use]
    pub fn ticks(mut self, show: bool) -> Self {
        self.ticks = Some(show);
        self
    }

    /// Show or hide grid lines.
    #[must_use]
    pub fn grid(mut self, show: bool) -> Self {
        self.grid = Some(show);
        self
    }

    /// Show or hide the baseline.
    #[must_use]
    pub fn domain(mut self, show: bool) -> Self {
        self.domain = Some(show);
        self
    }

    /// Place ticks at fixed values.
    #[must_use]
    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }

    /// Title text if set explicitly.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        match &self.title {
            AxisTitle::Text(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_defaults_defer_to_theme() {
        let axis = Axis::new();
        assert!(axis.visible);
        assert_eq!(axis.title, AxisTitle::Auto);
        assert!(axis.labels.is_none() && axis.ticks.is_none() && axis.grid.is_none());
    }

    #[test]
    fn test_axis_builder() {
        let axis = Axis::new().no_title().labels(false).grid(false).values(vec![0.0]);
        assert_eq!(axis.title, AxisTitle::Hidden);
        assert_eq!(axis.labels, Some(false));
        assert_eq!(axis.grid, Some(false));
        assert_eq!(axis.values, Some(vec![0.0]));
    }

    #[test]
    fn test_axis_title_text() {
        assert_eq!(Axis::new().title("Count").title_text(), Some("Count"));
        assert_eq!(Axis::new().no_title().title_text(), None);
    }

    #[test]
    fn test_hidden_axis() {
        assert!(!Axis::hidden().visible);
    }

    #[test]
    fn test_orient_names() {
        assert_eq!(Orient::Top.as_str(), "top");
        assert_eq!(Orient::Right.as_str(), "right");
    }
}
