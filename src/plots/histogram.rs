//! Histograms of one numeric column.

use crate::color::Rgba;
use crate::config::check_unit;
use crate::error::{Error, Result};
use crate::grammar::{
    Aes, Axis, BuiltChart, Chart, Coord, DataFrame, Geom, Interpolate, Stack, Stat,
};
use crate::scale::{AxisSpec, CategoricalScale};

/// Options for [`histogram`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramOptions {
    /// Bar opacity.
    pub opacity: f64,
    /// Number of bins.
    pub maxbins: usize,
    /// Bar color; renderer default when `None`.
    pub color: Option<Rgba>,
    /// Fraction of the data range added to both ends of the x axis.
    pub padding: f64,
    /// View width in pixels.
    pub width: Option<u32>,
    /// View height in pixels.
    pub height: Option<u32>,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self { opacity: 1.0, maxbins: 30, color: None, padding: 0.0, width: None, height: None }
    }
}

impl HistogramOptions {
    /// Set the bar opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the number of bins.
    #[must_use]
    pub fn with_maxbins(mut self, maxbins: usize) -> Self {
        self.maxbins = maxbins;
        self
    }

    /// Set the bar color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the axis padding fraction.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the view width.
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the view height.
    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Options for [`layered_histogram`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredHistogramOptions {
    /// Area opacity.
    pub opacity: f64,
    /// Number of bins.
    pub maxbins: usize,
    /// Overlap the groups or stack them.
    pub stack: Stack,
    /// Fraction of the data range added to both ends of the x axis.
    pub padding: f64,
    /// View width in pixels.
    pub width: Option<u32>,
    /// View height in pixels.
    pub height: Option<u32>,
}

impl Default for LayeredHistogramOptions {
    fn default() -> Self {
        Self {
            opacity: 0.6,
            maxbins: 100,
            stack: Stack::Overlap,
            padding: 0.0,
            width: None,
            height: None,
        }
    }
}

impl LayeredHistogramOptions {
    /// Set the area opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the number of bins.
    #[must_use]
    pub fn with_maxbins(mut self, maxbins: usize) -> Self {
        self.maxbins = maxbins;
        self
    }

    /// Overlap or stack the groups.
    #[must_use]
    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stack = stack;
        self
    }

    /// Set the axis padding fraction.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

/// Bar chart of binned counts of `x`.
///
/// # Errors
///
/// Returns an error if `data` is empty, `x` is missing, not numeric or has no
/// values, or an option is out of range.
pub fn histogram(x: &str, data: &DataFrame, options: &HistogramOptions) -> Result<BuiltChart> {
    check_unit("opacity", options.opacity)?;
    let axis = binned_axis(x, data, options.padding)?;

    let mut aes = Aes::new().x(x).alpha_value(options.opacity);
    if let Some(color) = options.color {
        aes = aes.color_value(color);
    }

    let mut chart = Chart::new()
        .data(data.clone())
        .aes(aes)
        .geom(Geom::bar().stat(Stat::bin(options.maxbins).over(axis.domain)))
        .coord(Coord::cartesian().xlim(axis.domain).zero_x(false))
        .x_axis(Axis::new().title(x))
        .y_axis(Axis::new().title("Count"));
    if let Some(width) = options.width {
        chart = chart.width(width);
    }
    if let Some(height) = options.height {
        chart = chart.height(height);
    }
    chart.build()
}

/// One step area of binned counts of `x` per label of `hue`.
///
/// # Errors
///
/// Returns an error if `data` is empty, a column is missing, `x` is not
/// numeric or has no values, or an option is out of range.
pub fn layered_histogram(
    x: &str,
    hue: &str,
    data: &DataFrame,
    options: &LayeredHistogramOptions,
) -> Result<BuiltChart> {
    check_unit("opacity", options.opacity)?;
    let axis = binned_axis(x, data, options.padding)?;
    let scale = CategoricalScale::from_labels(data.distinct(hue)?);

    let mut chart = Chart::new()
        .data(data.clone())
        .aes(Aes::new().x(x).color(hue).color_scale(scale).alpha_value(options.opacity))
        .geom(
            Geom::area()
                .interpolate(Interpolate::StepAfter)
                .stack(options.stack)
                .stat(Stat::bin(options.maxbins).over(axis.domain)),
        )
        .coord(Coord::cartesian().xlim(axis.domain).zero_x(false))
        .x_axis(Axis::new().title(x))
        .y_axis(Axis::new().title("Count"));
    if let Some(width) = options.width {
        chart = chart.width(width);
    }
    if let Some(height) = options.height {
        chart = chart.height(height);
    }
    chart.build()
}

fn binned_axis(x: &str, data: &DataFrame, padding: f64) -> Result<AxisSpec> {
    if data.nrow() == 0 {
        return Err(Error::EmptyDataset);
    }
    AxisSpec::from_values(x, &data.numeric_values(x)?, padding)
}
