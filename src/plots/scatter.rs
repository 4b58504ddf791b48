//! Scatter plots.

use crate::color::Rgba;
use crate::config::check_unit;
use crate::error::{Error, Result};
use crate::grammar::{Aes, Axis, BuiltChart, Chart, Coord, DataFrame, Geom};
use crate::scale::CategoricalScale;

/// Options for [`scatterplot`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterOptions {
    /// Column whose labels color the points; overrides `color`.
    pub hue: Option<String>,
    /// Point color when there is no hue.
    pub color: Option<Rgba>,
    /// Point opacity.
    pub opacity: f64,
    /// Fit the x axis to the data instead of starting it at zero.
    pub x_autoscale: bool,
    /// Fit the y axis to the data instead of starting it at zero.
    pub y_autoscale: bool,
    /// View width in pixels.
    pub width: Option<u32>,
    /// View height in pixels.
    pub height: Option<u32>,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            hue: None,
            color: None,
            opacity: 1.0,
            x_autoscale: true,
            y_autoscale: true,
            width: None,
            height: None,
        }
    }
}

impl ScatterOptions {
    /// Color points by `column`.
    #[must_use]
    pub fn with_hue(mut self, column: &str) -> Self {
        self.hue = Some(column.to_string());
        self
    }

    /// Set the point color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the point opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Fit each axis to the data or start it at zero.
    #[must_use]
    pub fn with_autoscale(mut self, x: bool, y: bool) -> Self {
        self.x_autoscale = x;
        self.y_autoscale = y;
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

/// Point chart of `y` against `x`.
///
/// # Errors
///
/// Returns an error if `data` is empty, a column is missing, a position
/// column is not numeric, or the opacity is out of range.
pub fn scatterplot(x: &str, y: &str, data: &DataFrame, options: &ScatterOptions) -> Result<BuiltChart> {
    check_unit("opacity", options.opacity)?;
    if data.nrow() == 0 {
        return Err(Error::EmptyDataset);
    }

    let mut aes = Aes::new().x(x).y(y).alpha_value(options.opacity);
    match (&options.hue, options.color) {
        (Some(hue), _) => {
            aes = aes.color(hue).color_scale(CategoricalScale::from_labels(data.distinct(hue)?));
        }
        (None, Some(color)) => aes = aes.color_value(color),
        (None, None) => {}
    }

    let mut chart = Chart::new()
        .data(data.clone())
        .aes(aes)
        .geom(Geom::point())
        .coord(Coord::cartesian().zero_x(!options.x_autoscale).zero_y(!options.y_autoscale))
        .x_axis(Axis::new().title(x))
        .y_axis(Axis::new().title(y));
    if let Some(width) = options.width {
        chart = chart.width(width);
    }
    if let Some(height) = options.height {
        chart = chart.height(height);
    }
    chart.build()
}
