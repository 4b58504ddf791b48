//! Jittered strip plots, one column of points per category.

use crate::error::{Error, Result};
use crate::grammar::{
    Aes, Axis, Chart, DataFrame, Facet, Geom, Header, Orient, Stat, Theme,
};
use crate::layout::CompositeLayout;
use crate::scale::CategoricalScale;

/// Field the renderer writes the jitter offset to.
pub const JITTER_FIELD: &str = "jitter";

/// Options for [`stripplot`].
#[derive(Debug, Clone, PartialEq)]
pub struct StripOptions {
    /// Circle marker area in square pixels.
    pub size: f64,
    /// Width of each column panel in pixels.
    pub width: u32,
    /// Panel height in pixels.
    pub height: Option<u32>,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self { size: 8.0, width: 40, height: None }
    }
}

impl StripOptions {
    /// Set the marker size.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the panel height.
    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Strip plot of `y`, with one jittered column per label of `x`.
///
/// When `x` is `None` or not a column of `data`, all points share one
/// column, titled with `x` if given. Panels sit flush against each other
/// without view borders.
///
/// # Errors
///
/// Returns an error if `data` is empty, `y` is missing or not numeric, or
/// the marker size is not positive.
pub fn stripplot(x: Option<&str>, y: &str, data: &DataFrame, options: &StripOptions) -> Result<CompositeLayout> {
    if data.nrow() == 0 {
        return Err(Error::EmptyDataset);
    }
    if !(options.size.is_finite() && options.size > 0.0) {
        return Err(Error::invalid(format!("marker size must be > 0, got {}", options.size)));
    }

    let category = x.filter(|name| data.has_column(name));

    let mut aes = Aes::new().x(JITTER_FIELD).y(y).size_value(options.size);
    let mut x_axis = Axis::new().no_title().values(vec![0.0]).grid(false).labels(false);
    let mut chart = Chart::new().data(data.clone()).width(options.width);

    match category {
        Some(column) => {
            let scale = CategoricalScale::from_labels(data.distinct(column)?);
            aes = aes.color(column).color_scale(scale).legend(false);
            x_axis = x_axis.ticks(true);
            let header = Header {
                label_angle: Some(-90.0),
                title_orient: Some(Orient::Top),
                label_orient: Some(Orient::Bottom),
                label_align: Some("right"),
                label_padding: Some(3.0),
                ..Header::default()
            };
            chart = chart.facet(Facet::col(column, header));
        }
        None => {
            x_axis = x_axis.ticks(false);
            if let Some(label) = x {
                chart = chart.title(label);
            }
        }
    }

    if let Some(height) = options.height {
        chart = chart.height(height);
    }

    let built = chart
        .aes(aes)
        .geom(Geom::circle().stat(Stat::jitter(JITTER_FIELD)))
        .x_axis(x_axis)
        .y_axis(Axis::new().title(y))
        .build()?;

    Ok(CompositeLayout::leaf(built).with_theme(Theme::default().facet_spacing(0.0).view_stroke(false)))
}
