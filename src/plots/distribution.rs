//! Layered density plots.

use crate::config::{check_unit, Bandwidth};
use crate::error::{Error, Result};
use crate::grammar::{Aes, Axis, BuiltChart, Chart, Coord, DataFrame, Geom, Stack, Stat};
use crate::scale::{AxisSpec, CategoricalScale};

/// Name of the label column a fold produces.
const FOLD_VARIABLE: &str = "variable";
/// Name of the value column a fold produces.
const FOLD_VALUE: &str = "value";

/// Which columns hold the values to estimate densities for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueColumns {
    /// One value column, split into groups by the hue column.
    Single(String),
    /// Several value columns, folded into `(variable, value)` rows with one
    /// group per column.
    Fold(Vec<String>),
}

impl From<&str> for ValueColumns {
    fn from(column: &str) -> Self {
        ValueColumns::Single(column.to_string())
    }
}

impl From<&[&str]> for ValueColumns {
    fn from(columns: &[&str]) -> Self {
        ValueColumns::Fold(columns.iter().map(ToString::to_string).collect())
    }
}

/// Options for [`layered_distribution_plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionOptions {
    /// Group column. Required for [`ValueColumns::Single`]; for a fold it
    /// renames the generated label column.
    pub hue: Option<String>,
    /// Area opacity.
    pub opacity: f64,
    /// Kernel bandwidth.
    pub bandwidth: Bandwidth,
    /// Density sample points.
    pub steps: usize,
    /// Overlap the groups or stack them.
    pub stack: Stack,
    /// Fraction of the value range added to both ends of the x axis.
    pub x_pad_scaler: f64,
    /// Fill the areas.
    pub filled: bool,
    /// View width in pixels.
    pub width: Option<u32>,
    /// View height in pixels.
    pub height: Option<u32>,
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            hue: None,
            opacity: 0.6,
            bandwidth: Bandwidth::Fixed(0.3),
            steps: 200,
            stack: Stack::Overlap,
            x_pad_scaler: 0.2,
            filled: true,
            width: None,
            height: None,
        }
    }
}

impl DistributionOptions {
    /// Set the group column.
    #[must_use]
    pub fn with_hue(mut self, hue: &str) -> Self {
        self.hue = Some(hue.to_string());
        self
    }

    /// Set the area opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the kernel bandwidth.
    #[must_use]
    pub fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the number of density samples.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
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
    pub fn with_x_pad_scaler(mut self, scaler: f64) -> Self {
        self.x_pad_scaler = scaler;
        self
    }

    /// Fill the areas or draw outlines only.
    #[must_use]
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }
}

/// One count-scaled density area per group.
///
/// # Errors
///
/// Returns an error if `data` is empty, a column is missing or not numeric,
/// a single value column comes without a hue, a fold lists no columns, or an
/// option is out of range.
pub fn layered_distribution_plot(
    values: &ValueColumns,
    data: &DataFrame,
    options: &DistributionOptions,
) -> Result<BuiltChart> {
    check_unit("opacity", options.opacity)?;
    if data.nrow() == 0 {
        return Err(Error::EmptyDataset);
    }

    let (table, x, hue) = match values {
        ValueColumns::Single(column) => {
            let hue = options
                .hue
                .clone()
                .ok_or_else(|| Error::invalid("a single value column needs a hue column"))?;
            (data.clone(), column.clone(), hue)
        }
        ValueColumns::Fold(columns) => {
            if columns.is_empty() {
                return Err(Error::invalid("fold needs at least one value column"));
            }
            let names: Vec<&str> = columns.iter().map(String::as_str).collect();
            let mut long = data.melt(&names)?;
            let hue = match &options.hue {
                Some(hue) if hue == FOLD_VALUE => {
                    return Err(Error::invalid(format!(
                        "hue '{FOLD_VALUE}' collides with the folded value column"
                    )));
                }
                Some(hue) => {
                    long.rename(FOLD_VARIABLE, hue);
                    hue.clone()
                }
                None => FOLD_VARIABLE.to_string(),
            };
            (long, FOLD_VALUE.to_string(), hue)
        }
    };

    let axis = AxisSpec::from_values(&x, &table.numeric_values(&x)?, options.x_pad_scaler)?;
    let bandwidth = options.bandwidth.resolve(axis.effective_range());
    let scale = CategoricalScale::from_labels(table.distinct(&hue)?);
    log::debug!("density of '{x}' by '{hue}': bandwidth {bandwidth}, {} group(s)", scale.len());

    let stat = Stat::density()
        .bandwidth(bandwidth)
        .steps(options.steps)
        .counts(true)
        .over(axis.domain);

    let mut chart = Chart::new()
        .data(table)
        .aes(Aes::new().x(&x).color(&hue).color_scale(scale).alpha_value(options.opacity))
        .geom(Geom::area().filled(options.filled).stack(options.stack).stat(stat))
        .coord(Coord::cartesian().xlim(axis.domain).zero_x(false))
        .x_axis(Axis::new().title(x.as_str()));
    if let Some(width) = options.width {
        chart = chart.width(width);
    }
    if let Some(height) = options.height {
        chart = chart.height(height);
    }
    chart.build()
}
