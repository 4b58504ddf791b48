//! Joint plots: a scatter of two columns with marginal summaries.
//!
//! The top marginal summarizes the x column over the main x domain and the
//! right marginal summarizes the y column over the main y domain, drawn
//! flipped so its value axis runs vertically. Both domains are padded
//! extents of the data, so marginal bins and density grids line up with the
//! points exactly.
//!
//! ```text
//! +-------+
//! |  top  |
//! +-------+-------+
//! | main  | right |
//! +-------+-------+
//! ```

use crate::config::{JointOptions, MarginalKind};
use crate::error::{Error, Result};
use crate::grammar::{Aes, Axis, BuiltChart, Chart, Coord, DataFrame, Geom, Stack, Stat, Theme};
use crate::layout::{CompositeLayout, Resolve};
use crate::scale::{AxisSpec, CategoricalScale};

/// Builds joint plot layouts from one set of options.
#[derive(Debug, Clone, Default)]
pub struct JointComposer {
    options: JointOptions,
}

/// Where a marginal panel sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
}

impl JointComposer {
    /// Create a composer.
    #[must_use]
    pub fn new(options: JointOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    #[must_use]
    pub fn options(&self) -> &JointOptions {
        &self.options
    }

    /// Compose the joint plot of `y` against `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, `data` has no rows, a
    /// column is missing, an axis column is not numeric or has no values.
    pub fn compose(&self, data: &DataFrame, x: &str, y: &str) -> Result<CompositeLayout> {
        let options = &self.options;
        options.validate()?;
        if data.nrow() == 0 {
            return Err(Error::EmptyDataset);
        }

        let x_axis = AxisSpec::from_values(x, &data.numeric_values(x)?, options.padding_fraction)?;
        let y_axis = AxisSpec::from_values(y, &data.numeric_values(y)?, options.padding_fraction)?;
        let scale = match options.group.as_deref() {
            Some(group) => Some(CategoricalScale::from_labels(data.distinct(group)?)),
            None => None,
        };

        log::debug!(
            "joint plot '{x}' x '{y}': x domain [{}, {}], y domain [{}, {}]",
            x_axis.domain.min,
            x_axis.domain.max,
            y_axis.domain.min,
            y_axis.domain.max
        );

        let main = self.main_chart(data, &x_axis, &y_axis, scale.as_ref())?;
        let top = if options.show_top_marginal {
            Some(self.marginal_chart(data, &x_axis, scale.as_ref(), Side::Top)?)
        } else {
            None
        };
        let right = if options.show_right_marginal {
            Some(self.marginal_chart(data, &y_axis, scale.as_ref(), Side::Right)?)
        } else {
            None
        };

        let layout = match (top, right) {
            (Some(top), Some(right)) => {
                let lower = CompositeLayout::hconcat(vec![main.into(), right.into()])?
                    .spacing(options.spacing)
                    .resolve(Resolve::shared_y());
                CompositeLayout::vconcat(vec![top.into(), lower])?
                    .spacing(options.effective_top_spacing())
                    .resolve(Resolve::shared_x())
            }
            (Some(top), None) => CompositeLayout::vconcat(vec![top.into(), main.into()])?
                .spacing(options.effective_top_spacing())
                .resolve(Resolve::shared_x()),
            (None, Some(right)) => CompositeLayout::hconcat(vec![main.into(), right.into()])?
                .spacing(options.spacing)
                .resolve(Resolve::shared_y()),
            (None, None) => CompositeLayout::leaf(main),
        };

        if options.strip_decorative_borders {
            Ok(layout.with_theme(Theme::seamless()))
        } else {
            Ok(layout)
        }
    }

    fn main_chart(
        &self,
        data: &DataFrame,
        x_axis: &AxisSpec,
        y_axis: &AxisSpec,
        scale: Option<&CategoricalScale>,
    ) -> Result<BuiltChart> {
        let options = &self.options;
        let mut aes = Aes::new()
            .x(&x_axis.column)
            .y(&y_axis.column)
            .alpha_value(options.point_opacity);
        aes = match (options.group.as_deref(), scale) {
            (Some(group), Some(scale)) => aes.color(group).color_scale(scale.clone()),
            _ => aes.color_value(options.point_color),
        };

        Chart::new()
            .data(data.clone())
            .aes(aes)
            .geom(Geom::point())
            .coord(
                Coord::cartesian()
                    .xlim(x_axis.domain)
                    .ylim(y_axis.domain)
                    .zero_x(false)
                    .zero_y(false),
            )
            .x_axis(Axis::new().title(x_axis.column.as_str()))
            .y_axis(Axis::new().title(y_axis.column.as_str()))
            .size(options.main_width, options.main_height)
            .build()
    }

    fn marginal_chart(
        &self,
        data: &DataFrame,
        axis: &AxisSpec,
        scale: Option<&CategoricalScale>,
        side: Side,
    ) -> Result<BuiltChart> {
        let options = &self.options;
        let geom = if options.marginal_kind.is_density() {
            let bandwidth = options.bandwidth.resolve(axis.effective_range());
            let stat = Stat::density()
                .bandwidth(bandwidth)
                .steps(options.steps)
                .over(axis.domain);
            if options.marginal_kind == MarginalKind::DensityLine {
                Geom::line().stat(stat)
            } else {
                Geom::area().stat(stat)
            }
        } else {
            Geom::bar().stat(Stat::bin(options.maxbins).over(axis.domain))
        };

        let mut aes = Aes::new().x(&axis.column).alpha_value(options.marginal_opacity);
        aes = match (options.group.as_deref(), scale) {
            (Some(group), Some(scale)) => aes.color(group).color_scale(scale.clone()).legend(false),
            _ => aes.color_value(options.point_color),
        };

        let mut coord = Coord::cartesian().xlim(axis.domain).zero_x(false);
        let (width, height) = match side {
            Side::Top => (options.main_width, options.marginal_size),
            Side::Right => {
                coord = coord.flip();
                (options.marginal_size, options.main_height)
            }
        };

        log::trace!("{side:?} marginal of '{}' ({:?})", axis.column, options.marginal_kind);

        Chart::new()
            .data(data.clone())
            .aes(aes)
            .geom(geom.stack(Stack::Overlap))
            .coord(coord)
            .x_axis(Axis::new().no_title().labels(false))
            .y_axis(Axis::new().no_title().labels(false))
            .size(width, height)
            .build()
    }
}

/// Compose a joint plot with `options`.
///
/// # Errors
///
/// See [`JointComposer::compose`].
pub fn jointplot(data: &DataFrame, x: &str, y: &str, options: &JointOptions) -> Result<CompositeLayout> {
    JointComposer::new(options.clone()).compose(data, x, y)
}
