//! Chart builder.
//!
//! Combines data, aesthetics, layers, coordinates, axes and facets into a
//! single view. [`Chart::build`] validates the column references and
//! evaluates summary stats, so a [`BuiltChart`] holds exactly the table each
//! layer draws.

use crate::error::{Error, Result};
use crate::marginal::{self, SummaryKind};
use crate::scale::{AxisSpec, Domain};

use super::aes::Aes;
use super::axis::{Axis, AxisTitle};
use super::coord::Coord;
use super::data::DataFrame;
use super::facet::Facet;
use super::geom::{Geom, GeomType};
use super::stat::Stat;

/// A layer in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// The geometry.
    pub geom: Geom,
    /// Layer-specific data (if different from chart data).
    pub data: Option<DataFrame>,
    /// Layer-specific aesthetics.
    pub aes: Aes,
}

impl Layer {
    /// Create a new layer from a geometry.
    #[must_use]
    pub fn new(geom: Geom) -> Self {
        Self { aes: geom.aes.clone().unwrap_or_default(), geom, data: None }
    }

    /// Set layer-specific data.
    #[must_use]
    pub fn data(mut self, data: DataFrame) -> Self {
        self.data = Some(data);
        self
    }

    /// Set layer aesthetics.
    #[must_use]
    pub fn aes(mut self, aes: Aes) -> Self {
        self.aes = aes;
        self
    }
}

/// Chart builder.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    data: Option<DataFrame>,
    aes: Aes,
    layers: Vec<Layer>,
    coord: Coord,
    facet: Facet,
    x_axis: Option<Axis>,
    y_axis: Option<Axis>,
    width: Option<u32>,
    height: Option<u32>,
    title: Option<String>,
}

impl Chart {
    /// Create a new chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data.
    #[must_use]
    pub fn data(mut self, data: DataFrame) -> Self {
        self.data = Some(data);
        self
    }

    /// Convenience: set x and y data directly.
    #[must_use]
    pub fn data_xy(mut self, x: &[f64], y: &[f64]) -> Self {
        self.data = Some(DataFrame::from_xy(x, y));
        self.aes = self.aes.x("x").y("y");
        self
    }

    /// Set chart-wide aesthetics.
    #[must_use]
    pub fn aes(mut self, aes: Aes) -> Self {
        self.aes = aes;
        self
    }

    /// Add a geometry layer.
    #[must_use]
    pub fn geom(mut self, geom: Geom) -> Self {
        self.layers.push(Layer::new(geom));
        self
    }

    /// Add a layer.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Set the coordinate system.
    #[must_use]
    pub fn coord(mut self, coord: Coord) -> Self {
        self.coord = coord;
        self
    }

    /// Set faceting.
    #[must_use]
    pub fn facet(mut self, facet: Facet) -> Self {
        self.facet = facet;
        self
    }

    /// Configure the axis of the x variable.
    #[must_use]
    pub fn x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = Some(axis);
        self
    }

    /// Configure the axis of the y variable.
    #[must_use]
    pub fn y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Set the view width in pixels.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the view height in pixels.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set both view dimensions.
    #[must_use]
    pub fn size(self, width: u32, height: u32) -> Self {
        self.width(width).height(height)
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Validate the chart and evaluate its stats.
    ///
    /// Layers with a `Bin` or `Density` stat get the summary table as their
    /// data and are remapped onto its columns. Identity layers mapping both x
    /// and y drop rows where either is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart has no rows or no layers, a mapped
    /// column does not exist, a position column is not numeric, or a stat
    /// setting is invalid.
    pub fn build(self) -> Result<BuiltChart> {
        if self.layers.is_empty() {
            return Err(Error::invalid("chart has no layers"));
        }
        if let Some(width) = self.width.filter(|w| *w == 0) {
            return Err(Error::invalid(format!("chart width must be > 0, got {width}")));
        }
        if let Some(height) = self.height.filter(|h| *h == 0) {
            return Err(Error::invalid(format!("chart height must be > 0, got {height}")));
        }

        let mut x_axis = self.x_axis.unwrap_or_else(Axis::new);
        let mut y_axis = self.y_axis.unwrap_or_else(Axis::new);
        let mut layers = Vec::with_capacity(self.layers.len());

        for layer in self.layers {
            let data = layer.data.as_ref().or(self.data.as_ref()).ok_or(Error::EmptyDataset)?;
            if data.nrow() == 0 {
                return Err(Error::EmptyDataset);
            }
            let aes = self.aes.merge(&layer.aes);
            let built = build_layer(layer.geom, aes, data, &mut x_axis, &mut y_axis)?;
            layers.push(built);
        }

        if let Some(var) = self.facet.var() {
            for layer in &layers {
                layer.data.column(var)?;
            }
        }

        log::trace!("built chart with {} layer(s)", layers.len());

        Ok(BuiltChart {
            layers,
            coord: self.coord,
            facet: self.facet,
            x_axis,
            y_axis,
            width: self.width,
            height: self.height,
            title: self.title,
        })
    }
}

fn build_layer(
    geom: Geom,
    aes: Aes,
    data: &DataFrame,
    x_axis: &mut Axis,
    y_axis: &mut Axis,
) -> Result<BuiltLayer> {
    let generated = match &geom.stat {
        Some(Stat::Jitter { field }) => Some(field.as_str()),
        _ => None,
    };
    for field in aes.fields() {
        if Some(field) != generated {
            data.column(field)?;
        }
    }

    match geom.stat.clone() {
        Some(Stat::Bin { maxbins, domain }) => {
            let x = summary_input(&aes)?;
            let domain = summary_domain(data, x, domain)?;
            let kind = SummaryKind::Histogram { maxbins };
            let summaries = marginal::summarize(data, x, aes.color.as_deref(), domain, &kind)?;
            default_title(x_axis, x);
            default_title(y_axis, "Count");
            let mut remapped = aes.clone();
            remapped.x = Some(marginal::BIN_START.to_string());
            if geom.geom_type == GeomType::Bar {
                remapped.x2 = Some(marginal::BIN_END.to_string());
            }
            remapped.y = Some(marginal::COUNT.to_string());
            Ok(BuiltLayer {
                data: marginal::to_frame(&summaries, aes.color.as_deref()),
                aes: remapped,
                geom,
            })
        }
        Some(Stat::Density { bandwidth, steps, counts, domain }) => {
            let x = summary_input(&aes)?;
            let domain = summary_domain(data, x, domain)?;
            let kind = SummaryKind::Density { bandwidth, steps, counts };
            let summaries = marginal::summarize(data, x, aes.color.as_deref(), domain, &kind)?;
            default_title(x_axis, x);
            default_title(y_axis, "Density");
            let mut remapped = aes.clone();
            remapped.x = Some(marginal::VALUE.to_string());
            remapped.y = Some(marginal::DENSITY.to_string());
            Ok(BuiltLayer {
                data: marginal::to_frame(&summaries, aes.color.as_deref()),
                aes: remapped,
                geom,
            })
        }
        _ => {
            let mut positions = Vec::new();
            for field in [aes.x.as_deref(), aes.y.as_deref()].into_iter().flatten() {
                if Some(field) != generated {
                    data.numeric(field)?;
                    positions.push(field);
                }
            }
            let mut data = if positions.len() == 2 { data.drop_missing(&positions)? } else { data.clone() };
            if let Some(color) = aes.color.as_deref() {
                data.relabel(color)?;
            }
            Ok(BuiltLayer { geom, data, aes })
        }
    }
}

fn summary_input(aes: &Aes) -> Result<&str> {
    aes.x.as_deref().ok_or_else(|| Error::invalid("summary stat needs an x mapping"))
}

/// The stat's own domain, or the padded-free extent of the column.
fn summary_domain(data: &DataFrame, column: &str, domain: Option<Domain>) -> Result<Domain> {
    match domain {
        Some(domain) => Ok(domain),
        None => Ok(AxisSpec::from_values(column, &data.numeric_values(column)?, 0.0)?.domain),
    }
}

fn default_title(axis: &mut Axis, title: &str) {
    if axis.title == AxisTitle::Auto {
        axis.title = AxisTitle::Text(title.to_string());
    }
}

/// A layer with its resolved data and aesthetics.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltLayer {
    /// The geometry.
    pub geom: Geom,
    /// Aesthetics after merging with the chart-wide mapping.
    pub aes: Aes,
    /// The table the layer draws.
    pub data: DataFrame,
}

/// A validated chart, ready to encode.
///
/// Axes are in data orientation: `x_axis` belongs to the variable mapped to
/// x even when [`Coord::flip`] draws it vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltChart {
    /// Layers in drawing order.
    pub layers: Vec<BuiltLayer>,
    /// Coordinate system.
    pub coord: Coord,
    /// Faceting.
    pub facet: Facet,
    /// Axis of the x variable.
    pub x_axis: Axis,
    /// Axis of the y variable.
    pub y_axis: Axis,
    /// View width in pixels.
    pub width: Option<u32>,
    /// View height in pixels.
    pub height: Option<u32>,
    /// Title.
    pub title: Option<String>,
}

impl BuiltChart {
    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The first layer.
    #[must_use]
    pub fn main_layer(&self) -> Option<&BuiltLayer> {
        self.layers.first()
    }
}
