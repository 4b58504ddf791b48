//! Joint plot options.
//!
//! [`JointOptions`] is an immutable value with defaults, `with_*` builders
//! and validation. It can also be read from YAML:
//!
//! ```yaml
//! group: species
//! marginal_kind: density_area
//! padding_fraction: 0.1
//! bandwidth:
//!   mode: scalar
//!   value: 15
//! strip_decorative_borders: true
//! ```
//!
//! Missing fields take their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::scale::validate_padding;

/// Summary drawn in the marginal panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginalKind {
    /// Binned counts drawn as bars.
    #[default]
    Histogram,
    /// Density curve drawn as a line.
    DensityLine,
    /// Density curve drawn as a filled area.
    DensityArea,
}

impl MarginalKind {
    /// Whether the marginal is a density curve.
    #[must_use]
    pub fn is_density(self) -> bool {
        !matches!(self, MarginalKind::Histogram)
    }
}

/// Kernel bandwidth for density marginals.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Bandwidth {
    /// Use this bandwidth as is.
    Fixed(f64),
    /// Divide the axis range by this value.
    Scalar(f64),
}

impl Default for Bandwidth {
    fn default() -> Self {
        Bandwidth::Scalar(20.0)
    }
}

impl Bandwidth {
    /// Bandwidth for an axis whose (effective) range is `range`.
    #[must_use]
    pub fn resolve(self, range: f64) -> f64 {
        match self {
            Bandwidth::Fixed(bw) => bw,
            Bandwidth::Scalar(s) => range / s,
        }
    }

    fn value(self) -> f64 {
        match self {
            Bandwidth::Fixed(v) | Bandwidth::Scalar(v) => v,
        }
    }
}

/// Options for [`JointComposer`](crate::plots::JointComposer).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointOptions {
    /// Column whose labels color points and split the marginals.
    #[serde(default)]
    pub group: Option<String>,

    /// Draw the marginal above the main panel.
    #[serde(default = "default_true")]
    pub show_top_marginal: bool,

    /// Draw the marginal right of the main panel.
    #[serde(default = "default_true")]
    pub show_right_marginal: bool,

    /// Summary drawn in the marginals.
    #[serde(default)]
    pub marginal_kind: MarginalKind,

    /// Opacity of the points.
    #[serde(default = "default_point_opacity")]
    pub point_opacity: f64,

    /// Point color when not grouped.
    #[serde(default = "default_point_color")]
    pub point_color: Rgba,

    /// Opacity of the marginal marks.
    #[serde(default = "default_marginal_opacity")]
    pub marginal_opacity: f64,

    /// Fraction of each axis range added on both sides.
    #[serde(default = "default_padding_fraction")]
    pub padding_fraction: f64,

    /// Density bandwidth.
    #[serde(default)]
    pub bandwidth: Bandwidth,

    /// Density sample points.
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Histogram bins.
    #[serde(default = "default_maxbins")]
    pub maxbins: usize,

    /// Thickness of a marginal panel in pixels.
    #[serde(default = "default_marginal_size")]
    pub marginal_size: u32,

    /// Main panel width in pixels.
    #[serde(default = "default_main_size")]
    pub main_width: u32,

    /// Main panel height in pixels.
    #[serde(default = "default_main_size")]
    pub main_height: u32,

    /// Gap between the main panel and the right marginal.
    #[serde(default)]
    pub spacing: i32,

    /// Gap below the top marginal; `spacing` when unset.
    #[serde(default)]
    pub top_spacing: Option<i32>,

    /// Remove view borders, axis lines, ticks and grid from the figure.
    #[serde(default)]
    pub strip_decorative_borders: bool,
}

fn default_true() -> bool {
    true
}
fn default_point_opacity() -> f64 {
    1.0
}
fn default_point_color() -> Rgba {
    Rgba::STEEL_BLUE
}
fn default_marginal_opacity() -> f64 {
    0.6
}
fn default_padding_fraction() -> f64 {
    0.05
}
fn default_steps() -> usize {
    200
}
fn default_maxbins() -> usize {
    30
}
fn default_marginal_size() -> u32 {
    100
}
fn default_main_size() -> u32 {
    400
}

impl Default for JointOptions {
    fn default() -> Self {
        Self {
            group: None,
            show_top_marginal: default_true(),
            show_right_marginal: default_true(),
            marginal_kind: MarginalKind::default(),
            point_opacity: default_point_opacity(),
            point_color: default_point_color(),
            marginal_opacity: default_marginal_opacity(),
            padding_fraction: default_padding_fraction(),
            bandwidth: Bandwidth::default(),
            steps: default_steps(),
            maxbins: default_maxbins(),
            marginal_size: default_marginal_size(),
            main_width: default_main_size(),
            main_height: default_main_size(),
            spacing: 0,
            top_spacing: None,
            strip_decorative_borders: false,
        }
    }
}

impl JointOptions {
    /// Load options from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// holds invalid option values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loading joint options from {}", path.display());
        Self::parse(&content)
    }

    /// Parse options from a YAML string and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed YAML and
    /// [`Error::InvalidConfiguration`] for wrongly typed, unknown or
    /// out-of-range fields.
    pub fn parse(yaml: &str) -> Result<Self> {
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let options: Self =
            serde_yaml_ng::from_value(value).map_err(|e| Error::invalid(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options, falling back to defaults on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Check every numeric option against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first bad option.
    pub fn validate(&self) -> Result<()> {
        check_unit("point_opacity", self.point_opacity)?;
        check_unit("marginal_opacity", self.marginal_opacity)?;
        validate_padding(self.padding_fraction)?;

        let bw = self.bandwidth.value();
        if !(bw.is_finite() && bw > 0.0) {
            return Err(Error::invalid(format!("bandwidth must be finite and > 0, got {bw}")));
        }
        if self.steps < 2 {
            return Err(Error::invalid(format!("steps must be >= 2, got {}", self.steps)));
        }
        if self.maxbins == 0 {
            return Err(Error::invalid("maxbins must be >= 1"));
        }
        for (name, size) in [
            ("marginal_size", self.marginal_size),
            ("main_width", self.main_width),
            ("main_height", self.main_height),
        ] {
            if size == 0 {
                return Err(Error::invalid(format!("{name} must be > 0")));
            }
        }
        if self.group.as_deref().is_some_and(str::is_empty) {
            return Err(Error::invalid("group column name is empty"));
        }
        Ok(())
    }

    /// Spacing below the top marginal.
    #[must_use]
    pub fn effective_top_spacing(&self) -> i32 {
        self.top_spacing.unwrap_or(self.spacing)
    }

    /// Color points and split marginals by `column`.
    #[must_use]
    pub fn with_group(mut self, column: &str) -> Self {
        self.group = Some(column.to_string());
        self
    }

    /// Show or hide the top marginal.
    #[must_use]
    pub fn with_top_marginal(mut self, show: bool) -> Self {
        self.show_top_marginal = show;
        self
    }

    /// Show or hide the right marginal.
    #[must_use]
    pub fn with_right_marginal(mut self, show: bool) -> Self {
        self.show_right_marginal = show;
        self
    }

    /// Set the marginal summary.
    #[must_use]
    pub fn with_marginal_kind(mut self, kind: MarginalKind) -> Self {
        self.marginal_kind = kind;
        self
    }

    /// Set the point opacity.
    #[must_use]
    pub fn with_point_opacity(mut self, opacity: f64) -> Self {
        self.point_opacity = opacity;
        self
    }

    /// Set the point color.
    #[must_use]
    pub fn with_point_color(mut self, color: Rgba) -> Self {
        self.point_color = color;
        self
    }

    /// Set the marginal opacity.
    #[must_use]
    pub fn with_marginal_opacity(mut self, opacity: f64) -> Self {
        self.marginal_opacity = opacity;
        self
    }

    /// Set the domain padding fraction.
    #[must_use]
    pub fn with_padding_fraction(mut self, fraction: f64) -> Self {
        self.padding_fraction = fraction;
        self
    }

    /// Set the density bandwidth.
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

    /// Set the number of histogram bins.
    #[must_use]
    pub fn with_maxbins(mut self, maxbins: usize) -> Self {
        self.maxbins = maxbins;
        self
    }

    /// Set the marginal panel thickness.
    #[must_use]
    pub fn with_marginal_size(mut self, size: u32) -> Self {
        self.marginal_size = size;
        self
    }

    /// Set the main panel size.
    #[must_use]
    pub fn with_main_size(mut self, width: u32, height: u32) -> Self {
        self.main_width = width;
        self.main_height = height;
        self
    }

    /// Set the gap between panels.
    #[must_use]
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the gap below the top marginal.
    #[must_use]
    pub fn with_top_spacing(mut self, spacing: i32) -> Self {
        self.top_spacing = Some(spacing);
        self
    }

    /// Strip decorative borders from the figure.
    #[must_use]
    pub fn with_stripped_borders(mut self, strip: bool) -> Self {
        self.strip_decorative_borders = strip;
        self
    }
}

pub(crate) fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid(format!("{name} must be in [0, 1], got {value}")))
    }
}
