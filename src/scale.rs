//! Axis domains for data-to-position mappings.
//!
//! A [`Domain`] is the closed value interval an axis spans. [`AxisSpec`]
//! derives a padded domain from a column: the raw extent is widened on both
//! sides by a fraction of the data range so that no mark sits flush against
//! the plot border.

use serde::Serialize;

use crate::color::{self, Rgba};
use crate::error::{Error, Result};

/// Half-width of the substitute interval used when a column has zero range.
pub const ZERO_RANGE_HALF_WIDTH: f64 = 1.0;

/// A closed interval `[min, max]` on a continuous axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Domain {
    /// Create a domain.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::invalid(format!("domain bounds must be finite, got [{min}, {max}]")));
        }
        if min > max {
            return Err(Error::invalid(format!("domain min {min} exceeds max {max}")));
        }
        Ok(Self { min, max })
    }

    /// Extent of the finite values in `values`, or `None` if there are none.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        (min <= max).then_some(Self { min, max })
    }

    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.min + self.width() / 2.0
    }

    /// Whether `value` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Widen both ends by `fraction * width()`.
    #[must_use]
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = fraction * self.width();
        Self { min: self.min - pad, max: self.max + pad }
    }

    /// `steps` equally spaced samples from `min` to `max` inclusive.
    ///
    /// The first sample is exactly `min` and the last exactly `max`.
    #[must_use]
    pub fn linspace(&self, steps: usize) -> Vec<f64> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let last = steps - 1;
                let step = self.width() / last as f64;
                (0..steps)
                    .map(|i| if i == last { self.max } else { self.min + i as f64 * step })
                    .collect()
            }
        }
    }

    /// Bounds as a two-element array, the form chart specs use.
    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

/// A padded axis derived from one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    /// Source column name.
    pub column: String,
    /// Padded domain the axis spans.
    pub domain: Domain,
    /// Fraction of the range added on each side.
    pub padding_fraction: f64,
    /// Raw data range `max - min` (zero for a constant column).
    pub range: f64,
    /// Raw data extent before padding.
    pub extent: Domain,
}

impl AxisSpec {
    /// Derive the padded axis for `values`.
    ///
    /// A constant column (`range == 0`) is widened to the substitute interval
    /// `[v - 1, v + 1]` before padding, so the domain never collapses to a
    /// single point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllMissing`] if `values` has no finite value and
    /// [`Error::InvalidConfiguration`] for a negative or non-finite fraction.
    pub fn from_values(column: &str, values: &[f64], padding_fraction: f64) -> Result<Self> {
        validate_padding(padding_fraction)?;
        let extent = Domain::from_values(values)
            .ok_or_else(|| Error::AllMissing { column: column.to_string() })?;
        let range = extent.width();

        let base = if range > 0.0 {
            extent
        } else {
            Domain {
                min: extent.min - ZERO_RANGE_HALF_WIDTH,
                max: extent.max + ZERO_RANGE_HALF_WIDTH,
            }
        };

        Ok(Self {
            column: column.to_string(),
            domain: base.padded(padding_fraction),
            padding_fraction,
            range,
            extent,
        })
    }

    /// Range used for bandwidth derivation: the raw range, or the width of
    /// the substitute interval for a constant column.
    #[must_use]
    pub fn effective_range(&self) -> f64 {
        if self.range > 0.0 {
            self.range
        } else {
            2.0 * ZERO_RANGE_HALF_WIDTH
        }
    }
}

/// Explicit mapping from category labels to colors.
///
/// Charts that show the same groups in several panels share one instance so
/// every panel colors a group identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalScale {
    /// Category labels in legend order.
    pub domain: Vec<String>,
    /// One color per label.
    pub range: Vec<Rgba>,
}

impl CategoricalScale {
    /// Assign the categorical palette to `labels` in order.
    #[must_use]
    pub fn from_labels(labels: Vec<String>) -> Self {
        let range = color::categorical(labels.len());
        Self { domain: labels, range }
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Whether the scale has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

pub(crate) fn validate_padding(fraction: f64) -> Result<()> {
    if fraction.is_finite() && fraction >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("padding fraction must be finite and >= 0, got {fraction}")))
    }
}
