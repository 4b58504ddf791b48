//! Marginal summaries of one numeric column.
//!
//! A summary is either binned counts or a sampled Gaussian density curve,
//! computed over a caller-supplied [`Domain`] so that it lines up with the
//! axis it is drawn against. With a group column there is one summary per
//! distinct non-missing group label, in order of first appearance, all on the
//! same bins or sample grid.
//!
//! # Example
//!
//! ```rust
//! use cosilico::grammar::DataFrame;
//! use cosilico::marginal::{summarize, SummaryKind};
//! use cosilico::scale::Domain;
//!
//! let df = DataFrame::from_xy(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]);
//! let domain = Domain::new(0.0, 4.0).unwrap();
//! let summaries = summarize(&df, "x", None, domain, &SummaryKind::Histogram { maxbins: 4 }).unwrap();
//! assert_eq!(summaries[0].summary.total_count(), 3);
//! ```

mod density;
mod histogram;

pub use density::{gaussian_kde, silverman_bandwidth, DensityPoint};
pub use histogram::{bin_counts, Bin};

use crate::error::{Error, Result};
use crate::grammar::{DataFrame, DataValue};
use crate::scale::Domain;

/// Summary-table column holding bin lower edges.
pub const BIN_START: &str = "bin_start";
/// Summary-table column holding bin upper edges.
pub const BIN_END: &str = "bin_end";
/// Summary-table column holding bin counts.
pub const COUNT: &str = "count";
/// Summary-table column holding density sample positions.
pub const VALUE: &str = "value";
/// Summary-table column holding density estimates.
pub const DENSITY: &str = "density";

/// Divisor applied to the domain width when no bandwidth can be derived
/// from the data.
const FALLBACK_BANDWIDTH_SCALAR: f64 = 20.0;

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryKind {
    /// Equal-width binned counts.
    Histogram {
        /// Number of bins.
        maxbins: usize,
    },
    /// Gaussian kernel density estimate.
    Density {
        /// Kernel bandwidth; Silverman's rule over all values when `None`.
        bandwidth: Option<f64>,
        /// Number of sample points.
        steps: usize,
        /// Multiply densities by the group size.
        counts: bool,
    },
}

impl SummaryKind {
    fn validate(&self) -> Result<()> {
        match *self {
            SummaryKind::Histogram { maxbins } if maxbins == 0 => {
                Err(Error::invalid("maxbins must be >= 1"))
            }
            SummaryKind::Density { steps, .. } if steps < 2 => {
                Err(Error::invalid(format!("steps must be >= 2, got {steps}")))
            }
            SummaryKind::Density { bandwidth: Some(bw), .. } if !(bw.is_finite() && bw > 0.0) => {
                Err(Error::invalid(format!("bandwidth must be finite and > 0, got {bw}")))
            }
            _ => Ok(()),
        }
    }
}

/// Summary of one set of values.
#[derive(Debug, Clone, PartialEq)]
pub enum MarginalSummary {
    /// Binned counts.
    Histogram(Vec<Bin>),
    /// Sampled density curve.
    Density(Vec<DensityPoint>),
}

impl MarginalSummary {
    /// Number of bins or sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            MarginalSummary::Histogram(bins) => bins.len(),
            MarginalSummary::Density(points) => points.len(),
        }
    }

    /// Whether there are no bins or sample points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of bin counts (zero for a density).
    #[must_use]
    pub fn total_count(&self) -> usize {
        match self {
            MarginalSummary::Histogram(bins) => bins.iter().map(|b| b.count).sum(),
            MarginalSummary::Density(_) => 0,
        }
    }
}

/// A summary tagged with the group it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSummary {
    /// Group label, `None` when the data is not grouped.
    pub group: Option<String>,
    /// The summary.
    pub summary: MarginalSummary,
}

/// Summarize `value_col` of `data` over `domain`.
///
/// Missing values are skipped. Rows with a missing group label are left out
/// of a grouped summary. When the density bandwidth is not given it is
/// derived once from all values so every group is smoothed alike.
///
/// # Errors
///
/// Returns an error if a column is missing, `value_col` is not numeric, or
/// `kind` holds an invalid setting.
pub fn summarize(
    data: &DataFrame,
    value_col: &str,
    group_col: Option<&str>,
    domain: Domain,
    kind: &SummaryKind,
) -> Result<Vec<GroupedSummary>> {
    kind.validate()?;
    let values = data.numeric(value_col)?;

    let groups: Vec<(Option<String>, Vec<f64>)> = match group_col {
        None => vec![(None, values.iter().flatten().copied().collect())],
        Some(col) => {
            let labels = data.labels(col)?;
            data.distinct(col)?
                .into_iter()
                .map(|group| {
                    let members = labels
                        .iter()
                        .zip(&values)
                        .filter(|(label, _)| label.as_deref() == Some(group.as_str()))
                        .filter_map(|(_, v)| *v)
                        .collect();
                    (Some(group), members)
                })
                .collect()
        }
    };

    let bandwidth = match *kind {
        SummaryKind::Density { bandwidth: Some(bw), .. } => bw,
        SummaryKind::Density { bandwidth: None, .. } => {
            let pooled: Vec<f64> = values.iter().flatten().copied().collect();
            silverman_bandwidth(&pooled)
                .unwrap_or_else(|| domain.width().max(f64::EPSILON) / FALLBACK_BANDWIDTH_SCALAR)
        }
        SummaryKind::Histogram { .. } => 0.0,
    };

    log::debug!(
        "summarizing '{value_col}' over [{}, {}] in {} group(s)",
        domain.min,
        domain.max,
        groups.len()
    );

    Ok(groups
        .into_iter()
        .map(|(group, members)| {
            log::trace!("group {group:?}: {} value(s)", members.len());
            let summary = match *kind {
                SummaryKind::Histogram { maxbins } => {
                    MarginalSummary::Histogram(bin_counts(&members, domain, maxbins))
                }
                SummaryKind::Density { steps, counts, .. } => MarginalSummary::Density(
                    gaussian_kde(&members, domain, bandwidth, steps, counts),
                ),
            };
            GroupedSummary { group, summary }
        })
        .collect())
}

/// Flatten summaries into a long table.
///
/// Histograms become `bin_start`, `bin_end`, `count` columns and densities
/// `value`, `density` columns. With `group_col` set, the group label is
/// written to a column of that name.
#[must_use]
pub fn to_frame(summaries: &[GroupedSummary], group_col: Option<&str>) -> DataFrame {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut third = Vec::new();
    let mut groups = Vec::new();
    let mut is_histogram = true;

    for grouped in summaries {
        let label = DataValue::from(grouped.group.clone());
        match &grouped.summary {
            MarginalSummary::Histogram(bins) => {
                for bin in bins {
                    first.push(DataValue::Number(bin.start));
                    second.push(DataValue::Number(bin.end));
                    third.push(DataValue::Number(bin.count as f64));
                    groups.push(label.clone());
                }
            }
            MarginalSummary::Density(points) => {
                is_histogram = false;
                for point in points {
                    first.push(DataValue::Number(point.value));
                    second.push(DataValue::Number(point.density));
                    groups.push(label.clone());
                }
            }
        }
    }

    let mut df = if is_histogram {
        DataFrame::new()
            .with_column(BIN_START, first)
            .with_column(BIN_END, second)
            .with_column(COUNT, third)
    } else {
        DataFrame::new().with_column(VALUE, first).with_column(DENSITY, second)
    };
    if let Some(col) = group_col {
        df.add_column(col, groups);
    }
    df
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn frame(values: &[f64], groups: &[u8]) -> DataFrame {
        DataFrame::new().with_column("v", values.iter().map(|&v| v.into()).collect()).with_column(
            "g",
            groups.iter().map(|g| DataValue::from(format!("g{g}"))).collect(),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Counts add up to the number of non-missing values.
        #[test]
        fn prop_histogram_counts_sum(
            values in prop::collection::vec(-1.0e3f64..1.0e3, 1..300),
            maxbins in 1usize..80,
            p in 0.0f64..0.5
        ) {
            let df = frame(&values, &[]);
            let axis = crate::scale::AxisSpec::from_values("v", &values, p).unwrap();
            let out = summarize(&df, "v", None, axis.domain, &SummaryKind::Histogram { maxbins }).unwrap();
            prop_assert_eq!(out[0].summary.len(), maxbins);
            prop_assert_eq!(out[0].summary.total_count(), values.len());
        }

        /// Density samples are strictly increasing and hit both domain ends.
        #[test]
        fn prop_density_grid(
            values in prop::collection::vec(-1.0e3f64..1.0e3, 1..100),
            steps in 2usize..400
        ) {
            let df = frame(&values, &[]);
            let axis = crate::scale::AxisSpec::from_values("v", &values, 0.05).unwrap();
            prop_assume!(axis.effective_range() > 1e-6);
            let kind = SummaryKind::Density { bandwidth: Some(axis.effective_range() / 20.0), steps, counts: false };
            let out = summarize(&df, "v", None, axis.domain, &kind).unwrap();
            let MarginalSummary::Density(points) = &out[0].summary else {
                return Err(TestCaseError::fail("expected density"));
            };
            prop_assert_eq!(points.len(), steps);
            prop_assert_eq!(points[0].value, axis.domain.min);
            prop_assert_eq!(points[steps - 1].value, axis.domain.max);
            prop_assert!(points.windows(2).all(|w| w[0].value < w[1].value));
        }

        /// One summary per distinct group.
        #[test]
        fn prop_one_summary_per_group(groups in prop::collection::vec(0u8..6, 1..60)) {
            let values: Vec<f64> = (0..groups.len()).map(|i| i as f64).collect();
            let df = frame(&values, &groups);
            let distinct = df.distinct("g").unwrap().len();
            let domain = Domain { min: -1.0, max: values.len() as f64 };
            let out = summarize(&df, "v", Some("g"), domain, &SummaryKind::Histogram { maxbins: 10 }).unwrap();
            prop_assert_eq!(out.len(), distinct);
            prop_assert_eq!(out.iter().map(|s| s.summary.total_count()).sum::<usize>(), values.len());
        }
    }
}
