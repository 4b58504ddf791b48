//! Statistical transformations for chart layers.
//!
//! `Bin` and `Density` are evaluated when a chart is built, replacing the
//! layer data with the summary table. `Jitter` is declarative: it is emitted
//! as a calculate transform and evaluated by the renderer.

use crate::scale::Domain;

/// Default number of KDE sample points.
pub const DEFAULT_STEPS: usize = 200;

/// Statistical transformation type.
#[derive(Debug, Clone, PartialEq)]
pub enum Stat {
    /// No transformation (identity).
    Identity,
    /// Count values of the x column in equal-width bins.
    Bin {
        /// Number of bins.
        maxbins: usize,
        /// Interval the bins span; the data extent when `None`.
        domain: Option<Domain>,
    },
    /// Gaussian kernel density estimate of the x column.
    Density {
        /// Kernel bandwidth; Silverman's rule when `None`.
        bandwidth: Option<f64>,
        /// Number of equally spaced sample points.
        steps: usize,
        /// Scale densities by the sample count.
        counts: bool,
        /// Interval the samples span; the data extent when `None`.
        domain: Option<Domain>,
    },
    /// Standard-normal jitter stored in a new field, drawn by the renderer.
    Jitter {
        /// Name of the generated field.
        field: String,
    },
}

impl Stat {
    /// Create an identity stat (no transformation).
    #[must_use]
    pub fn identity() -> Self {
        Stat::Identity
    }

    /// Create a binning stat.
    #[must_use]
    pub fn bin(maxbins: usize) -> Self {
        Stat::Bin { maxbins, domain: None }
    }

    /// Create a density estimation stat with default settings.
    #[must_use]
    pub fn density() -> Self {
        Stat::Density { bandwidth: None, steps: DEFAULT_STEPS, counts: false, domain: None }
    }

    /// Create a jitter stat writing to `field`.
    #[must_use]
    pub fn jitter(field: &str) -> Self {
        Stat::Jitter { field: field.to_string() }
    }

    /// Restrict a binning or density stat to `domain`.
    #[must_use]
    pub fn over(mut self, domain: Domain) -> Self {
        match &mut self {
            Stat::Bin { domain: d, .. } | Stat::Density { domain: d, .. } => *d = Some(domain),
            _ => {}
        }
        self
    }

    /// Set the density bandwidth.
    #[must_use]
    pub fn bandwidth(mut self, bandwidth: f64) -> Self {
        if let Stat::Density { bandwidth: b, .. } = &mut self {
            *b = Some(bandwidth);
        }
        self
    }

    /// Set the number of density sample points.
    #[must_use]
    pub fn steps(mut self, steps: usize) -> Self {
        if let Stat::Density { steps: s, .. } = &mut self {
            *s = steps;
        }
        self
    }

    /// Scale densities by the number of samples.
    #[must_use]
    pub fn counts(mut self, counts: bool) -> Self {
        if let Stat::Density { counts: c, .. } = &mut self {
            *c = counts;
        }
        self
    }

    /// Whether the stat replaces the layer data when the chart is built.
    #[must_use]
    pub fn is_summary(&self) -> bool {
        matches!(self, Stat::Bin { .. } | Stat::Density { .. })
    }
}
