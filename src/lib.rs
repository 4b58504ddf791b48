//! # Cosilico
//!
//! Declarative chart specifications for research data.
//!
//! Cosilico turns tables into [Vega-Lite](https://vega.github.io/vega-lite/)
//! documents: histograms, layered densities, strip plots, scatter plots and
//! joint plots with marginal distributions. Marginal summaries (bin counts
//! and Gaussian kernel densities) are computed here, so the emitted specs
//! carry final data and render the same in any Vega-Lite viewer.
//!
//! ## Quick Start
//!
//! ```rust
//! use cosilico::prelude::*;
//!
//! let data = DataFrame::from_xy(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 4.0, 3.0, 2.0, 1.0]);
//! let options = JointOptions::default().with_padding_fraction(0.2);
//!
//! let figure = jointplot(&data, "x", "y", &options)?;
//! assert_eq!(figure.leaves().len(), 3);
//!
//! let spec = figure.to_vega_lite();
//! assert!(spec.get("vconcat").is_some());
//! # Ok::<(), cosilico::Error>(())
//! ```
//!
//! ## References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Silverman, B. W. (1986). *Density Estimation for Statistics and Data Analysis*.
//! - Satyanarayan, A. et al. (2017). "Vega-Lite: A Grammar of Interactive Graphics." IEEE TVCG.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and categorical palettes.
pub mod color;

/// Padded axis domains and categorical color scales.
pub mod scale;

/// Marginal summaries: histogram bins and kernel density estimates.
pub mod marginal;

// ============================================================================
// Visualization Modules
// ============================================================================

/// Grammar of Graphics chart model.
pub mod grammar;

/// Composite layouts (concatenation, shared scales, root theme).
pub mod layout;

/// High-level plot builders.
pub mod plots;

/// Single-cell quality-control figures.
pub mod biology;

// ============================================================================
// Input / Output
// ============================================================================

/// Joint plot options and YAML option files.
pub mod config;

/// Observation tables loaded from CSV or JSON.
pub mod datasets;

/// Output encoders (Vega-Lite JSON).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for cosilico operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use cosilico::prelude::*;
/// ```
pub mod prelude {
    pub use crate::biology::{qc_histogram, qc_scatter};
    pub use crate::color::{Hsla, Rgba};
    pub use crate::config::{Bandwidth, JointOptions, MarginalKind};
    pub use crate::datasets::AnnotatedData;
    pub use crate::error::{Error, Result};
    pub use crate::grammar::{
        Aes, Axis, BuiltChart, Chart, Coord, DataFrame, DataValue, Facet, Geom, Stack, Stat, Theme,
    };
    pub use crate::layout::{CompositeLayout, LayoutNode, Resolve};
    pub use crate::marginal::{summarize, MarginalSummary, SummaryKind};
    pub use crate::output::write_json;
    pub use crate::plots::{
        histogram, jointplot, layered_distribution_plot, layered_histogram, scatterplot, stripplot,
        DistributionOptions, HistogramOptions, JointComposer, LayeredHistogramOptions, ScatterOptions,
        StripOptions, ValueColumns,
    };
    pub use crate::scale::{AxisSpec, Domain};
}

// ============================================================================
// Tests
// ============================================================================
