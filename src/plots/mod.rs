//! High-level chart builders.
//!
//! Each builder takes a table, column names and an options value, and
//! returns a built chart or a composite layout ready to encode.

mod distribution;
mod histogram;
mod joint;
mod scatter;
mod stripplot;

pub use distribution::{layered_distribution_plot, DistributionOptions, ValueColumns};
pub use histogram::{histogram, layered_histogram, HistogramOptions, LayeredHistogramOptions};
pub use joint::{jointplot, JointComposer};
pub use scatter::{scatterplot, ScatterOptions};
pub use stripplot::{stripplot, StripOptions, JITTER_FIELD};
