//! Domain-specific figures for biological data.

mod single_cell;

pub use single_cell::{qc_histogram, qc_scatter, DEFAULT_HIST_HEIGHT, DEFAULT_WIDTH, QC_MAXBINS};
