#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Single-Cell QC Example
//!
//! Reads a per-cell QC table (CSV or JSON records) and writes the QC
//! histogram and QC scatter figures as Vega-Lite JSON files.
//!
//! Run with: `cargo run --example single_cell_qc -- obs.csv [out_dir]`

use std::path::PathBuf;

use cosilico::biology::{DEFAULT_HIST_HEIGHT, DEFAULT_WIDTH};
use cosilico::prelude::*;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().expect("usage: single_cell_qc <obs.csv|obs.json> [out_dir]");
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    let adata = AnnotatedData::read_obs(&input).expect("Failed to read observations");
    println!("Loaded {} cell(s) from {input}", adata.n_obs());

    let variables = ["n_genes_by_counts", "total_counts", "pct_counts_mt"];

    let hist = qc_histogram(&adata, &variables, DEFAULT_WIDTH).expect("Failed to build QC histogram");
    let hist_path = out_dir.join("qc_histogram.vl.json");
    write_json(&hist_path, &hist.to_vega_lite()).expect("Failed to write");
    println!("  Saved: {}", hist_path.display());

    let scatter = qc_scatter(
        &adata,
        "total_counts",
        &["pct_counts_mt", "n_genes_by_counts"],
        DEFAULT_WIDTH,
        DEFAULT_HIST_HEIGHT,
    )
    .expect("Failed to build QC scatter");
    let scatter_path = out_dir.join("qc_scatter.vl.json");
    write_json(&scatter_path, &scatter.to_vega_lite()).expect("Failed to write");
    println!("  Saved: {}", scatter_path.display());
}
