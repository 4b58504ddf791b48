#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Joint Plot Example
//!
//! Builds a grouped joint plot with density marginals and prints the
//! Vega-Lite spec to stdout. Pass a YAML options file to override the
//! built-in options.
//!
//! Run with: `RUST_LOG=debug cargo run --example jointplot [options.yaml] > joint.vl.json`

use cosilico::prelude::*;

fn main() {
    env_logger::init();

    let mut data = DataFrame::new();
    data.add_column_f64(
        "sepal_length",
        &[5.1, 4.9, 4.7, 4.6, 5.0, 7.0, 6.4, 6.9, 5.5, 6.5, 6.3, 5.8, 7.1, 6.3, 6.5],
    );
    data.add_column_f64(
        "sepal_width",
        &[3.5, 3.0, 3.2, 3.1, 3.6, 3.2, 3.2, 3.1, 2.3, 2.8, 3.3, 2.7, 3.0, 2.9, 3.0],
    );
    data.add_column_str(
        "species",
        &[
            "setosa", "setosa", "setosa", "setosa", "setosa",
            "versicolor", "versicolor", "versicolor", "versicolor", "versicolor",
            "virginica", "virginica", "virginica", "virginica", "virginica",
        ],
    );

    let options = match std::env::args().nth(1) {
        Some(path) => JointOptions::load(&path).expect("Failed to load options"),
        None => JointOptions::default()
            .with_group("species")
            .with_marginal_kind(MarginalKind::DensityArea)
            .with_padding_fraction(0.1)
            .with_stripped_borders(true),
    };

    let figure = jointplot(&data, "sepal_length", "sepal_width", &options).expect("Failed to build joint plot");
    eprintln!("Joint plot: {} panel(s), depth {}", figure.leaves().len(), figure.depth());

    let spec = serde_json::to_string_pretty(&figure.to_vega_lite()).expect("Failed to encode");
    println!("{spec}");
}
