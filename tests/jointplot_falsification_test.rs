//! Joint plot falsification tests.
//!
//! Each test is a falsifiable claim about the composed figure and the
//! Vega-Lite document it encodes to.
//!
//! Run: cargo test --test jointplot_falsification_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_relative_eq;
use serde_json::Value;

use cosilico::config::{Bandwidth, JointOptions, MarginalKind};
use cosilico::grammar::DataFrame;
use cosilico::layout::LayoutNode;
use cosilico::marginal::{BIN_END, BIN_START, COUNT, DENSITY, VALUE};
use cosilico::plots::jointplot;
use cosilico::Error;

fn example() -> DataFrame {
    DataFrame::from_xy(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 4.0, 3.0, 2.0, 1.0])
}

fn grouped() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_column_f64("length", &[4.9, 5.1, 6.3, 5.8, 7.1, 6.5, 5.0, 5.5]);
    df.add_column_f64("width", &[3.0, 3.5, 3.3, 2.7, 3.0, 3.2, 3.6, 2.4]);
    df.add_column_str(
        "species",
        &["setosa", "setosa", "virginica", "versicolor", "virginica", "virginica", "setosa", "versicolor"],
    );
    df
}

// ============================================================================
// DOMAINS
// ============================================================================

/// Claim 1: x=[1..5], y=[5..1] with padding 0.2 gives domains [0.2, 5.8]
#[test]
fn claim_01_example_domains() {
    let options = JointOptions::default().with_padding_fraction(0.2);
    let figure = jointplot(&example(), "x", "y", &options).unwrap();
    let leaves = figure.leaves();
    let main = leaves[1];

    let xlim = main.coord.xlim.unwrap();
    let ylim = main.coord.ylim.unwrap();
    assert_relative_eq!(xlim.min, 0.2, epsilon = 1e-12);
    assert_relative_eq!(xlim.max, 5.8, epsilon = 1e-12);
    assert_relative_eq!(ylim.min, 0.2, epsilon = 1e-12);
    assert_relative_eq!(ylim.max, 5.8, epsilon = 1e-12);

    // marginals share the domain of the axis they summarize
    assert_eq!(leaves[0].coord.xlim, Some(xlim));
    assert_eq!(leaves[2].coord.xlim, Some(ylim));
}

/// Claim 2: padding widens the domain by (1 + 2p) times the range
#[test]
fn claim_02_padding_scales_width() {
    for p in [0.0, 0.05, 0.1, 0.5] {
        let options = JointOptions::default().with_padding_fraction(p);
        let figure = jointplot(&example(), "x", "y", &options).unwrap();
        let xlim = figure.leaves()[1].coord.xlim.unwrap();
        assert_relative_eq!(xlim.width(), (1.0 + 2.0 * p) * 4.0, epsilon = 1e-9);
        assert_relative_eq!(xlim.center(), 3.0, epsilon = 1e-9);
    }
}

/// Claim 3: a constant column still yields a usable, non-empty domain
#[test]
fn claim_03_constant_column_domain() {
    let data = DataFrame::from_xy(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
    let options = JointOptions::default().with_padding_fraction(0.1);
    let figure = jointplot(&data, "x", "y", &options).unwrap();
    let xlim = figure.leaves()[1].coord.xlim.unwrap();
    assert_relative_eq!(xlim.min, 0.8, epsilon = 1e-12);
    assert_relative_eq!(xlim.max, 3.2, epsilon = 1e-12);
}

// ============================================================================
// SHAPES
// ============================================================================

/// Claim 10: both marginals give VConcat[top, HConcat[main, right]]
#[test]
fn claim_10_both_marginals_shape() {
    let figure = jointplot(&example(), "x", "y", &JointOptions::default()).unwrap();
    match figure.root() {
        LayoutNode::VConcat { children, .. } => {
            assert_eq!(children.len(), 2);
            assert!(children[0].is_leaf());
            assert!(matches!(&children[1], LayoutNode::HConcat { children, .. } if children.len() == 2));
        }
        other => panic!("expected vconcat root, got {other:?}"),
    }
    assert_eq!(figure.depth(), 3);
}

/// Claim 11: the four marginal switches give the four documented shapes
#[test]
fn claim_11_marginal_switches() {
    let cases = [
        (false, false, 1usize, 1usize),
        (true, false, 2, 2),
        (false, true, 2, 2),
        (true, true, 3, 3),
    ];
    for (top, right, leaves, depth) in cases {
        let options = JointOptions::default().with_top_marginal(top).with_right_marginal(right);
        let figure = jointplot(&example(), "x", "y", &options).unwrap();
        assert_eq!(figure.leaves().len(), leaves, "top={top} right={right}");
        assert_eq!(figure.depth(), depth, "top={top} right={right}");
    }
}

/// Claim 12: the right marginal is the only flipped panel
#[test]
fn claim_12_only_right_marginal_flipped() {
    let figure = jointplot(&example(), "x", "y", &JointOptions::default()).unwrap();
    let flips: Vec<bool> = figure.leaves().iter().map(|c| c.coord.flip).collect();
    assert_eq!(flips, vec![false, false, true]);
}

// ============================================================================
// SUMMARIES
// ============================================================================

/// Claim 20: histogram marginals count every non-missing value
#[test]
fn claim_20_histogram_counts_all_values() {
    let options = JointOptions::default().with_maxbins(7);
    let figure = jointplot(&grouped(), "length", "width", &options).unwrap();
    for marginal in [figure.leaves()[0], figure.leaves()[2]] {
        let data = &marginal.layers[0].data;
        assert_eq!(data.nrow(), 7);
        let total: f64 = data.numeric_values(COUNT).unwrap().iter().sum();
        assert_eq!(total, 8.0);
        assert!(data.has_column(BIN_START) && data.has_column(BIN_END));
    }
}

/// Claim 21: density marginals sample the padded domain edge to edge
#[test]
fn claim_21_density_grid_spans_domain() {
    let options = JointOptions::default()
        .with_marginal_kind(MarginalKind::DensityLine)
        .with_steps(50)
        .with_padding_fraction(0.2);
    let figure = jointplot(&example(), "x", "y", &options).unwrap();
    let top = figure.leaves()[0];
    let xs = top.layers[0].data.numeric_values(VALUE).unwrap();
    assert_eq!(xs.len(), 50);
    assert_relative_eq!(xs[0], 0.2, epsilon = 1e-12);
    assert_relative_eq!(xs[49], 5.8, epsilon = 1e-12);
    assert!(xs.windows(2).all(|w| w[1] > w[0]));
    let ds = top.layers[0].data.numeric_values(DENSITY).unwrap();
    assert!(ds.iter().all(|d| *d >= 0.0));
}

/// Claim 22: grouped density marginals emit one curve per species
#[test]
fn claim_22_grouped_density_curves() {
    let options = JointOptions::default()
        .with_group("species")
        .with_marginal_kind(MarginalKind::DensityArea)
        .with_bandwidth(Bandwidth::Scalar(10.0))
        .with_steps(20);
    let figure = jointplot(&grouped(), "length", "width", &options).unwrap();
    let data = &figure.leaves()[0].layers[0].data;
    assert_eq!(data.nrow(), 60);
    assert_eq!(data.distinct("species").unwrap(), vec!["setosa", "virginica", "versicolor"]);
}

// ============================================================================
// ENCODING
// ============================================================================

/// Claim 30: only the root document carries $schema and config
#[test]
fn claim_30_config_only_at_root() {
    let options = JointOptions::default().with_stripped_borders(true);
    let spec = jointplot(&example(), "x", "y", &options).unwrap().to_vega_lite();
    assert!(spec.get("$schema").is_some());
    assert!(spec.get("config").is_some());

    fn walk(value: &Value, depth: usize) {
        if depth > 0 {
            assert!(value.get("config").is_none());
            assert!(value.get("$schema").is_none());
        }
        for key in ["vconcat", "hconcat"] {
            if let Some(children) = value.get(key).and_then(Value::as_array) {
                for child in children {
                    walk(child, depth + 1);
                }
            }
        }
    }
    walk(&spec, 0);
}

/// Claim 31: every leaf inlines its summary data
#[test]
fn claim_31_leaves_inline_data() {
    let spec = jointplot(&example(), "x", "y", &JointOptions::default().with_maxbins(4))
        .unwrap()
        .to_vega_lite();
    let top = &spec["vconcat"][0];
    let main = &spec["vconcat"][1]["hconcat"][0];
    assert_eq!(top["data"]["values"].as_array().unwrap().len(), 4);
    assert_eq!(main["data"]["values"].as_array().unwrap().len(), 5);
    assert_eq!(main["data"]["values"][0]["x"], 1.0);
}

// ============================================================================
// ERRORS
// ============================================================================

/// Claim 40: bad inputs are rejected before anything is built
#[test]
fn claim_40_errors() {
    let options = JointOptions::default();
    assert!(matches!(jointplot(&DataFrame::new(), "x", "y", &options), Err(Error::EmptyDataset)));
    assert!(matches!(jointplot(&example(), "x", "z", &options), Err(Error::MissingColumn { .. })));
    assert!(matches!(
        jointplot(&grouped(), "species", "width", &options),
        Err(Error::NonNumericColumn { .. })
    ));
    assert!(matches!(
        jointplot(&example(), "x", "y", &options.clone().with_padding_fraction(-0.1)),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        jointplot(&example(), "x", "y", &options.clone().with_steps(1)),
        Err(Error::InvalidConfiguration(_))
    ));
}
