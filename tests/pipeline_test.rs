//! End-to-end pipeline tests: files in, Vega-Lite documents out.
//!
//! Run: cargo test --test pipeline_test

#![allow(clippy::unwrap_used)]

use std::fs;

use serde_json::Value;

use cosilico::biology::{qc_histogram, qc_scatter, DEFAULT_HIST_HEIGHT, DEFAULT_WIDTH};
use cosilico::config::{Bandwidth, JointOptions, MarginalKind};
use cosilico::datasets::AnnotatedData;
use cosilico::output::{write_json, SCHEMA_URL};
use cosilico::plots::{
    jointplot, layered_distribution_plot, layered_histogram, stripplot, DistributionOptions,
    LayeredHistogramOptions, StripOptions, ValueColumns,
};
use cosilico::Error;

const OBS_CSV: &str = "\
cell,n_genes_by_counts,total_counts,pct_counts_mt,cluster
AAAC,781,2419,3.0,B
AAAG,1352,4903,3.8,CD4 T
AAAT,1131,3147,0.9,CD4 T
AACA,960,2639,1.7,NK
AACC,522,980,1.2,B
AACG,1018,3214,2.2,CD14 Mono
";

fn obs_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("pbmc_obs.csv");
    fs::write(&path, OBS_CSV).unwrap();
    path
}

#[test]
fn test_yaml_options_drive_joint_plot() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("joint.yaml");
    fs::write(
        &config,
        "group: cluster\n\
         marginal_kind: density_area\n\
         bandwidth:\n  mode: scalar\n  value: 10\n\
         steps: 40\n\
         padding_fraction: 0.1\n\
         strip_decorative_borders: true\n",
    )
    .unwrap();

    let options = JointOptions::load(&config).unwrap();
    assert_eq!(options.marginal_kind, MarginalKind::DensityArea);
    assert_eq!(options.bandwidth, Bandwidth::Scalar(10.0));

    let adata = AnnotatedData::read_obs_csv(obs_file(&dir)).unwrap();
    let figure = jointplot(&adata.obs, "total_counts", "n_genes_by_counts", &options).unwrap();
    assert!(figure.theme().is_seamless());

    let out = dir.path().join("joint.vl.json");
    write_json(&out, &figure.to_vega_lite()).unwrap();
    let spec: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(spec["$schema"], SCHEMA_URL);
    assert_eq!(spec["vconcat"][0]["mark"]["type"], "area");
    assert_eq!(spec["vconcat"][0]["encoding"]["color"]["field"], "cluster");
    assert!(spec["vconcat"][0]["encoding"]["color"]["legend"].is_null());
    assert_eq!(spec["config"]["axis"]["ticks"], false);
}

#[test]
fn test_bad_yaml_reports_line() {
    let err = JointOptions::parse("steps: 10\nmaxbins: [1,\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse { line, .. } if line >= 2), "{err:?}");
    let err = JointOptions::parse("marginal_kind: violin\n").unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn test_single_cell_qc_figures() {
    let dir = tempfile::tempdir().unwrap();
    let adata = AnnotatedData::read_obs(obs_file(&dir)).unwrap();
    assert_eq!(adata.n_obs(), 6);

    let vars = ["n_genes_by_counts", "total_counts", "pct_counts_mt"];
    let hist = qc_histogram(&adata, &vars, DEFAULT_WIDTH).unwrap().to_vega_lite();
    let panels = hist["hconcat"].as_array().unwrap();
    assert_eq!(panels.len(), 3);
    assert!(panels.iter().all(|p| p["width"] == 233));

    let scatter = qc_scatter(&adata, "total_counts", &vars[..2], DEFAULT_WIDTH, DEFAULT_HIST_HEIGHT)
        .unwrap()
        .to_vega_lite();
    let columns = scatter["hconcat"].as_array().unwrap();
    assert_eq!(columns.len(), 2);
    for column in columns {
        assert_eq!(column["resolve"]["scale"]["x"], "shared");
        assert_eq!(column["vconcat"][0]["mark"]["type"], "point");
        assert_eq!(column["vconcat"][1]["mark"]["color"], "#ffa500");
        assert_eq!(column["vconcat"][1]["height"], 100);
    }
}

#[test]
fn test_distribution_builders_encode() {
    let dir = tempfile::tempdir().unwrap();
    let adata = AnnotatedData::read_obs_csv(obs_file(&dir)).unwrap();

    let layered = layered_histogram(
        "total_counts",
        "cluster",
        &adata.obs,
        &LayeredHistogramOptions::default().with_maxbins(10),
    )
    .unwrap()
    .to_vega_lite();
    assert_eq!(layered["mark"]["interpolate"], "step-after");
    assert!(layered["encoding"]["y"]["stack"].is_null());

    let folded = ValueColumns::from(&["total_counts", "n_genes_by_counts"][..]);
    let density = layered_distribution_plot(
        &folded,
        &adata.obs,
        &DistributionOptions::default().with_bandwidth(Bandwidth::Fixed(200.0)).with_steps(30),
    )
    .unwrap()
    .to_vega_lite();
    assert_eq!(density["mark"]["type"], "area");
    assert_eq!(density["encoding"]["color"]["field"], "variable");
    assert_eq!(density["data"]["values"].as_array().unwrap().len(), 60);

    let strip = stripplot(Some("cluster"), "pct_counts_mt", &adata.obs, &StripOptions::default())
        .unwrap()
        .to_vega_lite();
    assert_eq!(strip["facet"]["column"]["field"], "cluster");
    assert_eq!(strip["config"]["facet"]["spacing"], 0.0);
}
