//! Quality-control figures for single-cell observation tables.
//!
//! Both builders lay one panel per QC variable side by side and split the
//! total width evenly between them.

use crate::color::Rgba;
use crate::datasets::AnnotatedData;
use crate::error::{Error, Result};
use crate::layout::{CompositeLayout, Resolve};
use crate::plots::{histogram, scatterplot, HistogramOptions, ScatterOptions};

/// Bins per QC histogram.
pub const QC_MAXBINS: usize = 50;
/// Total figure width in pixels.
pub const DEFAULT_WIDTH: u32 = 700;
/// Height of the histograms under each QC scatter.
pub const DEFAULT_HIST_HEIGHT: u32 = 100;

fn panel_width(width: u32, variables: &[&str]) -> Result<u32> {
    if variables.is_empty() {
        return Err(Error::invalid("at least one QC variable is required"));
    }
    let n = u32::try_from(variables.len()).map_err(|_| Error::invalid("too many QC variables"))?;
    Ok(width / n)
}

/// One histogram per QC variable, side by side.
///
/// # Errors
///
/// Returns an error if `variables` is empty or a histogram cannot be built.
pub fn qc_histogram(adata: &AnnotatedData, variables: &[&str], width: u32) -> Result<CompositeLayout> {
    let panel = panel_width(width, variables)?;
    let options = HistogramOptions::default().with_maxbins(QC_MAXBINS).with_width(panel);

    let panels = variables
        .iter()
        .map(|var| histogram(var, &adata.obs, &options).map(CompositeLayout::from))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("qc histogram: {} panel(s) of width {panel}", panels.len());
    CompositeLayout::hconcat(panels)
}

/// One scatter of each QC variable against `x`, each stacked over a
/// histogram of `x` sharing its x scale.
///
/// # Errors
///
/// Returns an error if `variables` is empty or a panel cannot be built.
pub fn qc_scatter(
    adata: &AnnotatedData,
    x: &str,
    variables: &[&str],
    width: u32,
    hist_height: u32,
) -> Result<CompositeLayout> {
    let panel = panel_width(width, variables)?;
    let scatter_options = ScatterOptions::default().with_width(panel);
    let hist_options = HistogramOptions::default()
        .with_maxbins(QC_MAXBINS)
        .with_color(Rgba::ORANGE)
        .with_width(panel)
        .with_height(hist_height);

    let mut columns = Vec::with_capacity(variables.len());
    for var in variables {
        let scatter = scatterplot(x, var, &adata.obs, &scatter_options)?;
        let hist = histogram(x, &adata.obs, &hist_options)?;
        let column = CompositeLayout::vconcat(vec![scatter.into(), hist.into()])?.resolve(Resolve::shared_x());
        columns.push(column);
    }
    log::debug!("qc scatter of '{x}': {} panel(s) of width {panel}", columns.len());
    CompositeLayout::hconcat(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::DataFrame;
    use crate::layout::{LayoutNode, ResolveMode};

    fn pbmc_like() -> AnnotatedData {
        let mut obs = DataFrame::new();
        obs.add_column_f64("n_genes_by_counts", &[781.0, 1352.0, 1131.0, 960.0, 522.0]);
        obs.add_column_f64("total_counts", &[2419.0, 4903.0, 3147.0, 2639.0, 980.0]);
        obs.add_column_f64("pct_counts_mt", &[3.0, 3.8, 0.9, 1.7, 1.2]);
        AnnotatedData::new(obs)
    }

    #[test]
    fn test_qc_histogram_panels() {
        let vars = ["n_genes_by_counts", "total_counts", "pct_counts_mt"];
        let layout = qc_histogram(&pbmc_like(), &vars, DEFAULT_WIDTH).unwrap();
        let leaves = layout.leaves();
        assert_eq!(leaves.len(), 3);
        assert!(matches!(layout.root(), LayoutNode::HConcat { .. }));
        for (leaf, var) in leaves.iter().zip(vars) {
            assert_eq!(leaf.width, Some(233));
            assert_eq!(leaf.x_axis.title_text(), Some(var));
            assert_eq!(leaf.layers[0].data.nrow(), QC_MAXBINS);
        }
    }

    #[test]
    fn test_qc_histogram_single_variable_is_hconcat_of_one() {
        let layout = qc_histogram(&pbmc_like(), &["total_counts"], 300).unwrap();
        assert_eq!(layout.root().children().len(), 1);
        assert_eq!(layout.leaves()[0].width, Some(300));
    }

    #[test]
    fn test_qc_scatter_structure() {
        let layout =
            qc_scatter(&pbmc_like(), "total_counts", &["pct_counts_mt", "n_genes_by_counts"], 700, 80).unwrap();
        let columns = layout.root().children();
        assert_eq!(columns.len(), 2);
        for column in columns {
            match column {
                LayoutNode::VConcat { children, resolve, .. } => {
                    assert_eq!(children.len(), 2);
                    assert_eq!(resolve.x, Some(ResolveMode::Shared));
                }
                other => panic!("expected vconcat, got {other:?}"),
            }
        }
        let leaves = layout.leaves();
        assert_eq!(leaves[0].layers[0].aes.y.as_deref(), Some("pct_counts_mt"));
        assert_eq!(leaves[1].height, Some(80));
        assert_eq!(leaves[1].width, Some(350));
        assert_eq!(leaves[1].layers[0].aes.color_value, Some(Rgba::ORANGE));
    }

    #[test]
    fn test_qc_errors() {
        let adata = pbmc_like();
        assert!(matches!(qc_histogram(&adata, &[], 700), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(
            qc_scatter(&adata, "total_counts", &[], 700, 100),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            qc_scatter(&adata, "total_counts", &["doublet_score"], 700, 100),
            Err(Error::MissingColumn { .. })
        ));
    }
}
