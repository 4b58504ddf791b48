//! Gaussian kernel density estimation on a fixed sample grid.

use serde::Serialize;

use crate::scale::Domain;

const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// One sample of a density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityPoint {
    /// Sample position on the value axis.
    pub value: f64,
    /// Estimated density (or count-scaled density) at `value`.
    pub density: f64,
}

/// Evaluate a Gaussian KDE of `values` at `steps` points spanning `domain`.
///
/// `density(x) = 1 / (n h) * sum(phi((x - xi) / h))`, multiplied by `n` when
/// `counts` is set. With no finite values every sample has density zero.
#[must_use]
pub fn gaussian_kde(
    values: &[f64],
    domain: Domain,
    bandwidth: f64,
    steps: usize,
    counts: bool,
) -> Vec<DensityPoint> {
    let clean: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = clean.len() as f64;

    domain
        .linspace(steps)
        .into_iter()
        .map(|x| {
            let density = if clean.is_empty() {
                0.0
            } else {
                let sum: f64 = clean
                    .iter()
                    .map(|&xi| {
                        let u = (x - xi) / bandwidth;
                        (-0.5 * u * u).exp()
                    })
                    .sum();
                let pdf = sum / (n * bandwidth * SQRT_2PI);
                if counts {
                    pdf * n
                } else {
                    pdf
                }
            };
            DensityPoint { value: x, density }
        })
        .collect()
}

/// Silverman's rule of thumb, `1.06 * sd * n^(-1/5)`.
///
/// `None` when fewer than two finite values or zero spread.
#[must_use]
pub fn silverman_bandwidth(values: &[f64]) -> Option<f64> {
    let clean: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if clean.len() < 2 {
        return None;
    }
    let n = clean.len() as f64;
    let mean = clean.iter().sum::<f64>() / n;
    let variance = clean.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let h = 1.06 * variance.sqrt() * n.powf(-0.2);
    (h > 0.0).then_some(h)
}
