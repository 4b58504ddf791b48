//! Equal-width binning over a fixed domain.

use serde::Serialize;

use crate::scale::Domain;

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    /// Inclusive lower edge.
    pub start: f64,
    /// Upper edge: exclusive, except for the last bin where it is inclusive.
    pub end: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Count `values` in `maxbins` equal-width bins spanning exactly `domain`.
///
/// Bin `i` covers `[start, end)`; the last bin is closed so `domain.max`
/// itself is counted. Non-finite values and values outside the domain are
/// skipped. A zero-width domain puts every value equal to its bound in the
/// first bin.
#[must_use]
pub fn bin_counts(values: &[f64], domain: Domain, maxbins: usize) -> Vec<Bin> {
    let bins = maxbins.max(1);
    let width = domain.width() / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        if !v.is_finite() || !domain.contains(v) {
            continue;
        }
        let idx = if width > 0.0 { ((v - domain.min) / width).floor() as usize } else { 0 };
        counts[idx.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: domain.min + i as f64 * width,
            end: if i + 1 == bins { domain.max } else { domain.min + (i + 1) as f64 * width },
            count,
        })
        .collect()
}
