//! Zech–Aslan energy statistic with a logarithmic kernel
//!
//! T = Σ_{i<j} φ(x_i, x_j) / (n(n-1)) + Σ_{i<j} φ(y_i, y_j) / (m(m-1))
//!     - Σ_{i,j} φ(x_i, y_j) / (nm),   φ = -ln(max(d, dmin))
//!
//! Distances are standardized Euclidean with per-feature variance
//! `s_x · s_y`, the product of the two sample standard deviations. The
//! statistic is zero in expectation when both samples share a distribution.
//! Finite-sample values near the null, and coincident observations across
//! the two samples (which sit at the `dmin` floor), push it below zero; the
//! score is clamped at 0, so an exact copy scores 0.

use crate::registry::Metric;
use crate::validate::check_pair;
use analogs_core::distance::{cdist, pdist};
use analogs_core::stats::{feature_std, union_std};
use analogs_core::{Degeneracy, Error, Result, Sample};
use tracing::trace;

pub fn zech_aslan(x: &Sample, y: &Sample, dmin: f64) -> Result<f64> {
    Ok(statistic(x, y, dmin)?.max(0.0))
}

/// The unclamped statistic.
fn statistic(x: &Sample, y: &Sample, dmin: f64) -> Result<f64> {
    check_pair(Metric::ZechAslan, x, y, 1, 1)?;

    let factors = scale_factors(x, y)?;
    let xs = x.scaled(&factors);
    let ys = y.scaled(&factors);

    let phi = |d: &f64| -d.max(dmin).ln();

    // no pairs with a single observation; the term vanishes
    let within = |s: &Sample| -> f64 {
        let n = s.len();
        if n < 2 {
            return 0.0;
        }
        pdist(s).iter().map(phi).sum::<f64>() / (n * (n - 1)) as f64
    };

    let cross = cdist(&xs, &ys).iter().map(phi).sum::<f64>() / (xs.len() * ys.len()) as f64;

    let (wx, wy) = (within(&xs), within(&ys));
    trace!(wx, wy, cross, "zech_aslan terms");
    Ok(wx + wy - cross)
}

/// Per-feature multipliers `1 / sqrt(s_x · s_y)`.
///
/// With a single observation on either side the per-sample spread is
/// undefined and the variance of the union is used instead. Features that are
/// constant across both samples are dropped; a feature constant in only one
/// sample has no defined scale.
fn scale_factors(x: &Sample, y: &Sample) -> Result<Vec<f64>> {
    let variances: Vec<f64> = if x.len() >= 2 && y.len() >= 2 {
        feature_std(x)
            .iter()
            .zip(feature_std(y))
            .map(|(a, b)| a * b)
            .collect()
    } else {
        union_std(x, y).iter().map(|s| s * s).collect()
    };

    variances
        .iter()
        .enumerate()
        .map(|(feature, &v)| {
            if v > 0.0 {
                Ok(1.0 / v.sqrt())
            } else if is_constant(x, y, feature) {
                Ok(0.0)
            } else {
                Err(Error::DegenerateInput(Degeneracy::ZeroVariance { feature }))
            }
        })
        .collect()
}

fn is_constant(x: &Sample, y: &Sample, feature: usize) -> bool {
    let first = x.row(0)[feature];
    x.column(feature).chain(y.column(feature)).all(|v| v == first)
}
