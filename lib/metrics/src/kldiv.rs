//! Kullback–Leibler divergence, k-nearest-neighbour estimate
//!
//! Pérez-Cruz (2008), "Kullback-Leibler divergence estimation of continuous
//! distributions":
//!
//! D(P‖Q) ≈ d/n Σ_i ln(s_k(x_i) / r_k(x_i)) + ln(m / (n - 1))
//!
//! where `r_k(x_i)` is the distance from `x_i` to its k-th nearest neighbour
//! among the other target observations and `s_k(x_i)` the distance to its
//! k-th nearest candidate observation. The estimate is directed: it measures
//! how badly the candidate distribution describes the target one.
//!
//! The divergence itself is non-negative but the estimate is not: it dips
//! below zero near the null, and candidates that coincide with target
//! observations put `s_k` at the `dmin` floor while `r_k` never sees the
//! point itself. Scores are clamped at 0, so an exact copy scores 0.

use crate::registry::Metric;
use crate::validate::check_pair;
use analogs_core::neighbors::k_nearest_distances;
use analogs_core::{Error, Result, Sample};

/// Divergence of the target `x` from the candidates `y` at neighbour rank `k`.
pub fn kldiv(x: &Sample, y: &Sample, k: usize, dmin: f64) -> Result<f64> {
    let mut out = kldiv_multi(x, y, &[k], dmin)?;
    Ok(out.remove(0))
}

/// One divergence estimate per entry of `ks`, sharing a single neighbour
/// search up to the largest rank.
///
/// Zero neighbour distances (duplicated observations) are floored at `dmin`.
pub fn kldiv_multi(x: &Sample, y: &Sample, ks: &[usize], dmin: f64) -> Result<Vec<f64>> {
    Ok(estimates(x, y, ks, dmin)?
        .into_iter()
        .map(|v| v.max(0.0))
        .collect())
}

/// Unclamped estimates, one per rank.
fn estimates(x: &Sample, y: &Sample, ks: &[usize], dmin: f64) -> Result<Vec<f64>> {
    let kmax = match ks.iter().copied().max() {
        Some(0) | None => {
            return Err(Error::InvalidConfig(
                "kldiv needs at least one neighbour rank >= 1".to_string(),
            ))
        }
        Some(k) => k,
    };
    if ks.contains(&0) {
        return Err(Error::InvalidConfig("k must be at least 1".to_string()));
    }
    let base = Metric::Kldiv.info().min_samples;
    check_pair(Metric::Kldiv, x, y, base.max(kmax + 1), base.max(kmax))?;

    let nx = x.len() as f64;
    let ny = y.len() as f64;
    let d = x.dim() as f64;

    let r = k_nearest_distances(x, x, kmax, true);
    let s = k_nearest_distances(x, y, kmax, false);

    Ok(ks
        .iter()
        .map(|&k| {
            let sum: f64 = r
                .iter()
                .zip(&s)
                .map(|(ri, si)| (si[k - 1].max(dmin) / ri[k - 1].max(dmin)).ln())
                .sum();
            sum * d / nx + (ny / (nx - 1.0)).ln()
        })
        .collect())
}
