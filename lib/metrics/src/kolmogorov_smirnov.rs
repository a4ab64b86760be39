//! Multivariate two-sample Kolmogorov–Smirnov statistic
//!
//! Every observation of either sample serves as a pivot. Around a pivot `p`
//! the feature space splits into 2^d orthants, orthant bit `k` being set when
//! `p_k <= q_k`. The statistic is the largest gap, over all pivots and
//! orthants, between the fractions of each sample falling in the orthant. In
//! one dimension this is the classic two-sample KS distance.
//!
//! The orthant count grows as 2^d, so the number of features is capped (see
//! the registry entry).

use crate::registry::Metric;
use crate::validate::check_pair;
use analogs_core::{Result, Sample};

pub fn kolmogorov_smirnov(x: &Sample, y: &Sample) -> Result<f64> {
    check_pair(Metric::KolmogorovSmirnov, x, y, 1, 1)?;
    Ok(max_gap(x, x, y).max(max_gap(y, x, y)))
}

/// Orthant of `q` relative to `pivot`.
#[inline]
fn orthant(pivot: &[f64], q: &[f64]) -> usize {
    pivot
        .iter()
        .zip(q)
        .enumerate()
        .fold(0, |code, (k, (p, v))| code | (usize::from(p <= v) << k))
}

fn max_gap(pivots: &Sample, x: &Sample, y: &Sample) -> f64 {
    let orthants = 1usize << x.dim();
    let nx = x.len() as f64;
    let ny = y.len() as f64;
    let mut cx = vec![0usize; orthants];
    let mut cy = vec![0usize; orthants];
    let mut best = 0.0f64;

    for p in pivots.rows() {
        cx.fill(0);
        cy.fill(0);
        for q in x.rows() {
            cx[orthant(p, q)] += 1;
        }
        for q in y.rows() {
            cy[orthant(p, q)] += 1;
        }
        for (a, b) in cx.iter().zip(&cy) {
            let gap = (*a as f64 / nx - *b as f64 / ny).abs();
            if gap > best {
                best = gap;
            }
        }
    }
    best
}
