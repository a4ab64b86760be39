// Euclidean distance kernels over f64 observations
// Scalar code with two accumulators for better pipelining; features per
// observation are few (one per climate index), so no SIMD dispatch.

use crate::sample::Sample;

/// Squared Euclidean distance.
#[inline]
pub fn sq_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut sum0 = 0.0f64;
    let mut sum1 = 0.0f64;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        let d0 = a_chunk[0] - b_chunk[0];
        let d1 = a_chunk[1] - b_chunk[1];
        let d2 = a_chunk[2] - b_chunk[2];
        let d3 = a_chunk[3] - b_chunk[3];

        sum0 += d0 * d0 + d1 * d1;
        sum1 += d2 * d2 + d3 * d3;
    }

    for i in (a.len() - remainder.len())..a.len() {
        let diff = a[i] - b[i];
        sum0 += diff * diff;
    }

    sum0 + sum1
}

/// Euclidean distance.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    sq_euclidean(a, b).sqrt()
}

/// Distances between all unordered pairs of rows (i < j), in row-major
/// upper-triangle order.
pub fn pdist(sample: &Sample) -> Vec<f64> {
    let n = sample.len();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        let a = sample.row(i);
        for j in (i + 1)..n {
            out.push(euclidean(a, sample.row(j)));
        }
    }
    out
}

/// Distances between every row of `x` and every row of `y`, row-major
/// (`x.len()` rows of `y.len()` columns).
pub fn cdist(x: &Sample, y: &Sample) -> Vec<f64> {
    let mut out = Vec::with_capacity(x.len() * y.len());
    for a in x.rows() {
        for b in y.rows() {
            out.push(euclidean(a, b));
        }
    }
    out
}

/// Sum of distances over all ordered pairs `(x_i, y_j)`.
///
/// With `x == y` this includes the zero self-distances, matching the
/// V-statistic form of the energy distance.
pub fn cross_sum(x: &Sample, y: &Sample) -> f64 {
    x.rows()
        .map(|a| y.rows().map(|b| euclidean(a, b)).sum::<f64>())
        .sum()
}
