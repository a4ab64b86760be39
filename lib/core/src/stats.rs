//! Per-feature summary statistics and standardization
//!
//! Two notions of "pooled" spread are used by the metrics:
//! - [`pooled_variance`]: within-sample variance pooled across both samples,
//!   `(SS_x + SS_y) / (n_x + n_y - 2)`. Independent of the distance between
//!   the sample means.
//! - [`union_std`]: standard deviation of the concatenated samples. Used to put
//!   every feature on a common scale before distances are computed.
//!
//! Spread that is undefined for lack of observations is reported as zero.

use crate::sample::Sample;

/// Mean of each feature. Empty samples yield zeros.
pub fn feature_means(sample: &Sample) -> Vec<f64> {
    let mut means = vec![0.0; sample.dim()];
    if sample.is_empty() {
        return means;
    }
    for row in sample.rows() {
        for (m, v) in means.iter_mut().zip(row) {
            *m += v;
        }
    }
    let n = sample.len() as f64;
    for m in &mut means {
        *m /= n;
    }
    means
}

/// Sum of squared deviations from the mean, per feature.
fn sum_squares(sample: &Sample, means: &[f64]) -> Vec<f64> {
    let mut ss = vec![0.0; sample.dim()];
    for row in sample.rows() {
        for ((acc, v), m) in ss.iter_mut().zip(row).zip(means) {
            let d = v - m;
            *acc += d * d;
        }
    }
    ss
}

/// Variance of each feature with `ddof` delta degrees of freedom.
pub fn feature_variances(sample: &Sample, ddof: usize) -> Vec<f64> {
    if sample.len() <= ddof {
        return vec![0.0; sample.dim()];
    }
    let means = feature_means(sample);
    let denom = (sample.len() - ddof) as f64;
    sum_squares(sample, &means)
        .into_iter()
        .map(|ss| ss / denom)
        .collect()
}

/// Sample standard deviation (ddof = 1) of each feature.
pub fn feature_std(sample: &Sample) -> Vec<f64> {
    feature_variances(sample, 1).into_iter().map(f64::sqrt).collect()
}

/// Within-sample variance pooled over `x` and `y`.
///
/// # Panics
/// Panics if the samples have different feature counts.
pub fn pooled_variance(x: &Sample, y: &Sample) -> Vec<f64> {
    assert_eq!(x.dim(), y.dim());
    let total = x.len() + y.len();
    if total <= 2 {
        return vec![0.0; x.dim()];
    }
    let ss_x = sum_squares(x, &feature_means(x));
    let ss_y = sum_squares(y, &feature_means(y));
    let dof = (total - 2) as f64;
    ss_x.iter().zip(&ss_y).map(|(a, b)| (a + b) / dof).collect()
}

/// Standard deviation (ddof = 1) of the union of `x` and `y`.
///
/// # Panics
/// Panics if the samples have different feature counts.
pub fn union_std(x: &Sample, y: &Sample) -> Vec<f64> {
    assert_eq!(x.dim(), y.dim());
    let total = x.len() + y.len();
    if total < 2 {
        return vec![0.0; x.dim()];
    }
    let n = total as f64;
    let means: Vec<f64> = feature_means(x)
        .iter()
        .zip(feature_means(y))
        .map(|(mx, my)| (mx * x.len() as f64 + my * y.len() as f64) / n)
        .collect();
    let ss_x = sum_squares(x, &means);
    let ss_y = sum_squares(y, &means);
    ss_x.iter()
        .zip(&ss_y)
        .map(|(a, b)| ((a + b) / (n - 1.0)).sqrt())
        .collect()
}

/// Reciprocal of each scale. Features without spread get a factor of zero so
/// that they drop out of every distance.
pub fn inverse_scales(scales: &[f64]) -> Vec<f64> {
    scales
        .iter()
        .map(|&s| if s > 0.0 { 1.0 / s } else { 0.0 })
        .collect()
}

/// Divide both samples by the standard deviation of their union.
pub fn standardize_pair(x: &Sample, y: &Sample) -> (Sample, Sample) {
    let factors = inverse_scales(&union_std(x, y));
    (x.scaled(&factors), y.scaled(&factors))
}
