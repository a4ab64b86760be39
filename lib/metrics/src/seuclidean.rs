//! Standardized Euclidean distance between sample means

use crate::registry::Metric;
use crate::validate::check_pair;
use analogs_core::stats::{feature_means, pooled_variance};
use analogs_core::{Degeneracy, Error, Result, Sample};

/// Euclidean distance between the two sample means, each feature divided by
/// its pooled within-sample standard deviation.
///
/// A feature with zero pooled variance contributes nothing when both means
/// agree; otherwise the distance is undefined and
/// [`Degeneracy::ZeroVariance`] is returned. Values large enough to
/// overflow the means or the sum give [`Degeneracy::Overflow`].
pub fn seuclidean(x: &Sample, y: &Sample) -> Result<f64> {
    check_pair(Metric::Seuclidean, x, y, 1, 1)?;

    let mx = feature_means(x);
    let my = feature_means(y);
    let var = pooled_variance(x, y);

    let mut sum = 0.0;
    for (feature, ((a, b), v)) in mx.iter().zip(&my).zip(&var).enumerate() {
        let diff = a - b;
        if *v > 0.0 {
            sum += diff * diff / v;
        } else if diff != 0.0 {
            return Err(Error::DegenerateInput(Degeneracy::ZeroVariance { feature }));
        }
    }
    if !sum.is_finite() {
        return Err(Error::DegenerateInput(Degeneracy::Overflow));
    }
    Ok(sum.sqrt())
}
