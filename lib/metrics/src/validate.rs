// Boundary checks shared by every metric
use crate::registry::Metric;
use analogs_core::{Degeneracy, Error, Result, Sample};

/// Check a (target, candidates) pair before any computation starts.
///
/// Order: empty samples, feature count, minimum sizes, dimension cap,
/// non-finite values.
pub(crate) fn check_pair(
    metric: Metric,
    x: &Sample,
    y: &Sample,
    min_x: usize,
    min_y: usize,
) -> Result<()> {
    let name = metric.as_str();
    if x.is_empty() {
        return Err(Error::insufficient(name, min_x.max(1), 0));
    }
    if y.is_empty() {
        return Err(Error::insufficient(name, min_y.max(1), 0));
    }
    if x.dim() != y.dim() {
        return Err(Error::DimensionMismatch {
            expected: x.dim(),
            actual: y.dim(),
        });
    }
    if x.len() < min_x {
        return Err(Error::insufficient(name, min_x, x.len()));
    }
    if y.len() < min_y {
        return Err(Error::insufficient(name, min_y, y.len()));
    }
    if let Some(max) = metric.info().max_dim {
        if x.dim() > max {
            return Err(Error::UnsupportedDimension {
                metric: name.to_string(),
                max,
                actual: x.dim(),
            });
        }
    }
    x.check_finite()?;
    y.check_finite()
}

/// Check the target alone, for scorers that see candidates one at a time.
pub(crate) fn check_target(metric: Metric, x: &Sample, min_x: usize) -> Result<()> {
    let name = metric.as_str();
    if x.len() < min_x.max(1) {
        return Err(Error::insufficient(name, min_x.max(1), x.len()));
    }
    if let Some(max) = metric.info().max_dim {
        if x.dim() > max {
            return Err(Error::UnsupportedDimension {
                metric: name.to_string(),
                max,
                actual: x.dim(),
            });
        }
    }
    x.check_finite()
}

/// Reject a score that overflowed to infinity or NaN.
pub(crate) fn finite_score(score: f64) -> Result<f64> {
    if score.is_finite() {
        Ok(score)
    } else {
        Err(Error::DegenerateInput(Degeneracy::Overflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analogs_core::Degeneracy;

    fn sample(n: usize, dim: usize) -> Sample {
        Sample::from_flat((0..n * dim).map(|v| v as f64).collect(), dim).unwrap()
    }

    #[test]
    fn test_empty_beats_dimension_mismatch() {
        let err = check_pair(Metric::Seuclidean, &Sample::empty(0), &sample(3, 2), 1, 1)
            .unwrap_err();
        assert!(matches!(err, Error::InsufficientData { actual: 0, .. }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = check_pair(Metric::Seuclidean, &sample(3, 3), &sample(3, 2), 1, 1).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_minimum_size() {
        let err = check_pair(Metric::Kldiv, &sample(4, 1), &sample(9, 1), 5, 5).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { required: 5, actual: 4, .. }));
    }

    #[test]
    fn test_dimension_cap() {
        let err = check_pair(Metric::Kldiv, &sample(6, 11), &sample(6, 11), 5, 5).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDimension { max: 10, actual: 11, .. }));
    }

    #[test]
    fn test_non_finite_candidates() {
        let y = Sample::new(vec![vec![1.0], vec![f64::INFINITY]]).unwrap();
        let err = check_pair(Metric::SzekelyRizzo, &sample(2, 1), &y, 1, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateInput(Degeneracy::NonFinite { row: 1, feature: 0 })
        ));
        assert!(!err.is_degenerate_variance());
    }

    #[test]
    fn test_check_target() {
        assert!(check_target(Metric::Seuclidean, &sample(1, 2), 1).is_ok());
        assert!(check_target(Metric::Seuclidean, &Sample::empty(2), 1).is_err());
    }
}
