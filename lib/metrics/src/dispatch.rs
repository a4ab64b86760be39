//! Name-based dispatch

use crate::params::MetricParams;
use crate::registry::Metric;
use crate::validate::finite_score;
use analogs_core::{Result, Sample};
use tracing::debug;

/// Score `candidates` against `target` with the metric registered as `method`.
///
/// # Errors
/// - [`Error::UnknownMetric`](analogs_core::Error::UnknownMetric) for an unregistered name
/// - [`Error::InsufficientData`](analogs_core::Error::InsufficientData) for an empty or too small sample
/// - [`Error::DimensionMismatch`](analogs_core::Error::DimensionMismatch) when feature counts differ
/// - [`Error::DegenerateInput`](analogs_core::Error::DegenerateInput) for non-finite values, undefined spread or an overflowing score
/// - [`Error::InvalidConfig`](analogs_core::Error::InvalidConfig) for unusable parameters
pub fn evaluate(
    method: &str,
    target: &Sample,
    candidates: &Sample,
    params: &MetricParams,
) -> Result<f64> {
    let metric: Metric = method.parse()?;
    metric.evaluate(target, candidates, params)
}

impl Metric {
    /// Score `candidates` against `target`.
    pub fn evaluate(
        &self,
        target: &Sample,
        candidates: &Sample,
        params: &MetricParams,
    ) -> Result<f64> {
        params.validate()?;
        debug!(
            metric = self.as_str(),
            target = target.len(),
            candidates = candidates.len(),
            dim = target.dim(),
            "evaluating"
        );
        (self.info().func)(target, candidates, params).and_then(finite_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analogs_core::{Degeneracy, Error};

    fn sample(rows: &[&[f64]]) -> Sample {
        Sample::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_dispatch_by_name() {
        let x = sample(&[&[-1.0, -1.0], &[0.0, 0.0], &[1.0, 1.0]]);
        let y = sample(&[&[2.0, 3.0], &[3.0, 4.0], &[4.0, 5.0]]);
        let d = evaluate("seuclidean", &x, &y, &MetricParams::default()).unwrap();
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_metric() {
        let x = sample(&[&[0.0]]);
        let err = evaluate("not_a_real_metric", &x, &x, &MetricParams::default()).unwrap_err();
        assert!(matches!(err, Error::UnknownMetric(_)));
    }

    #[test]
    fn test_params_validated_before_data() {
        let x = sample(&[&[0.0]]);
        let err = evaluate(
            "szekely_rizzo",
            &x,
            &x,
            &MetricParams::default().with_dmin(-1.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_params_reach_metric() {
        let x = sample(&[&[0.0], &[1.0]]);
        let y = sample(&[&[3.0]]);
        let raw = evaluate(
            "szekely_rizzo",
            &x,
            &y,
            &MetricParams::default().with_standardize(false),
        )
        .unwrap();
        assert!((raw - 4.5).abs() < 1e-12);
        let std = evaluate("szekely_rizzo", &x, &y, &MetricParams::default()).unwrap();
        assert!((raw - std).abs() > 1e-6);
    }

    #[test]
    fn test_overflowing_score_is_an_error() {
        let x = sample(&[&[-f64::MAX]]);
        let y = sample(&[&[f64::MAX]]);
        let params = MetricParams::default().with_standardize(false);
        let err = evaluate("szekely_rizzo", &x, &y, &params).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(Degeneracy::Overflow)));
    }
}
