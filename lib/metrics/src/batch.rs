//! Scoring many candidate groups against one target
//!
//! Scanning a spatial grid compares one target sample with one candidate
//! group per grid cell. [`Scorer`] resolves the metric and checks the target
//! once, then scores groups one at a time so that callers can stop whenever
//! they like. [`evaluate_batch`] scores a whole slice in parallel.

use crate::params::MetricParams;
use crate::registry::{Metric, MetricInfo};
use crate::validate::{check_pair, check_target, finite_score};
use analogs_core::{Result, Sample};
use rayon::prelude::*;
use tracing::debug;

/// A metric bound to a target sample and parameters.
#[derive(Debug, Clone)]
pub struct Scorer<'a> {
    metric: Metric,
    target: &'a Sample,
    params: MetricParams,
}

impl<'a> Scorer<'a> {
    /// Resolve `method` and check the parameters and the target sample.
    pub fn new(method: &str, target: &'a Sample, params: MetricParams) -> Result<Self> {
        let metric: Metric = method.parse()?;
        Self::for_metric(metric, target, params)
    }

    pub fn for_metric(metric: Metric, target: &'a Sample, params: MetricParams) -> Result<Self> {
        params.validate()?;
        let (min_x, _) = metric.min_samples(&params);
        check_target(metric, target, min_x)?;
        Ok(Self {
            metric,
            target,
            params,
        })
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn info(&self) -> &'static MetricInfo {
        self.metric.info()
    }

    pub fn params(&self) -> &MetricParams {
        &self.params
    }

    /// Check a candidate group without scoring it.
    pub fn check(&self, group: &Sample) -> Result<()> {
        let (min_x, min_y) = self.metric.min_samples(&self.params);
        check_pair(self.metric, self.target, group, min_x, min_y)
    }

    /// Score one candidate group.
    pub fn score(&self, group: &Sample) -> Result<f64> {
        (self.info().func)(self.target, group, &self.params).and_then(finite_score)
    }

    /// Score one candidate group, yielding `NaN` when the metric is
    /// undefined for it because of zero spread.
    pub fn score_or_nan(&self, group: &Sample) -> Result<f64> {
        match self.score(group) {
            Err(err) if err.is_degenerate_variance() => {
                debug!(metric = self.metric.as_str(), %err, "degenerate group scored as NaN");
                Ok(f64::NAN)
            }
            other => other,
        }
    }
}

/// Score every group in `groups` against `target`, in parallel.
///
/// All groups are checked before any is scored, so an invalid group fails
/// the whole call without partial results. Groups whose spread makes the
/// metric undefined score `NaN`.
pub fn evaluate_batch(
    method: &str,
    target: &Sample,
    groups: &[Sample],
    params: &MetricParams,
) -> Result<Vec<f64>> {
    let scorer = Scorer::new(method, target, *params)?;
    for group in groups {
        scorer.check(group)?;
    }
    debug!(
        metric = scorer.metric().as_str(),
        groups = groups.len(),
        "scoring batch"
    );
    groups
        .par_iter()
        .map(|group| scorer.score_or_nan(group))
        .collect()
}
