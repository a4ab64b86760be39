//! Metric registry
//!
//! A fixed table mapping each [`Metric`] tag to its implementation and
//! documented properties. Built at compile time; the name index is built once
//! on first lookup and never changes afterwards.

use crate::params::MetricParams;
use crate::{
    friedman_rafsky, kldiv, kolmogorov_smirnov, nearest_neighbor, seuclidean, szekely_rizzo,
    zech_aslan,
};
use ahash::AHashMap;
use analogs_core::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Signature shared by every registered metric.
pub type MetricFn = fn(&Sample, &Sample, &MetricParams) -> Result<f64>;

/// The registered dissimilarity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Seuclidean,
    NearestNeighbor,
    ZechAslan,
    KolmogorovSmirnov,
    FriedmanRafsky,
    Kldiv,
    SzekelyRizzo,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Seuclidean,
        Metric::NearestNeighbor,
        Metric::ZechAslan,
        Metric::KolmogorovSmirnov,
        Metric::FriedmanRafsky,
        Metric::Kldiv,
        Metric::SzekelyRizzo,
    ];

    /// Registry name.
    pub fn as_str(&self) -> &'static str {
        self.info().name
    }

    pub fn info(&self) -> &'static MetricInfo {
        // REGISTRY is laid out in declaration order
        &REGISTRY[*self as usize]
    }

    /// Smallest target and candidate sizes the metric accepts with `params`.
    pub fn min_samples(&self, params: &MetricParams) -> (usize, usize) {
        let base = self.info().min_samples;
        match self {
            Metric::Kldiv => (base.max(params.k + 1), base.max(params.k)),
            _ => (base, base),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        static BY_NAME: OnceLock<AHashMap<&'static str, Metric>> = OnceLock::new();
        BY_NAME
            .get_or_init(|| REGISTRY.iter().map(|info| (info.name, info.metric)).collect())
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownMetric(name.to_string()))
    }
}

/// Rough computational cost of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostClass {
    /// One pass over the data.
    Linear,
    /// All pairs of observations.
    Quadratic,
    /// All pairs, plus a term exponential in the number of features.
    ExponentialInDim,
}

impl CostClass {
    pub fn complexity(&self) -> &'static str {
        match self {
            CostClass::Linear => "O(n·d)",
            CostClass::Quadratic => "O(n²·d)",
            CostClass::ExponentialInDim => "O(n²·d + n·2^d)",
        }
    }
}

/// A registry entry.
#[derive(Debug, Clone, Serialize)]
pub struct MetricInfo {
    pub metric: Metric,
    pub name: &'static str,
    pub description: &'static str,
    /// Rescales features by pooled spread before comparing.
    pub standardizes: bool,
    /// Swapping target and candidates leaves the score unchanged.
    pub symmetric: bool,
    /// Zero exactly when the two distributions are equal.
    pub proper_metric: bool,
    pub cost: CostClass,
    /// Minimum observations per sample.
    pub min_samples: usize,
    /// Largest supported number of features.
    pub max_dim: Option<usize>,
    /// Expected score when both samples are drawn from the same distribution
    /// (equal sample sizes).
    pub null_value: f64,
    /// Score when the candidate sample is an exact copy of the target. `None`
    /// when it depends on the sample size (`friedman_rafsky` gives
    /// `(n - 1) / 2n` for `n` distinct observations).
    pub self_value: Option<f64>,
    #[serde(skip)]
    pub func: MetricFn,
}

/// All registered metrics, in [`Metric::ALL`] order.
pub fn registry() -> &'static [MetricInfo] {
    &REGISTRY
}

/// Registered metric names.
pub fn metric_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|info| info.name).collect()
}

fn run_seuclidean(x: &Sample, y: &Sample, _: &MetricParams) -> Result<f64> {
    seuclidean::seuclidean(x, y)
}

fn run_nearest_neighbor(x: &Sample, y: &Sample, _: &MetricParams) -> Result<f64> {
    nearest_neighbor::nearest_neighbor(x, y)
}

fn run_zech_aslan(x: &Sample, y: &Sample, params: &MetricParams) -> Result<f64> {
    zech_aslan::zech_aslan(x, y, params.dmin)
}

fn run_kolmogorov_smirnov(x: &Sample, y: &Sample, _: &MetricParams) -> Result<f64> {
    kolmogorov_smirnov::kolmogorov_smirnov(x, y)
}

fn run_friedman_rafsky(x: &Sample, y: &Sample, _: &MetricParams) -> Result<f64> {
    friedman_rafsky::friedman_rafsky(x, y)
}

fn run_kldiv(x: &Sample, y: &Sample, params: &MetricParams) -> Result<f64> {
    kldiv::kldiv(x, y, params.k, params.dmin)
}

fn run_szekely_rizzo(x: &Sample, y: &Sample, params: &MetricParams) -> Result<f64> {
    szekely_rizzo::szekely_rizzo(x, y, params.standardize)
}

static REGISTRY: [MetricInfo; 7] = [
    MetricInfo {
        metric: Metric::Seuclidean,
        name: "seuclidean",
        description: "Euclidean distance between sample means, each feature scaled by its pooled within-sample standard deviation",
        standardizes: true,
        symmetric: true,
        proper_metric: false,
        cost: CostClass::Linear,
        min_samples: 1,
        max_dim: None,
        null_value: 0.0,
        self_value: Some(0.0),
        func: run_seuclidean,
    },
    MetricInfo {
        metric: Metric::NearestNeighbor,
        name: "nearest_neighbor",
        description: "Henze nearest-neighbour statistic: share of pooled points whose nearest neighbour belongs to their own sample",
        standardizes: true,
        symmetric: true,
        proper_metric: false,
        cost: CostClass::Quadratic,
        min_samples: 1,
        max_dim: None,
        null_value: 0.5,
        self_value: Some(0.0),
        func: run_nearest_neighbor,
    },
    MetricInfo {
        metric: Metric::ZechAslan,
        name: "zech_aslan",
        description: "Zech-Aslan energy statistic with a logarithmic kernel on standardized distances, clamped at 0",
        standardizes: true,
        symmetric: true,
        proper_metric: false,
        cost: CostClass::Quadratic,
        min_samples: 1,
        max_dim: None,
        null_value: 0.0,
        self_value: Some(0.0),
        func: run_zech_aslan,
    },
    MetricInfo {
        metric: Metric::KolmogorovSmirnov,
        name: "kolmogorov_smirnov",
        description: "Multivariate Kolmogorov-Smirnov statistic: largest orthant-probability gap around any sample point",
        standardizes: false,
        symmetric: true,
        proper_metric: false,
        cost: CostClass::ExponentialInDim,
        min_samples: 1,
        max_dim: Some(16),
        null_value: 0.0,
        self_value: Some(0.0),
        func: run_kolmogorov_smirnov,
    },
    MetricInfo {
        metric: Metric::FriedmanRafsky,
        name: "friedman_rafsky",
        description: "Friedman-Rafsky runs statistic: 1 - (1 + cross-sample MST edges) / pooled size",
        standardizes: false,
        symmetric: true,
        proper_metric: false,
        cost: CostClass::Quadratic,
        min_samples: 1,
        max_dim: None,
        null_value: 0.5,
        self_value: None,
        func: run_friedman_rafsky,
    },
    MetricInfo {
        metric: Metric::Kldiv,
        name: "kldiv",
        description: "Kullback-Leibler divergence of target from candidates, k-nearest-neighbour estimate clamped at 0",
        standardizes: false,
        symmetric: false,
        proper_metric: false,
        cost: CostClass::Quadratic,
        min_samples: 5,
        max_dim: Some(10),
        null_value: 0.0,
        self_value: Some(0.0),
        func: run_kldiv,
    },
    MetricInfo {
        metric: Metric::SzekelyRizzo,
        name: "szekely_rizzo",
        description: "Szekely-Rizzo energy distance between the two samples",
        standardizes: true,
        symmetric: true,
        proper_metric: true,
        cost: CostClass::Quadratic,
        min_samples: 1,
        max_dim: None,
        null_value: 0.0,
        self_value: Some(0.0),
        func: run_szekely_rizzo,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_enum() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(registry()[i].metric, *metric);
            assert_eq!(metric.info().metric, *metric);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.as_str().parse().unwrap();
            assert_eq!(parsed, metric);
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric));
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(matches!(
            "SEUCLIDEAN".parse::<Metric>(),
            Err(Error::UnknownMetric(_))
        ));
        assert!(matches!(
            "not_a_real_metric".parse::<Metric>(),
            Err(Error::UnknownMetric(name)) if name == "not_a_real_metric"
        ));
    }

    #[test]
    fn test_kldiv_min_samples_follow_k() {
        let p = MetricParams::default().with_k(7);
        assert_eq!(Metric::Kldiv.min_samples(&p), (8, 7));
        assert_eq!(Metric::Kldiv.min_samples(&MetricParams::default()), (5, 5));
        assert_eq!(Metric::Seuclidean.min_samples(&p), (1, 1));
    }

    #[test]
    fn test_info_serializes_without_function() {
        let json = serde_json::to_value(Metric::Kldiv.info()).unwrap();
        assert_eq!(json["name"], "kldiv");
        assert_eq!(json["symmetric"], false);
        assert_eq!(json["cost"], "quadratic");
        assert!(json.get("func").is_none());
    }

    #[test]
    fn test_metric_names() {
        let names = metric_names();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"friedman_rafsky"));
    }
}
