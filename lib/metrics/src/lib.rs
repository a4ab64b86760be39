//! # analogs Metrics
//!
//! Two-sample dissimilarity metrics for spatial analogue search.
//!
//! Every metric compares a target sample (for example a site's climate over a
//! reference period) with a candidate sample (another site, another period)
//! and returns a single score where larger means more dissimilar:
//!
//! - [`seuclidean`] - Standardized distance between sample means
//! - [`nearest_neighbor`] - Henze nearest-neighbour statistic
//! - [`zech_aslan`] - Zech–Aslan energy statistic with a log potential
//! - [`kolmogorov_smirnov`] - Multivariate Kolmogorov–Smirnov over orthants
//! - [`friedman_rafsky`] - Friedman–Rafsky minimum spanning tree runs test
//! - [`kldiv`] - Kullback–Leibler divergence, k-nearest-neighbour estimate
//! - [`szekely_rizzo`] - Székely–Rizzo energy distance
//!
//! Metrics are looked up by name through the [`registry`], scored with
//! [`evaluate`], or applied to many candidate groups at once with
//! [`evaluate_batch`] and [`Scorer`].
//!
//! ## Example
//!
//! ```rust
//! use analogs_core::Sample;
//! use analogs_metrics::{evaluate, MetricParams};
//!
//! let target = Sample::new(vec![vec![-1.0, -1.0], vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
//! let candidates = Sample::new(vec![vec![2.0, 3.0], vec![3.0, 4.0], vec![4.0, 5.0]]).unwrap();
//!
//! let score = evaluate("seuclidean", &target, &candidates, &MetricParams::default()).unwrap();
//! assert!((score - 5.0).abs() < 1e-12);
//! ```

pub mod batch;
pub mod dispatch;
pub mod params;
pub mod registry;
mod validate;

pub mod friedman_rafsky;
pub mod kldiv;
pub mod kolmogorov_smirnov;
pub mod nearest_neighbor;
pub mod seuclidean;
pub mod szekely_rizzo;
pub mod zech_aslan;

pub use batch::{evaluate_batch, Scorer};
pub use dispatch::evaluate;
pub use params::MetricParams;
pub use registry::{metric_names, registry, CostClass, Metric, MetricFn, MetricInfo};

pub use friedman_rafsky::{cross_edge_count, friedman_rafsky};
pub use kldiv::{kldiv, kldiv_multi};
pub use kolmogorov_smirnov::kolmogorov_smirnov;
pub use nearest_neighbor::nearest_neighbor;
pub use seuclidean::seuclidean;
pub use szekely_rizzo::szekely_rizzo;
pub use zech_aslan::zech_aslan;
