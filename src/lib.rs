//! # analogs
//!
//! Distribution dissimilarity metrics for spatial analogue search.
//!
//! A spatial analogue is a place whose climate (over some period) resembles
//! the climate of a target place. Each place is described by a sample of
//! multivariate observations, and analogues are ranked by how dissimilar the
//! candidate sample is from the target one.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! analogs --list
//! analogs --method szekely_rizzo --target target.json --candidates cell_*.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use analogs::prelude::*;
//!
//! let target = Sample::new(vec![vec![-1.0, -1.0], vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
//! let near = Sample::new(vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]]).unwrap();
//! let far = Sample::new(vec![vec![2.0, 3.0], vec![3.0, 4.0], vec![4.0, 5.0]]).unwrap();
//!
//! let params = MetricParams::default();
//! let scores = evaluate_batch("seuclidean", &target, &[near, far], &params).unwrap();
//! assert!(scores[0] < scores[1]);
//! ```
//!
//! ## Crate Structure
//!
//! - [`analogs-core`](https://docs.rs/analogs-core) - Samples, distance kernels, standardization, neighbour search, spanning trees
//! - [`analogs-metrics`](https://docs.rs/analogs-metrics) - The metrics, their registry and batch evaluation

pub mod io;

// Re-export core types
pub use analogs_core::{Degeneracy, Error, Result, Sample};

// Re-export metrics
pub use analogs_metrics::{
    evaluate, evaluate_batch, metric_names, registry, CostClass, Metric, MetricInfo,
    MetricParams, Scorer,
};

pub use io::{load_sample, parse_sample, LabeledSample};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        evaluate, evaluate_batch, load_sample, registry, Error, Metric, MetricParams, Result,
        Sample, Scorer,
    };
}

/// The individual metric functions
pub mod metrics {
    pub use analogs_metrics::{
        cross_edge_count, friedman_rafsky, kldiv, kldiv_multi, kolmogorov_smirnov,
        nearest_neighbor, seuclidean, szekely_rizzo, zech_aslan,
    };
}

/// Numerical building blocks
pub mod kernels {
    pub use analogs_core::{distance, mst, neighbors, stats};
}
