//! # analogs Core
//!
//! Core library for the analogs dissimilarity suite.
//!
//! This crate provides the data structures and numerical building blocks the
//! metrics are assembled from:
//!
//! - [`Sample`] - A set of d-dimensional observations stored row-major
//! - [`stats`] - Per-feature means, variances, pooled spread, standardization
//! - [`distance`] - Euclidean kernels, `pdist`/`cdist` style pairwise distances
//! - [`neighbors`] - Exact k-nearest-neighbour and tie-aware nearest-neighbour queries
//! - [`mst`] - Minimum spanning tree over the complete Euclidean graph
//!
//! ## Example
//!
//! ```rust
//! use analogs_core::{Sample, stats, distance};
//!
//! let target = Sample::new(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
//! let candidates = Sample::new(vec![vec![1.0, 1.0], vec![4.0, 4.0]]).unwrap();
//!
//! let (x, y) = stats::standardize_pair(&target, &candidates);
//! let cross = distance::cdist(&x, &y);
//! assert_eq!(cross.len(), 4);
//! ```

pub mod error;
pub mod sample;
pub mod stats;
pub mod distance;
pub mod neighbors;
pub mod mst;

pub use error::{Degeneracy, Error, Result};
pub use sample::Sample;
pub use mst::{minimum_spanning_tree, Edge};
pub use neighbors::{k_nearest_distances, nearest_with_ties};
