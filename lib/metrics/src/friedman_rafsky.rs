//! Friedman–Rafsky runs test on the pooled minimum spanning tree

use crate::registry::Metric;
use crate::validate::check_pair;
use analogs_core::mst::minimum_spanning_tree;
use analogs_core::{Result, Sample};

/// Number of minimum spanning tree edges joining an observation of `x` to an
/// observation of `y`, over the pooled sample (Euclidean weights).
///
/// Two separated clusters give 1; perfectly interleaved samples give
/// `n_x + n_y - 1`. Equal-weight edges are resolved by observation order
/// (target first), see [`minimum_spanning_tree`].
pub fn cross_edge_count(x: &Sample, y: &Sample) -> Result<usize> {
    check_pair(Metric::FriedmanRafsky, x, y, 1, 1)?;
    let pooled = x.concat(y)?;
    let split = x.len();
    Ok(minimum_spanning_tree(&pooled)
        .iter()
        .filter(|e| e.crosses(split))
        .count())
}

/// `1 - (1 + c) / n` with `c` the cross-edge count and `n` the pooled size.
///
/// Each cross edge merges two same-sample runs, so `1 + c` is the number of
/// runs. Interleaved samples score 0, separated samples approach 1. An exact
/// copy of `n` distinct observations joins every observation to its twin, so
/// it scores `(n - 1) / 2n`.
pub fn friedman_rafsky(x: &Sample, y: &Sample) -> Result<f64> {
    let cross = cross_edge_count(x, y)?;
    let n = (x.len() + y.len()) as f64;
    Ok(1.0 - (1.0 + cross as f64) / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(cx: f64, cy: f64, n: usize, phase: f64) -> Sample {
        // points on a widening spiral; distinct phases avoid equal distances
        let rows = (0..n)
            .map(|i| {
                let t = i as f64 * 0.7 + phase;
                let r = 1.0 + 0.1 * i as f64 + 0.05 * phase;
                vec![cx + t.cos() * r, cy + t.sin()]
            })
            .collect();
        Sample::new(rows).unwrap()
    }

    #[test]
    fn test_separated_clusters_single_cross_edge() {
        let x = cluster(0.0, 0.0, 6, 0.0);
        let y = cluster(50.0, 50.0, 6, 0.0);
        assert_eq!(cross_edge_count(&x, &y).unwrap(), 1);
        let score = friedman_rafsky(&x, &y).unwrap();
        assert!((score - (1.0 - 2.0 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn test_interleaved_line() {
        let x = Sample::new((0..5).map(|i| vec![2.0 * i as f64]).collect()).unwrap();
        let y = Sample::new((0..5).map(|i| vec![2.0 * i as f64 + 1.0]).collect()).unwrap();
        assert_eq!(cross_edge_count(&x, &y).unwrap(), 9);
        assert_eq!(friedman_rafsky(&x, &y).unwrap(), 0.0);
    }

    #[test]
    fn test_symmetric_in_general_position() {
        let x = cluster(0.0, 0.0, 7, 0.0);
        let y = cluster(0.4, -0.3, 5, 0.33);
        assert_eq!(
            friedman_rafsky(&x, &y).unwrap(),
            friedman_rafsky(&y, &x).unwrap()
        );
    }

    #[test]
    fn test_single_points() {
        let x = Sample::new(vec![vec![0.0]]).unwrap();
        let y = Sample::new(vec![vec![1.0]]).unwrap();
        assert_eq!(cross_edge_count(&x, &y).unwrap(), 1);
        assert_eq!(friedman_rafsky(&x, &y).unwrap(), 0.0);
    }

    #[test]
    fn test_exact_copy_joins_twins() {
        let x = cluster(0.0, 0.0, 7, 0.2);
        assert_eq!(cross_edge_count(&x, &x).unwrap(), 7);
        let score = friedman_rafsky(&x, &x).unwrap();
        assert!((score - 6.0 / 14.0).abs() < 1e-12);
    }
}
