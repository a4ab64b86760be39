//! Henze nearest-neighbour two-sample statistic

use crate::registry::Metric;
use crate::validate::check_pair;
use analogs_core::neighbors::nearest_with_ties;
use analogs_core::stats::standardize_pair;
use analogs_core::{Result, Sample};

/// Share of pooled observations whose nearest neighbour comes from their own
/// sample, after dividing each feature by the pooled standard deviation.
///
/// Well-mixed samples score low, separated ones approach 1. When several
/// neighbours are equidistant each contributes an equal fraction, so the
/// result does not depend on observation order. An observation duplicated
/// across the two samples has its twin as sole nearest neighbour, hence an
/// exact copy scores 0.
pub fn nearest_neighbor(x: &Sample, y: &Sample) -> Result<f64> {
    check_pair(Metric::NearestNeighbor, x, y, 1, 1)?;

    let (xs, ys) = standardize_pair(x, y);
    let pooled = xs.concat(&ys)?;
    let nx = x.len();

    let same: f64 = nearest_with_ties(&pooled)
        .iter()
        .enumerate()
        .map(|(i, neighbors)| {
            let own = neighbors.iter().filter(|&&j| (j < nx) == (i < nx)).count();
            own as f64 / neighbors.len() as f64
        })
        .sum();

    Ok(same / pooled.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: &[f64]) -> Sample {
        Sample::new(values.iter().map(|&v| vec![v]).collect()).unwrap()
    }

    #[test]
    fn test_separated_samples() {
        let x = line(&[0.0, 1.0, 2.0]);
        let y = line(&[100.0, 101.0, 102.0]);
        assert_eq!(nearest_neighbor(&x, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_interleaved_samples() {
        let x = line(&[0.0, 2.0, 4.0, 6.0]);
        let y = line(&[1.0, 3.0, 5.0, 7.0]);
        assert_eq!(nearest_neighbor(&x, &y).unwrap(), 0.0);
    }

    #[test]
    fn test_exact_copy() {
        let x = line(&[0.0, 1.5, 4.0, 9.0]);
        assert_eq!(nearest_neighbor(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_ties_count_fractionally() {
        // pooled: 0(x) 1(x) 2(y); point 1 has neighbours 0 and 2 at equal distance
        let x = line(&[0.0, 1.0]);
        let y = line(&[2.0]);
        // point 0: nn 1 (same) -> 1; point 1: {0 same, 2 other} -> 0.5; point 2: nn 1 (other) -> 0
        let v = nearest_neighbor(&x, &y).unwrap();
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let x = line(&[0.0, 0.3, 1.7, 2.2, 5.0]);
        let y = line(&[0.1, 2.0, 2.9, 7.5]);
        let a = nearest_neighbor(&x, &y).unwrap();
        let b = nearest_neighbor(&y, &x).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_single_points() {
        let x = line(&[0.0]);
        let y = line(&[1.0]);
        assert_eq!(nearest_neighbor(&x, &y).unwrap(), 0.0);
    }
}
