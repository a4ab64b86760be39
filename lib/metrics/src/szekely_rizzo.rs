//! Székely–Rizzo energy distance
//!
//! E = 2·Ē‖X−Y‖ − Ē‖X−X'‖ − Ē‖Y−Y'‖
//!
//! Each expectation is the mean over all ordered pairs, self-pairs included
//! (V-statistics). In that form E is the energy distance between the two
//! empirical distributions: non-negative, and zero only when they coincide.

use crate::registry::Metric;
use crate::validate::check_pair;
use analogs_core::distance::cross_sum;
use analogs_core::stats::standardize_pair;
use analogs_core::{Result, Sample};
use std::borrow::Cow;

pub fn szekely_rizzo(x: &Sample, y: &Sample, standardize: bool) -> Result<f64> {
    check_pair(Metric::SzekelyRizzo, x, y, 1, 1)?;

    let (x, y): (Cow<'_, Sample>, Cow<'_, Sample>) = if standardize {
        let (xs, ys) = standardize_pair(x, y);
        (Cow::Owned(xs), Cow::Owned(ys))
    } else {
        (Cow::Borrowed(x), Cow::Borrowed(y))
    };

    let nx = x.len() as f64;
    let ny = y.len() as f64;
    let exy = cross_sum(&x, &y) / (nx * ny);
    let exx = cross_sum(&x, &x) / (nx * nx);
    let eyy = cross_sum(&y, &y) / (ny * ny);

    // clamp rounding noise around zero
    Ok((2.0 * exy - exx - eyy).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: &[f64]) -> Sample {
        Sample::new(values.iter().map(|&v| vec![v]).collect()).unwrap()
    }

    fn grid(cx: f64, cy: f64) -> Sample {
        let mut rows = Vec::new();
        for i in 0..3 {
            for j in 0..3 {
                rows.push(vec![cx + i as f64, cy + j as f64]);
            }
        }
        Sample::new(rows).unwrap()
    }

    #[test]
    fn test_known_value_unstandardized() {
        let x = line(&[0.0, 1.0]);
        let y = line(&[3.0]);
        // Exy = (3 + 2) / 2, Exx = 2 / 4, Eyy = 0
        let v = szekely_rizzo(&x, &y, false).unwrap();
        assert!((v - (5.0 - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_identical_samples_are_zero() {
        let x = grid(1.0, -2.0);
        assert_eq!(szekely_rizzo(&x, &x, true).unwrap(), 0.0);
        assert_eq!(szekely_rizzo(&x, &x, false).unwrap(), 0.0);
    }

    #[test]
    fn test_separated_exceeds_overlapping() {
        let a = grid(0.0, 0.0);
        let far = szekely_rizzo(&a, &grid(10.0, 10.0), true).unwrap();
        let near = szekely_rizzo(&a, &grid(0.5, 0.5), true).unwrap();
        assert!(near >= 0.0);
        assert!(far > near);
    }

    #[test]
    fn test_standardization_removes_units() {
        let x = Sample::new(vec![vec![0.0, 0.0], vec![1.0, 100.0], vec![2.0, 50.0]]).unwrap();
        let y = Sample::new(vec![vec![1.0, 20.0], vec![3.0, 300.0]]).unwrap();
        let x2 = x.scaled(&[1000.0, 0.001]);
        let y2 = y.scaled(&[1000.0, 0.001]);
        let a = szekely_rizzo(&x, &y, true).unwrap();
        let b = szekely_rizzo(&x2, &y2, true).unwrap();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let x = line(&[0.0, 0.4, 1.1, 2.5]);
        let y = line(&[0.2, 1.9, 3.3]);
        let a = szekely_rizzo(&x, &y, true).unwrap();
        let b = szekely_rizzo(&y, &x, true).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_single_observations() {
        let x = line(&[2.0]);
        let y = line(&[5.0]);
        // both within-sample terms vanish
        assert!((szekely_rizzo(&x, &y, false).unwrap() - 6.0).abs() < 1e-12);
    }
}
