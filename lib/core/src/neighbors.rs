//! Exact nearest-neighbour queries by linear scan
//!
//! Samples scored by the analogue metrics hold tens to a few thousand
//! observations in a handful of dimensions, so an exhaustive scan with a
//! bounded max-heap is used instead of a spatial index.

use crate::distance::sq_euclidean;
use crate::sample::Sample;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use std::collections::BinaryHeap;

/// Relative tolerance under which two squared distances count as a tie.
pub const TIE_RTOL: f64 = 1e-9;

/// Sorted distances from one query row to its nearest reference rows.
pub type NeighborDistances = SmallVec<[f64; 8]>;

/// Indices of the equidistant nearest neighbours of one row.
pub type NeighborSet = SmallVec<[usize; 4]>;

/// For every row of `query`, the distances to its `k` nearest rows of
/// `reference`, in ascending order.
///
/// With `exclude_self`, `query` and `reference` are taken to be the same
/// sample and row `i` is never its own neighbour (duplicates at other indices
/// still count, at distance zero). Fewer than `k` distances are returned when
/// the reference does not hold enough rows.
pub fn k_nearest_distances(
    query: &Sample,
    reference: &Sample,
    k: usize,
    exclude_self: bool,
) -> Vec<NeighborDistances> {
    query
        .rows()
        .enumerate()
        .map(|(i, q)| {
            // Max-heap of the k best squared distances seen so far
            let mut best: BinaryHeap<OrderedFloat<f64>> = BinaryHeap::with_capacity(k + 1);
            for (j, r) in reference.rows().enumerate() {
                if exclude_self && i == j {
                    continue;
                }
                let d = OrderedFloat(sq_euclidean(q, r));
                if best.len() < k {
                    best.push(d);
                } else if let Some(&worst) = best.peek() {
                    if d < worst {
                        best.pop();
                        best.push(d);
                    }
                }
            }
            best.into_sorted_vec()
                .into_iter()
                .map(|d| d.into_inner().sqrt())
                .collect()
        })
        .collect()
}

/// For every row, the indices of all other rows at the minimum distance.
///
/// Squared distances within [`TIE_RTOL`] of the minimum are ties. A sample
/// with a single row yields one empty set.
pub fn nearest_with_ties(sample: &Sample) -> Vec<NeighborSet> {
    let n = sample.len();
    let mut out = Vec::with_capacity(n);
    let mut dists = vec![0.0f64; n];

    for i in 0..n {
        let a = sample.row(i);
        let mut min = f64::INFINITY;
        for j in 0..n {
            if j == i {
                continue;
            }
            let d = sq_euclidean(a, sample.row(j));
            dists[j] = d;
            if d < min {
                min = d;
            }
        }

        let bound = min + TIE_RTOL * min;
        let set: NeighborSet = (0..n).filter(|&j| j != i && dists[j] <= bound).collect();
        out.push(set);
    }
    out
}
