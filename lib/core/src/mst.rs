// Minimum spanning tree over the complete Euclidean graph of a sample
use crate::distance::sq_euclidean;
use crate::sample::Sample;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// True when the endpoints sit on different sides of `split`, i.e. one
    /// index is below it and the other is not.
    #[inline]
    #[must_use]
    pub fn crosses(&self, split: usize) -> bool {
        (self.from < split) != (self.to < split)
    }
}

/// Prim's algorithm on the dense graph, O(n²) time and O(n) memory.
///
/// Edges are returned in the order they join the tree, starting from row 0.
/// Among equally light candidates the lowest row index joins first.
pub fn minimum_spanning_tree(sample: &Sample) -> Vec<Edge> {
    let n = sample.len();
    if n < 2 {
        return Vec::new();
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    let mut parent = vec![0usize; n];
    let mut edges = Vec::with_capacity(n - 1);

    in_tree[0] = true;
    let root = sample.row(0);
    for v in 1..n {
        best[v] = sq_euclidean(root, sample.row(v));
    }

    for _ in 1..n {
        let mut next = usize::MAX;
        let mut next_dist = f64::INFINITY;
        for v in 0..n {
            if !in_tree[v] && (next == usize::MAX || best[v] < next_dist) {
                next = v;
                next_dist = best[v];
            }
        }

        in_tree[next] = true;
        edges.push(Edge::new(parent[next], next, next_dist.sqrt()));

        let row = sample.row(next);
        for v in 0..n {
            if !in_tree[v] {
                let d = sq_euclidean(row, sample.row(v));
                if d < best[v] {
                    best[v] = d;
                    parent[v] = next;
                }
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mst_on_a_line() {
        let s = Sample::new(vec![vec![0.0], vec![5.0], vec![1.0], vec![3.0]]).unwrap();
        let edges = minimum_spanning_tree(&s);
        assert_eq!(edges.len(), 3);
        let total: f64 = edges.iter().map(|e| e.weight).sum();
        assert!((total - 5.0).abs() < 1e-12);
        assert_eq!(edges[0], Edge::new(0, 2, 1.0));
        assert_eq!(edges[1], Edge::new(2, 3, 2.0));
        assert_eq!(edges[2], Edge::new(3, 1, 2.0));
    }

    #[test]
    fn test_mst_square() {
        let s = Sample::new(vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
        ])
        .unwrap();
        let edges = minimum_spanning_tree(&s);
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|e| (e.weight - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_mst_trivial() {
        assert!(minimum_spanning_tree(&Sample::empty(2)).is_empty());
        let one = Sample::new(vec![vec![1.0, 1.0]]).unwrap();
        assert!(minimum_spanning_tree(&one).is_empty());
    }

    #[test]
    fn test_edge_crosses() {
        assert!(Edge::new(1, 3, 1.0).crosses(2));
        assert!(Edge::new(3, 1, 1.0).crosses(2));
        assert!(!Edge::new(0, 1, 1.0).crosses(2));
        assert!(!Edge::new(2, 3, 1.0).crosses(2));
    }
}
