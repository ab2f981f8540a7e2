//! Coverage-count segment tree over compressed cross-axis coordinates.
//!
//! Purpose
//! - Track, for the current sweep position, how much of the cross-axis is
//!   covered by at least one active box ("active length").
//!
//! Layout
//! - Flat, array-indexed implicit binary tree (root at 1, children `2i`, `2i+1`).
//!   Node `i` covers the coordinate index range `[lo, hi]`, i.e. the interval
//!   `[coords[lo], coords[hi]]`; children split at `mid = (lo + hi) / 2`.
//!   Leaves (`hi - lo == 1`) are elementary intervals.
//! - Node ranges are derived on the way down and never stored.
//!
//! Invariants (every node, at all times)
//! - `count[i]` = number of active update ranges that contain node `i`'s interval
//!   and stopped at `i` (never negative for balanced enter/exit streams).
//! - `active[i]` = `coords[hi] - coords[lo]` if `count[i] > 0`; else `0` for a leaf; else
//!   `active[2i] + active[2i+1]`. Refreshed bottom-up along each update path, so
//!   reading the root is O(1).
//!
//! The "contained ⇒ bump count and stop" rule needs no splitting of partial
//! overlaps: update ranges come from the same boundaries that were compressed,
//! so they decompose exactly into O(log D) canonical nodes.

/// Coverage tree borrowing its coordinates from a `CompressedCoords`.
#[derive(Clone, Debug)]
pub struct SegmentTree<'a> {
    coords: &'a [f64],
    count: Vec<i32>,
    active: Vec<f64>,
}

impl<'a> SegmentTree<'a> {
    /// Zeroed tree over `coords` (ascending, deduplicated, at least two entries).
    pub fn build(coords: &'a [f64]) -> Self {
        debug_assert!(coords.len() >= 2, "need at least one elementary interval");
        debug_assert!(
            coords.windows(2).all(|w| w[0] < w[1]),
            "coords must be strictly ascending"
        );
        let leaves = coords.len().saturating_sub(1).max(1);
        let size = 4 * leaves;
        Self {
            coords,
            count: vec![0; size],
            active: vec![0.0; size],
        }
    }

    /// Add `delta` coverage on `[q_low, q_high]`.
    ///
    /// Zero-measure ranges are ignored. Overlap tests are strict, so a range that
    /// only touches a node at an endpoint never reaches it.
    pub fn update_range(&mut self, q_low: f64, q_high: f64, delta: i32) {
        if q_low >= q_high {
            return;
        }
        let hi = self.coords.len() - 1;
        self.update_node(1, 0, hi, q_low, q_high, delta);
    }

    fn update_node(
        &mut self,
        node: usize,
        lo: usize,
        hi: usize,
        q_low: f64,
        q_high: f64,
        delta: i32,
    ) {
        let (low, high) = (self.coords[lo], self.coords[hi]);
        if q_high <= low || high <= q_low {
            return;
        }
        if q_low <= low && high <= q_high {
            self.count[node] += delta;
            debug_assert!(self.count[node] >= 0, "exit without matching enter");
        } else if hi - lo > 1 {
            let mid = (lo + hi) / 2;
            self.update_node(2 * node, lo, mid, q_low, q_high, delta);
            self.update_node(2 * node + 1, mid, hi, q_low, q_high, delta);
        }
        self.pull(node, lo, hi);
    }

    #[inline]
    fn pull(&mut self, node: usize, lo: usize, hi: usize) {
        self.active[node] = if self.count[node] > 0 {
            self.coords[hi] - self.coords[lo]
        } else if hi - lo == 1 {
            0.0
        } else {
            self.active[2 * node] + self.active[2 * node + 1]
        };
    }

    /// Covered cross-axis measure at the current sweep position.
    #[inline]
    pub fn get_active_length(&self) -> f64 {
        self.active[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    impl SegmentTree<'_> {
        /// Active length recomputed from counts only (ignores the cache).
        fn recomputed(&self, node: usize, lo: usize, hi: usize) -> f64 {
            if self.count[node] > 0 {
                self.coords[hi] - self.coords[lo]
            } else if hi - lo == 1 {
                0.0
            } else {
                let mid = (lo + hi) / 2;
                self.recomputed(2 * node, lo, mid) + self.recomputed(2 * node + 1, mid, hi)
            }
        }

        fn assert_cache_consistent(&self, node: usize, lo: usize, hi: usize) {
            assert_eq!(self.active[node], self.recomputed(node, lo, hi));
            if hi - lo > 1 {
                let mid = (lo + hi) / 2;
                self.assert_cache_consistent(2 * node, lo, mid);
                self.assert_cache_consistent(2 * node + 1, mid, hi);
            }
        }
    }

    /// Covered length of a union of integer intervals on a unit grid.
    fn brute_cover(active: &[(usize, usize)], coords: &[f64]) -> f64 {
        (0..coords.len() - 1)
            .filter(|&k| active.iter().any(|&(a, b)| a <= k && k < b))
            .map(|k| coords[k + 1] - coords[k])
            .sum()
    }

    #[test]
    fn single_interval_covers_and_uncovers() {
        let coords = [0.0, 1.0, 3.0, 6.0];
        let mut t = SegmentTree::build(&coords);
        assert_eq!(t.get_active_length(), 0.0);
        t.update_range(1.0, 6.0, 1);
        assert_eq!(t.get_active_length(), 5.0);
        t.update_range(0.0, 3.0, 1);
        assert_eq!(t.get_active_length(), 6.0);
        t.update_range(1.0, 6.0, -1);
        assert_eq!(t.get_active_length(), 3.0);
        t.update_range(0.0, 3.0, -1);
        assert_eq!(t.get_active_length(), 0.0);
        t.assert_cache_consistent(1, 0, 3);
    }

    #[test]
    fn touching_and_zero_measure_ranges_are_ignored() {
        let coords = [0.0, 2.0, 4.0];
        let mut t = SegmentTree::build(&coords);
        t.update_range(2.0, 2.0, 1);
        assert_eq!(t.get_active_length(), 0.0);
        t.update_range(4.0, 4.0, 1);
        t.update_range(-1.0, 0.0, 1);
        assert_eq!(t.get_active_length(), 0.0);
        t.assert_cache_consistent(1, 0, 2);
    }

    #[test]
    fn randomized_against_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let coords: Vec<f64> = (0..33)
            .map(|k| k as f64 * 0.5 + (k % 3) as f64 * 0.125)
            .collect();
        let hi = coords.len() - 1;
        let mut t = SegmentTree::build(&coords);
        let mut live: Vec<(usize, usize)> = Vec::new();
        for _ in 0..400 {
            if live.is_empty() || rng.gen_bool(0.55) {
                let a = rng.gen_range(0..hi);
                let b = rng.gen_range(a + 1..=hi);
                t.update_range(coords[a], coords[b], 1);
                live.push((a, b));
            } else {
                let (a, b) = live.swap_remove(rng.gen_range(0..live.len()));
                t.update_range(coords[a], coords[b], -1);
            }
            let expected = brute_cover(&live, &coords);
            assert!((t.get_active_length() - expected).abs() < 1e-9);
        }
        t.assert_cache_consistent(1, 0, hi);
    }
}
