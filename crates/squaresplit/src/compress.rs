//! Coordinate compression of cross-axis boundaries.
//!
//! The sweep line is horizontal and moves upward, so the coverage tree indexes
//! the x-boundaries (`x_low`, `x_high`) of the input boxes. Every update range
//! later passed to the tree is built from the very same `f64` values, which
//! keeps update boundaries aligned with node boundaries.

use crate::types::Rect;

/// Ascending, deduplicated cross-axis boundaries.
///
/// Invariant: at least two entries (one elementary interval).
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedCoords {
    coords: Vec<f64>,
}

impl CompressedCoords {
    /// Collect, sort and deduplicate all `min.x` / `max.x` of `rects`.
    ///
    /// Returns `None` when fewer than two distinct values exist (empty input or
    /// every box has zero width at a single x): the union area is zero.
    pub fn from_rects(rects: &[Rect]) -> Option<Self> {
        let mut coords = Vec::with_capacity(rects.len() * 2);
        for r in rects {
            coords.push(r.min.x);
            coords.push(r.max.x);
        }
        coords.sort_unstable_by(f64::total_cmp);
        // `==` merges -0.0 and 0.0, which total_cmp keeps adjacent.
        coords.dedup();
        if coords.len() < 2 {
            return None;
        }
        Some(Self { coords })
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Never true for a constructed value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn rects(squares: &[(f64, f64, f64)]) -> Vec<Rect> {
        squares
            .iter()
            .map(|&s| Square::from(s).bounds())
            .collect()
    }

    #[test]
    fn sorted_and_deduplicated() {
        let c = CompressedCoords::from_rects(&rects(&[
            (3.0, 0.0, 2.0),
            (0.0, 9.0, 3.0),
            (-1.0, 1.0, 1.0),
        ]))
        .unwrap();
        assert_eq!(c.as_slice(), &[-1.0, 0.0, 3.0, 5.0]);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn signed_zero_collapses() {
        let c =
            CompressedCoords::from_rects(&rects(&[(-0.0, 0.0, 1.0), (0.0, 0.0, 1.0)])).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn degenerate_inputs_yield_none() {
        assert!(CompressedCoords::from_rects(&[]).is_none());
        // zero-width squares stacked on one x
        let stacked = rects(&[(2.0, 0.0, 0.0), (2.0, 5.0, 0.0)]);
        assert!(CompressedCoords::from_rects(&stacked).is_none());
    }
}
