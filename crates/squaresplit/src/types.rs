//! Input shapes and tolerances.
//!
//! - `Square`: caller-owned input `(x, y, side)`, lower-left corner plus edge length.
//! - `Rect`: closed axis-aligned box; the primitive the sweep actually consumes,
//!   so clipped queries (`area_below`) reuse the same machinery as full squares.
//! - `SplitCfg`: centralizes the zero-area tolerance.
//!
//! References
//! - Code cross-refs: `compress::CompressedCoords`, `events::build_events`, `split`

use nalgebra::Vector2;

/// Split configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct SplitCfg {
    /// Union areas at or below this value are treated as zero (degenerate input).
    /// Absolute, in squared input units. The default only treats a union with
    /// no positive area as degenerate, so results scale with the input.
    pub eps_area: f64,
}

impl Default for SplitCfg {
    fn default() -> Self {
        Self { eps_area: 0.0 }
    }
}

/// Axis-aligned square with lower-left corner `(x, y)` and edge length `side`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

impl Square {
    #[inline]
    pub fn new(x: f64, y: f64, side: f64) -> Self {
        Self { x, y, side }
    }
    #[inline]
    pub fn corner(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Upper y-boundary `y + side`.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.side
    }
    /// Right x-boundary `x + side`.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.side
    }
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.corner(), Vector2::new(self.right(), self.top()))
    }
}

impl From<(f64, f64, f64)> for Square {
    #[inline]
    fn from((x, y, side): (f64, f64, f64)) -> Self {
        Self::new(x, y, side)
    }
}

impl From<[f64; 3]> for Square {
    #[inline]
    fn from([x, y, side]: [f64; 3]) -> Self {
        Self::new(x, y, side)
    }
}

/// Closed axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
///
/// Invariant (not enforced): `min <= max` componentwise. Zero extent is allowed
/// and contributes no area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Rect {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    /// The part of `self` below the horizontal line at `y`, or `None` if nothing
    /// of positive height remains.
    pub fn clip_below(&self, y: f64) -> Option<Rect> {
        if self.min.y >= y {
            return None;
        }
        let top = self.max.y.min(y);
        if top <= self.min.y {
            return None;
        }
        Some(Rect::new(self.min, Vector2::new(self.max.x, top)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_bounds_and_conversions() {
        let s: Square = (1.0, -2.0, 3.0).into();
        assert_eq!(s, Square::from([1.0, -2.0, 3.0]));
        assert_eq!(s.corner(), vector![1.0, -2.0]);
        let r = s.bounds();
        assert_eq!(r.min, vector![1.0, -2.0]);
        assert_eq!(r.max, vector![4.0, 1.0]);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 3.0);
    }

    #[test]
    fn clip_below_cases() {
        let r = Square::new(0.0, 0.0, 4.0).bounds();
        // entirely above the line
        assert!(r.clip_below(0.0).is_none());
        assert!(r.clip_below(-1.0).is_none());
        // cut through the middle
        let c = r.clip_below(1.5).unwrap();
        assert_eq!(c.min, r.min);
        assert_eq!(c.max, vector![4.0, 1.5]);
        // entirely below: unchanged
        assert_eq!(r.clip_below(10.0), Some(r));
    }
}
