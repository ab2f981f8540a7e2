//! Equal-area horizontal split, plus the union-area queries built on the same sweep.
//!
//! Pipeline
//! 1. Validate (fail fast, before any compression).
//! 2. Compress the cross-axis boundaries; fewer than two ⇒ zero area.
//! 3. Build sorted events.
//! 4. Pass 1: `SweepEngine::total_area` on a fresh tree.
//! 5. Pass 2: `SplitLocator` replays the same sweep on another fresh tree and
//!    stops at the slab where the cumulative area reaches half.
//!
//! The split point inside that slab is closed form: the slab's cross-section
//! is constant, so area grows linearly with slope `active_length`. No
//! bisection, no convergence loop.
//!
//! Fallbacks (documented policy, never errors)
//! - empty input ⇒ `0.0`
//! - union area not above `eps_area` (default `0.0`) ⇒ lowest `y` among the squares
//! - half-area never reached (rounding at the very top) ⇒ highest `y + side`
//!
//! A union area that overflows `f64` is an error (`SplitError::AreaOverflow`).

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::compress::CompressedCoords;
use crate::events::build_events;
use crate::sweep::{Slab, SweepEngine};
use crate::types::{Rect, SplitCfg, Square};
use crate::validate::{validate_squares, SplitError};

/// y-coordinate of the horizontal line that halves the union area of `squares`.
pub fn find_horizontal_line(squares: &[Square]) -> Result<f64, SplitError> {
    find_horizontal_line_with(squares, SplitCfg::default())
}

/// `find_horizontal_line` with explicit tolerances.
pub fn find_horizontal_line_with(squares: &[Square], cfg: SplitCfg) -> Result<f64, SplitError> {
    validate_squares(squares)?;
    if squares.is_empty() {
        return Ok(0.0);
    }
    let rects: Vec<Rect> = squares.iter().map(Square::bounds).collect();
    let (lowest, highest) = vertical_extent(&rects);
    let Some(coords) = CompressedCoords::from_rects(&rects) else {
        debug!(squares = squares.len(), "no cross-axis extent; zero area");
        return Ok(lowest);
    };
    let events = build_events(&rects);

    let total = finite_area(SweepEngine::new(&events, &coords).total_area())?;
    debug!(
        squares = squares.len(),
        events = events.len(),
        boundaries = coords.len(),
        total,
        "union area"
    );
    if total <= cfg.eps_area {
        return Ok(lowest);
    }

    let split = SplitLocator::new(total).locate(SweepEngine::new(&events, &coords));
    Ok(split.unwrap_or_else(|| {
        debug!(highest, "half area not reached; using top boundary");
        highest
    }))
}

/// Exact area of the union of `squares`.
pub fn union_area(squares: &[Square]) -> Result<f64, SplitError> {
    validate_squares(squares)?;
    let rects: Vec<Rect> = squares.iter().map(Square::bounds).collect();
    area_of_rects(&rects)
}

/// Area of the part of the union lying below the horizontal line at `y`.
pub fn area_below(squares: &[Square], y: f64) -> Result<f64, SplitError> {
    validate_squares(squares)?;
    if !y.is_finite() {
        return Err(SplitError::NonFiniteLine { y });
    }
    let clipped: Vec<Rect> = squares
        .iter()
        .filter_map(|sq| sq.bounds().clip_below(y))
        .collect();
    area_of_rects(&clipped)
}

fn area_of_rects(rects: &[Rect]) -> Result<f64, SplitError> {
    let Some(coords) = CompressedCoords::from_rects(rects) else {
        return Ok(0.0);
    };
    let events = build_events(rects);
    finite_area(SweepEngine::new(&events, &coords).total_area())
}

/// A finite total bounds every slab area and the split offset as well.
fn finite_area(area: f64) -> Result<f64, SplitError> {
    if area.is_finite() {
        Ok(area)
    } else {
        Err(SplitError::AreaOverflow { area })
    }
}

/// Lowest bottom and highest top over `rects`.
fn vertical_extent(rects: &[Rect]) -> (f64, f64) {
    rects
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.min.y), hi.max(r.max.y))
        })
}

/// Second-pass visitor: accumulates slab areas until half the total is reached.
#[derive(Clone, Copy, Debug)]
pub struct SplitLocator {
    target: f64,
    cumulative: f64,
}

impl SplitLocator {
    pub fn new(total_area: f64) -> Self {
        Self {
            target: total_area / 2.0,
            cumulative: 0.0,
        }
    }

    /// Run `sweep` and return the split, or `None` if the sweep ends first.
    pub fn locate(mut self, sweep: SweepEngine<'_>) -> Option<f64> {
        match sweep.run(|slab| self.visit(slab)) {
            ControlFlow::Break(y) => Some(y),
            ControlFlow::Continue(()) => None,
        }
    }

    fn visit(&mut self, slab: Slab) -> ControlFlow<f64> {
        let slice = slab.area();
        if self.cumulative + slice >= self.target {
            let remaining = self.target - self.cumulative;
            let offset = if slab.active_length > 0.0 {
                remaining / slab.active_length
            } else {
                0.0
            };
            trace!(
                low = slab.low,
                high = slab.high,
                active_length = slab.active_length,
                remaining,
                "split slab"
            );
            return ControlFlow::Break(find_y_at_offset(&slab, offset));
        }
        self.cumulative += slice;
        ControlFlow::Continue(())
    }
}

/// Height inside `slab` at which `offset` of its thickness lies below.
///
/// The slab has a uniform cross-section, so this is `slab.low + offset`,
/// clamped to the slab against rounding in `remaining / active_length`.
#[inline]
pub fn find_y_at_offset(slab: &Slab, offset: f64) -> f64 {
    (slab.low + offset.max(0.0)).min(slab.high)
}
