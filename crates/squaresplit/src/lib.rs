//! Equal-area horizontal split of a union of axis-aligned squares.
//!
//! Given squares `(x, y, side)` (overlapping or disjoint), find the height of
//! the horizontal line that cuts the area of their union into two equal halves.
//! Exact in O(n log n): coordinate compression, a coverage-count segment tree,
//! an upward sweep over boundary events, and a closed-form offset inside the
//! slab where the cumulative area crosses one half.
//!
//! Module map (leaf-first)
//! - `types`: `Square`, `Rect`, `SplitCfg`.
//! - `validate`: `SplitError`, fail-fast input checks.
//! - `compress`: sorted distinct cross-axis boundaries.
//! - `segtree`: coverage counts and active length.
//! - `events`: enter/exit events sorted along the sweep axis.
//! - `sweep`: slab walk; total area.
//! - `split`: split locator and the public entry points.
//! - `sample`: reproducible grid-snapped inputs for tests and benches.
//!
//! API Policy
//! - The entry points are `find_horizontal_line`, `union_area`, `area_below`.
//!   The building blocks are public for tests, benches and the CLI, but carry no
//!   stability promise.

pub mod compress;
pub mod events;
pub mod sample;
pub mod segtree;
pub mod split;
pub mod sweep;
pub mod types;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use split::{area_below, find_horizontal_line, find_horizontal_line_with, union_area};
pub use types::{Rect, SplitCfg, Square};
pub use validate::SplitError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{draw_squares, ReplayToken, SquaresCfg};
    pub use crate::split::{area_below, find_horizontal_line, find_horizontal_line_with, union_area};
    pub use crate::types::{Rect, SplitCfg, Square};
    pub use crate::validate::SplitError;
}
