//! Reproducible random square sets on a coarse grid.
//!
//! Model
//! - Every corner coordinate and every top/right boundary is a multiple of
//!   `spacing` in `[0, (levels - 1) * spacing]`, so each axis carries at most
//!   `levels` distinct boundaries regardless of `count`. Lots of squares over
//!   few boundaries is the regime where the sweep's cost tracks the number of
//!   distinct coordinates rather than the number of squares.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Square;

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SquaresCfg {
    pub count: usize,
    /// Distinct grid levels per axis. Clamped to at least 2.
    pub levels: usize,
    /// Grid pitch. Non-positive values fall back to 1.
    pub spacing: f64,
    /// Largest side in grid steps. Clamped to `[1, levels - 1]`.
    pub max_side_steps: usize,
}

impl Default for SquaresCfg {
    fn default() -> Self {
        Self {
            count: 100,
            levels: 100,
            spacing: 1.0,
            max_side_steps: 8,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` squares on the grid described by `cfg`.
pub fn draw_squares(cfg: SquaresCfg, tok: ReplayToken) -> Vec<Square> {
    let mut rng = tok.to_std_rng();
    let levels = cfg.levels.max(2);
    let spacing = if cfg.spacing > 0.0 && cfg.spacing.is_finite() {
        cfg.spacing
    } else {
        1.0
    };
    let max_steps = cfg.max_side_steps.clamp(1, levels - 1);
    (0..cfg.count)
        .map(|_| {
            let steps = rng.gen_range(1..=max_steps);
            let kx = rng.gen_range(0..levels - steps);
            let ky = rng.gen_range(0..levels - steps);
            Square::new(
                kx as f64 * spacing,
                ky as f64 * spacing,
                steps as f64 * spacing,
            )
        })
        .collect()
}
