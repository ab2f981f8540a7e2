//! Split timing check for one large random square set.
//!
//! Prints the split height, the areas on either side and wall-clock timings
//! for a 10k-square draw on a 100-level grid.

use std::time::Instant;

use squaresplit::prelude::*;

fn main() {
    let cfg = SquaresCfg {
        count: 10_000,
        levels: 100,
        spacing: 1.0,
        max_side_steps: 12,
    };
    let squares = draw_squares(cfg, ReplayToken { seed: 42, index: 0 });

    let start = Instant::now();
    let y = find_horizontal_line(&squares).expect("generated squares are valid");
    let split_ms = start.elapsed().as_secs_f64() * 1e3;

    let total = union_area(&squares).expect("valid");
    let below = area_below(&squares, y).expect("valid");

    println!(
        "squares={} levels={} split_y={:.9} total={:.6} below={:.6} above={:.6}",
        squares.len(),
        cfg.levels,
        y,
        total,
        below,
        total - below
    );
    println!("timing_ms split={split_ms:.3}");
}
