//! Grid sampler binding (reproducible test inputs for Python harnesses).

use crate::common::squares_to_py;
use pyo3::prelude::*;
use squaresplit::sample::{draw_squares as draw, ReplayToken, SquaresCfg};

#[pyfunction]
#[pyo3(signature = (count, levels=100, max_side_steps=8, spacing=1.0, seed=0, index=0))]
pub fn draw_squares(
    count: usize,
    levels: usize,
    max_side_steps: usize,
    spacing: f64,
    seed: u64,
    index: u64,
) -> Vec<(f64, f64, f64)> {
    let cfg = SquaresCfg {
        count,
        levels,
        spacing,
        max_side_steps,
    };
    squares_to_py(&draw(cfg, ReplayToken { seed, index }))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(draw_squares, m)?)?;
    Ok(())
}
