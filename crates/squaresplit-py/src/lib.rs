//! PyO3 bindings for the `squaresplit` entry points.
//!
//! Notes
//! - Keep bindings thin: squares cross the boundary as `(x, y, side)` tuples and
//!   invalid input surfaces as `ValueError`.
//! - All numerics stay in the `squaresplit` crate.

use pyo3::prelude::*;

mod common;
mod sample;
mod split;

#[pymodule]
fn squaresplit_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", squaresplit::VERSION)?;
    split::register(m)?;
    sample::register(m)?;
    Ok(())
}
