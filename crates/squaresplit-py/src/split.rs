//! Split and area bindings.

use crate::common::{map_split_err, squares_from_py};
use pyo3::prelude::*;

/// y-coordinate of the horizontal line halving the union area.
#[pyfunction]
pub fn find_horizontal_line(squares: Vec<(f64, f64, f64)>) -> PyResult<f64> {
    squaresplit::find_horizontal_line(&squares_from_py(squares)).map_err(map_split_err)
}

/// Area of the union of the squares.
#[pyfunction]
pub fn union_area(squares: Vec<(f64, f64, f64)>) -> PyResult<f64> {
    squaresplit::union_area(&squares_from_py(squares)).map_err(map_split_err)
}

/// Union area below the horizontal line at `y`.
#[pyfunction]
pub fn area_below(squares: Vec<(f64, f64, f64)>, y: f64) -> PyResult<f64> {
    squaresplit::area_below(&squares_from_py(squares), y).map_err(map_split_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_horizontal_line, m)?)?;
    m.add_function(wrap_pyfunction!(union_area, m)?)?;
    m.add_function(wrap_pyfunction!(area_below, m)?)?;
    Ok(())
}
