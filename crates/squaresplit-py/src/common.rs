use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use squaresplit::{Square, SplitError};

pub fn squares_from_py(squares: Vec<(f64, f64, f64)>) -> Vec<Square> {
    squares.into_iter().map(Square::from).collect()
}

pub fn squares_to_py(squares: &[Square]) -> Vec<(f64, f64, f64)> {
    squares.iter().map(|s| (s.x, s.y, s.side)).collect()
}

pub fn map_split_err(err: SplitError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
