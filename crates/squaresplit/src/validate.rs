//! Input validation (fail fast, before any coordinate compression).

use std::fmt;

use crate::types::Square;

/// Errors surfaced by the split and area entry points.
///
/// Degenerate inputs (empty list, zero union area) are not errors; they map to
/// the documented fallback values instead.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitError {
    /// A coordinate or side length is NaN or infinite.
    NonFinite {
        index: usize,
        field: &'static str,
        value: f64,
    },
    /// Side length below zero.
    NegativeSide { index: usize, side: f64 },
    /// Finite inputs whose far boundary (`x + side` or `y + side`) overflows.
    BoundsOverflow { index: usize },
    /// Query line for clipped areas is NaN or infinite.
    NonFiniteLine { y: f64 },
    /// Valid squares whose union area is not representable as a finite `f64`.
    AreaOverflow { area: f64 },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::NonFinite {
                index,
                field,
                value,
            } => write!(f, "square {index}: {field} = {value} is not finite"),
            SplitError::NegativeSide { index, side } => {
                write!(f, "square {index}: side = {side} is negative")
            }
            SplitError::BoundsOverflow { index } => {
                write!(f, "square {index}: upper boundary overflows to infinity")
            }
            SplitError::NonFiniteLine { y } => write!(f, "query line y = {y} is not finite"),
            SplitError::AreaOverflow { area } => {
                write!(f, "union area overflows (computed {area})")
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Check every square; returns the first violation in input order.
pub fn validate_squares(squares: &[Square]) -> Result<(), SplitError> {
    for (index, sq) in squares.iter().enumerate() {
        for (field, value) in [("x", sq.x), ("y", sq.y), ("side", sq.side)] {
            if !value.is_finite() {
                return Err(SplitError::NonFinite {
                    index,
                    field,
                    value,
                });
            }
        }
        if sq.side < 0.0 {
            return Err(SplitError::NegativeSide {
                index,
                side: sq.side,
            });
        }
        if !sq.right().is_finite() || !sq.top().is_finite() {
            return Err(SplitError::BoundsOverflow { index });
        }
    }
    Ok(())
}
