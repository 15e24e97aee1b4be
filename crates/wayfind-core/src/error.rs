use std::fmt;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A requested dimension is zero or negative.
    InvalidSize { size: i32 },
    /// A coordinate outside the grid on either axis.
    OutOfBounds { pos: Point, rows: i32, cols: i32 },
    /// An ASCII map could not be read.
    Parse { line: usize, reason: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(f, "invalid grid size {size}: must be positive"),
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "cell {pos} is outside the {rows}x{cols} grid")
            }
            Self::Parse { line, reason } => write!(f, "map line {line}: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
