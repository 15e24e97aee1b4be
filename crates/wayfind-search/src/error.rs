use std::fmt;

use wayfind_core::{GridError, Point};

/// Why a pair of endpoints cannot be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointFault {
    /// Start or end has not been placed.
    Missing,
    /// The endpoint lies outside the grid.
    OutOfBounds(Point),
    /// Start and end are the same cell.
    Same(Point),
    /// The endpoint is a barrier.
    Barrier(Point),
}

/// Errors that abort a search call. "No path" and cancellation are
/// [`Outcome`](crate::Outcome)s, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    InvalidEndpoints(EndpointFault),
    /// Barriers changed since the last `Grid::derive_adjacency`.
    StaleAdjacency,
    Grid(GridError),
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("start and end must both be placed"),
            Self::OutOfBounds(p) => write!(f, "{p} is outside the grid"),
            Self::Same(p) => write!(f, "start and end are both {p}"),
            Self::Barrier(p) => write!(f, "{p} is a barrier"),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints(fault) => write!(f, "invalid endpoints: {fault}"),
            Self::StaleAdjacency => {
                f.write_str("adjacency is stale: derive it again after editing barriers")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
