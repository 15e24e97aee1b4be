//! The [`Cell`] type: a single graph vertex with a visual status tag.

use crate::geom::Point;

/// Visualisation-facing tag of a cell.
///
/// `Start`, `End` and `Barrier` are set by the user; `Open`, `Closed` and
/// `Path` are transient marks written by a search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Discovered, waiting in the frontier.
    Open,
    /// Expanded.
    Closed,
    /// Part of the reconstructed path.
    Path,
}

impl Status {
    /// Whether this status is written by a search run (and cleared between
    /// runs).
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

/// A grid vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub(crate) pos: Point,
    pub(crate) status: Status,
    /// Cached 4-connected adjacency, filled by `Grid::derive_adjacency`.
    pub(crate) neighbors: Vec<Point>,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            status: Status::Empty,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.status == Status::Barrier
    }

    /// Traversable neighbours as of the last adjacency derivation.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }
}
