//! The [`Grid`] type: a rectangular collection of [`Cell`]s forming a
//! 4-connected graph.
//!
//! The grid owns every cell exclusively. User edits (start, end, barriers)
//! go through the setters below, which keep the "one start, one end"
//! invariant and track whether the cached adjacency still matches the
//! barrier layout. Search runs only write transient marks through
//! [`Grid::mark`].

use crate::cell::{Cell, Status};
use crate::error::GridError;
use crate::geom::Point;

/// A `rows × cols` grid of cells stored row-major. [`Grid::new`] builds the
/// usual square board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Option<Point>,
    end: Option<Point>,
    adjacency_fresh: bool,
}

impl Grid {
    /// Create a new grid with every cell `Empty`.
    ///
    /// Adjacency starts out stale: call [`derive_adjacency`](Grid::derive_adjacency)
    /// before searching.
    pub fn new(size: i32) -> Result<Self, GridError> {
        Self::with_dims(size, size)
    }

    /// Create a rectangular grid with every cell `Empty`.
    pub fn with_dims(rows: i32, cols: i32) -> Result<Self, GridError> {
        for size in [rows, cols] {
            if size <= 0 {
                return Err(GridError::InvalidSize { size });
            }
        }
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Point::new(row, col)));
            }
        }
        Ok(Self {
            rows,
            cols,
            cells,
            start: None,
            end: None,
            adjacency_fresh: false,
        })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Flat row-major index of `p`.
    #[inline]
    pub fn index(&self, p: Point) -> Result<usize, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds {
                pos: p,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((p.row * self.cols + p.col) as usize)
    }

    /// Bounds-checked cell lookup.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        let i = self.index(p)?;
        Ok(&self.cells[i])
    }

    /// Status of the cell at `p`.
    pub fn status_at(&self, p: Point) -> Result<Status, GridError> {
        self.cell_at(p).map(Cell::status)
    }

    /// Adjacency of `p` as of the last derivation.
    pub fn neighbors(&self, p: Point) -> Result<&[Point], GridError> {
        self.cell_at(p).map(Cell::neighbors)
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Both endpoints, if both have been placed.
    #[inline]
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.start?, self.end?))
    }

    /// Whether the cached adjacency reflects the current barrier layout.
    #[inline]
    pub fn is_adjacency_fresh(&self) -> bool {
        self.adjacency_fresh
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Iterator over rows of cells, top to bottom.
    pub fn lines(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.cols as usize)
    }

    // -----------------------------------------------------------------------
    // User edits
    // -----------------------------------------------------------------------

    /// Make `p` the start cell. A previous start is reset to `Empty`.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index(p)?;
        if let Some(old) = self.start {
            if old != p {
                let oi = self.index(old)?;
                self.overwrite(oi, Status::Empty);
            }
        }
        self.overwrite(i, Status::Start);
        self.start = Some(p);
        Ok(())
    }

    /// Make `p` the end cell. A previous end is reset to `Empty`.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index(p)?;
        if let Some(old) = self.end {
            if old != p {
                let oi = self.index(old)?;
                self.overwrite(oi, Status::Empty);
            }
        }
        self.overwrite(i, Status::End);
        self.end = Some(p);
        Ok(())
    }

    /// Turn `p` into a barrier. Endpoints are never overwritten; returns
    /// whether the cell is a barrier afterwards.
    pub fn set_barrier(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.index(p)?;
        if self.start == Some(p) || self.end == Some(p) {
            return Ok(false);
        }
        self.overwrite(i, Status::Barrier);
        Ok(true)
    }

    /// Reset a single cell to `Empty`, forgetting it as an endpoint.
    pub fn erase(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.overwrite(i, Status::Empty);
        Ok(())
    }

    /// Every cell back to `Empty`; endpoints forgotten, adjacency cleared.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            c.status = Status::Empty;
            c.neighbors.clear();
        }
        self.start = None;
        self.end = None;
        self.adjacency_fresh = false;
    }

    /// Remove the marks of a previous search run. Start, end and barriers
    /// are kept, and so is the adjacency.
    pub fn clear_search(&mut self) {
        for c in self.cells.iter_mut() {
            if c.status.is_transient() {
                c.status = Status::Empty;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search marks
    // -----------------------------------------------------------------------

    /// Write `status` to the cell at `p`.
    ///
    /// Transient marks (`Open`, `Closed`, `Path`) never overwrite an
    /// endpoint or a barrier. Other statuses are routed through the matching
    /// user edit.
    pub fn mark(&mut self, p: Point, status: Status) -> Result<(), GridError> {
        match status {
            Status::Start => self.set_start(p),
            Status::End => self.set_end(p),
            Status::Barrier => self.set_barrier(p).map(|_| ()),
            Status::Empty => self.erase(p),
            Status::Open | Status::Closed | Status::Path => {
                let i = self.index(p)?;
                let cell = &mut self.cells[i];
                if !matches!(cell.status, Status::Start | Status::End | Status::Barrier) {
                    cell.status = status;
                }
                Ok(())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Recompute every cell's neighbour list: in-bounds, non-barrier
    /// cells reachable by one up/down/left/right step. Barrier cells get an
    /// empty list.
    pub fn derive_adjacency(&mut self) {
        let mut edges = 0usize;
        for i in 0..self.cells.len() {
            let mut buf = std::mem::take(&mut self.cells[i].neighbors);
            buf.clear();
            if !self.cells[i].is_barrier() {
                for q in self.cells[i].pos.neighbors_4() {
                    if !self.contains(q) {
                        continue;
                    }
                    let qi = (q.row * self.cols + q.col) as usize;
                    if !self.cells[qi].is_barrier() {
                        buf.push(q);
                    }
                }
            }
            edges += buf.len();
            self.cells[i].neighbors = buf;
        }
        self.adjacency_fresh = true;
        log::debug!(
            "derived adjacency for {}x{} grid ({} directed edges)",
            self.rows,
            self.cols,
            edges
        );
    }

    /// Replace the status at index `i`, keeping endpoint tracking and the
    /// adjacency freshness flag consistent.
    fn overwrite(&mut self, i: usize, status: Status) {
        let cell = &mut self.cells[i];
        let old = cell.status;
        if old == status {
            return;
        }
        let pos = cell.pos;
        cell.status = status;
        if old == Status::Start && self.start == Some(pos) {
            self.start = None;
        }
        if old == Status::End && self.end == Some(pos) {
            self.end = None;
        }
        if (old == Status::Barrier) != (status == Status::Barrier) {
            self.adjacency_fresh = false;
        }
    }
}
