//! Path reconstruction from a predecessor map.

use std::ops::ControlFlow;

use wayfind_core::{Grid, Point, Status};

use crate::engine::{Path, Step};
use crate::error::SearchError;

/// Predecessor map of one run, keyed by `(row, col)`.
#[derive(Debug, Clone, Default)]
pub struct CameFrom {
    cols: i32,
    parent: Vec<Option<Point>>,
}

impl CameFrom {
    /// An empty map for a `rows × cols` grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let mut m = Self::default();
        m.reset(rows, cols);
        m
    }

    /// Forget every entry and resize for a `rows × cols` grid, reusing the
    /// allocation where possible.
    pub fn reset(&mut self, rows: i32, cols: i32) {
        let len = rows.max(0) as usize * cols.max(0) as usize;
        self.cols = cols.max(0);
        self.parent.clear();
        self.parent.resize(len, None);
    }

    /// Record `parent` as the predecessor of `child`. Out-of-range points are
    /// ignored.
    pub fn insert(&mut self, child: Point, parent: Point) {
        if let Some(i) = self.idx(child) {
            self.parent[i] = Some(parent);
        }
    }

    /// Predecessor of `p`, if one was recorded.
    pub fn get(&self, p: Point) -> Option<Point> {
        self.idx(p).and_then(|i| self.parent[i])
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.col >= self.cols {
            return None;
        }
        let i = (p.row * self.cols + p.col) as usize;
        (i < self.parent.len()).then_some(i)
    }
}

/// Walk `came_from` back from `end`, tagging every intermediate cell as
/// `Path` and calling `on_step` with [`Step::Trace`] after each tag.
///
/// `start` and `end` keep their status. The walk stops at the first cell
/// without a predecessor (normally `start`). Calling it again on the same map
/// re-tags the same cells. Returns `Break` if the observer cancelled.
pub fn reconstruct<F>(
    grid: &mut Grid,
    came_from: &CameFrom,
    start: Point,
    end: Point,
    on_step: &mut F,
) -> Result<ControlFlow<(), Path>, SearchError>
where
    F: FnMut(&Grid, Step) -> ControlFlow<()>,
{
    let mut cells = vec![end];
    let mut current = end;

    while let Some(prev) = came_from.get(current) {
        if cells.len() > grid.cell_count() {
            log::warn!("predecessor chain from {end} does not reach {start}; stopping");
            break;
        }
        current = prev;
        cells.push(current);
        if current == start {
            break;
        }
        grid.mark(current, Status::Path)?;
        if on_step(grid, Step::Trace(current)).is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }

    cells.reverse();
    Ok(ControlFlow::Continue(Path::new(cells)))
}
