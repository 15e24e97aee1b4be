use std::fmt;
use std::ops::ControlFlow;

use wayfind_core::{Grid, Point, Status};

use crate::distance::manhattan;
use crate::error::{EndpointFault, SearchError};
use crate::frontier::Frontier;
use crate::reconstruct::{CameFrom, reconstruct};
use crate::strategy::Strategy;

/// Sentinel score meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Observer protocol / results
// ---------------------------------------------------------------------------

/// What just happened when the observer is called.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// A cell was expanded; its neighbours have been relaxed.
    Expand(Point),
    /// A cell was tagged as part of the final path.
    Trace(Point),
    /// The path is complete.
    Done,
}

/// A path from start to end, both included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Point>) -> Self {
        Self { cells }
    }

    /// Cells from start to end.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of moves (cells minus one).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.cells.last().copied()
    }
}

/// How a run ended. None of these is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    PathFound(Path),
    /// The frontier ran dry without reaching the end.
    NoPathExists,
    /// The observer asked to stop.
    Cancelled,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathFound(p) => write!(f, "path found ({} steps)", p.steps()),
            Self::NoPathExists => f.write_str("no path exists"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Runs searches on a [`Grid`], reusing its bookkeeping between runs.
///
/// Scores, open/closed membership and predecessors are flat arrays keyed by
/// the cell's `(row, col)` index. They are reset at the start of every run,
/// so nothing leaks from one run to the next.
#[derive(Debug, Default)]
pub struct SearchEngine {
    frontier: Frontier,
    came_from: CameFrom,
    g_score: Vec<i32>,
    f_score: Vec<i32>,
    open: Vec<bool>,
    closed: Vec<bool>,
    cols: i32,
    expanded: usize,
    // scratch copy of the current cell's adjacency
    nbuf: Vec<Point>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expansions performed by the most recent run.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Accumulated cost of `p` in the most recent run, or [`UNREACHABLE`].
    /// Greedy runs do not track cost, so only the start has a score.
    pub fn g_at(&self, p: Point) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.g_score[i])
    }

    /// Search from `start` to `end`, marking cells in `grid` and calling
    /// `on_step` after every expansion and every path tag.
    ///
    /// `start` and `end` must be distinct, in-bounds, non-barrier cells, and
    /// `grid.derive_adjacency()` must have been called since the last
    /// barrier edit. The run never marks `start` or `end` and never changes
    /// which cells the grid tracks as its endpoints.
    pub fn run<F>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        strategy: Strategy,
        mut on_step: F,
    ) -> Result<Outcome, SearchError>
    where
        F: FnMut(&Grid, Step) -> ControlFlow<()>,
    {
        check_endpoints(grid, start, end)?;
        if !grid.is_adjacency_fresh() {
            return Err(SearchError::StaleAdjacency);
        }

        self.prepare(grid);
        log::debug!(
            "{strategy}: searching {start} -> {end} on {}x{} grid",
            grid.rows(),
            grid.cols()
        );

        let si = grid.index(start)?;
        self.g_score[si] = 0;
        self.f_score[si] = strategy.priority(0, manhattan(start, end));
        self.frontier.push(0, start);
        self.open[si] = true;
        // The start is never re-entered, but stays visually `Start`.
        self.closed[si] = true;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let outcome = self.explore(grid, start, end, strategy, &mut on_step, &mut nbuf);
        self.nbuf = nbuf;
        let outcome = outcome?;

        log::debug!("{strategy}: {outcome} after {} expansions", self.expanded);
        Ok(outcome)
    }

    /// Run every strategy in [`Strategy::ALL`] order between the grid's own
    /// endpoints, clearing the previous run's marks before each one.
    ///
    /// Stops early if a run is cancelled. The observer is told which
    /// strategy is running.
    pub fn run_all<F>(
        &mut self,
        grid: &mut Grid,
        mut on_step: F,
    ) -> Result<Vec<(Strategy, Outcome)>, SearchError>
    where
        F: FnMut(Strategy, &Grid, Step) -> ControlFlow<()>,
    {
        let (start, end) = grid
            .endpoints()
            .ok_or(SearchError::InvalidEndpoints(EndpointFault::Missing))?;

        let mut results = Vec::with_capacity(Strategy::ALL.len());
        for strategy in Strategy::ALL {
            grid.clear_search();
            let outcome = self.run(grid, start, end, strategy, |g, step| {
                on_step(strategy, g, step)
            })?;
            let cancelled = outcome == Outcome::Cancelled;
            results.push((strategy, outcome));
            if cancelled {
                break;
            }
        }
        Ok(results)
    }

    fn explore<F>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        strategy: Strategy,
        on_step: &mut F,
        nbuf: &mut Vec<Point>,
    ) -> Result<Outcome, SearchError>
    where
        F: FnMut(&Grid, Step) -> ControlFlow<()>,
    {
        while let Some(current) = self.frontier.pop_min() {
            let ci = grid.index(current)?;

            // Guard only: a cell is never queued while open, so every popped
            // entry is live.
            if !self.open[ci] {
                continue;
            }
            self.open[ci] = false;

            if current == end {
                let path = match reconstruct(grid, &self.came_from, start, end, on_step)? {
                    ControlFlow::Continue(path) => path,
                    ControlFlow::Break(()) => return Ok(Outcome::Cancelled),
                };
                // The path is complete; a cancel request here changes nothing.
                let _ = on_step(grid, Step::Done);
                return Ok(Outcome::PathFound(path));
            }

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(current)?);

            for &np in nbuf.iter() {
                let ni = grid.index(np)?;
                if self.closed[ni] {
                    continue;
                }

                let h = manhattan(np, end);
                match strategy {
                    Strategy::Greedy => {
                        self.f_score[ni] = strategy.priority(0, h);
                    }
                    Strategy::UniformCost | Strategy::Heuristic => {
                        let tentative = self.g_score[ci] + 1;
                        if tentative >= self.g_score[ni] {
                            continue;
                        }
                        self.g_score[ni] = tentative;
                        self.f_score[ni] = strategy.priority(tentative, h);
                    }
                }
                self.came_from.insert(np, current);

                if !self.open[ni] {
                    self.frontier.push(self.f_score[ni], np);
                    self.open[ni] = true;
                    if np != end {
                        grid.mark(np, Status::Open)?;
                    }
                }
            }

            self.expanded += 1;
            log::trace!("{strategy}: expanded {current}");
            if on_step(grid, Step::Expand(current)).is_break() {
                return Ok(Outcome::Cancelled);
            }

            if current != start {
                grid.mark(current, Status::Closed)?;
                self.closed[ci] = true;
            }
        }

        Ok(Outcome::NoPathExists)
    }

    /// Size and clear the per-run bookkeeping for `grid`.
    fn prepare(&mut self, grid: &Grid) {
        let len = grid.cell_count();
        self.cols = grid.cols();
        self.frontier.clear();
        self.came_from.reset(grid.rows(), grid.cols());
        for v in [&mut self.g_score, &mut self.f_score] {
            v.clear();
            v.resize(len, UNREACHABLE);
        }
        for v in [&mut self.open, &mut self.closed] {
            v.clear();
            v.resize(len, false);
        }
        self.expanded = 0;
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.col >= self.cols {
            return None;
        }
        let i = (p.row * self.cols + p.col) as usize;
        (i < self.g_score.len()).then_some(i)
    }
}

fn check_endpoints(grid: &Grid, start: Point, end: Point) -> Result<(), SearchError> {
    for p in [start, end] {
        let cell = grid
            .cell_at(p)
            .map_err(|_| SearchError::InvalidEndpoints(EndpointFault::OutOfBounds(p)))?;
        if cell.is_barrier() {
            return Err(SearchError::InvalidEndpoints(EndpointFault::Barrier(p)));
        }
    }
    if start == end {
        return Err(SearchError::InvalidEndpoints(EndpointFault::Same(start)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    fn ready(map: &str) -> Grid {
        let mut g = Grid::parse(map).unwrap();
        g.derive_adjacency();
        g
    }

    fn endpoints(g: &Grid) -> (Point, Point) {
        g.endpoints().unwrap()
    }

    /// Run with an observer that records every step.
    fn run_recorded(g: &mut Grid, strategy: Strategy) -> (Outcome, Vec<Step>) {
        let (s, e) = endpoints(g);
        let mut steps = Vec::new();
        let outcome = SearchEngine::new()
            .run(g, s, e, strategy, |_, step| {
                steps.push(step);
                ControlFlow::Continue(())
            })
            .unwrap();
        (outcome, steps)
    }

    /// Reference shortest distance by plain breadth-first search.
    fn bfs_distance(g: &Grid, s: Point, e: Point) -> Option<usize> {
        let mut seen = HashSet::from([s]);
        let mut queue = VecDeque::from([(s, 0usize)]);
        while let Some((c, d)) = queue.pop_front() {
            if c == e {
                return Some(d);
            }
            for &n in g.neighbors(c).unwrap() {
                if seen.insert(n) {
                    queue.push_back((n, d + 1));
                }
            }
        }
        None
    }

    /// Consecutive cells are 4-adjacent, in bounds and not barriers.
    fn assert_valid(g: &Grid, path: &Path, s: Point, e: Point) {
        assert_eq!(path.start(), Some(s));
        assert_eq!(path.end(), Some(e));
        for w in path.cells().windows(2) {
            let d = (w[0].row - w[1].row).abs() + (w[0].col - w[1].col).abs();
            assert_eq!(d, 1, "{} -> {} is not a single step", w[0], w[1]);
            assert!(g.contains(w[1]));
            assert!(!g.cell_at(w[1]).unwrap().is_barrier());
        }
    }

    const OPEN_5X5: &str = "
        S....
        .....
        .....
        .....
        ....E
    ";

    const WALL_3X3: &str = "
        .#.
        S#E
        .#.
    ";

    // A pocket facing the goal lures greedy search the long way round.
    const LURE: &str = "
        .......
        .S.....
        .####..
        .....#.
        ####.#.
        ...E.#.
        .......
    ";

    const MAZE: &str = "
        S..#......
        .#.#.####.
        .#...#....
        .#####.##.
        ...#...#..
        ##.#.#.#.#
        ...#.#...E
        .#...####.
        .#.#......
        ...#.####.
    ";

    #[test]
    fn open_grid_uniform_cost_is_manhattan() {
        let mut g = ready(OPEN_5X5);
        let (outcome, steps) = run_recorded(&mut g, Strategy::UniformCost);
        let path = outcome.path().unwrap();
        assert_eq!(path.steps(), 8);
        assert_valid(&g, path, p(0, 0), p(4, 4));
        assert_eq!(steps.last(), Some(&Step::Done));
    }

    #[test]
    fn every_strategy_finds_a_path_when_connected() {
        for map in [OPEN_5X5, LURE, MAZE] {
            for strategy in Strategy::ALL {
                let mut g = ready(map);
                let (s, e) = endpoints(&g);
                let (outcome, _) = run_recorded(&mut g, strategy);
                let path = outcome.path().unwrap_or_else(|| panic!("{strategy}: {outcome}"));
                assert_valid(&g, path, s, e);
            }
        }
    }

    #[test]
    fn optimal_strategies_match_bfs() {
        for map in [OPEN_5X5, LURE, MAZE] {
            let g = ready(map);
            let (s, e) = endpoints(&g);
            let shortest = bfs_distance(&g, s, e).unwrap();
            for strategy in [Strategy::UniformCost, Strategy::Heuristic] {
                let mut g = g.clone();
                let (outcome, _) = run_recorded(&mut g, strategy);
                assert_eq!(outcome.path().unwrap().steps(), shortest, "{strategy}");
            }
        }
    }

    #[test]
    fn greedy_can_return_a_longer_valid_path() {
        let g = ready(LURE);
        let (s, e) = endpoints(&g);
        assert_eq!(bfs_distance(&g, s, e), Some(10));

        let mut greedy = g.clone();
        let (outcome, _) = run_recorded(&mut greedy, Strategy::Greedy);
        let path = outcome.path().unwrap();
        assert_valid(&greedy, path, s, e);
        assert_eq!(path.steps(), 14);
    }

    #[test]
    fn wall_blocks_every_strategy() {
        for strategy in Strategy::ALL {
            let mut g = ready(WALL_3X3);
            let (outcome, steps) = run_recorded(&mut g, strategy);
            assert_eq!(outcome, Outcome::NoPathExists, "{strategy}");
            assert_eq!(steps.len(), 3);
            // The start's component is fully explored; the other side is
            // untouched.
            assert_eq!(g.to_string(), "x#.\nS#E\nx#.");
        }
    }

    #[test]
    fn enclosed_start_explores_only_its_component() {
        let map = "
            ......
            .####.
            .#S..#
            .#...#
            .#####
            .....E
        ";
        for strategy in Strategy::ALL {
            let mut g = ready(map);
            let (outcome, _) = run_recorded(&mut g, strategy);
            assert_eq!(outcome, Outcome::NoPathExists);
            for cell in g.iter() {
                let inside = (2..=3).contains(&cell.pos().row) && (2..=4).contains(&cell.pos().col);
                match cell.status() {
                    Status::Closed | Status::Open => assert!(inside, "{} touched", cell.pos()),
                    Status::Empty => assert!(!inside, "{} unexplored", cell.pos()),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn single_row_expands_once_per_cell() {
        let mut g = ready("S........E");
        let (outcome, steps) = run_recorded(&mut g, Strategy::UniformCost);
        assert_eq!(outcome.path().unwrap().steps(), 9);

        let expansions: Vec<Point> = steps
            .iter()
            .filter_map(|s| match s {
                Step::Expand(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(expansions, (0..9).map(|c| p(0, c)).collect::<Vec<_>>());

        let traces = steps.iter().filter(|s| matches!(s, Step::Trace(_))).count();
        assert_eq!(traces, 8);
        assert_eq!(steps.last(), Some(&Step::Done));
        assert_eq!(g.to_string(), "S********E");
    }

    #[test]
    fn step_sequence_is_deterministic() {
        for strategy in Strategy::ALL {
            let mut a = ready(MAZE);
            let mut b = ready(MAZE);
            let (oa, sa) = run_recorded(&mut a, strategy);
            let (ob, sb) = run_recorded(&mut b, strategy);
            assert_eq!(oa, ob);
            assert_eq!(sa, sb);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn ties_follow_discovery_order() {
        // From S the neighbours are discovered down, up, left, right; all sit
        // at cost 1, so they are expanded in that order.
        let mut g = ready(
            "
            .....
            .....
            ..S..
            .....
            ....E
            ",
        );
        let (_, steps) = run_recorded(&mut g, Strategy::UniformCost);
        assert_eq!(
            &steps[..5],
            &[
                Step::Expand(p(2, 2)),
                Step::Expand(p(3, 2)),
                Step::Expand(p(1, 2)),
                Step::Expand(p(2, 1)),
                Step::Expand(p(2, 3)),
            ]
        );
    }

    #[test]
    fn current_cell_is_closed_after_its_step() {
        let mut g = ready("S..E");
        let (s, e) = endpoints(&g);
        let mut snapshots = Vec::new();
        SearchEngine::new()
            .run(&mut g, s, e, Strategy::UniformCost, |grid, step| {
                if let Step::Expand(_) = step {
                    snapshots.push(grid.to_string());
                }
                ControlFlow::Continue(())
            })
            .unwrap();
        assert_eq!(snapshots, vec!["So.E", "SooE", "SxoE"]);
    }

    #[test]
    fn cancel_stops_without_a_path() {
        let mut g = ready(OPEN_5X5);
        let (s, e) = endpoints(&g);
        let mut engine = SearchEngine::new();
        let mut calls = 0;
        let outcome = engine
            .run(&mut g, s, e, Strategy::Heuristic, |_, _| {
                calls += 1;
                if calls == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(engine.last_expanded(), 3);
        assert!(g.iter().all(|c| c.status() != Status::Path));
        assert!(g.iter().any(|c| c.status() == Status::Closed));
    }

    #[test]
    fn cancel_during_trace() {
        let mut g = ready("S...E");
        let (s, e) = endpoints(&g);
        let outcome = SearchEngine::new()
            .run(&mut g, s, e, Strategy::Greedy, |_, step| match step {
                Step::Trace(_) => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[test]
    fn invalid_endpoints_are_rejected() {
        let mut g = ready("S.#\n...\n..E");
        let mut engine = SearchEngine::new();
        let go = |_: &Grid, _| ControlFlow::Continue(());

        let err = engine
            .run(&mut g, p(0, 0), p(0, 0), Strategy::UniformCost, go)
            .unwrap_err();
        assert_eq!(err, SearchError::InvalidEndpoints(EndpointFault::Same(p(0, 0))));

        let err = engine
            .run(&mut g, p(0, 0), p(3, 0), Strategy::UniformCost, go)
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidEndpoints(EndpointFault::OutOfBounds(p(3, 0)))
        );

        let err = engine
            .run(&mut g, p(0, 0), p(0, 2), Strategy::UniformCost, go)
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidEndpoints(EndpointFault::Barrier(p(0, 2)))
        );
    }

    #[test]
    fn stale_adjacency_is_rejected() {
        let mut g = ready(OPEN_5X5);
        g.set_barrier(p(2, 2)).unwrap();
        let (s, e) = endpoints(&g);
        let err = SearchEngine::new()
            .run(&mut g, s, e, Strategy::UniformCost, |_, _| {
                ControlFlow::Continue(())
            })
            .unwrap_err();
        assert_eq!(err, SearchError::StaleAdjacency);
    }

    #[test]
    fn explicit_endpoints_leave_the_grid_endpoints_alone() {
        let mut g = ready("S...\n....\n...E");
        let outcome = SearchEngine::new()
            .run(&mut g, p(1, 0), p(1, 3), Strategy::UniformCost, |_, _| {
                ControlFlow::Continue(())
            })
            .unwrap();
        assert_eq!(outcome.path().unwrap().steps(), 3);
        assert_eq!(g.endpoints(), Some((p(0, 0), p(2, 3))));
        assert_eq!(g.status_at(p(0, 0)).unwrap(), Status::Start);
        assert_eq!(g.status_at(p(2, 3)).unwrap(), Status::End);
        // The run's own endpoints are not marked.
        assert_eq!(g.to_string().lines().nth(1), Some(".**."));
    }

    #[test]
    fn run_does_not_place_endpoints() {
        let mut g = Grid::new(3).unwrap();
        g.derive_adjacency();
        let outcome = SearchEngine::new()
            .run(&mut g, p(0, 0), p(2, 2), Strategy::Greedy, |_, _| {
                ControlFlow::Continue(())
            })
            .unwrap();
        assert_eq!(outcome.path().unwrap().steps(), 4);
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert_eq!(g.status_at(p(0, 0)).unwrap(), Status::Empty);
        assert_eq!(g.status_at(p(2, 2)).unwrap(), Status::Empty);
    }

    #[test]
    fn g_scores_are_distances() {
        let mut g = ready(OPEN_5X5);
        let mut engine = SearchEngine::new();
        engine
            .run(&mut g, p(0, 0), p(4, 4), Strategy::UniformCost, |_, _| {
                ControlFlow::Continue(())
            })
            .unwrap();
        assert_eq!(engine.g_at(p(0, 0)), 0);
        assert_eq!(engine.g_at(p(2, 3)), 5);
        assert_eq!(engine.g_at(p(9, 9)), UNREACHABLE);
    }

    #[test]
    fn engine_is_reusable_across_grids() {
        let mut engine = SearchEngine::new();
        let mut big = ready(MAZE);
        let (s, e) = endpoints(&big);
        let first = engine
            .run(&mut big, s, e, Strategy::UniformCost, |_, _| ControlFlow::Continue(()))
            .unwrap();

        let mut small = ready("S..E");
        let (s2, e2) = endpoints(&small);
        let second = engine
            .run(&mut small, s2, e2, Strategy::UniformCost, |_, _| {
                ControlFlow::Continue(())
            })
            .unwrap();
        assert_eq!(second.path().unwrap().steps(), 3);
        assert_eq!(engine.last_expanded(), 3);

        let mut again = ready(MAZE);
        let third = engine
            .run(&mut again, s, e, Strategy::UniformCost, |_, _| ControlFlow::Continue(()))
            .unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn run_all_clears_between_runs() {
        let mut g = ready(LURE);
        let mut seen = Vec::new();
        let results = SearchEngine::new()
            .run_all(&mut g, |strategy, _, step| {
                if step == Step::Done {
                    seen.push(strategy);
                }
                ControlFlow::Continue(())
            })
            .unwrap();

        let order: Vec<Strategy> = results.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Strategy::ALL.to_vec());
        assert_eq!(seen, Strategy::ALL.to_vec());
        let lengths: Vec<usize> = results
            .iter()
            .map(|(_, o)| o.path().unwrap().steps())
            .collect();
        assert_eq!(lengths, vec![10, 10, 14]);

        // Only the greedy run's marks remain.
        let mut greedy_only = ready(LURE);
        run_recorded(&mut greedy_only, Strategy::Greedy);
        assert_eq!(g, greedy_only);
    }

    #[test]
    fn run_all_stops_on_cancel() {
        let mut g = ready(OPEN_5X5);
        let results = SearchEngine::new()
            .run_all(&mut g, |strategy, _, _| {
                if strategy == Strategy::Heuristic {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1], (Strategy::Heuristic, Outcome::Cancelled));
    }

    #[test]
    fn run_all_needs_both_endpoints() {
        let mut g = ready("S..\n...\n...");
        let err = SearchEngine::new()
            .run_all(&mut g, |_, _, _| ControlFlow::Continue(()))
            .unwrap_err();
        assert_eq!(err, SearchError::InvalidEndpoints(EndpointFault::Missing));
    }
}
