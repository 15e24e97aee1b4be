//! The editing session: turns input into grid edits and search requests.

use std::fmt::Write as _;
use std::ops::ControlFlow;

use wayfind_core::{Grid, GridError, Point};
use wayfind_crossterm::{Key, Layout, MouseAction, Msg};
use wayfind_search::{EndpointFault, Outcome, SearchEngine, SearchError, Step, Strategy};

/// What the event loop should do after a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    Run(Strategy),
    RunAll,
    Quit,
}

/// Summary of the most recent search, shown on the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Report {
    strategy: Strategy,
    outcome: Outcome,
    expanded: usize,
}

/// An editable grid plus the engine that searches it.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    engine: SearchEngine,
    last: Vec<Report>,
    notice: Option<String>,
}

impl Session {
    /// A session on an empty `size × size` grid.
    pub fn new(size: i32) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new(size)?))
    }

    /// A session on an existing grid, e.g. one parsed from a map file.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            engine: SearchEngine::new(),
            last: Vec::new(),
            notice: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Apply a mouse action to grid cell `cell`.
    ///
    /// The main button places the start, then the end, then barriers; it
    /// never overwrites an endpoint. The secondary button erases.
    pub fn click(&mut self, cell: Point, action: MouseAction) -> Result<(), GridError> {
        self.grid.index(cell)?;
        match action {
            MouseAction::Main => match (self.grid.start(), self.grid.end()) {
                (None, end) => {
                    if end != Some(cell) {
                        self.grid.set_start(cell)?;
                    }
                }
                (Some(_), None) => {
                    if self.grid.start() != Some(cell) {
                        self.grid.set_end(cell)?;
                    }
                }
                (Some(_), Some(_)) => {
                    self.grid.set_barrier(cell)?;
                }
            },
            MouseAction::Secondary => self.grid.erase(cell)?,
            MouseAction::Release => {}
        }
        Ok(())
    }

    /// Interpret a key press.
    pub fn key(&mut self, key: &Key) -> Command {
        match key {
            Key::Char('1') => Command::Run(Strategy::UniformCost),
            Key::Char('2') => Command::Run(Strategy::Heuristic),
            Key::Char('3') => Command::Run(Strategy::Greedy),
            Key::Space => Command::RunAll,
            Key::Char('c') => {
                self.grid.reset();
                self.last.clear();
                Command::None
            }
            Key::Char('q') | Key::Escape => Command::Quit,
            _ => Command::None,
        }
    }

    /// Interpret any message. Mouse positions are mapped through `layout`;
    /// a click outside the grid yields `GridError::OutOfBounds`.
    pub fn update(&mut self, msg: Msg, layout: &Layout) -> Result<Command, GridError> {
        if msg != Msg::Screen {
            self.notice = None;
        }
        match msg {
            Msg::KeyDown { key } => Ok(self.key(&key)),
            Msg::Mouse { action, pos } => {
                self.click(layout.cell_at(pos), action)?;
                Ok(Command::None)
            }
            Msg::Screen => Ok(Command::None),
            Msg::Quit => Ok(Command::Quit),
        }
    }

    /// Run one strategy between the grid's endpoints.
    pub fn run<F>(&mut self, strategy: Strategy, on_step: F) -> Result<Outcome, SearchError>
    where
        F: FnMut(&Grid, Step) -> ControlFlow<()>,
    {
        self.grid.derive_adjacency();
        self.grid.clear_search();
        self.last.clear();
        let (start, end) = self
            .grid
            .endpoints()
            .ok_or(SearchError::InvalidEndpoints(EndpointFault::Missing))?;
        let outcome = self
            .engine
            .run(&mut self.grid, start, end, strategy, on_step)?;
        self.record(strategy, &outcome);
        Ok(outcome)
    }

    /// Run every strategy in turn, as [`SearchEngine::run_all`] does.
    pub fn run_all<F>(&mut self, mut on_step: F) -> Result<Vec<(Strategy, Outcome)>, SearchError>
    where
        F: FnMut(Strategy, &Grid, Step) -> ControlFlow<()>,
    {
        self.grid.derive_adjacency();
        self.last.clear();
        let mut expanded = Vec::new();
        let mut current = None;
        let engine = &mut self.engine;
        let results = engine.run_all(&mut self.grid, |strategy, grid, step| {
            if current != Some(strategy) {
                current = Some(strategy);
                expanded.push(0);
            }
            if let (Step::Expand(_), Some(n)) = (step, expanded.last_mut()) {
                *n += 1;
            }
            on_step(strategy, grid, step)
        })?;
        for ((strategy, outcome), n) in results.iter().zip(expanded) {
            self.last.push(Report {
                strategy: *strategy,
                outcome: outcome.clone(),
                expanded: n,
            });
        }
        Ok(results)
    }

    fn record(&mut self, strategy: Strategy, outcome: &Outcome) {
        self.last.push(Report {
            strategy,
            outcome: outcome.clone(),
            expanded: self.engine.last_expanded(),
        });
    }

    /// The grid followed by the status line, as printed by a headless run.
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.grid, self.status_line())
    }

    /// Show `text` on the status line until the next input.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    /// The line shown below the grid while idle: a pending notice, results
    /// of the last search, or the key help.
    pub fn status_line(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        if self.last.is_empty() {
            return "click: start, end, walls | right click: erase | \
                    1 Dijkstra  2 A*  3 Best-first  space all  c clear  q quit"
                .to_string();
        }
        let mut s = String::new();
        for (i, r) in self.last.iter().enumerate() {
            if i > 0 {
                s.push_str(" | ");
            }
            let _ = write!(s, "{}: {}, {} expanded", r.strategy, r.outcome, r.expanded);
        }
        s
    }
}

/// Status line shown while `strategy` is running.
pub fn running_line(strategy: Strategy) -> String {
    format!("running {strategy}... (Esc to stop)")
}
