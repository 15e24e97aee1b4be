//! Crossterm terminal front-end for wayfind.
//!
//! Provides a [`CrosstermDriver`] that draws a [`Grid`] as coloured blocks
//! and turns terminal key/mouse events into [`Msg`]s, plus the [`Layout`]
//! that maps a terminal position back to a grid cell.

pub mod messages;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use wayfind_core::{Grid, Point, Status};

pub use messages::{Key, MouseAction, Msg};

/// Terminal columns used per grid cell; two columns make cells roughly
/// square.
pub const CELL_WIDTH: i32 = 2;

/// Maps a [`Status`] to its display colour.
pub fn status_color(s: Status) -> CtColor {
    let (r, g, b) = match s {
        Status::Empty => (255, 255, 255),
        Status::Barrier => (0, 0, 0),
        Status::Start => (0, 255, 0),
        Status::End => (255, 0, 0),
        Status::Open => (0, 234, 255),
        Status::Closed => (0, 131, 143),
        Status::Path => (255, 0, 200),
    };
    CtColor::Rgb { r, g, b }
}

/// Maps a crossterm [`KeyCode`] to a wayfind [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Maps a crossterm event to a [`Msg`], dropping the ones the front-end
/// does not use.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                return Some(Msg::Quit);
            }
            to_key(code).map(Msg::key)
        }
        Event::Mouse(me) => {
            let pos = Point::new(me.row as i32, me.column as i32);
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                    MouseAction::Main
                }
                MouseEventKind::Down(MouseButton::Right)
                | MouseEventKind::Drag(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Up(_) => MouseAction::Release,
                _ => return None,
            };
            Some(Msg::Mouse { action, pos })
        }
        Event::Resize(..) => Some(Msg::Screen),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Where the grid sits on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Terminal position of cell (0, 0).
    pub origin: Point,
    pub cell_width: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            cell_width: CELL_WIDTH,
        }
    }
}

impl Layout {
    /// The grid cell under terminal position `screen`. The result is not
    /// bounds-checked; positions left of or above the grid map to negative
    /// coordinates.
    pub fn cell_at(&self, screen: Point) -> Point {
        let rel = screen - self.origin;
        Point::new(rel.row, rel.col.div_euclid(self.cell_width.max(1)))
    }

    /// Terminal (column, row) of the left edge of `cell`.
    pub fn screen_of(&self, cell: Point) -> (u16, u16) {
        let col = self.origin.col + cell.col * self.cell_width;
        let row = self.origin.row + cell.row;
        (clamp_u16(col), clamp_u16(row))
    }

    /// Terminal row of the status line below a grid with `rows` rows.
    pub fn status_row(&self, rows: i32) -> u16 {
        clamp_u16(self.origin.row + rows + 1)
    }
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

// ---------------------------------------------------------------------------
// CrosstermDriver
// ---------------------------------------------------------------------------

/// A terminal back-end for wayfind using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
    layout: Layout,
    // statuses as last drawn; `None` forces a redraw of that cell
    prev: Vec<Option<Status>>,
    prev_dims: (i32, i32),
    prev_status_line: String,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            layout: Layout::default(),
            prev: Vec::new(),
            prev_dims: (0, 0),
            prev_status_line: String::new(),
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Configure where the grid is drawn.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            queue!(stdout, event::EnableMouseCapture)?;
        }
        stdout.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Forget what is on screen so the next [`draw`](Self::draw) repaints
    /// everything.
    pub fn invalidate(&mut self) {
        self.prev.clear();
        self.prev_dims = (0, 0);
        self.prev_status_line.clear();
    }

    /// Wait up to `timeout` for input, then drain every pending event into
    /// `out`.
    pub fn poll_msgs(
        &mut self,
        timeout: Duration,
        out: &mut Vec<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Some(msg) = to_msg(event::read()?) {
                if msg == Msg::Screen {
                    self.invalidate();
                }
                out.push(msg);
            }
        }
        Ok(())
    }

    /// Drain pending input and report whether the user asked to stop a
    /// running search (Escape, `q` or Ctrl-C). Other input is discarded.
    pub fn cancel_requested(&mut self) -> Result<bool, Box<dyn std::error::Error>> {
        let mut msgs = Vec::new();
        self.poll_msgs(Duration::ZERO, &mut msgs)?;
        Ok(msgs.iter().any(|m| {
            matches!(
                m,
                Msg::Quit
                    | Msg::KeyDown {
                        key: Key::Escape | Key::Char('q'),
                    }
            )
        }))
    }

    /// Draw `grid` and a one-line `status` below it. Only cells whose status
    /// changed since the previous call are written.
    pub fn draw(&mut self, grid: &Grid, status: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        let dims = (grid.rows(), grid.cols());
        if dims != self.prev_dims || self.prev.len() != grid.cell_count() {
            queue!(stdout, ResetColor, terminal::Clear(ClearType::All))?;
            self.prev.clear();
            self.prev.resize(grid.cell_count(), None);
            self.prev_dims = dims;
            self.prev_status_line.clear();
        }

        let blank = " ".repeat(self.layout.cell_width.max(1) as usize);
        let mut written = 0usize;
        for (i, cell) in grid.iter().enumerate() {
            if self.prev[i] == Some(cell.status()) {
                continue;
            }
            let (x, y) = self.layout.screen_of(cell.pos());
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetBackgroundColor(status_color(cell.status())),
                Print(&blank)
            )?;
            self.prev[i] = Some(cell.status());
            written += 1;
        }

        if status != self.prev_status_line {
            let row = self.layout.status_row(grid.rows());
            queue!(
                stdout,
                ResetColor,
                cursor::MoveTo(0, row),
                terminal::Clear(ClearType::CurrentLine),
                SetForegroundColor(CtColor::Grey),
                Print(status),
                ResetColor
            )?;
            self.prev_status_line = status.to_string();
        }

        stdout.flush()?;
        log::trace!("redrew {written} cells");
        Ok(())
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = queue!(stdout, event::DisableMouseCapture);
        }
        let _ = queue!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}
