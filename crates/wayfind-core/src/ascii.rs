//! Text form of a [`Grid`]: one line per row, one character per cell.
//!
//! | char | status |
//! |---|---|
//! | `.` | Empty |
//! | `#` | Barrier |
//! | `S` | Start |
//! | `E` | End |
//! | `o` | Open |
//! | `x` | Closed |
//! | `*` | Path |

use std::fmt;

use crate::cell::Status;
use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

impl Status {
    /// Map character used by [`Grid::parse`] and `Display for Grid`.
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
        }
    }

    /// Inverse of [`to_char`](Status::to_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            '#' => Some(Self::Barrier),
            'o' => Some(Self::Open),
            'x' => Some(Self::Closed),
            '*' => Some(Self::Path),
            _ => None,
        }
    }
}

impl Grid {
    /// Build a grid from its text form.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and from
    /// each line; blank lines are skipped. Every line must have the width of
    /// the first one. Adjacency is left stale.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let mut grid = Grid::with_dims(rows, cols).map_err(|_| GridError::Parse {
            line: 0,
            reason: "empty map".to_string(),
        })?;

        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count() as i32;
            if width != cols {
                return Err(GridError::Parse {
                    line: row + 1,
                    reason: format!("expected {cols} cells, found {width}"),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let p = Point::new(row as i32, col as i32);
                let status = Status::from_char(ch).ok_or_else(|| GridError::Parse {
                    line: row + 1,
                    reason: format!("unknown cell character \u{201c}{ch}\u{201d}"),
                })?;
                let duplicate = match status {
                    Status::Start => grid.start().is_some(),
                    Status::End => grid.end().is_some(),
                    _ => false,
                };
                if duplicate {
                    return Err(GridError::Parse {
                        line: row + 1,
                        reason: format!("second \u{201c}{ch}\u{201d} at {p}"),
                    });
                }
                grid.mark(p, status)?;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.status().to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "
        S.#.
        ..#.
        ....
        .#.E
    ";

    #[test]
    fn parse_reads_statuses() {
        let g = Grid::parse(MAP).unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 4));
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(3, 3)));
        assert_eq!(g.status_at(Point::new(1, 2)).unwrap(), Status::Barrier);
        assert_eq!(g.status_at(Point::new(3, 1)).unwrap(), Status::Barrier);
        assert_eq!(g.status_at(Point::new(2, 0)).unwrap(), Status::Empty);
        assert!(!g.is_adjacency_fresh());
    }

    #[test]
    fn display_matches_input() {
        let g = Grid::parse(MAP).unwrap();
        assert_eq!(g.to_string(), "S.#.\n..#.\n....\n.#.E");
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        let err = Grid::parse("...\n..\n...").unwrap_err();
        assert!(matches!(err, GridError::Parse { line: 2, .. }));
    }

    #[test]
    fn parse_accepts_rectangles() {
        let g = Grid::parse("S...E").unwrap();
        assert_eq!((g.rows(), g.cols()), (1, 5));
        assert_eq!(g.end(), Some(Point::new(0, 4)));
    }

    #[test]
    fn parse_rejects_unknown_char() {
        let err = Grid::parse("..\n.?").unwrap_err();
        assert!(matches!(err, GridError::Parse { line: 2, .. }));
        assert!(err.to_string().contains('?'));
    }

    #[test]
    fn parse_rejects_second_start() {
        assert!(matches!(
            Grid::parse("S.\n.S"),
            Err(GridError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(Grid::parse("  \n "), Err(GridError::Parse { .. })));
    }

    #[test]
    fn char_mapping_round_trips() {
        for s in [
            Status::Empty,
            Status::Start,
            Status::End,
            Status::Barrier,
            Status::Open,
            Status::Closed,
            Status::Path,
        ] {
            assert_eq!(Status::from_char(s.to_char()), Some(s));
        }
    }
}
