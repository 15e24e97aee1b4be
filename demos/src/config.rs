//! Command-line options.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use wayfind_search::Strategy;

/// Default grid side, in cells.
pub const DEFAULT_SIZE: i32 = 35;

/// Largest accepted grid side. At two columns per cell this still fits a
/// wide terminal.
pub const MAX_SIZE: i32 = 200;

#[derive(Parser, Debug, Clone)]
#[command(name = "wayfind")]
#[command(about = "Watch Dijkstra, A* and greedy best-first explore a grid", long_about = None)]
pub struct Args {
    /// Grid side length in cells
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(i32).range(1..=MAX_SIZE as i64)
    )]
    pub size: i32,

    /// Pause after each search step, in milliseconds
    #[arg(long, default_value_t = 15)]
    pub delay_ms: u64,

    /// Pause between strategies when running all of them, in milliseconds
    #[arg(long, default_value_t = 2500)]
    pub pause_ms: u64,

    /// Run this strategy once on the loaded map, print the result and exit
    /// (dijkstra, astar or greedy)
    #[arg(long, requires = "map")]
    pub strategy: Option<Strategy>,

    /// ASCII map to load (`.` empty, `#` barrier, `S` start, `E` end)
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

impl Args {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wayfind"]).unwrap();
        assert_eq!(args.size, 35);
        assert_eq!(args.delay(), Duration::from_millis(15));
        assert_eq!(args.pause(), Duration::from_millis(2500));
        assert_eq!(args.strategy, None);
        assert!(!args.no_mouse);
    }

    #[test]
    fn headless_needs_a_map() {
        assert!(Args::try_parse_from(["wayfind", "--strategy", "astar"]).is_err());
        let args =
            Args::try_parse_from(["wayfind", "--strategy", "astar", "--map", "maze.txt"]).unwrap();
        assert_eq!(args.strategy, Some(Strategy::Heuristic));
        assert_eq!(args.map, Some(PathBuf::from("maze.txt")));
    }

    #[test]
    fn size_is_bounded() {
        assert!(Args::try_parse_from(["wayfind", "--size", "0"]).is_err());
        assert!(Args::try_parse_from(["wayfind", "--size", "50000"]).is_err());
        let args = Args::try_parse_from(["wayfind", "--size", "200"]).unwrap();
        assert_eq!(args.size, MAX_SIZE);
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Args::try_parse_from(["wayfind", "--strategy", "bogus", "--map", "m"]).is_err());
    }
}
