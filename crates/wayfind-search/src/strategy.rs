use std::fmt;
use std::str::FromStr;

/// Which priority the frontier is ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Dijkstra: accumulated cost.
    UniformCost,
    /// A*: accumulated cost plus Manhattan distance to the goal.
    Heuristic,
    /// Greedy best-first: Manhattan distance alone.
    Greedy,
}

impl Strategy {
    /// Every strategy, in the order a "run all" sequence uses.
    pub const ALL: [Strategy; 3] = [Self::UniformCost, Self::Heuristic, Self::Greedy];

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UniformCost => "Dijkstra",
            Self::Heuristic => "A*",
            Self::Greedy => "Best-first",
        }
    }

    /// Frontier priority for a cell with accumulated cost `g` and estimate
    /// `h`.
    #[inline]
    pub(crate) const fn priority(self, g: i32, h: i32) -> i32 {
        match self {
            Self::UniformCost => g,
            Self::Heuristic => g + h,
            Self::Greedy => h,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d} (expected dijkstra, astar or greedy)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform" | "uniform-cost" | "ucs" => Ok(Self::UniformCost),
            "astar" | "a*" | "heuristic" => Ok(Self::Heuristic),
            "greedy" | "best-first" | "bfs" => Ok(Self::Greedy),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
