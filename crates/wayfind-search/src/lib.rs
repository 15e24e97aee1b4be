//! Step-by-step search algorithms for wayfind grids.
//!
//! This crate explores a [`Grid`](wayfind_core::Grid) with one of three
//! classic strategies, writing `Open`/`Closed`/`Path` marks into the grid as
//! it goes and handing the grid to an observer callback after every step:
//!
//! - **Uniform-cost** (Dijkstra): priority is the accumulated cost.
//! - **Heuristic** (A\*): accumulated cost plus Manhattan distance.
//! - **Greedy** best-first: Manhattan distance alone; not optimal.
//!
//! All runs go through [`SearchEngine`], which owns and reuses its
//! bookkeeping buffers between runs. Equal priorities are served in
//! discovery order by the [`Frontier`].
//!
//! # Observer protocol
//!
//! | [`Step`] | sent |
//! |---|---|
//! | `Expand(p)` | after each expansion, before `p` is closed |
//! | `Trace(p)` | after each path cell is tagged |
//! | `Done` | once, after the last path cell is tagged |
//!
//! Returning [`ControlFlow::Break`](std::ops::ControlFlow::Break) from the
//! observer cancels the run.

mod distance;
mod engine;
mod error;
mod frontier;
mod reconstruct;
mod strategy;

pub use distance::manhattan;
pub use engine::{Outcome, Path, SearchEngine, Step, UNREACHABLE};
pub use error::{EndpointFault, SearchError};
pub use frontier::Frontier;
pub use reconstruct::{CameFrom, reconstruct};
pub use strategy::{ParseStrategyError, Strategy};
