//! **wayfind-core**: grid graph model for step-by-step pathfinding
//! visualisation.
//!
//! This crate provides the types shared across the *wayfind* workspace:
//! the [`Point`] key, the [`Cell`] vertex with its visual [`Status`], and the
//! rectangular [`Grid`] that owns every cell and derives 4-connected adjacency.
//! It knows nothing about search algorithms or display back-ends.

pub mod ascii;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Status};
pub use error::GridError;
pub use geom::Point;
pub use grid::Grid;
