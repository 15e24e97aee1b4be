//! Shared pieces of the `wayfind` binary: command-line options and the
//! editing session, kept apart from the terminal so they can be tested.

pub mod config;
pub mod session;

pub use config::Args;
pub use session::{Command, Session};
