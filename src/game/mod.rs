//! Orchestration: turns player choices into core operations and events into
//! presenter output.

mod menus;
pub mod session;

pub use session::{Game, RunEnd};
