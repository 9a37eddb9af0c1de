//! Game balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of headless runs with a fixed auto-player to analyze:
//! - How often a fresh character reaches and beats the Dark Overlord
//! - Where runs die and at what level
//! - Gold, page and boss pacing
//!
//! The auto-player calls the same core operations the menus use, so results
//! match real gameplay behavior.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
