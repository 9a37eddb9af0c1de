//! Wandering the overworld between dungeons.

pub mod logic;

pub use logic::{explore, OverworldFind};
