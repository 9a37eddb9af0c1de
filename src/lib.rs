//! Rogue Slayer - Terminal Dungeon-Crawling RPG Library
//!
//! This module exposes the game logic for testing and external use.

pub mod achievements;
pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod errors;
pub mod events;
pub mod game;
pub mod items;
pub mod overworld;
pub mod simulator;
pub mod town;
pub mod ui;
