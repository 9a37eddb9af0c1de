//! Safe-ground services: the shop and resting.

pub mod rest;
pub mod shop;

pub use rest::rest;
pub use shop::{buy, sell_keys};
