//! Item system: types, catalogs, inventory, consumables and drops.

pub mod catalog;
pub mod consumables;
pub mod drops;
pub mod inventory;
pub mod types;

pub use catalog::*;
pub use consumables::*;
pub use drops::*;
pub use inventory::*;
pub use types::*;
