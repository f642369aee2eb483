//! Tile system: the 106-tile set, shuffling, and dealing bales.
//!
//! ## Key Types
//!
//! - `Tile` / `TileId` / `TileColor` / `TileKind`: immutable tile values
//! - `Bale` / `DealtTiles`: the 15×7 dealing partition plus remainder
//!
//! ## Pipeline
//!
//! One round's tiles flow one way:
//! [`full_tile_set`] → [`shuffled`] → [`allocate_bales`].
//! [`deal_fresh_set`] wires the three steps together.

pub mod bales;
pub mod factory;
pub mod shuffle;
pub mod tile;

pub use bales::{allocate_bales, deal_fresh_set, AllocationError, Bale, DealtTiles, BALE_COUNT, BALE_SIZE};
pub use factory::{full_tile_set, FALSE_JOKER_COUNT, TILE_COUNT};
pub use shuffle::shuffled;
pub use tile::{Tile, TileColor, TileId, TileKind, ALL_COLORS, MAX_VALUE, MIN_VALUE};
