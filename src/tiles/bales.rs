//! Partitioning a shuffled set into dealing bales.
//!
//! Dealing in Okey hands out the shuffled tiles as fifteen stacks ("bales")
//! of seven, leaving a single 106th tile as the remainder. Which bale goes
//! to which player, and how the indicator is drawn from the remainder, are
//! table conventions outside this crate.

use serde::{Deserialize, Serialize};

use super::factory::{full_tile_set, TILE_COUNT};
use super::shuffle::shuffled;
use super::tile::Tile;
use crate::core::GameRng;

/// Bales produced from one full set.
pub const BALE_COUNT: usize = 15;

/// Tiles per bale.
pub const BALE_SIZE: usize = 7;

/// A 7-tile dealing stack, in shuffle order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bale {
    pub tiles: Vec<Tile>,
}

/// Everything the dealing step produces from one shuffled set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealtTiles {
    /// The full shuffled sequence the bales were cut from.
    pub shuffled: Vec<Tile>,
    /// Fifteen contiguous, non-overlapping 7-tile slices in shuffle order.
    pub bales: Vec<Bale>,
    /// The single 106th tile left over after the bales are cut.
    pub remainder: Tile,
}

/// Bale allocation failed because the tile pipeline broke an invariant.
///
/// This is a programming-error signal, not a recoverable gameplay
/// condition: a set produced by [`full_tile_set`] and passed through
/// [`shuffled`] always has exactly 106 tiles. Callers should surface it,
/// not catch and retry.
#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AllocationError {
    /// The input did not hold a tile at the remainder position.
    #[display(fmt = "expected 106 tiles to cut into bales, got {}", got)]
    WrongTileCount { got: usize },
}

/// Cut a shuffled 106-tile sequence into bales plus the remainder.
///
/// Conservation invariant: every input tile lands in exactly one bale or
/// is the remainder; nothing is duplicated or dropped.
pub fn allocate_bales(tiles: Vec<Tile>) -> Result<DealtTiles, AllocationError> {
    if tiles.len() != TILE_COUNT {
        return Err(AllocationError::WrongTileCount { got: tiles.len() });
    }

    let bales = tiles[..BALE_COUNT * BALE_SIZE]
        .chunks_exact(BALE_SIZE)
        .map(|chunk| Bale {
            tiles: chunk.to_vec(),
        })
        .collect();
    let remainder = tiles[TILE_COUNT - 1];

    Ok(DealtTiles {
        shuffled: tiles,
        bales,
        remainder,
    })
}

/// Generate, shuffle, and cut a fresh tile set in one step.
///
/// Thin wiring of [`full_tile_set`] → [`shuffled`] → [`allocate_bales`];
/// infallible by construction, but the allocation `Result` is propagated
/// rather than unwrapped so a broken pipeline still surfaces as an error.
pub fn deal_fresh_set(rng: &mut GameRng) -> Result<DealtTiles, AllocationError> {
    let tiles = full_tile_set();
    let mixed = shuffled(&tiles, rng);
    allocate_bales(mixed)
}
