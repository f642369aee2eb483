//! Generation of the canonical 106-tile set.

use super::tile::{Tile, TileId, ALL_COLORS, MAX_VALUE, MIN_VALUE};

/// Copies of the standard 52-tile set in one full set.
const COPIES: usize = 2;

/// False jokers in one full set.
pub const FALSE_JOKER_COUNT: usize = 2;

/// Total tiles in one full set: 2 × (4 colors × 13 values) + 2 jokers.
pub const TILE_COUNT: usize = COPIES * ALL_COLORS.len() * (MAX_VALUE as usize) + FALSE_JOKER_COUNT;

/// Build the full 106-tile multiset.
///
/// Two complete copies of the standard set (every color × value pair
/// appears exactly twice) followed by two false jokers. Ids are assigned
/// sequentially from 0 in generation order. Pure: no input, no side
/// effects beyond the returned vector.
#[must_use]
pub fn full_tile_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    let mut next_id = 0u32;

    for _ in 0..COPIES {
        for color in ALL_COLORS {
            for value in MIN_VALUE..=MAX_VALUE {
                tiles.push(Tile::numbered(TileId::new(next_id), color, value));
                next_id += 1;
            }
        }
    }

    for _ in 0..FALSE_JOKER_COUNT {
        tiles.push(Tile::false_joker(TileId::new(next_id)));
        next_id += 1;
    }

    debug_assert_eq!(tiles.len(), TILE_COUNT);
    tiles
}
