//! Unbiased shuffling of tile sequences.

use super::tile::Tile;
use crate::core::GameRng;

/// Return a uniformly random permutation of `tiles`.
///
/// The input slice is left untouched; the result holds the same tiles (by
/// identity) in shuffled order. Uses the Fisher–Yates walk: positions from
/// the last index down to 1, each swapped with a uniform index in `0..=i`
/// inclusive, which makes every permutation equally likely given an
/// unbiased `rng`.
#[must_use]
pub fn shuffled(tiles: &[Tile], rng: &mut GameRng) -> Vec<Tile> {
    let mut out = tiles.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        out.swap(i, j);
    }
    out
}
