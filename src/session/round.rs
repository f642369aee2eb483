//! One round's table state and the archived result.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::core::Seat;
use crate::tiles::Tile;

/// Where a round stands in its lifecycle.
///
/// A round becomes terminal (`Finished` or `Voided`) exactly once; after
/// that the state is archived and never mutated again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Finished,
    Voided,
}

/// Shape of a meld placed on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldKind {
    /// Same value, distinct colors.
    Set,
    /// Consecutive values, one color.
    Series,
}

/// A group of tiles placed on the table.
///
/// Carrier type only: construction and validation rules belong to the
/// meld-legality engine, which is outside this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: Vec<Tile>,
}

/// One player's score line in an archived round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub score: i32,
}

/// The archived outcome of a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: u32,
    pub scores: Vec<PlayerScore>,
}

/// Mutable state of the round currently being played.
///
/// [`RoundState::new`] produces the skeleton: empty piles, the turn
/// pointer on the dealer's clockwise neighbor, status `InProgress`. The
/// deck and the indicator/okey pair stay unset until the dealing step
/// supplies them, since they depend on the shuffled tile pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Undealt tiles remaining, filled in by the dealing step.
    pub deck: Vec<Tile>,
    /// Discards in play order, append-only during the round.
    pub discard_pile: Vec<Tile>,
    /// Melds opened on the table.
    pub table_melds: Vec<Meld>,
    /// The face-up tile that determines the wildcard, once drawn.
    pub indicator_tile: Option<Tile>,
    /// The round's wildcard tile, once determined.
    pub okey_tile: Option<Tile>,
    /// Whose turn it is.
    pub current_player: Seat,
    /// This round's dealer, fixed for the round.
    pub dealer: Seat,
    /// Lifecycle position.
    pub status: RoundStatus,
}

impl RoundState {
    /// Fresh skeleton for a round dealt by `dealer`.
    #[must_use]
    pub fn new(dealer: Seat) -> Self {
        Self {
            deck: Vec::new(),
            discard_pile: Vec::new(),
            table_melds: Vec::new(),
            indicator_tile: None,
            okey_tile: None,
            current_player: dealer.first_player(),
            dealer,
            status: RoundStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_skeleton() {
        let round = RoundState::new(Seat::new(2));

        assert!(round.deck.is_empty());
        assert!(round.discard_pile.is_empty());
        assert!(round.table_melds.is_empty());
        assert_eq!(round.indicator_tile, None);
        assert_eq!(round.okey_tile, None);
        assert_eq!(round.dealer, Seat::new(2));
        assert_eq!(round.current_player, Seat::new(3));
        assert_eq!(round.status, RoundStatus::InProgress);
    }

    #[test]
    fn test_first_player_wraps() {
        let round = RoundState::new(Seat::new(3));
        assert_eq!(round.current_player, Seat::new(0));
    }

    #[test]
    fn test_melds_can_be_placed() {
        use crate::tiles::full_tile_set;

        let tiles = full_tile_set();
        let mut round = RoundState::new(Seat::new(0));

        round.table_melds.push(Meld {
            kind: MeldKind::Set,
            tiles: tiles[..3].to_vec(),
        });
        round.table_melds.push(Meld {
            kind: MeldKind::Series,
            tiles: tiles[3..7].to_vec(),
        });

        assert_eq!(round.table_melds.len(), 2);
        assert_eq!(round.table_melds[0].kind, MeldKind::Set);
        assert_eq!(round.table_melds[1].tiles.len(), 4);
    }

    #[test]
    fn test_round_state_serde_round_trip() {
        let round = RoundState::new(Seat::new(1));
        let json = serde_json::to_string(&round).unwrap();
        let back: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(round, back);
    }
}
