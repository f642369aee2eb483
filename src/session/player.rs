//! Player records and per-round reset.

use serde::{Deserialize, Serialize};

use crate::tiles::Tile;

/// Opaque, caller-supplied player identifier.
///
/// The core never interprets the contents; it only hands ids back in
/// snapshots and score records.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One seat's player record.
///
/// `hand`, `round_score`, and the opening flags live for a single round
/// and are cleared by the round-start reset. `cumulative_score` persists
/// across rounds and is mutated only by the scoring engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Caller-supplied identity, stable for the session.
    pub id: PlayerId,
    /// Tiles currently held, owned exclusively by this player.
    pub hand: Vec<Tile>,
    /// Score accumulated in the current round.
    pub round_score: i32,
    /// Score carried across the whole session.
    pub cumulative_score: i32,
    /// Whether this player has opened melds this round.
    pub has_opened: bool,
    /// Whether the opening was made with pairs.
    pub opened_with_pairs: bool,
    /// Point value of the most recent opening.
    pub last_opening_value: i32,
}

impl Player {
    /// Create a fresh player with an empty hand and zeroed scores.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            round_score: 0,
            cumulative_score: 0,
            has_opened: false,
            opened_with_pairs: false,
            last_opening_value: 0,
        }
    }

    /// Clear everything that lives for a single round.
    ///
    /// `cumulative_score` is deliberately untouched.
    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.round_score = 0;
        self.has_opened = false;
        self.opened_with_pairs = false;
        self.last_opening_value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::full_tile_set;

    #[test]
    fn test_new_player_is_zeroed() {
        let player = Player::new(PlayerId::new("p1"));
        assert_eq!(player.id.as_str(), "p1");
        assert!(player.hand.is_empty());
        assert_eq!(player.round_score, 0);
        assert_eq!(player.cumulative_score, 0);
        assert!(!player.has_opened);
        assert!(!player.opened_with_pairs);
        assert_eq!(player.last_opening_value, 0);
    }

    #[test]
    fn test_reset_clears_round_fields_only() {
        let mut player = Player::new(PlayerId::new("p1"));
        player.hand = full_tile_set()[..14].to_vec();
        player.round_score = 32;
        player.cumulative_score = 101;
        player.has_opened = true;
        player.opened_with_pairs = true;
        player.last_opening_value = 51;

        player.reset_for_round();

        assert!(player.hand.is_empty());
        assert_eq!(player.round_score, 0);
        assert!(!player.has_opened);
        assert!(!player.opened_with_pairs);
        assert_eq!(player.last_opening_value, 0);
        assert_eq!(player.cumulative_score, 101);
    }

    #[test]
    fn test_player_id_display() {
        let id: PlayerId = "alice".into();
        assert_eq!(format!("{}", id), "alice");
    }
}
