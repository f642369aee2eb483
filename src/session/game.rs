//! The session manager: construction, round starts, and read views.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use super::round::{RoundResult, RoundState};
use super::settings::GameSettings;
use crate::core::{GameRng, Seat, SEAT_COUNT};

/// Rounds in a session when the caller doesn't specify a ceiling.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 10;

const SESSION_ID_PREFIX: &str = "session";
const SESSION_ID_SUFFIX_LEN: usize = 9;
const SESSION_ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Session construction failed before any state was built.
#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// Okey is strictly four-handed.
    #[display(fmt = "a session needs exactly 4 players, got {}", got)]
    InvalidPlayerCount { got: usize },
}

/// How the dealer for a starting round is determined.
///
/// The two paths are deliberately a sum type rather than an optional
/// previous-dealer argument, so callers must say which one they mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOpening {
    /// First round of the session: the dealer is drawn uniformly at random.
    FirstRound,
    /// Any later round: the dealer rotates counter-clockwise from the
    /// previous round's dealer.
    SubsequentRound(Seat),
}

/// Pure read view over a session and its current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateInfo {
    pub current_round: u32,
    pub total_rounds: u32,
    /// Id of the player dealing the current round.
    pub dealer: PlayerId,
    /// Id of the player whose turn it is.
    pub current_turn: PlayerId,
    /// All player ids in seating order.
    pub seating_order: Vec<PlayerId>,
}

/// A four-player game session.
///
/// Owns the per-seat player records, the immutable settings, the round
/// counter, and the append-only round history. All mutation happens
/// through explicit methods on the caller-owned value; the core keeps no
/// hidden globals and no locks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Best-effort unique id; never a security token.
    pub session_id: String,
    players: [Player; SEAT_COUNT],
    /// Table rules, fixed at creation.
    pub settings: GameSettings,
    round_history: Vec<RoundResult>,
    /// Rounds started so far. Starts at 0, +1 per round start.
    pub current_round_number: u32,
    /// Ceiling on rounds, fixed at creation.
    pub total_rounds: u32,
}

impl GameSession {
    /// Create a session for exactly four players.
    ///
    /// Fails with [`SessionError::InvalidPlayerCount`] before constructing
    /// anything if `player_ids` is not exactly four entries. No round is
    /// started; `current_round_number` begins at 0.
    pub fn new(
        player_ids: Vec<PlayerId>,
        settings: GameSettings,
        total_rounds: u32,
        rng: &mut GameRng,
    ) -> Result<Self, SessionError> {
        if player_ids.len() != SEAT_COUNT {
            return Err(SessionError::InvalidPlayerCount {
                got: player_ids.len(),
            });
        }

        let players: Vec<Player> = player_ids.into_iter().map(Player::new).collect();
        let players: [Player; SEAT_COUNT] = match players.try_into() {
            Ok(p) => p,
            // Length was validated above.
            Err(_) => unreachable!(),
        };

        Ok(Self {
            session_id: generate_session_id(rng),
            players,
            settings,
            round_history: Vec::new(),
            current_round_number: 0,
            total_rounds,
        })
    }

    /// [`GameSession::new`] with [`DEFAULT_TOTAL_ROUNDS`].
    pub fn with_default_rounds(
        player_ids: Vec<PlayerId>,
        settings: GameSettings,
        rng: &mut GameRng,
    ) -> Result<Self, SessionError> {
        Self::new(player_ids, settings, DEFAULT_TOTAL_ROUNDS, rng)
    }

    /// All four players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player; SEAT_COUNT] {
        &self.players
    }

    /// The player at a seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Mutable access to a seat's player, for hands and scoring.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Archived results of completed rounds, oldest first.
    #[must_use]
    pub fn round_history(&self) -> &[RoundResult] {
        &self.round_history
    }

    /// Archive a completed round's result.
    ///
    /// The history is append-only; past entries are never rewritten.
    pub fn record_round(&mut self, result: RoundResult) {
        self.round_history.push(result);
    }

    /// Begin the next round and return its dealer seat.
    ///
    /// Advances `current_round_number` by exactly 1 and resets every
    /// player's per-round fields (hand, round score, opening flags).
    /// Cumulative scores and the round history are untouched. Tile
    /// distribution is a separate step: wire
    /// [`deal_fresh_set`](crate::tiles::deal_fresh_set) into a
    /// [`RoundState`] after this returns.
    pub fn start_new_round(&mut self, opening: RoundOpening, rng: &mut GameRng) -> Seat {
        let dealer = match opening {
            RoundOpening::FirstRound => Seat::random(rng),
            RoundOpening::SubsequentRound(previous) => previous.next_dealer(),
        };

        self.current_round_number += 1;
        for player in &mut self.players {
            player.reset_for_round();
        }

        dealer
    }

    /// Snapshot of where the session and round stand. No mutation.
    #[must_use]
    pub fn state_info(&self, round: &RoundState) -> GameStateInfo {
        GameStateInfo {
            current_round: self.current_round_number,
            total_rounds: self.total_rounds,
            dealer: self.player(round.dealer).id.clone(),
            current_turn: self.player(round.current_player).id.clone(),
            seating_order: self.players.iter().map(|p| p.id.clone()).collect(),
        }
    }
}

/// Build a `session_{millis}_{suffix}` identifier.
///
/// Uniqueness is best-effort: a wall-clock component plus a short random
/// suffix from the injected rng. Good enough to tell sessions apart in a
/// process; not a credential.
fn generate_session_id(rng: &mut GameRng) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let suffix: String = (0..SESSION_ID_SUFFIX_LEN)
        .map(|_| SESSION_ID_CHARSET[rng.gen_range_usize(0..SESSION_ID_CHARSET.len())] as char)
        .collect();

    format!("{}_{}_{}", SESSION_ID_PREFIX, millis, suffix)
}
