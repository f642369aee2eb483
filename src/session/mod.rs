//! Game sessions, players, and round lifecycle.
//!
//! ## Key Types
//!
//! - `GameSession`: four players, settings, round counter, history
//! - `Player` / `PlayerId`: per-seat records with per-round reset
//! - `RoundState` / `RoundStatus`: one round's mutable table state
//! - `RoundOpening`: how the round's dealer is determined
//!
//! A session is a single serialized stream of round transitions; callers
//! own the object graph and drive one round start at a time. There is no
//! internal locking and no I/O.

pub mod game;
pub mod player;
pub mod round;
pub mod settings;

pub use game::{GameSession, GameStateInfo, RoundOpening, SessionError, DEFAULT_TOTAL_ROUNDS};
pub use player::{Player, PlayerId};
pub use round::{Meld, MeldKind, PlayerScore, RoundResult, RoundState, RoundStatus};
pub use settings::GameSettings;
