//! # okey-core
//!
//! Round-lifecycle and tile-set engine for four-player Turkish Okey.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: No process-wide singletons. Every operation
//!    takes the session or round state as an explicit argument and mutates
//!    only what it was handed.
//!
//! 2. **Injectable Randomness**: Shuffling, dealer selection, and session-id
//!    suffixes all draw from a [`GameRng`] passed in by the caller, so every
//!    random decision is reproducible from a seed.
//!
//! 3. **Fixed Seating**: A session always has exactly four seats. The
//!    [`Seat`] type and its rotation arithmetic keep indices in 0..4 by
//!    construction instead of checking them at every call site.
//!
//! ## Modules
//!
//! - `core`: Seats, rotation arithmetic, RNG capability
//! - `tiles`: The 106-tile set, shuffling, and dealing bales
//! - `session`: Game sessions, players, and round lifecycle
//!
//! ## Out of Scope
//!
//! Meld legality, scoring rules, win detection, and the indicator/okey
//! assignment mechanism belong to external collaborators. This crate only
//! carries the types they operate on.

pub mod core;
pub mod session;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{dealer_rotation, GameRng, Seat, SEAT_COUNT};

pub use crate::tiles::{
    allocate_bales, deal_fresh_set, full_tile_set, shuffled, AllocationError, Bale, DealtTiles,
    Tile, TileColor, TileId, TileKind, ALL_COLORS, BALE_COUNT, BALE_SIZE, TILE_COUNT,
};

pub use crate::session::{
    GameSession, GameSettings, GameStateInfo, Meld, MeldKind, Player, PlayerId, PlayerScore,
    RoundOpening, RoundResult, RoundState, RoundStatus, SessionError, DEFAULT_TOTAL_ROUNDS,
};
