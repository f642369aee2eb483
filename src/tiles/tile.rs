//! Tile value types.
//!
//! A tile is either a numbered tile (one of four colors, value 1..=13) or
//! a false joker with no color or value of its own. The [`TileKind`] sum
//! type makes the invalid combinations (a joker with a value, a numbered
//! tile without one) unrepresentable.
//!
//! Which tile acts as the round's wildcard is decided by the indicator
//! draw, an external collaborator; nothing here interprets wildcards.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within one generated set.
///
/// Ids are assigned sequentially from 0 at creation and never reused, so
/// the two physical copies of "Red 7" remain distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// The four tile colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Red,
    Blue,
    Black,
    Yellow,
}

/// All colors in canonical generation order.
pub const ALL_COLORS: [TileColor; 4] = [
    TileColor::Red,
    TileColor::Blue,
    TileColor::Black,
    TileColor::Yellow,
];

/// Smallest numbered-tile value.
pub const MIN_VALUE: u8 = 1;
/// Largest numbered-tile value.
pub const MAX_VALUE: u8 = 13;

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Blue => write!(f, "Blue"),
            Self::Black => write!(f, "Black"),
            Self::Yellow => write!(f, "Yellow"),
        }
    }
}

/// What a tile is, independent of its identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// A standard tile: one of four colors, value 1..=13.
    Numbered { color: TileColor, value: u8 },
    /// A false joker: no intrinsic color or value.
    FalseJoker,
}

/// An immutable tile value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Identity within the generated set.
    pub id: TileId,
    /// Numbered tile or false joker.
    pub kind: TileKind,
}

impl Tile {
    /// Create a numbered tile.
    ///
    /// Panics if `value` is outside 1..=13; the factory is the only
    /// intended producer and always stays in range.
    #[must_use]
    pub const fn numbered(id: TileId, color: TileColor, value: u8) -> Self {
        assert!(
            value >= MIN_VALUE && value <= MAX_VALUE,
            "tile value must be in 1..=13"
        );
        Self {
            id,
            kind: TileKind::Numbered { color, value },
        }
    }

    /// Create a false joker.
    #[must_use]
    pub const fn false_joker(id: TileId) -> Self {
        Self {
            id,
            kind: TileKind::FalseJoker,
        }
    }

    /// Whether this tile is a false joker.
    #[must_use]
    pub fn is_false_joker(&self) -> bool {
        matches!(self.kind, TileKind::FalseJoker)
    }

    /// The tile's color, if it has one.
    #[must_use]
    pub fn color(&self) -> Option<TileColor> {
        match self.kind {
            TileKind::Numbered { color, .. } => Some(color),
            TileKind::FalseJoker => None,
        }
    }

    /// The tile's value, if it has one.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        match self.kind {
            TileKind::Numbered { value, .. } => Some(value),
            TileKind::FalseJoker => None,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TileKind::Numbered { color, value } => write!(f, "{} {}", color, value),
            TileKind::FalseJoker => write!(f, "False Joker"),
        }
    }
}
