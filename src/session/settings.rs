//! Immutable per-session configuration.

use serde::{Deserialize, Serialize};

/// Table rules fixed at session creation.
///
/// Stored verbatim on the session; the rules themselves (folding, the
/// pairs-finish bonus) are applied by the scoring engine, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Whether players may fold out of a round.
    pub foldable: bool,
    /// Bonus points awarded for finishing on pairs.
    pub points_for_pairs_finish: i32,
}

impl GameSettings {
    /// Create a new settings value.
    #[must_use]
    pub const fn new(foldable: bool, points_for_pairs_finish: i32) -> Self {
        Self {
            foldable,
            points_for_pairs_finish,
        }
    }
}
