//! Seating positions and rotation arithmetic.
//!
//! The four seats form a fixed circle that never changes for the lifetime
//! of a session. Two directions matter:
//!
//! - The **dealer** role rotates counter-clockwise between rounds:
//!   seat 0 → 3 → 2 → 1 → 0.
//! - **Turn order** during a round runs clockwise: seat 0 → 1 → 2 → 3 → 0,
//!   starting with the player immediately clockwise of the dealer.
//!
//! ```
//! use okey_core::Seat;
//!
//! let dealer = Seat::new(0);
//! assert_eq!(dealer.next_dealer(), Seat::new(3));
//! assert_eq!(dealer.first_player(), Seat::new(1));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of seats at the table. Okey is always played four-handed.
pub const SEAT_COUNT: usize = 4;

/// One of the four fixed positions around the table.
///
/// The inner index is always in `0..4`; all rotation arithmetic wraps
/// modulo [`SEAT_COUNT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Create a seat from its index.
    ///
    /// Panics if `index` is not in `0..4`; seat indices out of range are a
    /// programming error, not a runtime condition.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < SEAT_COUNT as u8, "seat index must be in 0..4");
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all four seats in clockwise order.
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }

    /// Draw a seat uniformly at random.
    ///
    /// Used to pick the first round's dealer.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Seat {
        Seat(rng.gen_range_usize(0..SEAT_COUNT) as u8)
    }

    /// The seat that deals the next round: one step counter-clockwise.
    ///
    /// Maps 0 → 3 → 2 → 1 → 0.
    #[must_use]
    pub const fn next_dealer(self) -> Seat {
        Seat((self.0 + SEAT_COUNT as u8 - 1) % SEAT_COUNT as u8)
    }

    /// The seat that acts first in a round dealt by `self`: one step
    /// clockwise of the dealer.
    #[must_use]
    pub const fn first_player(self) -> Seat {
        Seat((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// The seat whose turn follows this one (clockwise).
    #[must_use]
    pub const fn next_player(self) -> Seat {
        Seat((self.0 + 1) % SEAT_COUNT as u8)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// The dealer seat for each of `rounds` consecutive rounds.
///
/// Position 0 is `start` unmodified; each following entry is the
/// counter-clockwise successor of the previous one. The result always has
/// exactly `rounds` entries, so `rounds == 0` yields an empty vector.
#[must_use]
pub fn dealer_rotation(start: Seat, rounds: usize) -> Vec<Seat> {
    let mut sequence = Vec::with_capacity(rounds);
    let mut dealer = start;
    for _ in 0..rounds {
        sequence.push(dealer);
        dealer = dealer.next_dealer();
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        let s3 = Seat::new(3);

        assert_eq!(s0.index(), 0);
        assert_eq!(s3.index(), 3);
        assert_eq!(format!("{}", s0), "Seat 0");
    }

    #[test]
    #[should_panic(expected = "seat index must be in 0..4")]
    fn test_seat_out_of_range() {
        Seat::new(4);
    }

    #[test]
    fn test_all_seats() {
        let seats: Vec<_> = Seat::all().collect();
        assert_eq!(seats.len(), 4);
        assert_eq!(seats[0], Seat::new(0));
        assert_eq!(seats[3], Seat::new(3));
    }

    #[test]
    fn test_next_dealer_counter_clockwise() {
        assert_eq!(Seat::new(0).next_dealer(), Seat::new(3));
        assert_eq!(Seat::new(3).next_dealer(), Seat::new(2));
        assert_eq!(Seat::new(2).next_dealer(), Seat::new(1));
        assert_eq!(Seat::new(1).next_dealer(), Seat::new(0));
    }

    #[test]
    fn test_next_dealer_four_cycle() {
        for seat in Seat::all() {
            assert_eq!(
                seat.next_dealer().next_dealer().next_dealer().next_dealer(),
                seat
            );
        }
    }

    #[test]
    fn test_first_player_clockwise_of_dealer() {
        for seat in Seat::all() {
            assert_eq!(seat.first_player().index(), (seat.index() + 1) % 4);
        }
    }

    #[test]
    fn test_next_player_four_cycle() {
        for seat in Seat::all() {
            assert_eq!(
                seat.next_player().next_player().next_player().next_player(),
                seat
            );
        }
    }

    #[test]
    fn test_rotation_from_seat_two() {
        let seq = dealer_rotation(Seat::new(2), 8);
        let indices: Vec<_> = seq.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![2, 1, 0, 3, 2, 1, 0, 3]);
    }

    #[test]
    fn test_rotation_zero_rounds_is_empty() {
        assert!(dealer_rotation(Seat::new(1), 0).is_empty());
    }

    #[test]
    fn test_rotation_single_round() {
        assert_eq!(dealer_rotation(Seat::new(3), 1), vec![Seat::new(3)]);
    }

    #[test]
    fn test_random_seat_in_range() {
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            assert!(Seat::random(&mut rng).index() < 4);
        }
    }

    #[test]
    fn test_random_seat_hits_every_seat() {
        let mut rng = GameRng::new(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[Seat::random(&mut rng).index()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_seat_serde_round_trip() {
        let seat = Seat::new(2);
        let json = serde_json::to_string(&seat).unwrap();
        let back: Seat = serde_json::from_str(&json).unwrap();
        assert_eq!(seat, back);
    }
}
