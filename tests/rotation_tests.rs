//! Dealer-rotation and turn-order verification tests.
//!
//! These pin down the two directions of the table circle: the dealer role
//! moving counter-clockwise between rounds and turns moving clockwise
//! within a round.

use okey_core::{dealer_rotation, Seat};
use proptest::prelude::*;

#[test]
fn test_dealer_cycle_visits_every_seat() {
    let mut dealer = Seat::new(0);
    let mut visited = vec![dealer];
    for _ in 0..3 {
        dealer = dealer.next_dealer();
        visited.push(dealer);
    }

    let mut indices: Vec<_> = visited.iter().map(|s| s.index()).collect();
    assert_eq!(indices, vec![0, 3, 2, 1]);
    indices.sort();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn test_turn_order_opposes_dealer_rotation() {
    // One clockwise step followed by one counter-clockwise step is a no-op.
    for seat in Seat::all() {
        assert_eq!(seat.next_player().next_dealer(), seat);
        assert_eq!(seat.next_dealer().next_player(), seat);
    }
}

#[test]
fn test_first_player_sits_clockwise_of_dealer() {
    for dealer in Seat::all() {
        let first = dealer.first_player();
        assert_eq!(first.index(), (dealer.index() + 1) % 4);
        assert_ne!(first, dealer);
    }
}

#[test]
fn test_eight_round_rotation_from_seat_two() {
    let seq: Vec<_> = dealer_rotation(Seat::new(2), 8)
        .iter()
        .map(|s| s.index())
        .collect();
    assert_eq!(seq, vec![2, 1, 0, 3, 2, 1, 0, 3]);
}

#[test]
fn test_rotation_zero_rounds() {
    for start in Seat::all() {
        assert!(dealer_rotation(start, 0).is_empty());
    }
}

proptest! {
    #[test]
    fn prop_next_dealer_four_cycle(index in 0u8..4) {
        let seat = Seat::new(index);
        prop_assert_eq!(
            seat.next_dealer().next_dealer().next_dealer().next_dealer(),
            seat
        );
    }

    #[test]
    fn prop_next_player_four_cycle(index in 0u8..4) {
        let seat = Seat::new(index);
        prop_assert_eq!(
            seat.next_player().next_player().next_player().next_player(),
            seat
        );
    }

    #[test]
    fn prop_rotation_shape(index in 0u8..4, rounds in 0usize..64) {
        let start = Seat::new(index);
        let seq = dealer_rotation(start, rounds);

        prop_assert_eq!(seq.len(), rounds);
        if rounds > 0 {
            prop_assert_eq!(seq[0], start);
        }
        for pair in seq.windows(2) {
            prop_assert_eq!(pair[1], pair[0].next_dealer());
        }
    }
}
