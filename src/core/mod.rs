//! Core types: seats, rotation arithmetic, and the RNG capability.
//!
//! Everything here is pure bookkeeping over the fixed four-player circle.
//! The session and tile modules build on these primitives.

pub mod rng;
pub mod seat;

pub use rng::GameRng;
pub use seat::{dealer_rotation, Seat, SEAT_COUNT};
