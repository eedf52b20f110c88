//! Game rules for tic-tac-toe
//!
//! A game is won by completing one of the eight fixed triples and tied when
//! the board fills up without one.

pub mod win;

pub use win::{check_winner, outcome, winning_triple, GameOutcome, WINNING_TRIPLES};
