//! Two-player tic-tac-toe with mouse input
//!
//! - 3x3 board, X moves first
//! - Three in a row (row, column or diagonal) wins
//! - A full board with no line is a tie
//! - After a game ends, "Yes" starts a new one and "No" quits
//!
//! # Architecture
//!
//! - [`board`]: Cells, players and the nine-cell board
//! - [`rules`]: Win and tie detection over the eight fixed triples
//! - [`game`]: Turn tracking, screen geometry and the click-driven controller
//! - [`ui`]: egui rendering and the eframe event loop
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::game::{GameController, Transition};
//! use tictactoe::rules::GameOutcome;
//! use tictactoe::Player;
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4] {
//!     game.play(index).unwrap();
//! }
//! let last = game.play(2).unwrap();
//! assert!(matches!(
//!     last,
//!     Transition::Placed { outcome: GameOutcome::Won(Player::X), .. }
//! ));
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, MoveError, Player, BOARD_SIZE, TOTAL_CELLS};
pub use game::{GameController, GameEvent, Layout, Phase, Transition};
pub use rules::GameOutcome;
