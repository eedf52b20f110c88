//! Win condition checking
//!
//! The eight winning triples are scanned in a fixed order, so a board with
//! more than one completed line always reports the same winner.

use crate::board::{Board, Cell, Player};

/// Index triples that win the game: rows, then columns, then diagonals
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Game result derived from a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(Player),
    Tied,
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// First completed triple in enumeration order
pub fn winning_triple(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_TRIPLES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Check for a winner
///
/// Returns the mark of the first completed triple, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_triple(board).and_then(|[a, _, _]| board.cells()[a].player())
}

/// Evaluate the board. A completed triple beats a full board.
pub fn outcome(board: &Board) -> GameOutcome {
    match check_winner(board) {
        Some(player) => GameOutcome::Won(player),
        None if board.is_full() => GameOutcome::Tied,
        None => GameOutcome::InProgress,
    }
}
