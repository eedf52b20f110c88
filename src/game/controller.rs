//! Click-driven game state machine
//!
//! ```text
//! Playing --click empty cell--> Playing | Ended(Won) | Ended(Tied)
//! Ended   --click "Yes"-------> Playing (fresh board, X to move)
//! Ended   --click "No"--------> Quit
//! any     --Quit event--------> Quit
//! ```
//!
//! Every other input is ignored.

use tracing::{debug, info};

use crate::board::{Board, MoveError, Player};
use crate::rules::{self, GameOutcome};

use super::event::GameEvent;
use super::layout::Layout;
use super::turn::TurnTracker;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won(Player),
    Tied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Ended(Ending),
}

/// What an event did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// A mark was placed
    Placed {
        index: usize,
        player: Player,
        outcome: GameOutcome,
    },
    /// Board and turn were reset for a new game
    Restarted,
    /// The player asked to leave; the caller closes the window
    Quit,
}

/// Owns the board, the turn tracker and the cached phase
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: TurnTracker,
    phase: Phase,
}

impl GameController {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: TurnTracker::new(),
            phase: Phase::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.turn.current()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome as of the last accepted move
    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::Playing => GameOutcome::InProgress,
            Phase::Ended(Ending::Won(player)) => GameOutcome::Won(player),
            Phase::Ended(Ending::Tied) => GameOutcome::Tied,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Ended(_))
    }

    /// Feed one input event through the state machine
    pub fn handle_event(&mut self, event: GameEvent, layout: &Layout) -> Transition {
        match event {
            GameEvent::Quit => {
                info!("quit requested");
                Transition::Quit
            }
            GameEvent::PointerDown(point) => match self.phase {
                Phase::Playing => {
                    let Some(index) = layout.cell_at(point) else {
                        return Transition::Ignored;
                    };
                    match self.play(index) {
                        Ok(transition) => transition,
                        Err(err) => {
                            debug!(index, %err, "click ignored");
                            Transition::Ignored
                        }
                    }
                }
                Phase::Ended(_) => {
                    if layout.hits_yes(point) {
                        self.restart();
                        Transition::Restarted
                    } else if layout.hits_no(point) {
                        info!("player declined another game");
                        Transition::Quit
                    } else {
                        Transition::Ignored
                    }
                }
            },
        }
    }

    /// Place the current player's mark on a cell
    pub fn play(&mut self, index: usize) -> Result<Transition, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.turn.current();
        self.board.set(index, player)?;
        self.turn.toggle();
        debug!(index, %player, "mark placed");

        let outcome = rules::outcome(&self.board);
        match outcome {
            GameOutcome::Won(winner) => {
                info!(%winner, "game won");
                self.phase = Phase::Ended(Ending::Won(winner));
            }
            GameOutcome::Tied => {
                info!("game tied");
                self.phase = Phase::Ended(Ending::Tied);
            }
            GameOutcome::InProgress => {}
        }

        Ok(Transition::Placed {
            index,
            player,
            outcome,
        })
    }

    /// Start over with an empty board and X to move
    pub fn restart(&mut self) {
        self.board.clear();
        self.turn.reset();
        self.phase = Phase::Playing;
        info!("new game");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
