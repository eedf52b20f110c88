//! Whose move it is

use crate::board::Player;

/// Tracks the player to move. Starts at X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    current: Player,
}

impl TurnTracker {
    pub fn new() -> Self {
        Self { current: Player::X }
    }

    #[inline]
    pub fn current(&self) -> Player {
        self.current
    }

    /// Hand the move to the other player. Call once per accepted move.
    #[inline]
    pub fn toggle(&mut self) {
        self.current = self.current.opponent();
    }

    pub fn reset(&mut self) {
        self.current = Player::X;
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}
