//! Game flow: turn order, screen geometry and the click-driven state machine

pub mod controller;
pub mod event;
pub mod layout;
pub mod turn;

pub use controller::{Ending, GameController, Phase, Transition};
pub use event::GameEvent;
pub use layout::{Layout, CELL_SIZE, WINDOW_SIZE};
pub use turn::TurnTracker;
