//! Input events understood by the game

use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A mouse button went down at this screen position
    PointerDown(Pos2),
    /// Escape or the window close button
    Quit,
}

impl GameEvent {
    /// Map a raw egui event. Anything the game does not react to is `None`.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::PointerButton {
                pos, pressed: true, ..
            } => Some(GameEvent::PointerDown(*pos)),
            egui::Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                ..
            } => Some(GameEvent::Quit),
            _ => None,
        }
    }

    /// Drain this frame's input into game events, in arrival order
    pub fn collect(input: &egui::InputState) -> Vec<Self> {
        let mut events: Vec<Self> = input.events.iter().filter_map(Self::from_egui).collect();
        if input.viewport().close_requested() {
            events.push(GameEvent::Quit);
        }
        events
    }
}
