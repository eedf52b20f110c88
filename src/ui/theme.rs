//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

use crate::board::Player;

// Board colors
pub const BACKGROUND: Color32 = Color32::WHITE;
pub const CELL_FILL: Color32 = Color32::WHITE;
pub const CELL_BORDER: Color32 = Color32::from_rgb(0, 255, 0);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(255, 0, 0);
pub const O_MARK: Color32 = Color32::from_rgb(0, 0, 255);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::BLACK;
pub const RESULT_TEXT: Color32 = Color32::from_rgb(255, 0, 0);

// End-of-game boxes
pub const PROMPT_BG: Color32 = Color32::from_rgb(255, 255, 0);
pub const YES_BG: Color32 = Color32::from_rgb(0, 255, 0);
pub const NO_BG: Color32 = Color32::from_rgb(255, 0, 0);

// Sizes
pub const CELL_BORDER_WIDTH: f32 = 2.0;
pub const MARK_FONT_SIZE: f32 = 36.0;
pub const STATUS_FONT_SIZE: f32 = 36.0;
pub const RESULT_FONT_SIZE: f32 = 48.0;
pub const BUTTON_FONT_SIZE: f32 = 36.0;
pub const PROMPT_PADDING: f32 = 10.0;

// Labels
pub const PROMPT_LABEL: &str = "Play again?";
pub const YES_LABEL: &str = "Yes";
pub const NO_LABEL: &str = "No";
pub const TIE_LABEL: &str = "It's a tie!";

pub fn mark_color(player: Player) -> Color32 {
    match player {
        Player::X => X_MARK,
        Player::O => O_MARK,
    }
}

// Functions for colors that can't be const
pub fn hover_mark(player: Player) -> Color32 {
    let [r, g, b, _] = mark_color(player).to_array();
    Color32::from_rgba_unmultiplied(r, g, b, 80)
}

pub fn turn_label(player: Player) -> String {
    format!("Player {}'s turn", player)
}

pub fn win_label(player: Player) -> String {
    format!("Player {} wins!", player)
}
