//! Board rendering for the tic-tac-toe GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect};

use crate::board::{Cell, TOTAL_CELLS};
use crate::game::{Ending, GameController, Layout, Phase};

use super::theme::*;

/// Draws one frame of the game. Holds no state between frames.
#[derive(Debug, Default)]
pub struct BoardView;

impl BoardView {
    /// Render the whole scene for the controller's current phase
    pub fn show(
        &self,
        painter: &Painter,
        layout: &Layout,
        game: &GameController,
        hover: Option<Pos2>,
    ) {
        painter.rect_filled(layout.screen(), CornerRadius::ZERO, BACKGROUND);

        match game.phase() {
            Phase::Playing => {
                self.draw_status(painter, layout, game);
                self.draw_grid(painter, layout, game);
                if let Some(point) = hover {
                    self.draw_hover_preview(painter, layout, game, point);
                }
            }
            Phase::Ended(ending) => {
                self.draw_result(painter, layout, ending);
                self.draw_end_buttons(painter, layout);
            }
        }
    }

    fn draw_status(&self, painter: &Painter, layout: &Layout, game: &GameController) {
        painter.text(
            layout.status_anchor(),
            Align2::CENTER_CENTER,
            turn_label(game.current_player()),
            FontId::proportional(STATUS_FONT_SIZE),
            TEXT_PRIMARY,
        );
    }

    /// Draw the nine bordered cells and their marks
    fn draw_grid(&self, painter: &Painter, layout: &Layout, game: &GameController) {
        for index in 0..TOTAL_CELLS {
            let rect = layout.cell_rect(index);
            painter.rect_filled(rect, CornerRadius::ZERO, CELL_BORDER);
            painter.rect_filled(rect.shrink(CELL_BORDER_WIDTH), CornerRadius::ZERO, CELL_FILL);

            if let Some(Cell::Occupied(player)) = game.board().get(index) {
                self.draw_mark(painter, rect, &player.to_string(), mark_color(player));
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, rect: Rect, glyph: &str, color: Color32) {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(MARK_FONT_SIZE),
            color,
        );
    }

    /// Faint copy of the current mark over an empty hovered cell
    fn draw_hover_preview(
        &self,
        painter: &Painter,
        layout: &Layout,
        game: &GameController,
        point: Pos2,
    ) {
        let Some(index) = layout.cell_at(point) else {
            return;
        };
        if !game.board().is_cell_empty(index) {
            return;
        }
        let player = game.current_player();
        self.draw_mark(painter, layout.cell_rect(index), &player.to_string(), hover_mark(player));
    }

    fn draw_result(&self, painter: &Painter, layout: &Layout, ending: Ending) {
        let message = match ending {
            Ending::Won(player) => win_label(player),
            Ending::Tied => TIE_LABEL.to_string(),
        };
        painter.text(
            layout.message_anchor(),
            Align2::CENTER_CENTER,
            message,
            FontId::proportional(RESULT_FONT_SIZE),
            RESULT_TEXT,
        );
    }

    /// Draw the "Play again?" prompt and the Yes/No boxes over their hit regions
    fn draw_end_buttons(&self, painter: &Painter, layout: &Layout) {
        let font = FontId::proportional(BUTTON_FONT_SIZE);

        let prompt = painter.layout_no_wrap(PROMPT_LABEL.to_string(), font.clone(), TEXT_PRIMARY);
        let prompt_rect = Rect::from_center_size(layout.prompt_anchor(), prompt.size());
        painter.rect_filled(prompt_rect.expand(PROMPT_PADDING), CornerRadius::ZERO, PROMPT_BG);
        painter.galley(prompt_rect.min, prompt, TEXT_PRIMARY);

        for (rect, fill, label) in [
            (layout.yes_button(), YES_BG, YES_LABEL),
            (layout.no_button(), NO_BG, NO_LABEL),
        ] {
            painter.rect_filled(rect, CornerRadius::ZERO, fill);
            painter.text(rect.center(), Align2::CENTER_CENTER, label, font.clone(), TEXT_PRIMARY);
        }
    }
}
