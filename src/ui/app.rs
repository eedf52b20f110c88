//! Main application for the tic-tac-toe GUI
//!
//! Each `update` is one loop iteration: drain input, advance the game, draw.

use egui::{CentralPanel, Context, Frame};
use tracing::debug;

use crate::game::{GameController, GameEvent, Layout, Transition};

use super::board_view::BoardView;
use super::theme::BACKGROUND;

/// Main tic-tac-toe application
#[derive(Debug, Default)]
pub struct TicTacToeApp {
    controller: GameController,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Feed this frame's events to the controller, closing the window on quit
    fn handle_input(&mut self, ctx: &Context) {
        let layout = Layout::new(ctx.screen_rect());
        let events = ctx.input(GameEvent::collect);

        for event in events {
            match self.controller.handle_event(event, &layout) {
                Transition::Quit => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    break;
                }
                Transition::Ignored => {}
                transition => debug!(?transition, "game advanced"),
            }
        }
    }

    /// Render the scene
    fn render(&self, ctx: &Context) {
        let layout = Layout::new(ctx.screen_rect());
        let hover = ctx.input(|i| i.pointer.hover_pos());

        CentralPanel::default()
            .frame(Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                self.board_view.show(ui.painter(), &layout, &self.controller, hover);
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render(ctx);
    }
}
