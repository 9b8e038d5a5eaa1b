use common::games::tictactoe::{MoveOutcome, TicTacToeGame};
use common::log;
use common::render::{BoardGeometry, render_match};
use eframe::egui;

use crate::ui::EguiRenderer;

/// Owns the match. All reads and writes happen inside `update`, on the UI thread.
pub struct TicTacToeApp {
    game: TicTacToeGame,
    geometry: BoardGeometry,
}

impl TicTacToeApp {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            game: TicTacToeGame::new(),
            geometry,
        }
    }

    /// `offset` is measured from the top-left corner of the board canvas.
    pub fn click_at(&mut self, offset: egui::Vec2) -> MoveOutcome {
        let (row, col) = self.geometry.cell_at(offset.x, offset.y);
        let outcome = self.game.attempt_move(row, col);
        if outcome == MoveOutcome::Placed {
            log!("Placed at ({}, {}), phase {:?}", row, col, self.game.current_phase());
        }
        outcome
    }

    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (width, height) = self.geometry.window_size();
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

                if response.clicked()
                    && let Some(pointer) = response.interact_pointer_pos()
                {
                    self.click_at(pointer - rect.min);
                }

                let mut renderer = EguiRenderer::new(ui.painter_at(rect), rect.min, self.geometry);
                render_match(self.game(), &mut renderer);
            });
    }
}
