mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::{Duration, Instant};

/// Repintado mientras se juega, para que el reloj avance sin input.
const PLAYING_REPAINT: Duration = Duration::from_millis(100);

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.tick(Instant::now());

        // Botón de abandonar solo durante la partida
        if self.screen == Screen::Playing && self.session.is_some() {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.screen {
            Screen::Intro => views::intro::ui_intro(self, ctx),
            Screen::Playing => {
                if self.session.is_some() {
                    views::playing::ui_playing(self, ctx);
                } else {
                    views::loading::ui_loading(self, ctx);
                }
                ctx.request_repaint_after(PLAYING_REPAINT);
            }
            Screen::Feedback => views::feedback::ui_feedback(self, ctx),
        }
    }
}
