use crate::QuizApp;
use crate::timer::format_time;
use crate::ui::helpers::{big_button, stat_card};
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_intro(app: &mut QuizApp, ctx: &Context) {
    let seconds = app.config.seconds_per_question;
    let questions = app.config.questions_per_session;
    let total = app.config.estimated_total_secs();

    centered_panel(ctx, 320.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Construcción de frases").size(28.0).strong());
            ui.add_space(12.0);
            ui.label(
                "Completa cada frase eligiendo las palabras correctas \
                 y colocándolas en el orden adecuado.",
            );
            ui.add_space(18.0);

            ui.horizontal(|ui| {
                stat_card(ui, &format!("{seconds} s"), "Tiempo por pregunta", Color32::from_rgb(30, 64, 175));
                stat_card(ui, &format!("{questions}"), "Preguntas", Color32::from_rgb(22, 101, 52));
                stat_card(ui, &format_time(total), "Tiempo estimado", Color32::from_rgb(133, 77, 14));
            });

            ui.add_space(24.0);
            let btn_w = ui.available_width().min(320.0);
            if big_button(ui, "▶ Empezar", btn_w, 40.0, true) {
                app.start_game();
            }
            ui.add_space(6.0);
            if big_button(ui, "❌ Salir", btn_w, 40.0, true) {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}
