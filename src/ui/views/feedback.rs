use crate::QuizApp;
use crate::summary::ResultsSummary;
use crate::timer::format_time;
use crate::ui::helpers::{big_button, stat_card};
use egui::{CentralPanel, Color32, Context, Frame, ProgressBar, RichText, ScrollArea};

pub fn ui_feedback(app: &mut QuizApp, ctx: &Context) {
    let summary: ResultsSummary = app.summary();
    let mut restart = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);
            ui.add_space(12.0);

            ui.label(
                RichText::new(summary.score_label())
                    .size(48.0)
                    .strong()
                    .color(Color32::from_rgb(22, 163, 74)),
            );
            ui.small("Puntuación global");
            ui.add(
                ProgressBar::new(summary.score_fraction())
                    .desired_width(panel_width * 0.5)
                    .fill(Color32::from_rgb(56, 161, 105)),
            );
            ui.add_space(12.0);

            if summary.has_results() {
                ui.label(summary.tier.message());
            } else {
                ui.label("No llegaste a responder ninguna pregunta.");
            }
            ui.add_space(12.0);

            if big_button(ui, "Volver al inicio", 220.0, 36.0, true) {
                restart = true;
            }
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                stat_card(ui, &summary.total.to_string(), "Preguntas", Color32::from_rgb(30, 64, 175));
                stat_card(ui, &summary.correct.to_string(), "Correctas", Color32::from_rgb(22, 101, 52));
                stat_card(ui, &format_time(summary.total_time_secs), "Tiempo total", Color32::from_rgb(194, 65, 12));
                stat_card(ui, &summary.points.to_string(), "Puntos", Color32::from_rgb(107, 33, 168));
            });

            ui.add_space(20.0);
            ui.heading("Revisión");
            ui.add_space(8.0);

            ScrollArea::vertical()
                .max_height(ui.available_height())
                .show(ui, |ui| {
                    for row in &summary.rows {
                        Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(panel_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.strong(row.header());
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    let color = if row.is_correct {
                                        Color32::from_rgb(22, 163, 74)
                                    } else {
                                        Color32::from_rgb(220, 38, 38)
                                    };
                                    ui.label(RichText::new(row.status_label()).color(color));
                                });
                            });
                            ui.label(&row.prompt);
                            ui.add_space(4.0);
                            ui.small("Tu respuesta");
                            ui.label(row.user_words_label());
                            if let Some(correct) = &row.correct_words {
                                ui.add_space(4.0);
                                ui.small("Respuesta correcta");
                                ui.label(RichText::new(correct).color(Color32::from_rgb(21, 128, 61)));
                            }
                        });
                        ui.add_space(8.0);
                    }
                });
        });
    });

    if restart {
        app.back_to_intro();
    }
}
