use crate::QuizApp;
use crate::prompt::PromptSegment;
use crate::ui::helpers::{segmented_progress, urgency_color};
use egui::{Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

/// Lo que el usuario pidió durante este frame; se aplica después de pintar.
enum PlayAction {
    Select(usize),
    Remove(usize),
    Submit,
}

pub fn ui_playing(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let mut action = None;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 720.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);

            // Reloj + contador de preguntas
            if let Some(timer) = session.timer() {
                ui.horizontal(|ui| {
                    let color = urgency_color(timer.urgency());
                    ui.add(
                        ProgressBar::new(timer.percentage() / 100.0)
                            .desired_width(panel_width * 0.6)
                            .fill(color),
                    );
                    // Texto vivo del reloj (se anuncia en cada cambio)
                    ui.label(RichText::new(timer.formatted()).monospace().strong().color(color));
                    ui.add_space(12.0);
                    ui.label(format!(
                        "Pregunta {} de {}",
                        session.current_index() + 1,
                        session.total_questions()
                    ));
                });
            }
            ui.add_space(6.0);
            segmented_progress(ui, &session.progress_cells(), panel_width);

            ui.add_space(24.0);
            ui.heading("Elige las palabras que faltan en el orden correcto");
            ui.add_space(24.0);

            // Enunciado con huecos
            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for segment in session.prompt_segments() {
                        match segment {
                            PromptSegment::Word(word) => {
                                ui.label(RichText::new(word).size(20.0));
                            }
                            PromptSegment::Blank(slot) => {
                                match session.slots().get(*slot).and_then(Option::as_deref) {
                                    Some(word) => {
                                        let filled = Button::new(RichText::new(word).size(20.0).strong());
                                        if ui.add(filled).on_hover_text("Pulsa para quitarla").clicked() {
                                            action = Some(PlayAction::Remove(*slot));
                                        }
                                    }
                                    None => {
                                        ui.label(RichText::new("________").size(20.0).weak());
                                    }
                                }
                            }
                        }
                    }
                });
            });

            ui.add_space(30.0);

            // Banco de palabras
            let slots_full = session.slots().iter().all(Option::is_some);
            ui.horizontal_wrapped(|ui| {
                for (i, option) in session.available_options().iter().enumerate() {
                    let button = Button::new(RichText::new(option).size(18.0)).min_size(egui::vec2(80.0, 36.0));
                    if ui.add_enabled(!slots_full, button).clicked() {
                        action = Some(PlayAction::Select(i));
                    }
                }
            });

            ui.add_space(30.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let next = Button::new(RichText::new("Siguiente ▶").size(18.0)).min_size(egui::vec2(140.0, 40.0));
                if ui.add_enabled(session.can_submit(), next).clicked() {
                    action = Some(PlayAction::Submit);
                }
            });
        });
    });

    let Some(session) = app.session.as_mut() else {
        return;
    };
    match action {
        Some(PlayAction::Select(i)) => {
            session.select_option(i);
        }
        Some(PlayAction::Remove(slot)) => {
            session.remove_word(slot);
        }
        Some(PlayAction::Submit) => {
            session.submit();
        }
        None => {}
    }
    app.finish_if_complete();
}
