use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText, Spinner};

pub fn ui_loading(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            let btn_w = ui.available_width().min(280.0);

            if let Some(error) = app.load.error().map(str::to_owned) {
                ui.label(
                    RichText::new("⚠ No se pudieron cargar las preguntas")
                        .heading()
                        .color(Color32::LIGHT_RED),
                );
                ui.add_space(8.0);
                ui.label(error);
                ui.add_space(16.0);

                if app.can_retry() {
                    if big_button(ui, "🔄 Reintentar", btn_w, 36.0, true) {
                        app.retry_loading();
                    }
                } else {
                    ui.label("Se agotaron los reintentos. Prueba más tarde.");
                }
                ui.add_space(6.0);
                if big_button(ui, "Volver al inicio", btn_w, 36.0, true) {
                    app.cancel_loading();
                }
            } else {
                ui.add_space(30.0);
                ui.add(Spinner::new().size(36.0));
                ui.add_space(12.0);
                ui.label(RichText::new("Cargando preguntas...").heading());
                ui.add_space(16.0);
                if big_button(ui, "Cancelar", btn_w, 32.0, true) {
                    app.cancel_loading();
                }
            }
        });
    });
}
