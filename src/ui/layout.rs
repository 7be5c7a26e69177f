use crate::QuizApp;
use egui::{CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("⏹ Abandonar partida").clicked() {
                app.quit_game();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("theme_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.small(concat!("v", env!("CARGO_PKG_VERSION")));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let (label, visuals) = if dark {
                    ("☀ Modo claro", Visuals::light())
                } else {
                    ("🌙 Modo oscuro", Visuals::dark())
                };
                if ui.button(label).clicked() {
                    ctx.set_visuals(visuals);
                }
            });
        });
    });
}

/// Tarjeta centrada en la pantalla. `est_height` es la altura aproximada del
/// contenido, usada para repartir el hueco vertical.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let gap = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(gap);
        ui.vertical_centered(|ui| {
            let width = ui.available_width().min(max_width);
            Frame::group(ui.style())
                .fill(ui.visuals().window_fill())
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(width);
                    inner(ui);
                });
        });
    });
}
