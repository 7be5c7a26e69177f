// src/ui/helpers.rs
use crate::timer::Urgency;
use crate::view_models::ProgressCell;
use egui::{Button, Color32, CornerRadius, Frame, RichText, Sense, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn urgency_color(urgency: Urgency) -> Color32 {
    match urgency {
        Urgency::Normal => Color32::from_rgb(59, 130, 246),
        Urgency::Warning => Color32::from_rgb(234, 179, 8),
        Urgency::Danger => Color32::from_rgb(220, 38, 38),
    }
}

/// Tarjeta con un valor grande y un título pequeño debajo.
pub fn stat_card(ui: &mut Ui, value: &str, caption: &str, color: Color32) {
    Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).size(20.0).strong().color(color));
                ui.small(caption);
            });
        });
}

/// Barra de progreso por segmentos (una celda por pregunta).
pub fn segmented_progress(ui: &mut Ui, cells: &[ProgressCell], width: f32) {
    if cells.is_empty() {
        return;
    }
    let gap = 2.0;
    let cell_w = ((width - gap * (cells.len() as f32 - 1.0)) / cells.len() as f32).max(2.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = gap;
        for cell in cells {
            let color = match cell {
                ProgressCell::Done => Color32::from_rgb(59, 130, 246),
                ProgressCell::Current => Color32::from_rgb(250, 204, 21),
                ProgressCell::Pending => Color32::GRAY,
            };
            let (rect, _) = ui.allocate_exact_size(Vec2::new(cell_w, 4.0), Sense::hover());
            ui.painter().rect_filled(rect, CornerRadius::same(1), color);
        }
    });
}
