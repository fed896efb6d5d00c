//! General recommendations section, shown only in the plain Normal view.

use egui::Ui;

use crate::theme;

pub fn show_recommendations(ui: &mut Ui, recommendations: &[String]) {
    ui.add_space(12.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.heading("Recomendaciones Generales");
        ui.separator();
        for text in recommendations {
            ui.horizontal(|ui| {
                theme::status_dot(ui, theme::ROUTE);
                ui.label(text);
            });
        }
    });
}
