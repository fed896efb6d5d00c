//! Tabular itinerary view, with stacked mini-cards on mobile viewports.

use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use roteiro_core::{Day, Viewport};

use crate::theme;

pub fn show_itinerary_table(ui: &mut Ui, days: &[Day], viewport: Viewport) {
    if viewport == Viewport::Mobile {
        show_mobile_cards(ui, days);
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto()) // Día
        .column(Column::auto()) // Fecha
        .column(Column::initial(190.0)) // Ciudad/Ruta
        .column(Column::initial(160.0)) // Transporte
        .column(Column::initial(150.0)) // Alojamiento
        .column(Column::remainder()) // Actividades
        .header(24.0, |mut header| {
            for title in [
                "Día",
                "Fecha",
                "Ciudad/Ruta",
                "Transporte",
                "Alojamiento",
                "Actividades Principales",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for day in days {
                body.row(40.0, |mut row| {
                    row.col(|ui| {
                        ui.colored_label(
                            theme::country_color(day.country),
                            format!("{} Día {}", day.flag.as_deref().unwrap_or(""), day.day),
                        );
                    });
                    row.col(|ui| {
                        ui.label(&day.date);
                    });
                    row.col(|ui| {
                        ui.label(&day.route);
                    });
                    row.col(|ui| match &day.transport {
                        Some(transport) => {
                            ui.label(transport.summary());
                        }
                        None => {
                            ui.weak("—");
                        }
                    });
                    row.col(|ui| match &day.accommodation {
                        Some(accommodation) => {
                            ui.label(accommodation);
                        }
                        None => {
                            ui.weak("—");
                        }
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&day.activities).size(12.0));
                    });
                });
            }
        });
}

/// Narrow-viewport fallback: one stacked card per day.
fn show_mobile_cards(ui: &mut Ui, days: &[Day]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for day in days {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            theme::country_color(day.country),
                            RichText::new(format!(
                                "{} Día {}",
                                day.flag.as_deref().unwrap_or(""),
                                day.day
                            ))
                            .strong(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.weak(&day.date);
                            },
                        );
                    });
                    ui.strong(format!("📍 {}", day.route));
                    if let Some(transport) = &day.transport {
                        ui.label(format!("🚗 {}", transport.summary()));
                    }
                    if let Some(accommodation) = &day.accommodation {
                        ui.label(format!("🏨 {accommodation}"));
                    }
                    ui.label(format!("Actividades: {}", day.activities));
                });
                ui.add_space(6.0);
            }
        });
}
