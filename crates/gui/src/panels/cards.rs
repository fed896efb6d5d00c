//! Card grid: one card per itinerary day.

use egui::{Frame, RichText, Ui};

use roteiro_core::suggestion::SuggestionKey;
use roteiro_core::{Checklist, Day, SuggestionKind};

use crate::theme;

const CARD_WIDTH_NORMAL: f32 = 360.0;
const CARD_WIDTH_COMPACT: f32 = 270.0;

/// Show the day cards. Returns the checklist entry toggled this frame, if any.
pub fn show_day_cards(
    ui: &mut Ui,
    days: &[Day],
    compact: bool,
    checklist: &Checklist,
) -> Option<SuggestionKey> {
    let mut toggled = None;
    let width = if compact {
        CARD_WIDTH_COMPACT
    } else {
        CARD_WIDTH_NORMAL
    };

    ui.horizontal_wrapped(|ui| {
        for day in days {
            ui.vertical(|ui| {
                ui.set_width(width);
                if let Some(key) = show_day_card(ui, day, compact, checklist) {
                    toggled = Some(key);
                }
            });
            ui.add_space(4.0);
        }
    });

    toggled
}

fn show_day_card(
    ui: &mut Ui,
    day: &Day,
    compact: bool,
    checklist: &Checklist,
) -> Option<SuggestionKey> {
    let mut toggled = None;

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Country-colored header: day + flag, date, route.
        Frame::group(ui.style())
            .fill(theme::country_header_fill(day.country))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "Día {} {}",
                            day.day,
                            day.flag.as_deref().unwrap_or("")
                        ))
                        .strong()
                        .size(if compact { 14.0 } else { 17.0 }),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(&day.date).weak().size(11.0));
                    });
                });
                ui.label(RichText::new(&day.route).color(theme::country_color(day.country)));
            });

        if let Some(transport) = &day.transport {
            section_header(ui, day, "Transporte");
            ui.label(transport.summary());
        }

        section_header(ui, day, "Actividades");
        ui.label(&day.activities);

        if let Some(accommodation) = &day.accommodation {
            section_header(ui, day, "Alojamiento");
            ui.label(accommodation);
        }

        // Suggestions are hidden in the compact view.
        if !compact && !day.suggestions.is_empty() {
            section_header(ui, day, "Recomendaciones");
            for (index, suggestion) in day.suggestions.iter().enumerate() {
                let key = (day.day, index);
                if show_suggestion(ui, suggestion, checklist, key) {
                    toggled = Some(key);
                }
            }
        }
    });

    toggled
}

fn section_header(ui: &mut Ui, day: &Day, title: &str) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        theme::status_dot(ui, theme::country_color(day.country));
        ui.label(
            RichText::new(title)
                .strong()
                .color(theme::country_color(day.country)),
        );
    });
}

/// Render one suggestion row. Returns true when its checkbox was toggled.
fn show_suggestion(
    ui: &mut Ui,
    suggestion: &roteiro_core::Suggestion,
    checklist: &Checklist,
    key: SuggestionKey,
) -> bool {
    let status = checklist.status(key);
    let mut toggled = false;

    ui.horizontal(|ui| {
        let mut checked = status.is_completed();
        if ui.checkbox(&mut checked, "").changed() {
            toggled = true;
        }

        let icon = match suggestion.kind {
            SuggestionKind::TransportNote => "🚌",
            SuggestionKind::Warning => "⚠",
            SuggestionKind::Tip => "💡",
        };

        ui.vertical(|ui| {
            ui.label(RichText::new(format!("{icon} {}", suggestion.title)).strong());
            let content = RichText::new(&suggestion.content).size(12.0);
            if status.is_completed() {
                ui.label(content.strikethrough().weak());
            } else {
                ui.label(content);
            }
        });
    });

    toggled
}
