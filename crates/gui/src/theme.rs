//! Colors shared across panels.

use egui::Color32;

use roteiro_core::Country;

/// Portugal marker/accent green.
pub const PORTUGAL: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
/// Spain marker/accent red.
pub const SPAIN: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
/// Route polyline indigo.
pub const ROUTE: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);

/// Header status dots.
pub const DOT_GREEN: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
pub const DOT_RED: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);
pub const DOT_YELLOW: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);

pub fn country_color(country: Country) -> Color32 {
    match country {
        Country::Portugal => PORTUGAL,
        Country::Spain => SPAIN,
    }
}

/// Muted fill for country-colored card headers (dark theme).
pub fn country_header_fill(country: Country) -> Color32 {
    match country {
        Country::Portugal => Color32::from_rgb(0x14, 0x3a, 0x26),
        Country::Spain => Color32::from_rgb(0x41, 0x1c, 0x1c),
    }
}

/// Draw a small colored status dot inline with the current row.
pub fn status_dot(ui: &mut egui::Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, color);
}
