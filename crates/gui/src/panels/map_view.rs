//! Geographic map view using walkers (OpenStreetMap slippy tiles):
//! day-badge markers, the connecting route path, and the detail panel.

use egui::{Align2, Color32, FontId, Pos2, Response, Stroke, Ui};
use walkers::sources::OpenStreetMap;
use walkers::{lon_lat, HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use roteiro_core::route::GeoPoint;
use roteiro_core::{Coordinate, Day, Itinerary, RoutePlan};

use crate::theme;

/// Initial view covering the whole itinerary region (lat, lon).
const INITIAL_CENTER: (f64, f64) = (39.5, -2.5);
const INITIAL_ZOOM: f64 = 6.0;
const MARKER_RADIUS: f32 = 15.0;

/// Map overlay state (tiles, pan/zoom memory, selection).
///
/// Lives only while the overlay is open; dropping it releases the tile
/// cache and resets pan/zoom and selection for the next activation.
pub struct MapViewState {
    tiles: HttpTiles,
    memory: MapMemory,
    center: Position,
    /// Currently selected day; at most one detail panel is open.
    pub selected_day: Option<u32>,
}

impl MapViewState {
    pub fn new(ctx: &egui::Context) -> Self {
        let mut memory = MapMemory::default();
        if memory.set_zoom(INITIAL_ZOOM).is_err() {
            tracing::warn!(zoom = INITIAL_ZOOM, "initial zoom rejected, keeping default");
        }
        Self {
            tiles: HttpTiles::new(OpenStreetMap, ctx.clone()),
            memory,
            center: lon_lat(INITIAL_CENTER.1, INITIAL_CENTER.0),
            selected_day: None,
        }
    }

    /// Apply a reported action to the selection. Selecting while a day is
    /// already selected replaces it; at most one detail panel is open.
    pub fn apply(&mut self, action: MapAction) {
        match action {
            MapAction::Select(day) => self.selected_day = Some(day),
            MapAction::ClearSelection => self.selected_day = None,
            MapAction::None => {}
        }
    }
}

/// Actions returned from the map view.
pub enum MapAction {
    /// A marker was clicked; select that day.
    Select(u32),
    /// The detail panel was closed.
    ClearSelection,
    None,
}

/// Show the map overlay. Marker clicks and the panel close button are
/// reported back as a [`MapAction`].
pub fn show_map_view(
    ui: &mut Ui,
    state: &mut MapViewState,
    route: &RoutePlan,
    itinerary: &Itinerary,
) -> MapAction {
    let mut action = MapAction::None;

    ui.heading("Mapa del Itinerario");
    ui.separator();

    // The detail panel reads the full Day record, not the GeoPoint
    // projection, so it shows complete data for the selected day.
    if let Some(day) = state.selected_day.and_then(|n| itinerary.day(n)) {
        egui::SidePanel::right("day_details")
            .resizable(false)
            .default_width(280.0)
            .show_inside(ui, |ui| {
                if show_day_details(ui, day) {
                    action = MapAction::ClearSelection;
                }
            });
    }

    egui::TopBottomPanel::bottom("map_legend").show_inside(ui, |ui| {
        show_legend(ui);
    });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        let mut clicked = None;

        let mut map = Map::new(Some(&mut state.tiles), &mut state.memory, state.center);
        if let Some(path) = &route.path {
            // Path first: it draws beneath the markers.
            map = map.with_plugin(RoutePath { path });
        }
        map = map.with_plugin(DayMarkers {
            points: &route.points,
            clicked: &mut clicked,
        });
        ui.add(map);

        if let Some(day) = clicked {
            action = MapAction::Select(day);
        }
    });

    action
}

/// Render the detail panel for a day. Returns true when close was clicked.
fn show_day_details(ui: &mut Ui, day: &Day) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        ui.heading(format!("Día {} {}", day.day, day.flag.as_deref().unwrap_or("")));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Cerrar detalles").clicked() {
                close = true;
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        detail_line(ui, "Fecha", &day.date);
        detail_line(ui, "Ruta", &day.route);
        if let Some(transport) = &day.transport {
            detail_line(ui, "Transporte", &transport.summary());
        }
        if let Some(accommodation) = &day.accommodation {
            detail_line(ui, "Alojamiento", accommodation);
        }
        ui.strong("Actividades:");
        ui.label(&day.activities);
    });

    close
}

fn detail_line(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.strong(format!("{label}:"));
        ui.label(value);
    });
    ui.add_space(2.0);
}

fn show_legend(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.strong("Leyenda:");
        theme::status_dot(ui, theme::PORTUGAL);
        ui.label("Portugal");
        theme::status_dot(ui, theme::SPAIN);
        ui.label("España");
        theme::status_dot(ui, theme::ROUTE);
        ui.label("Ruta del viaje");
        ui.separator();
        ui.weak("Haz clic en los marcadores para ver detalles");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.hyperlink_to(
                "© OpenStreetMap contributors",
                "https://www.openstreetmap.org/copyright",
            );
        });
    });
}

fn project(projector: &Projector, coordinate: Coordinate) -> Pos2 {
    let p = projector.project(lon_lat(coordinate.lon, coordinate.lat));
    egui::pos2(p.x, p.y)
}

/// Plugin that draws the dashed route polyline beneath the markers.
struct RoutePath<'a> {
    path: &'a [Coordinate],
}

impl Plugin for RoutePath<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let points: Vec<Pos2> = self
            .path
            .iter()
            .map(|coordinate| project(projector, *coordinate))
            .collect();
        if points.len() < 2 {
            return;
        }

        let stroke = Stroke::new(4.0, theme::ROUTE.gamma_multiply(0.8));
        for shape in egui::Shape::dashed_line(&points, stroke, 10.0, 10.0) {
            ui.painter().add(shape);
        }
    }
}

/// Plugin that draws one day-badge marker per resolved point: a filled
/// circle in the country color with the day number, white ring around it.
/// Clicks inside a badge report the day back through `clicked`.
struct DayMarkers<'a> {
    points: &'a [GeoPoint],
    clicked: &'a mut Option<u32>,
}

impl Plugin for DayMarkers<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        let painter = ui.painter();
        for point in self.points {
            let center = project(projector, point.coordinate);

            painter.circle(
                center,
                MARKER_RADIUS,
                theme::country_color(point.country),
                Stroke::new(3.0, Color32::WHITE),
            );
            painter.text(
                center,
                Align2::CENTER_CENTER,
                point.day.to_string(),
                FontId::proportional(14.0),
                Color32::WHITE,
            );

            if let Some(pos) = click_pos {
                // Later points draw on top, so the last hit wins.
                if pos.distance(center) <= MARKER_RADIUS {
                    *self.clicked = Some(point.day);
                }
            }
        }

        if self.points.is_empty() {
            ui.painter().text(
                ui.max_rect().center(),
                Align2::CENTER_CENTER,
                "Ninguna etapa del itinerario pudo situarse en el mapa",
                FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_a_second_day_replaces_the_first() {
        let ctx = egui::Context::default();
        let mut state = MapViewState::new(&ctx);
        assert_eq!(state.selected_day, None);

        state.apply(MapAction::Select(3));
        assert_eq!(state.selected_day, Some(3));

        state.apply(MapAction::Select(5));
        assert_eq!(state.selected_day, Some(5));
    }

    #[test]
    fn test_close_clears_the_selection() {
        let ctx = egui::Context::default();
        let mut state = MapViewState::new(&ctx);

        state.apply(MapAction::Select(3));
        state.apply(MapAction::ClearSelection);
        assert_eq!(state.selected_day, None);

        // Closing with nothing selected stays at none.
        state.apply(MapAction::ClearSelection);
        assert_eq!(state.selected_day, None);
    }

    #[test]
    fn test_no_action_leaves_selection_untouched() {
        let ctx = egui::Context::default();
        let mut state = MapViewState::new(&ctx);

        state.apply(MapAction::Select(7));
        state.apply(MapAction::None);
        assert_eq!(state.selected_day, Some(7));
    }
}
