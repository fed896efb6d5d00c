//! Main application: RoteiroApp implements eframe::App.

use egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel};

use roteiro_core::{plan_route, Checklist, ContentView, Itinerary, RoutePlan, ViewState};

use crate::panels::cards::show_day_cards;
use crate::panels::map_view::{show_map_view, MapAction, MapViewState};
use crate::panels::recommendations::show_recommendations;
use crate::panels::table::show_itinerary_table;
use crate::theme;

/// Requested window size; also seeds the viewport classification until the
/// first real resize signal arrives.
pub const INITIAL_WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];

/// The main application state.
pub struct RoteiroApp {
    /// The static itinerary document; never mutated.
    itinerary: Itinerary,

    /// Geocoded points and connecting path, derived once from the document.
    route: RoutePlan,

    /// View-mode state machine.
    view: ViewState,

    /// Session-local suggestion completion state.
    checklist: Checklist,

    /// Map overlay state. Exists only while the overlay is open: created
    /// when it activates, dropped on every path that deactivates it.
    map: Option<MapViewState>,
}

impl RoteiroApp {
    pub fn new(cc: &eframe::CreationContext<'_>, itinerary: Itinerary) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        cc.egui_ctx.set_visuals(visuals);

        let route = plan_route(&itinerary.days);
        tracing::info!(
            days = itinerary.days.len(),
            plotted = route.points.len(),
            "route planned"
        );

        let checklist = Checklist::new(&itinerary);

        Self {
            itinerary,
            route,
            view: ViewState::new(INITIAL_WINDOW_SIZE[0]),
            checklist,
            map: None,
        }
    }

    fn show_header(&mut self, ctx: &Context) {
        let trip = self.itinerary.trip_info.clone();

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(&trip.title).size(24.0));
                ui.label(&trip.subtitle);
            });
            ui.add_space(4.0);

            ui.horizontal_wrapped(|ui| {
                theme::status_dot(ui, theme::DOT_GREEN);
                ui.strong("Salida:");
                ui.label(format!(
                    "{} - {} {}",
                    trip.departure.city, trip.departure.date, trip.departure.time
                ));
                ui.separator();

                theme::status_dot(ui, theme::DOT_RED);
                ui.strong("Regreso:");
                ui.label(format!(
                    "{} - {} {}",
                    trip.return_trip.city, trip.return_trip.date, trip.return_trip.time
                ));
                ui.separator();

                theme::status_dot(ui, theme::DOT_YELLOW);
                ui.strong("Duración:");
                ui.label(&trip.duration);
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                // The mode button shows the current mode and cycles on click.
                if ui
                    .button(format!("⊞ {}", self.view.mode().label()))
                    .on_hover_text(format!("Cambiar a {}", self.view.next_mode().label()))
                    .clicked()
                {
                    self.view.cycle_mode();
                }

                if ui
                    .selectable_label(self.view.map_overlay(), "🌍 Mapa del Itinerario")
                    .clicked()
                {
                    self.view.toggle_map_overlay();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_footer(&self, ctx: &Context) {
        let trip = &self.itinerary.trip_info;
        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.label(format!(
                    "Itinerario de viaje • {} países • {} ciudades",
                    trip.countries, trip.cities
                ));
            });
            ui.add_space(4.0);
        });
    }
}

impl eframe::App for RoteiroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Every frame carries the current width; the state machine decides
        // whether anything changes.
        self.view.on_resize(ctx.screen_rect().width());

        // Scoped map state: acquired when the overlay opens, released as
        // soon as it closes, whatever closed it.
        if self.view.map_overlay() {
            if self.map.is_none() {
                self.map = Some(MapViewState::new(ctx));
            }
        } else if self.map.take().is_some() {
            tracing::debug!("map overlay closed, map state dropped");
        }

        self.show_header(ctx);
        self.show_footer(ctx);

        let mut map_action = MapAction::None;
        let mut toggled_suggestion = None;

        CentralPanel::default().show(ctx, |ui| match self.view.visible_content() {
            ContentView::Map => {
                if let Some(map) = &mut self.map {
                    map_action = show_map_view(ui, map, &self.route, &self.itinerary);
                }
            }
            ContentView::Table => {
                show_itinerary_table(ui, &self.itinerary.days, self.view.viewport());
            }
            ContentView::Cards { compact } => {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        toggled_suggestion =
                            show_day_cards(ui, &self.itinerary.days, compact, &self.checklist);

                        if self.view.shows_recommendations()
                            && !self.itinerary.general_recommendations.is_empty()
                        {
                            show_recommendations(ui, &self.itinerary.general_recommendations);
                        }
                    });
            }
        });

        if let Some(key) = toggled_suggestion {
            let status = self.checklist.toggle(key);
            tracing::debug!(day = key.0, index = key.1, ?status, "suggestion toggled");
        }

        if let Some(map) = &mut self.map {
            map.apply(map_action);
        }
    }
}
