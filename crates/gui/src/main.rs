//! Roteiro Desktop GUI
//!
//! Interactive viewer for a pre-authored multi-day travel itinerary:
//! card grid, table and map views over a single static document.

mod app;
mod data;
mod panels;
mod theme;

use app::RoteiroApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let itinerary = data::load_bundled_itinerary()?;
    tracing::info!(
        days = itinerary.days.len(),
        title = %itinerary.trip_info.title,
        "itinerary loaded"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Roteiro — Itinerario de Viaje")
            .with_inner_size(app::INITIAL_WINDOW_SIZE)
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Roteiro",
        native_options,
        Box::new(move |cc| Ok(Box::new(RoteiroApp::new(cc, itinerary)))),
    )?;

    Ok(())
}
