//! # Roteiro Core
//!
//! Core types and logic for the Roteiro travel-itinerary viewer.
//!
//! This crate provides:
//! - The itinerary document schema and loader (`document`)
//! - Route-to-city geocoding against a fixed known-city table (`geocode`)
//! - Route planning: map points and the connecting path (`route`)
//! - The view-mode state machine (`view`)
//! - Session-local suggestion checklist state (`suggestion`)
//!
//! It carries no UI dependency; the `roteiro-gui` crate renders this state.

pub mod document;
pub mod error;
pub mod geocode;
pub mod route;
pub mod suggestion;
pub mod view;

pub use document::{Country, Day, Itinerary, Suggestion, SuggestionKind, Transport, TripInfo};
pub use error::{Error, Result};
pub use geocode::Coordinate;
pub use route::{plan_route, GeoPoint, RoutePlan};
pub use suggestion::{Checklist, SuggestionStatus};
pub use view::{ContentView, ViewMode, ViewState, Viewport};
