//! Console-backed collaborator implementations.
//!
//! Stand-ins for the real rendering and overlay surfaces: camera commands
//! and popups are printed to stdout so the coordination logic can be
//! watched from a terminal.

use trackmap::popup::{PopupContent, PopupPresenter};
use trackmap::viewport::MapSurface;
use trackmap::GeoPoint;

/// Map surface that prints camera commands and tracks the zoom level.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    zoom: f64,
}

impl MapSurface for ConsoleSurface {
    fn set_center(&mut self, center: GeoPoint) {
        println!("[map] center set to {}", center);
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        println!("[map] zoom set to {:.1}", zoom);
    }

    fn animate_to(&mut self, center: GeoPoint) {
        println!("[map] animating to {}", center);
    }

    fn zoom_to(&mut self, zoom: f64) {
        self.zoom = zoom;
        println!("[map] zooming to {:.1}", zoom);
    }

    fn zoom_level(&self) -> f64 {
        self.zoom
    }
}

/// Popup surface that prints the detail overlay content.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl PopupPresenter for ConsolePresenter {
    fn show(&mut self, content: PopupContent) {
        println!(
            "[popup] {} (avatar: {}) seen {} at {}",
            content.name, content.avatar, content.date, content.time
        );
    }
}
