//! Screen configuration.
//!
//! Combines the camera defaults the map screen needs: where the camera
//! starts, which zoom level tracker and recenter animations target, and
//! the per-tap zoom step.

use crate::coord::GeoPoint;

/// Default camera start center (Moscow city centre, matching the bundled
/// tracker set).
pub const DEFAULT_START_CENTER: GeoPoint = GeoPoint {
    latitude: 55.755864,
    longitude: 37.617698,
};

/// Default zoom level applied at startup and when jumping to a tracker.
pub const DEFAULT_START_ZOOM: f64 = 19.0;

/// Fixed zoom level applied by the recenter-on-me action.
pub const DEFAULT_RECENTER_ZOOM: f64 = 19.0;

/// Zoom change per zoom-in/zoom-out tap.
pub const DEFAULT_ZOOM_STEP: f64 = 1.0;

/// Camera configuration for a [`MapScreen`](super::MapScreen).
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Where the camera starts before any fix or user action.
    pub start_center: GeoPoint,
    /// Zoom level at startup and for tracker jumps.
    pub start_zoom: f64,
    /// Zoom level applied when recentering on the device position.
    pub recenter_zoom: f64,
    /// Zoom delta per zoom button tap.
    pub zoom_step: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            start_center: DEFAULT_START_CENTER,
            start_zoom: DEFAULT_START_ZOOM,
            recenter_zoom: DEFAULT_RECENTER_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl ScreenConfig {
    /// Set the start center.
    pub fn with_start_center(mut self, center: GeoPoint) -> Self {
        self.start_center = center;
        self
    }

    /// Set the startup/tracker zoom level.
    pub fn with_start_zoom(mut self, zoom: f64) -> Self {
        self.start_zoom = zoom;
        self
    }

    /// Set the recenter zoom level.
    pub fn with_recenter_zoom(mut self, zoom: f64) -> Self {
        self.recenter_zoom = zoom;
        self
    }

    /// Set the zoom step per tap.
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = step;
        self
    }
}
