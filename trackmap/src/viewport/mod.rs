//! Viewport control.
//!
//! The map rendering surface is an external collaborator reached through
//! the [`MapSurface`] trait. [`ViewportController`] wraps a surface and
//! exposes the camera commands the screen coordinator needs: immediate
//! centering at startup, animated pans while cycling trackers, and
//! relative zoom steps for the zoom buttons.
//!
//! Animated commands are fire-and-forget: they return as soon as the
//! surface has accepted them, and the animation completes on the surface's
//! own schedule. No completion callbacks exist at this layer.

use thiserror::Error;
use tracing::debug;

use crate::coord::GeoPoint;

/// Camera interface of the map rendering surface.
///
/// Implementations own the actual viewport state (center + zoom); this
/// crate only issues commands and reads the zoom level back. Zoom clamping,
/// if any, is the surface's responsibility.
pub trait MapSurface {
    /// Immediately set the camera center, without animation.
    fn set_center(&mut self, center: GeoPoint);

    /// Immediately set the zoom level, without animation.
    fn set_zoom(&mut self, zoom: f64);

    /// Smoothly pan the camera to `center`. Fire-and-forget.
    fn animate_to(&mut self, center: GeoPoint);

    /// Smoothly change the zoom level, keeping the current center.
    fn zoom_to(&mut self, zoom: f64);

    /// The current camera zoom level.
    fn zoom_level(&self) -> f64;
}

/// Errors that can occur when issuing viewport commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewportError {
    /// A camera command was issued before a surface was attached.
    ///
    /// This is a sequencing error: callers must attach the surface before
    /// issuing any command.
    #[error("map surface is not attached")]
    NotReady,
}

/// Adapter between the screen coordinator and the rendering surface.
#[derive(Debug)]
pub struct ViewportController<S: MapSurface> {
    surface: Option<S>,
}

impl<S: MapSurface> Default for ViewportController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MapSurface> ViewportController<S> {
    /// Create a controller with no surface attached.
    ///
    /// Every command fails with [`ViewportError::NotReady`] until a surface
    /// is attached.
    pub fn new() -> Self {
        Self { surface: None }
    }

    /// Create a controller that is immediately ready.
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Attach the rendering surface, making the controller ready.
    pub fn attach(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Whether a surface is attached.
    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    /// The attached surface, if any. Useful for inspection in tests.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    fn surface_mut(&mut self) -> Result<&mut S, ViewportError> {
        self.surface.as_mut().ok_or(ViewportError::NotReady)
    }

    /// Immediately set the camera to `center` at `zoom`. Used at startup.
    pub fn center(&mut self, center: GeoPoint, zoom: f64) -> Result<(), ViewportError> {
        let surface = self.surface_mut()?;
        surface.set_zoom(zoom);
        surface.set_center(center);
        debug!(%center, zoom, "camera centered");
        Ok(())
    }

    /// Smoothly pan the camera to `center` and set `zoom`.
    pub fn animate_to(&mut self, center: GeoPoint, zoom: f64) -> Result<(), ViewportError> {
        let surface = self.surface_mut()?;
        surface.animate_to(center);
        surface.set_zoom(zoom);
        debug!(%center, zoom, "camera animating");
        Ok(())
    }

    /// Smoothly pan the camera to `center`, leaving the zoom level alone.
    pub fn pan_to(&mut self, center: GeoPoint) -> Result<(), ViewportError> {
        self.surface_mut()?.animate_to(center);
        debug!(%center, "camera panning");
        Ok(())
    }

    /// Change the zoom level by `delta` relative to the current level.
    ///
    /// No clamping is performed here; out-of-range levels are the surface's
    /// concern.
    pub fn zoom_by(&mut self, delta: f64) -> Result<(), ViewportError> {
        let surface = self.surface_mut()?;
        let target = surface.zoom_level() + delta;
        surface.zoom_to(target);
        debug!(delta, target, "camera zooming");
        Ok(())
    }

    /// The current camera zoom level.
    pub fn current_zoom(&self) -> Result<f64, ViewportError> {
        self.surface
            .as_ref()
            .map(MapSurface::zoom_level)
            .ok_or(ViewportError::NotReady)
    }
}
