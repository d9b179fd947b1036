//! Map screen coordinator.
//!
//! [`MapScreen`] is the single owner of all mutable coordination state for
//! one screen lifetime: the tracker registry, the selection cursor, the
//! viewport controller and the live-location tracker. It is constructed at
//! screen start and discarded at screen end; nothing here is ambient or
//! process-global.
//!
//! All user-triggered handlers (`zoom_in`, `zoom_out`, `next_tracker`,
//! `recenter`, `select_tracker`) execute as discrete, non-overlapping
//! calls on a single logical thread. Location events arrive asynchronously
//! over a channel and are applied through the same coordinator via
//! [`MapScreen::run_location_events`].
//!
//! Failures degrade rather than surface: an empty registry makes cycling a
//! no-op, a missing fix makes recenter a no-op, and a viewport command
//! before [`MapScreen::start`] is a sequencing error that gets logged and
//! absorbed.

mod config;

pub use config::{
    ScreenConfig, DEFAULT_RECENTER_ZOOM, DEFAULT_START_CENTER, DEFAULT_START_ZOOM,
    DEFAULT_ZOOM_STEP,
};

use chrono::{Local, NaiveDateTime};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::cursor::SelectionCursor;
use crate::location::{LocationEvent, LocationTracker, PermissionState};
use crate::popup::{PopupContent, PopupPresenter};
use crate::registry::{Tracker, TrackerRegistry};
use crate::viewport::{MapSurface, ViewportController, ViewportError};

/// Log and absorb a viewport command failure.
///
/// `NotReady` means a handler ran before [`MapScreen::start`]; that is a
/// sequencing bug in the caller, not something the user should see.
fn issue(result: Result<(), ViewportError>, command: &str) {
    if let Err(error) = result {
        warn!(%error, command, "viewport command dropped");
    }
}

/// Coordinates the viewport, the tracker set and the live-location overlay
/// for one map screen.
pub struct MapScreen<S: MapSurface, P: PopupPresenter> {
    config: ScreenConfig,
    registry: TrackerRegistry,
    cursor: SelectionCursor,
    viewport: ViewportController<S>,
    location: LocationTracker,
    presenter: P,
}

impl<S: MapSurface, P: PopupPresenter> MapScreen<S, P> {
    /// Create a screen with the default configuration.
    pub fn new(registry: TrackerRegistry, presenter: P) -> Self {
        Self::with_config(ScreenConfig::default(), registry, presenter)
    }

    /// Create a screen with an explicit configuration.
    pub fn with_config(config: ScreenConfig, registry: TrackerRegistry, presenter: P) -> Self {
        Self {
            config,
            registry,
            cursor: SelectionCursor::new(),
            viewport: ViewportController::new(),
            location: LocationTracker::new(),
            presenter,
        }
    }

    /// Attach the rendering surface and bring the screen up.
    ///
    /// Sets the initial camera and issues the one-shot location permission
    /// request. Must run before any other handler; until then every
    /// viewport command is rejected as not ready.
    pub fn start(&mut self, surface: S) {
        self.viewport.attach(surface);
        issue(
            self.viewport
                .center(self.config.start_center, self.config.start_zoom),
            "initial center",
        );
        self.location.request_permission();
        info!(trackers = self.registry.len(), "map screen started");
    }

    /// Zoom-in button: one zoom step up. Pauses auto-follow.
    pub fn zoom_in(&mut self) {
        self.manual_zoom(self.config.zoom_step);
    }

    /// Zoom-out button: one zoom step down. Pauses auto-follow.
    pub fn zoom_out(&mut self) {
        self.manual_zoom(-self.config.zoom_step);
    }

    fn manual_zoom(&mut self, delta: f64) {
        self.location.pause_follow();
        issue(self.viewport.zoom_by(delta), "zoom");
    }

    /// Next-tracker button: advance the cursor and fly to the new tracker.
    ///
    /// A no-op when no trackers are configured. Pauses auto-follow.
    pub fn next_tracker(&mut self) {
        self.location.pause_follow();

        let target = match self.cursor.advance(&self.registry) {
            Ok(tracker) => {
                debug!(name = %tracker.name, "cycling to next tracker");
                tracker.position
            }
            Err(_) => {
                debug!("next-tracker ignored, registry is empty");
                return;
            }
        };

        issue(
            self.viewport.animate_to(target, self.config.start_zoom),
            "tracker jump",
        );
    }

    /// Recenter-on-me button: fly to the latest fix and resume auto-follow.
    ///
    /// A silent no-op while permission is denied, unresolved, or no fix has
    /// arrived yet.
    pub fn recenter(&mut self) {
        let Some(target) = self.location.recenter_target() else {
            debug!("recenter ignored, no usable device position");
            return;
        };

        issue(
            self.viewport.animate_to(target, self.config.recenter_zoom),
            "recenter",
        );
    }

    /// Marker tap: show the detail popup for the tracker at `index`,
    /// observed now.
    pub fn select_tracker(&mut self, index: usize) {
        self.select_tracker_at(index, Local::now().naive_local());
    }

    /// Marker tap with an explicit observation timestamp.
    ///
    /// An unknown index is a no-op.
    pub fn select_tracker_at(&mut self, index: usize, observed_at: NaiveDateTime) {
        let Some(tracker) = self.registry.get(index) else {
            debug!(index, "marker tap ignored, unknown tracker");
            return;
        };

        debug!(name = %tracker.name, "showing tracker popup");
        self.presenter
            .show(PopupContent::for_tracker(tracker, observed_at));
    }

    /// Apply one asynchronous location event.
    pub fn handle_location_event(&mut self, event: LocationEvent) {
        match event {
            LocationEvent::PermissionResolved(granted) => {
                self.location.resolve_permission(granted);
            }
            LocationEvent::Fix(point) => {
                if self.location.record_fix(point) {
                    // Auto-follow keeps the camera on the device without
                    // touching the zoom level.
                    issue(self.viewport.pan_to(point), "follow fix");
                }
            }
        }
    }

    /// Drain location events until the provider closes the channel.
    ///
    /// Mirrors the fire-and-forget delivery of the platform's location
    /// provider: each received fix supersedes the previous one.
    pub async fn run_location_events(&mut self, mut events: UnboundedReceiver<LocationEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_location_event(event);
        }
        debug!("location event channel closed");
    }

    /// The tracker registry backing this screen.
    pub fn registry(&self) -> &TrackerRegistry {
        &self.registry
    }

    /// The currently selected tracker, if the registry is non-empty.
    pub fn current_tracker(&self) -> Option<&Tracker> {
        self.cursor.current(&self.registry).ok()
    }

    /// Current location permission state.
    pub fn permission_state(&self) -> PermissionState {
        self.location.state()
    }

    /// Whether delivered fixes currently drive the camera.
    pub fn is_following(&self) -> bool {
        self.location.is_following()
    }

    /// The viewport controller, for zoom queries and surface inspection.
    pub fn viewport(&self) -> &ViewportController<S> {
        &self.viewport
    }

    /// The popup presenter, for inspection in tests.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
