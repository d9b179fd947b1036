//! TrackMap - marker and viewport coordination for a tracker map screen.
//!
//! This library owns the rules governing how a map viewport, a
//! live-location overlay and an ordered set of named points of interest
//! ("trackers") interact under user actions: next-tracker cycling, zoom
//! steps, recenter-on-me and marker selection. Rendering, permission
//! dialogs and popup layout are external collaborators reached through
//! the [`viewport::MapSurface`] and [`popup::PopupPresenter`] traits.
//!
//! # Architecture
//!
//! ```text
//! user input ──► MapScreen ──► ViewportController ──► MapSurface (render)
//!                   │  ▲               └─ camera commands, zoom queries
//!                   │  └── LocationEvent channel (permission, fixes)
//!                   └────► PopupPresenter (tracker detail overlay)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use trackmap::{MapScreen, TrackerRegistry};
//!
//! let mut screen = MapScreen::new(TrackerRegistry::bundled(), presenter);
//! screen.start(surface);
//! screen.next_tracker();        // fly to the next tracker
//! screen.select_tracker(1);     // open the detail popup
//! ```

pub mod coord;
pub mod cursor;
pub mod location;
pub mod popup;
pub mod registry;
pub mod screen;
pub mod viewport;

pub use coord::GeoPoint;
pub use location::LocationEvent;
pub use registry::{Tracker, TrackerRegistry};
pub use screen::{MapScreen, ScreenConfig};
