//! Detail popup content.
//!
//! Pure presentation data for the tracker detail overlay: the tracker's
//! name, its avatar asset, and the observation timestamp formatted as
//! locale-independent date and time strings. The overlay surface itself
//! (layout, bottom anchoring, dismissal gestures, replacing a previous
//! popup) lives behind the [`PopupPresenter`] trait.

use chrono::NaiveDateTime;

use crate::registry::{AssetId, Tracker};

/// Date format shown in the popup, e.g. `05.03.24`.
pub const DATE_FORMAT: &str = "%d.%m.%y";

/// Time format shown in the popup, e.g. `14:07`.
pub const TIME_FORMAT: &str = "%H:%M";

/// Everything the popup surface needs to render a tracker detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// Tracker display name.
    pub name: String,
    /// Avatar asset taken directly from the tracker.
    pub avatar: AssetId,
    /// Observation date, formatted as `dd.mm.yy`.
    pub date: String,
    /// Observation time, formatted as `HH:MM`.
    pub time: String,
}

impl PopupContent {
    /// Build popup content for a tracker observed at `observed_at`.
    pub fn for_tracker(tracker: &Tracker, observed_at: NaiveDateTime) -> Self {
        Self {
            name: tracker.name.clone(),
            avatar: tracker.avatar.clone(),
            date: observed_at.format(DATE_FORMAT).to_string(),
            time: observed_at.format(TIME_FORMAT).to_string(),
        }
    }
}

/// Overlay surface that renders tracker detail popups.
///
/// Showing a popup is stateless from this crate's perspective: dismissal
/// has no effect on coordination state, and keeping at most one popup open
/// is the surface's responsibility.
pub trait PopupPresenter {
    /// Open the transient, user-dismissible detail overlay.
    fn show(&mut self, content: PopupContent);
}
