//! Live device-location tracking.
//!
//! Models the one-shot permission flow and the latest-fix overlay state:
//!
//! ```text
//! Unrequested ──request──► PermissionPending ──grant──► Tracking
//!                                   │
//!                                   └──deny──► Disabled
//! ```
//!
//! While `Tracking` with auto-follow on, every delivered fix recenters the
//! camera. Any manual viewport command pauses auto-follow; the recenter
//! action resumes it. Denial is terminal for the session: recenter becomes
//! a permanent no-op, no retries.
//!
//! Fixes carry latest-value semantics. Each delivered fix replaces the
//! previous one; no history is retained and stale fixes are simply
//! superseded.

use tracing::{debug, info, warn};

use crate::coord::GeoPoint;

/// Permission and tracking state for the live-location overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// Startup state; no permission request issued yet.
    Unrequested,
    /// The one-shot permission request is in flight.
    PermissionPending,
    /// Permission granted; fixes are accepted and may drive the camera.
    Tracking,
    /// Permission denied; live-location features are no-ops for the session.
    Disabled,
}

/// An asynchronous event from the location subsystem.
///
/// Delivered over a channel by the platform's location provider; the screen
/// coordinator applies each event on its single event-handling thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationEvent {
    /// Outcome of the one-shot permission request.
    PermissionResolved(bool),
    /// A new device position fix, superseding the previous one.
    Fix(GeoPoint),
}

/// Owner of the live-location state: permission, latest fix, auto-follow.
#[derive(Debug)]
pub struct LocationTracker {
    state: PermissionState,
    fix: Option<GeoPoint>,
    follow: bool,
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationTracker {
    /// Create a tracker in the `Unrequested` state.
    pub fn new() -> Self {
        Self {
            state: PermissionState::Unrequested,
            fix: None,
            follow: false,
        }
    }

    /// The current permission state.
    pub fn state(&self) -> PermissionState {
        self.state
    }

    /// The most recent device fix, if one has been delivered.
    pub fn last_fix(&self) -> Option<GeoPoint> {
        self.fix
    }

    /// Whether fixes currently drive the camera.
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Issue the one-shot permission request.
    ///
    /// Happens once, at startup. Repeated calls are ignored.
    pub fn request_permission(&mut self) {
        if self.state != PermissionState::Unrequested {
            warn!(state = ?self.state, "permission already requested, ignoring");
            return;
        }
        self.state = PermissionState::PermissionPending;
        debug!("location permission requested");
    }

    /// Apply the permission outcome.
    ///
    /// Resolves at most once: the continuation runs exactly once upon
    /// response and is never retried. A grant enables tracking with
    /// auto-follow on; a denial disables live location for the session.
    pub fn resolve_permission(&mut self, granted: bool) {
        if self.state != PermissionState::PermissionPending {
            warn!(state = ?self.state, granted, "unexpected permission resolution, ignoring");
            return;
        }

        if granted {
            self.state = PermissionState::Tracking;
            self.follow = true;
            info!("location permission granted, overlay tracking enabled");
        } else {
            self.state = PermissionState::Disabled;
            info!("location permission denied, live location disabled for this session");
        }
    }

    /// Record a new device fix.
    ///
    /// Fixes arriving outside the `Tracking` state are dropped. Returns
    /// true when the camera should follow the fix (tracking with
    /// auto-follow on).
    pub fn record_fix(&mut self, point: GeoPoint) -> bool {
        if self.state != PermissionState::Tracking {
            debug!(state = ?self.state, %point, "fix dropped, not tracking");
            return false;
        }

        self.fix = Some(point);
        self.follow
    }

    /// Pause auto-follow after a manual viewport command.
    ///
    /// Fixes keep updating [`last_fix`](Self::last_fix); they just stop
    /// moving the camera until the user recenters.
    pub fn pause_follow(&mut self) {
        if self.follow {
            debug!("auto-follow paused by manual viewport command");
            self.follow = false;
        }
    }

    /// Target of the recenter-on-me action.
    ///
    /// Returns the latest fix while tracking, re-enabling auto-follow as a
    /// side effect. Returns `None` (caller treats as no-op) when permission
    /// was denied, is unresolved, or no fix has arrived yet.
    pub fn recenter_target(&mut self) -> Option<GeoPoint> {
        if self.state != PermissionState::Tracking {
            debug!(state = ?self.state, "recenter unavailable");
            return None;
        }

        let target = self.fix?;
        if !self.follow {
            debug!("auto-follow resumed by recenter");
            self.follow = true;
        }
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint {
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_initial_state() {
        let tracker = LocationTracker::new();
        assert_eq!(tracker.state(), PermissionState::Unrequested);
        assert!(tracker.last_fix().is_none());
        assert!(!tracker.is_following());
    }

    #[test]
    fn test_grant_flow_enables_follow() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        assert_eq!(tracker.state(), PermissionState::PermissionPending);

        tracker.resolve_permission(true);
        assert_eq!(tracker.state(), PermissionState::Tracking);
        assert!(tracker.is_following());
    }

    #[test]
    fn test_denial_is_terminal() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        tracker.resolve_permission(false);

        assert_eq!(tracker.state(), PermissionState::Disabled);
        assert!(!tracker.is_following());

        // Fixes are dropped and recenter stays a no-op for the session.
        assert!(!tracker.record_fix(fix(1.0, 1.0)));
        assert!(tracker.last_fix().is_none());
        assert!(tracker.recenter_target().is_none());
    }

    #[test]
    fn test_resolution_applies_at_most_once() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        tracker.resolve_permission(false);

        // A late grant must not revive a denied session.
        tracker.resolve_permission(true);
        assert_eq!(tracker.state(), PermissionState::Disabled);
    }

    #[test]
    fn test_resolution_before_request_is_ignored() {
        let mut tracker = LocationTracker::new();
        tracker.resolve_permission(true);
        assert_eq!(tracker.state(), PermissionState::Unrequested);
    }

    #[test]
    fn test_repeated_request_is_ignored() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        tracker.resolve_permission(true);

        tracker.request_permission();
        assert_eq!(tracker.state(), PermissionState::Tracking);
    }

    #[test]
    fn test_fix_before_grant_is_dropped() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();

        assert!(!tracker.record_fix(fix(1.0, 1.0)));
        assert!(tracker.last_fix().is_none());
    }

    #[test]
    fn test_latest_fix_supersedes_previous() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        tracker.resolve_permission(true);

        tracker.record_fix(fix(1.0, 1.0));
        tracker.record_fix(fix(2.0, 2.0));

        assert_eq!(tracker.last_fix(), Some(fix(2.0, 2.0)));
    }

    #[test]
    fn test_pause_and_resume_follow() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        tracker.resolve_permission(true);
        tracker.record_fix(fix(1.0, 1.0));

        tracker.pause_follow();
        assert!(!tracker.is_following());

        // Fixes still update while paused, they just don't drive the camera.
        assert!(!tracker.record_fix(fix(2.0, 2.0)));
        assert_eq!(tracker.last_fix(), Some(fix(2.0, 2.0)));

        // Recenter returns the latest fix and resumes following.
        assert_eq!(tracker.recenter_target(), Some(fix(2.0, 2.0)));
        assert!(tracker.is_following());
        assert!(tracker.record_fix(fix(3.0, 3.0)));
    }

    #[test]
    fn test_recenter_without_fix_is_none() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        tracker.resolve_permission(true);

        assert!(tracker.recenter_target().is_none());
    }

    #[test]
    fn test_recenter_while_pending_is_none() {
        let mut tracker = LocationTracker::new();
        tracker.request_permission();
        assert!(tracker.recenter_target().is_none());
    }
}
