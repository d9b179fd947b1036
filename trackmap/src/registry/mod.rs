//! Tracker registry.
//!
//! Immutable, ordered set of named points of interest shown as markers on
//! the map. Insertion order is significant: it defines the cycling order
//! used by the selection cursor. The registry is built once at startup and
//! never mutated for the lifetime of the screen.
//!
//! Each tracker carries its own marker icon and popup avatar as explicit
//! [`AssetId`] fields, so consumers never have to resolve assets by
//! comparing tracker names.

use std::fmt;

use crate::coord::GeoPoint;

/// Identifier of a bundled display asset (marker icon or popup avatar).
///
/// The identifier is opaque to this crate; the rendering surface resolves
/// it to an actual drawable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    /// Create a new asset identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, iconified geographic point of interest.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    /// Display name shown on the marker and in the detail popup.
    pub name: String,
    /// Geographic position of the marker.
    pub position: GeoPoint,
    /// Marker icon asset rendered on the map.
    pub icon: AssetId,
    /// Avatar asset rendered in the detail popup.
    pub avatar: AssetId,
}

impl Tracker {
    /// Create a new tracker.
    pub fn new(
        name: impl Into<String>,
        position: GeoPoint,
        icon: impl Into<AssetId>,
        avatar: impl Into<AssetId>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            icon: icon.into(),
            avatar: avatar.into(),
        }
    }
}

/// Ordered, immutable collection of trackers.
#[derive(Debug, Clone, Default)]
pub struct TrackerRegistry {
    trackers: Vec<Tracker>,
}

impl TrackerRegistry {
    /// Create a registry from an ordered list of trackers.
    pub fn new(trackers: Vec<Tracker>) -> Self {
        Self { trackers }
    }

    /// The compiled-in tracker set shipped with the application.
    ///
    /// Positions are in the Moscow city centre; asset identifiers refer to
    /// drawables bundled with the rendering surface.
    pub fn bundled() -> Self {
        Self::new(vec![
            Tracker::new(
                "Ivan",
                GeoPoint {
                    latitude: 55.749201,
                    longitude: 37.609071,
                },
                "tracker1_75dp",
                "tracker2",
            ),
            Tracker::new(
                "Artem",
                GeoPoint {
                    latitude: 55.763872,
                    longitude: 37.606746,
                },
                "tracker2_75dp",
                "tracker1",
            ),
            Tracker::new(
                "Liza",
                GeoPoint {
                    latitude: 55.753130,
                    longitude: 37.633115,
                },
                "tracker3_75dp",
                "tracker3",
            ),
        ])
    }

    /// All trackers in cycling order.
    pub fn all(&self) -> &[Tracker] {
        &self.trackers
    }

    /// Get the tracker at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Tracker> {
        self.trackers.get(index)
    }

    /// Number of trackers in the registry.
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    /// Whether the registry has no trackers.
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    /// Iterate over trackers in cycling order.
    pub fn iter(&self) -> impl Iterator<Item = &Tracker> {
        self.trackers.iter()
    }
}
