//! Tracker selection cursor.
//!
//! Tracks which tracker is "current" for the next-tracker cycling feature.
//! The cursor stores only an index; the registry it indexes into is owned
//! by the screen coordinator and passed in per call. Advancing wraps around
//! forever: advancing `len` times returns to the starting tracker.

use thiserror::Error;

use crate::registry::{Tracker, TrackerRegistry};

/// Errors that can occur during cursor operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    /// No trackers are configured; selection and cycling are meaningless.
    ///
    /// Callers absorb this as a no-op rather than propagating it.
    #[error("tracker registry is empty")]
    EmptyRegistry,
}

/// Cyclic cursor over a tracker registry.
///
/// Invariant: `index < registry.len()` whenever the registry is non-empty.
#[derive(Debug, Default)]
pub struct SelectionCursor {
    index: usize,
}

impl SelectionCursor {
    /// Create a cursor positioned on the first tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current index into the registry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The currently selected tracker.
    pub fn current<'a>(&self, registry: &'a TrackerRegistry) -> Result<&'a Tracker, CursorError> {
        registry.get(self.index).ok_or(CursorError::EmptyRegistry)
    }

    /// Advance to the next tracker, wrapping at the end of the registry.
    ///
    /// Returns the newly selected tracker. On an empty registry the cursor
    /// is left untouched and `EmptyRegistry` is returned.
    pub fn advance<'a>(
        &mut self,
        registry: &'a TrackerRegistry,
    ) -> Result<&'a Tracker, CursorError> {
        if registry.is_empty() {
            return Err(CursorError::EmptyRegistry);
        }

        self.index = (self.index + 1) % registry.len();
        self.current(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;

    fn registry_of(names: &[&str]) -> TrackerRegistry {
        TrackerRegistry::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    Tracker::new(
                        *name,
                        GeoPoint {
                            latitude: i as f64,
                            longitude: i as f64,
                        },
                        "icon",
                        "avatar",
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_current_starts_at_first_tracker() {
        let registry = registry_of(&["a", "b", "c"]);
        let cursor = SelectionCursor::new();
        assert_eq!(cursor.current(&registry).unwrap().name, "a");
    }

    #[test]
    fn test_advance_cycles_through_all_trackers() {
        // Scenario from the design: A -> B -> C -> A.
        let registry = registry_of(&["a", "b", "c"]);
        let mut cursor = SelectionCursor::new();

        assert_eq!(cursor.advance(&registry).unwrap().name, "b");
        assert_eq!(cursor.advance(&registry).unwrap().name, "c");
        assert_eq!(cursor.advance(&registry).unwrap().name, "a");
    }

    #[test]
    fn test_advance_on_empty_registry_is_error_not_panic() {
        let registry = TrackerRegistry::default();
        let mut cursor = SelectionCursor::new();

        assert_eq!(
            cursor.advance(&registry).unwrap_err(),
            CursorError::EmptyRegistry
        );
        // Cursor is untouched for when a registry would exist.
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_current_on_empty_registry() {
        let registry = TrackerRegistry::default();
        let cursor = SelectionCursor::new();
        assert_eq!(
            cursor.current(&registry).unwrap_err(),
            CursorError::EmptyRegistry
        );
    }

    #[test]
    fn test_single_tracker_always_selected() {
        let registry = registry_of(&["only"]);
        let mut cursor = SelectionCursor::new();

        for _ in 0..5 {
            assert_eq!(cursor.advance(&registry).unwrap().name, "only");
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_advancing_len_times_returns_to_start(size in 1usize..32) {
                let names: Vec<String> = (0..size).map(|i| format!("t{}", i)).collect();
                let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
                let registry = registry_of(&name_refs);

                let mut cursor = SelectionCursor::new();
                let start = cursor.current(&registry).unwrap().name.clone();

                for _ in 0..size {
                    cursor.advance(&registry).unwrap();
                }

                prop_assert_eq!(cursor.current(&registry).unwrap().name.clone(), start);
            }

            #[test]
            fn test_index_stays_in_bounds(size in 1usize..32, steps in 0usize..100) {
                let names: Vec<String> = (0..size).map(|i| format!("t{}", i)).collect();
                let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
                let registry = registry_of(&name_refs);

                let mut cursor = SelectionCursor::new();
                for _ in 0..steps {
                    cursor.advance(&registry).unwrap();
                    prop_assert!(cursor.index() < size);
                }
            }
        }
    }
}
