//! Base trait for UI state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Cloneable snapshots (views render from a borrowed copy)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
