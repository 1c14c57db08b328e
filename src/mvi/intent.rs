//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing, submitting the search form)
/// - System events (a lookup settling with an outcome)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
