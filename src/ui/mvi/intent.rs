//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (item clicks, retry, selection)
/// - Fetch lifecycle events (started, resolved)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
