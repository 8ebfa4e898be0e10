//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, indicator clicks, key presses)
/// - Timer expiries (animation phases, auto-advance, submission delay)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
