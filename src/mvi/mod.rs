//! Model-View-Intent (MVI) primitives shared by the page controllers.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a widget's state
//! - **Intent**: User actions (clicks, key presses) or timer expiries
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Controllers own the side effects (scheduling timers, logging) and call
//! the reducer around them, so transitions stay testable in isolation.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
#[macro_export]
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}
