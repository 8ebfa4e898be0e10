//! Paged catalogue carousel.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `Idle` / `Transitioning` page-turn state machine
//! - `intent.rs` - page requests and animation phase expiries
//! - `reducer.rs` - state transitions
//! - `controller.rs` - owns the state, the timers and the auto-advance
//!   debounce; the only place that talks to a [`Scheduler`](crate::schedule::Scheduler)

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{
    Carousel, CarouselError, CarouselKey, CarouselSnapshot, CarouselTimer, CarouselTiming,
    PageMarks,
};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, Direction, TurnPhase};
