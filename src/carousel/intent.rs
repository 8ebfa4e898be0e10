//! Intents for the catalogue carousel.

use crate::mvi::Intent;

use super::state::Direction;

/// Intents that can be dispatched to the carousel reducer.
#[derive(Debug, Clone)]
pub enum CarouselIntent {
    /// Request a page turn. Only honoured from `Idle`, for an in-range page
    /// different from the current one.
    GoTo {
        target: usize,
        direction: Direction,
        total_pages: usize,
    },

    /// The turning-out delay elapsed: hand over to the target page.
    TurnOutElapsed,

    /// The turning-in delay elapsed: the target page becomes active.
    TurnInElapsed,
}

impl Intent for CarouselIntent {}
