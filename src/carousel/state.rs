//! State for the catalogue carousel.

use crate::mvi::UiState;

/// Which way a page turn goes. Recorded for views; both directions share
/// the same timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Direction implied by jumping from `from` to `to`.
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Next
        } else {
            Direction::Prev
        }
    }
}

/// Half of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Source page still active, marked turning-out.
    TurningOut,
    /// Source cleared, target marked turning-in.
    TurningIn,
}

/// Carousel page-turn state machine.
///
/// At most one transition is in flight; `current_page` only changes when
/// the transition settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselState {
    Idle {
        current: usize,
    },
    Transitioning {
        from: usize,
        to: usize,
        direction: Direction,
        phase: TurnPhase,
    },
}

impl Default for CarouselState {
    fn default() -> Self {
        CarouselState::Idle { current: 0 }
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    /// Page the counter, indicators and buttons reflect.
    pub fn current_page(&self) -> usize {
        match self {
            Self::Idle { current } => *current,
            Self::Transitioning { from, .. } => *from,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Transitioning { direction, .. } => Some(*direction),
            Self::Idle { .. } => None,
        }
    }

    pub fn phase(&self) -> Option<TurnPhase> {
        match self {
            Self::Transitioning { phase, .. } => Some(*phase),
            Self::Idle { .. } => None,
        }
    }
}
