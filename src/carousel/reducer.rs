//! Reducer for the catalogue carousel.

use crate::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{CarouselState, TurnPhase};

/// Reducer for page-turn transitions.
///
/// Pure function: scheduling the phase timers is done by
/// [`Carousel`](super::Carousel) around the dispatch.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::GoTo {
                target,
                direction,
                total_pages,
            } => match state {
                CarouselState::Idle { current } if target < total_pages && target != current => {
                    CarouselState::Transitioning {
                        from: current,
                        to: target,
                        direction,
                        phase: TurnPhase::TurningOut,
                    }
                }
                other => other,
            },

            CarouselIntent::TurnOutElapsed => match state {
                CarouselState::Transitioning {
                    from,
                    to,
                    direction,
                    phase: TurnPhase::TurningOut,
                } => CarouselState::Transitioning {
                    from,
                    to,
                    direction,
                    phase: TurnPhase::TurningIn,
                },
                other => other,
            },

            CarouselIntent::TurnInElapsed => match state {
                CarouselState::Transitioning {
                    to,
                    phase: TurnPhase::TurningIn,
                    ..
                } => CarouselState::Idle { current: to },
                other => other,
            },
        }
    }
}
