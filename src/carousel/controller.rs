use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::dispatch_mvi;
use crate::schedule::{Scheduler, TimerHandle};

use super::intent::CarouselIntent;
use super::reducer::CarouselReducer;
use super::state::{CarouselState, Direction, TurnPhase};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel needs at least one page")]
    NoPages,
}

/// Timer payloads owned by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselTimer {
    TurnOutElapsed,
    TurnInElapsed,
    AutoAdvance,
    /// Quiet period after a manual click ended.
    Rearm,
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTiming {
    pub turn_out: Duration,
    pub turn_in: Duration,
    pub auto_advance: Duration,
    pub quiet_period: Duration,
    /// Visible fraction of the carousel region at which auto-advance arms.
    pub visibility_threshold: f32,
    pub auto_advance_enabled: bool,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            turn_out: Duration::from_millis(400),
            turn_in: Duration::from_millis(400),
            auto_advance: Duration::from_millis(8_000),
            quiet_period: Duration::from_millis(10_000),
            visibility_threshold: 0.5,
            auto_advance_enabled: true,
        }
    }
}

impl From<&CarouselConfig> for CarouselTiming {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            turn_out: Duration::from_millis(config.turn_out_ms),
            turn_in: Duration::from_millis(config.turn_in_ms),
            auto_advance: Duration::from_millis(config.auto_advance_ms),
            quiet_period: Duration::from_millis(config.quiet_period_ms),
            visibility_threshold: config.visibility_threshold,
            auto_advance_enabled: config.auto_advance,
        }
    }
}

/// Marks a page surface carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMarks {
    pub active: bool,
    pub turning_out: bool,
    pub turning_in: bool,
}

/// Everything a view needs to draw the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub counter: String,
    pub indicators: Vec<bool>,
    pub pages: Vec<PageMarks>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub direction: Option<Direction>,
}

/// Owned carousel controller.
///
/// All mutation goes through the reducer; this type adds the side effects:
/// phase timers, the auto-advance interval and the click debounce.
#[derive(Debug)]
pub struct Carousel<S> {
    total_pages: usize,
    state: CarouselState,
    timing: CarouselTiming,
    scheduler: S,
    auto_advance: Option<TimerHandle>,
    rearm: Option<TimerHandle>,
    visibility: f32,
    /// Any part of the region overlaps the viewport.
    on_screen: bool,
}

impl<S> Carousel<S>
where
    S: Scheduler<Event = CarouselTimer>,
{
    pub fn new(total_pages: usize, timing: CarouselTiming, scheduler: S) -> Result<Self, CarouselError> {
        if total_pages == 0 {
            return Err(CarouselError::NoPages);
        }
        Ok(Self {
            total_pages,
            state: CarouselState::default(),
            timing,
            scheduler,
            auto_advance: None,
            rearm: None,
            visibility: 0.0,
            on_screen: false,
        })
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn auto_advance_active(&self) -> bool {
        self.auto_advance
            .is_some_and(|handle| self.scheduler.is_pending(handle))
    }

    pub fn rearm_pending(&self) -> bool {
        self.rearm.is_some_and(|handle| self.scheduler.is_pending(handle))
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn next(&mut self) -> bool {
        let current = self.current_page();
        if current + 1 >= self.total_pages {
            return false;
        }
        self.go_to(current + 1, Direction::Next)
    }

    pub fn prev(&mut self) -> bool {
        let current = self.current_page();
        if current == 0 {
            return false;
        }
        self.go_to(current - 1, Direction::Prev)
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        let direction = Direction::between(self.current_page(), index);
        self.go_to(index, direction)
    }

    /// Arrow keys turn pages while any part of the carousel is on screen.
    pub fn on_key(&mut self, key: CarouselKey) -> bool {
        if !self.on_screen {
            trace!(?key, "carousel: key ignored, region off screen");
            return false;
        }
        match key {
            CarouselKey::ArrowRight => self.next(),
            CarouselKey::ArrowLeft => self.prev(),
            CarouselKey::Other => false,
        }
    }

    /// Previous button click. A disabled button swallows the click entirely.
    pub fn click_prev(&mut self) -> bool {
        if !self.prev_enabled() {
            return false;
        }
        self.note_manual_interaction();
        self.prev()
    }

    /// Next button click. A disabled button swallows the click entirely.
    pub fn click_next(&mut self) -> bool {
        if !self.next_enabled() {
            return false;
        }
        self.note_manual_interaction();
        self.next()
    }

    pub fn click_indicator(&mut self, index: usize) -> bool {
        if index >= self.total_pages {
            return false;
        }
        self.note_manual_interaction();
        self.jump_to(index)
    }

    /// Feed the visible fraction of the carousel region.
    ///
    /// Auto-advance arms when the fraction crosses up through the threshold
    /// and disarms (together with any pending re-arm) when it drops below.
    pub fn set_visibility(&mut self, ratio: f32) {
        let ratio = ratio.clamp(0.0, 1.0);
        let threshold = self.timing.visibility_threshold;
        let was_in_view = self.visibility >= threshold;
        let in_view = ratio >= threshold;
        self.visibility = ratio;

        match (was_in_view, in_view) {
            (false, true) => {
                debug!(ratio, "carousel: entered view");
                self.arm();
            }
            (true, false) => {
                debug!(ratio, "carousel: left view");
                self.disarm();
                self.cancel_rearm();
            }
            _ => {}
        }
    }

    /// Feed whether the carousel region overlaps the viewport at all.
    pub fn set_on_screen(&mut self, on_screen: bool) {
        self.on_screen = on_screen;
    }

    pub fn visibility(&self) -> f32 {
        self.visibility
    }

    /// Fire every timer due up to `now` (time since the page-view started).
    pub fn advance(&mut self, now: Duration) {
        while let Some(timer) = self.scheduler.pop_due(now) {
            self.on_timer(timer);
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page() != 0
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page() != self.total_pages - 1
    }

    pub fn counter_text(&self) -> String {
        format!("Page {} of {}", self.current_page() + 1, self.total_pages)
    }

    pub fn page_marks(&self, index: usize) -> PageMarks {
        match self.state {
            CarouselState::Idle { current } => PageMarks {
                active: index == current,
                ..PageMarks::default()
            },
            CarouselState::Transitioning {
                from,
                phase: TurnPhase::TurningOut,
                ..
            } => PageMarks {
                active: index == from,
                turning_out: index == from,
                turning_in: false,
            },
            CarouselState::Transitioning {
                to,
                phase: TurnPhase::TurningIn,
                ..
            } => PageMarks {
                active: false,
                turning_out: false,
                turning_in: index == to,
            },
        }
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        let current = self.current_page();
        CarouselSnapshot {
            counter: self.counter_text(),
            indicators: (0..self.total_pages).map(|index| index == current).collect(),
            pages: (0..self.total_pages).map(|index| self.page_marks(index)).collect(),
            prev_enabled: self.prev_enabled(),
            next_enabled: self.next_enabled(),
            direction: self.state.direction(),
        }
    }

    fn go_to(&mut self, target: usize, direction: Direction) -> bool {
        if self.state.is_transitioning() {
            trace!(target, "carousel: request rejected, turn in flight");
            return false;
        }
        let from = self.current_page();
        dispatch_mvi!(
            self,
            state,
            CarouselReducer,
            CarouselIntent::GoTo {
                target,
                direction,
                total_pages: self.total_pages,
            }
        );
        if !self.state.is_transitioning() {
            trace!(target, from, "carousel: request rejected");
            return false;
        }
        debug!(from, target, ?direction, "carousel: page turn started");
        self.scheduler
            .schedule_once(self.timing.turn_out, CarouselTimer::TurnOutElapsed);
        true
    }

    fn on_timer(&mut self, timer: CarouselTimer) {
        match timer {
            CarouselTimer::TurnOutElapsed => {
                dispatch_mvi!(self, state, CarouselReducer, CarouselIntent::TurnOutElapsed);
                self.scheduler
                    .schedule_once(self.timing.turn_in, CarouselTimer::TurnInElapsed);
            }
            CarouselTimer::TurnInElapsed => {
                dispatch_mvi!(self, state, CarouselReducer, CarouselIntent::TurnInElapsed);
                debug!(page = self.current_page(), "carousel: page turn settled");
            }
            CarouselTimer::AutoAdvance => {
                if self.state.is_transitioning() {
                    return;
                }
                let target = (self.current_page() + 1) % self.total_pages;
                trace!(target, "carousel: auto-advance");
                self.go_to(target, Direction::Next);
            }
            CarouselTimer::Rearm => {
                self.rearm = None;
                if self.visibility >= self.timing.visibility_threshold {
                    self.arm();
                } else {
                    trace!("carousel: quiet period over, region not in view");
                }
            }
        }
    }

    fn note_manual_interaction(&mut self) {
        self.disarm();
        self.cancel_rearm();
        if self.timing.auto_advance_enabled {
            self.rearm = Some(
                self.scheduler
                    .schedule_once(self.timing.quiet_period, CarouselTimer::Rearm),
            );
        }
    }

    fn arm(&mut self) {
        if !self.timing.auto_advance_enabled || self.auto_advance_active() {
            return;
        }
        let handle = self
            .scheduler
            .schedule_repeating(self.timing.auto_advance, CarouselTimer::AutoAdvance);
        self.auto_advance = Some(handle);
        debug!("carousel: auto-advance armed");
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.auto_advance.take() {
            if self.scheduler.cancel(handle) {
                debug!("carousel: auto-advance disarmed");
            }
        }
    }

    fn cancel_rearm(&mut self) {
        if let Some(handle) = self.rearm.take() {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TimerQueue;

    fn carousel(pages: usize) -> Carousel<TimerQueue<CarouselTimer>> {
        Carousel::new(pages, CarouselTiming::default(), TimerQueue::new()).unwrap()
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn zero_pages_is_rejected() {
        let result = Carousel::new(0, CarouselTiming::default(), TimerQueue::new());
        assert_eq!(result.err(), Some(CarouselError::NoPages));
    }

    #[test]
    fn marks_follow_both_phases() {
        let mut carousel = carousel(4);
        assert!(carousel.jump_to(2));

        assert_eq!(
            carousel.page_marks(0),
            PageMarks {
                active: true,
                turning_out: true,
                turning_in: false
            }
        );
        assert_eq!(carousel.page_marks(2), PageMarks::default());

        carousel.advance(ms(400));
        assert_eq!(carousel.page_marks(0), PageMarks::default());
        assert!(carousel.page_marks(2).turning_in);
        assert!(!carousel.page_marks(2).active);

        carousel.advance(ms(800));
        assert_eq!(
            carousel.page_marks(2),
            PageMarks {
                active: true,
                ..PageMarks::default()
            }
        );
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn counter_updates_only_when_turn_settles() {
        let mut carousel = carousel(4);
        carousel.next();
        assert_eq!(carousel.counter_text(), "Page 1 of 4");
        carousel.advance(ms(799));
        assert_eq!(carousel.counter_text(), "Page 1 of 4");
        carousel.advance(ms(800));
        assert_eq!(carousel.counter_text(), "Page 2 of 4");
    }

    #[test]
    fn single_page_carousel_never_moves() {
        let mut carousel = carousel(1);
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.prev_enabled());
        assert!(!carousel.next_enabled());

        carousel.set_visibility(1.0);
        carousel.advance(ms(80_000));
        assert_eq!(carousel.current_page(), 0);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn disabled_button_click_does_not_touch_auto_advance() {
        let mut carousel = carousel(4);
        carousel.set_visibility(1.0);
        assert!(!carousel.click_prev());
        assert!(carousel.auto_advance_active());
        assert!(!carousel.rearm_pending());
    }

    #[test]
    fn auto_advance_disabled_by_timing() {
        let timing = CarouselTiming {
            auto_advance_enabled: false,
            ..CarouselTiming::default()
        };
        let mut carousel = Carousel::new(4, timing, TimerQueue::new()).unwrap();
        carousel.set_visibility(1.0);
        assert!(!carousel.auto_advance_active());
        carousel.click_next();
        assert!(!carousel.rearm_pending());
    }
}
