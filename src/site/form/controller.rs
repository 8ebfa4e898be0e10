use std::time::Duration;

use tracing::{debug, info};

use crate::config::FormConfig;
use crate::dispatch_mvi;
use crate::schedule::Scheduler;

use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::state::{FormField, FormState};
use super::validate::{validate, FormError};

/// Shown once the simulated submission completes.
pub const THANK_YOU: &str = "Thank you for your message! We'll get back to you within 24 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTimer {
    SubmissionComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed, submission in flight.
    Accepted,
    /// Validation failed; the error text is the notice for the user.
    Rejected(FormError),
    /// A submission is already in flight.
    Busy,
}

/// Contact form controller: reducer state plus the submission timer.
#[derive(Debug)]
pub struct ContactForm<S> {
    state: FormState,
    submit_delay: Duration,
    scheduler: S,
}

impl<S> ContactForm<S>
where
    S: Scheduler<Event = FormTimer>,
{
    pub fn new(config: &FormConfig, scheduler: S) -> Self {
        Self {
            state: FormState::default(),
            submit_delay: Duration::from_millis(config.submit_delay_ms),
            scheduler,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, state, FormReducer, intent);
    }

    pub fn focus(&mut self, field: FormField) {
        self.dispatch(FormIntent::Focus(field));
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_sending() {
            return SubmitOutcome::Busy;
        }
        if let Err(err) = validate(self.state.fields()) {
            debug!(%err, "form: submission rejected");
            return SubmitOutcome::Rejected(err);
        }
        self.dispatch(FormIntent::SubmitAccepted);
        self.scheduler
            .schedule_once(self.submit_delay, FormTimer::SubmissionComplete);
        info!("form: submission accepted");
        SubmitOutcome::Accepted
    }

    /// Fire due timers. Returns the notice to show when a submission
    /// completed in this step.
    pub fn advance(&mut self, now: Duration) -> Option<&'static str> {
        let mut notice = None;
        while let Some(timer) = self.scheduler.pop_due(now) {
            match timer {
                FormTimer::SubmissionComplete => {
                    self.dispatch(FormIntent::SubmitCompleted);
                    debug!("form: submission complete, form reset");
                    notice = Some(THANK_YOU);
                }
            }
        }
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TimerQueue;
    use crate::site::form::state::{SEND_LABEL, SENDING_LABEL};

    fn form() -> ContactForm<TimerQueue<FormTimer>> {
        ContactForm::new(&FormConfig::default(), TimerQueue::new())
    }

    fn fill(form: &mut ContactForm<TimerQueue<FormTimer>>, values: [&str; 4]) {
        for (field, value) in FormField::ALL.into_iter().zip(values) {
            form.focus(field);
            for ch in value.chars() {
                form.dispatch(FormIntent::Input(ch));
            }
        }
    }

    #[test]
    fn empty_form_is_rejected() {
        let mut form = form();
        assert_eq!(form.submit(), SubmitOutcome::Rejected(FormError::MissingFields));
        assert!(!form.state().is_sending());
    }

    #[test]
    fn submission_cycle_resets_after_delay() {
        let mut form = form();
        fill(&mut form, ["Ada", "ada@example.com", "555", "Kitchens"]);

        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert_eq!(form.state().submit_label(), SENDING_LABEL);
        assert_eq!(form.submit(), SubmitOutcome::Busy);

        assert_eq!(form.advance(Duration::from_millis(1_999)), None);
        assert!(form.state().is_sending());

        assert_eq!(form.advance(Duration::from_millis(2_000)), Some(THANK_YOU));
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.state().submit_label(), SEND_LABEL);
    }

    #[test]
    fn bad_email_keeps_values() {
        let mut form = form();
        fill(&mut form, ["Ada", "ada.example.com", "555", "Kitchens"]);
        assert_eq!(form.submit(), SubmitOutcome::Rejected(FormError::InvalidEmail));
        assert_eq!(form.state().fields().email, "ada.example.com");
    }
}
