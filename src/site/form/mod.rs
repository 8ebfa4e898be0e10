//! Contact form: required-field and email validation, plus a simulated
//! submission that resets the form after a delay.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - field values, focus, sending flag
//! - `intent.rs` - edits and submission lifecycle
//! - `reducer.rs` - state transitions
//! - `validate.rs` - the checks run before a submission is accepted
//! - `controller.rs` - submission timer and user notices

mod controller;
mod intent;
mod reducer;
mod state;
mod validate;

pub use controller::{ContactForm, FormTimer, SubmitOutcome, THANK_YOU};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormFields, FormState, SEND_LABEL, SENDING_LABEL};
pub use validate::{validate, FormError};
