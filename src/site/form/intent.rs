//! Intents for the contact form.

use crate::mvi::Intent;

use super::state::FormField;

#[derive(Debug, Clone)]
pub enum FormIntent {
    Focus(FormField),
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// Validation passed; lock the form while sending.
    SubmitAccepted,
    /// Simulated submission finished; clear every field.
    SubmitCompleted,
}

impl Intent for FormIntent {}
