//! Reducer for the contact form.

use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (FormState::Editing { fields, .. }, FormIntent::Focus(focused)) => {
                FormState::Editing { fields, focused }
            }
            (FormState::Editing { fields, focused }, FormIntent::FocusNext) => FormState::Editing {
                fields,
                focused: focused.next(),
            },
            (FormState::Editing { fields, focused }, FormIntent::FocusPrev) => FormState::Editing {
                fields,
                focused: focused.prev(),
            },
            (
                FormState::Editing {
                    mut fields,
                    focused,
                },
                FormIntent::Input(ch),
            ) => {
                if !ch.is_control() {
                    fields.get_mut(focused).push(ch);
                }
                FormState::Editing { fields, focused }
            }
            (
                FormState::Editing {
                    mut fields,
                    focused,
                },
                FormIntent::Backspace,
            ) => {
                fields.get_mut(focused).pop();
                FormState::Editing { fields, focused }
            }
            (FormState::Editing { fields, .. }, FormIntent::SubmitAccepted) => {
                FormState::Sending { fields }
            }
            (FormState::Sending { .. }, FormIntent::SubmitCompleted) => FormState::default(),
            (other, _) => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::form::state::{FormField, FormFields};

    fn type_text(mut state: FormState, text: &str) -> FormState {
        for ch in text.chars() {
            state = FormReducer::reduce(state, FormIntent::Input(ch));
        }
        state
    }

    #[test]
    fn input_goes_to_focused_field() {
        let state = type_text(FormState::default(), "Ada");
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        let state = type_text(state, "ada@example.com");
        assert_eq!(state.fields().name, "Ada");
        assert_eq!(state.fields().email, "ada@example.com");
    }

    #[test]
    fn backspace_removes_last_char() {
        let state = type_text(FormState::default(), "Adam");
        let state = FormReducer::reduce(state, FormIntent::Backspace);
        assert_eq!(state.fields().name, "Ada");
    }

    #[test]
    fn control_chars_are_dropped() {
        let state = type_text(FormState::default(), "a\tb\n");
        assert_eq!(state.fields().name, "ab");
    }

    #[test]
    fn sending_ignores_edits() {
        let state = type_text(FormState::default(), "Ada");
        let state = FormReducer::reduce(state, FormIntent::SubmitAccepted);
        let state = FormReducer::reduce(state, FormIntent::Input('x'));
        let state = FormReducer::reduce(state, FormIntent::Focus(FormField::Phone));
        assert!(state.is_sending());
        assert_eq!(state.fields().name, "Ada");
    }

    #[test]
    fn completion_resets_form() {
        let state = FormState::Sending {
            fields: FormFields {
                name: "Ada".into(),
                ..FormFields::default()
            },
        };
        let state = FormReducer::reduce(state, FormIntent::SubmitCompleted);
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn completion_while_editing_is_noop() {
        let state = type_text(FormState::default(), "Ada");
        let after = FormReducer::reduce(state.clone(), FormIntent::SubmitCompleted);
        assert_eq!(after, state);
    }
}
