//! State for the contact form.

use crate::mvi::UiState;

/// Submit button text while idle.
pub const SEND_LABEL: &str = "Send Message";

/// Submit button text while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Service,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Service => "Service",
            FormField::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Message)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Service => &mut self.service,
            FormField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing {
        fields: FormFields,
        focused: FormField,
    },
    /// Submission accepted; inputs are locked until it completes.
    Sending { fields: FormFields },
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing {
            fields: FormFields::default(),
            focused: FormField::default(),
        }
    }
}

impl UiState for FormState {}

impl FormState {
    pub fn fields(&self) -> &FormFields {
        match self {
            Self::Editing { fields, .. } | Self::Sending { fields } => fields,
        }
    }

    pub fn focused(&self) -> Option<FormField> {
        match self {
            Self::Editing { focused, .. } => Some(*focused),
            Self::Sending { .. } => None,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_sending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn only_message_is_optional() {
        let optional: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|field| !field.is_required())
            .collect();
        assert_eq!(optional, vec![FormField::Message]);
    }

    #[test]
    fn button_reflects_sending() {
        let editing = FormState::default();
        assert_eq!(editing.submit_label(), SEND_LABEL);
        assert!(editing.submit_enabled());

        let sending = FormState::Sending {
            fields: FormFields::default(),
        };
        assert_eq!(sending.submit_label(), SENDING_LABEL);
        assert!(!sending.submit_enabled());
        assert_eq!(sending.focused(), None);
    }
}
