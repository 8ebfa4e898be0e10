use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::state::{FormField, FormFields};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Why a submission was refused. `Display` is the text shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Required fields first, then the email pattern.
pub fn validate(fields: &FormFields) -> Result<(), FormError> {
    let missing = FormField::ALL
        .into_iter()
        .filter(|field| field.is_required())
        .any(|field| fields.get(field).trim().is_empty());
    if missing {
        return Err(FormError::MissingFields);
    }
    if !EMAIL.is_match(&fields.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}
