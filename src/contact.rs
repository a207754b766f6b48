//! Contact form validation and simulated submission.
//!
//! DESIGN
//! ======
//! Validation collects every failing field so each one can be marked, but
//! only the first error in field order (name, email, message) is shown in
//! the status region. A valid submission is never sent anywhere; the form is
//! reset and the status region says so.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{CLASS_HIDDEN, FIELD_ERROR_CLASSES, STATUS_ERROR_CLASSES, STATUS_SUCCESS_CLASSES};
use crate::effect::{Effect, Target};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been validated and is ready to send (frontend demo only).";

/// `local@domain.tld` with no whitespace and a single `@` per part.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Form controls, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The control's `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Raw values as read from the form. Missing controls read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trimmed values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your message.")]
    MissingMessage,
    #[error("Message should be at least {min} characters.")]
    MessageTooShort { min: usize },
}

impl ValidationError {
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::MissingName => Field::Name,
            Self::MissingEmail | Self::InvalidEmail => Field::Email,
            Self::MissingMessage | Self::MessageTooShort { .. } => Field::Message,
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Length in UTF-16 code units, the unit a browser reports for form text.
#[must_use]
pub fn message_len(message: &str) -> usize {
    message.encode_utf16().count()
}

/// Validate a submission. Errors come back in field order, at most one per field.
pub fn validate(submission: &ContactSubmission, min_message_chars: usize) -> Result<ValidContact, Vec<ValidationError>> {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let message = submission.message.trim();
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(ValidationError::MissingName);
    }

    if email.is_empty() {
        errors.push(ValidationError::MissingEmail);
    } else if !is_valid_email(email) {
        errors.push(ValidationError::InvalidEmail);
    }

    if message.is_empty() {
        errors.push(ValidationError::MissingMessage);
    } else if message_len(message) < min_message_chars {
        errors.push(ValidationError::MessageTooShort { min: min_message_chars });
    }

    if errors.is_empty() {
        Ok(ValidContact { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    } else {
        Err(errors)
    }
}

/// Submission outcome shown in the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    has_status: bool,
    min_message_chars: usize,
}

impl ContactForm {
    #[must_use]
    pub fn new(has_status: bool, min_message_chars: usize) -> Self {
        Self { has_status, min_message_chars }
    }

    /// Handle a submit event.
    pub fn submit(&self, submission: &ContactSubmission) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];
        for class in FIELD_ERROR_CLASSES {
            effects.push(Effect::class(Target::FormInputs, class, false));
        }

        match validate(submission, self.min_message_chars) {
            Ok(_) => {
                log::debug!("contact form validated");
                effects.extend(self.status(StatusKind::Success, SUCCESS_MESSAGE));
                effects.push(Effect::ResetForm);
            }
            Err(errors) => {
                for error in &errors {
                    for class in FIELD_ERROR_CLASSES {
                        effects.push(Effect::class(Target::Field(error.field()), class, true));
                    }
                }
                if let Some(first) = errors.first() {
                    effects.extend(self.status(StatusKind::Error, &first.to_string()));
                }
            }
        }
        effects
    }

    fn status(&self, kind: StatusKind, message: &str) -> Vec<Effect> {
        if !self.has_status {
            return Vec::new();
        }
        let mut effects = vec![Effect::class(Target::FormStatus, CLASS_HIDDEN, false)];
        for class in STATUS_ERROR_CLASSES.into_iter().chain(STATUS_SUCCESS_CLASSES) {
            effects.push(Effect::class(Target::FormStatus, class, false));
        }
        let palette = match kind {
            StatusKind::Error => STATUS_ERROR_CLASSES,
            StatusKind::Success => STATUS_SUCCESS_CLASSES,
        };
        for class in palette {
            effects.push(Effect::class(Target::FormStatus, class, true));
        }
        effects.push(Effect::SetText { target: Target::FormStatus, text: message.to_owned() });
        effects
    }
}
