// SPDX-License-Identifier: MPL-2.0
//! Contact form state and client-side validation.
//!
//! Nothing is sent anywhere: a valid form is acknowledged and cleared.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Acknowledgement shown after a valid submission.
pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Returns true if `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    General,
    Support,
    Sales,
    Partnership,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::General,
        Subject::Support,
        Subject::Sales,
        Subject::Partnership,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Subject::General => "General Inquiry",
            Subject::Support => "Technical Support",
            Subject::Sales => "Sales",
            Subject::Partnership => "Partnership",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First failing check of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    InvalidEmail,
    MissingSubject,
    MissingMessage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::MissingName => "Please enter your name.",
            ValidationError::InvalidEmail => "Please enter a valid email address.",
            ValidationError::MissingSubject => "Please select a subject.",
            ValidationError::MissingMessage => "Please enter your message.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

impl ContactForm {
    /// Checks the fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.trim().is_empty() || !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.subject.is_none() {
            return Err(ValidationError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    /// Validates and, on success, clears every field.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        self.validate()?;
        tracing::info!(subject = ?self.subject, "contact form accepted");
        *self = Self::default();
        Ok(())
    }
}
