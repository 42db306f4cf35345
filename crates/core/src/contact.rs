//! Contact form

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::config::StorefrontConfig;

/// Contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name
    Name,
    /// Sender email address
    Email,
    /// Message body
    Message,
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

/// Contact form errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormError {
    /// A field was left empty. Shown to the shopper as "Please fill in all fields".
    #[error("Please fill in all fields")]
    MissingField(ContactField),
}

/// Contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name
    pub name: String,

    /// Sender email address
    pub email: String,

    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Check every field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ContactFormError::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactFormError::MissingField(field)))
    }

    /// Validate the form and return the confirmation page to navigate to.
    ///
    /// # Errors
    ///
    /// Returns [`ContactFormError::MissingField`] if any field is empty.
    pub fn submit<'c>(&self, config: &'c StorefrontConfig) -> Result<&'c str, ContactFormError> {
        self.validate()?;

        Ok(config.contact_confirmation_url.as_str())
    }
}
