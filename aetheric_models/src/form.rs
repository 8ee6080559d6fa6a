use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::inquiry::{
    ContactInquiryDraft, InquiryAuthorName, InquiryEmail, InquiryMessage, ServiceCategory,
};

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Service,
    Message,
    Honeypot,
}

/// Validation failure for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    MessageTooShort,
}

impl FieldError {
    /// Error text rendered next to the offending field.
    pub fn message(self, field: FormField) -> &'static str {
        match (field, self) {
            (FormField::Name, _) => "Name is required",
            (FormField::Email, FieldError::InvalidEmail) => "Please enter a valid email",
            (FormField::Email, _) => "Email is required",
            (FormField::Message, FieldError::MessageTooShort) => {
                "Message must be at least 10 characters"
            }
            (FormField::Message, _) => "Message is required",
            _ => "Invalid value",
        }
    }
}

/// Per-field validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

/// Current contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: ServiceCategory,
    pub message: String,
    pub honeypot: String,
}

impl FormValues {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            // The service picker only offers known labels; anything else
            // keeps the current selection.
            FormField::Service => {
                if let Ok(service) = value.parse() {
                    self.service = service;
                }
            }
            FormField::Message => self.message = value,
            FormField::Honeypot => self.honeypot = value,
        }
    }

    /// Field-level validation, mirroring the checks the submission endpoint
    /// applies before accepting an inquiry.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if InquiryAuthorName::try_new(self.name.clone()).is_err() {
            errors.insert(FormField::Name, FieldError::Required);
        }

        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, FieldError::Required);
        } else if InquiryEmail::try_new(self.email.clone()).is_err() {
            errors.insert(FormField::Email, FieldError::InvalidEmail);
        }

        if self.message.trim().is_empty() {
            errors.insert(FormField::Message, FieldError::Required);
        } else if InquiryMessage::try_new(self.message.clone()).is_err() {
            errors.insert(FormField::Message, FieldError::MessageTooShort);
        }

        errors
    }

    /// Builds the wire payload, trimming free-text fields.
    pub fn to_draft(&self) -> ContactInquiryDraft {
        ContactInquiryDraft {
            name: self.name.trim().into(),
            email: self.email.trim().into(),
            company: Some(self.company.trim().into()),
            service: Some(self.service),
            message: self.message.trim().into(),
            honeypot: self.honeypot.clone(),
        }
    }
}

/// Lifecycle phase of the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Success,
    Error,
    Closed,
}

/// Client-local form state: field values, per-field errors, the current
/// lifecycle phase and a scheduled dismissal deadline, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub phase: FormPhase,
    pub dismiss_at: Option<DateTime<Utc>>,
}
