use std::{str::FromStr, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape check applied to submitted email addresses (`local@domain.tld`).
pub static INQUIRY_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A contact inquiry that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub author: InquiryAuthor,
    pub company: Option<InquiryCompany>,
    pub service: ServiceCategory,
    pub message: InquiryMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryAuthor {
    pub name: InquiryAuthorName,
    pub email: InquiryEmail,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(regex = INQUIRY_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryCompany(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryMessage(String);

/// Service offerings an inquiry can relate to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[default]
    #[serde(rename = "AI Consulting")]
    AiConsulting,
    Automation,
    Analytics,
    Chatbots,
    #[serde(rename = "Predictive Models")]
    PredictiveModels,
}

impl ServiceCategory {
    pub const ALL: [Self; 5] = [
        Self::AiConsulting,
        Self::Automation,
        Self::Analytics,
        Self::Chatbots,
        Self::PredictiveModels,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AiConsulting => "AI Consulting",
            Self::Automation => "Automation",
            Self::Analytics => "Analytics",
            Self::Chatbots => "Chatbots",
            Self::PredictiveModels => "Predictive Models",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceCategory {
    type Err = UnknownServiceCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or(UnknownServiceCategory)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown service category")]
pub struct UnknownServiceCategory;

/// Raw contact form submission as transmitted over the wire. Field values are
/// untrusted and must be converted into a [`ContactInquiry`] before use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiryDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<ServiceCategory>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub honeypot: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidContactInquiry {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Message too short")]
    MessageTooShort,
}

impl TryFrom<ContactInquiryDraft> for ContactInquiry {
    type Error = InvalidContactInquiry;

    /// Checks are ordered: missing fields are reported before the email
    /// shape, which is reported before the message length.
    fn try_from(draft: ContactInquiryDraft) -> Result<Self, Self::Error> {
        if draft.name.trim().is_empty()
            || draft.email.trim().is_empty()
            || draft.service.is_none()
            || draft.message.trim().is_empty()
        {
            return Err(InvalidContactInquiry::MissingFields);
        }

        let name = InquiryAuthorName::try_new(draft.name)
            .map_err(|_| InvalidContactInquiry::MissingFields)?;
        let email =
            InquiryEmail::try_new(draft.email).map_err(|_| InvalidContactInquiry::InvalidEmail)?;
        let message = InquiryMessage::try_new(draft.message)
            .map_err(|_| InvalidContactInquiry::MessageTooShort)?;
        let company = draft
            .company
            .and_then(|company| InquiryCompany::try_new(company).ok());
        let service = draft.service.ok_or(InvalidContactInquiry::MissingFields)?;

        Ok(Self {
            author: InquiryAuthor { name, email },
            company,
            service,
            message,
        })
    }
}
