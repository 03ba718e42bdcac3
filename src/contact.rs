//! Contact form state and local-only submission.
//!
//! A submission is validated and then dropped: nothing is sent, stored or
//! written anywhere. The only trace is a log line with the subject and the
//! field lengths.

use crate::error::{FolioError, Result};
use crate::validation::{validate_email, validate_message, validate_name};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I'll get back to you soon. 📧";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    #[default]
    JobOpportunity,
    ProjectCollaboration,
    GeneralInquiry,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::JobOpportunity,
        Subject::ProjectCollaboration,
        Subject::GeneralInquiry,
        Subject::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::JobOpportunity => "Job Opportunity",
            Subject::ProjectCollaboration => "Project Collaboration",
            Subject::GeneralInquiry => "General Inquiry",
            Subject::Other => "Other",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Subject::JobOpportunity => Subject::ProjectCollaboration,
            Subject::ProjectCollaboration => Subject::GeneralInquiry,
            Subject::GeneralInquiry => Subject::Other,
            Subject::Other => Subject::JobOpportunity,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Subject::JobOpportunity => Subject::Other,
            Subject::ProjectCollaboration => Subject::JobOpportunity,
            Subject::GeneralInquiry => Subject::ProjectCollaboration,
            Subject::Other => Subject::GeneralInquiry,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Subject {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "job-opportunity" | "job" => Ok(Subject::JobOpportunity),
            "project-collaboration" | "collaboration" => Ok(Subject::ProjectCollaboration),
            "general-inquiry" | "general" => Ok(Subject::GeneralInquiry),
            "other" => Ok(Subject::Other),
            _ => Err(FolioError::InvalidValue(format!("Invalid subject: {}", s))),
        }
    }
}

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

/// Successful submission receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub subject: Subject,
    pub message: &'static str,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: Subject,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject,
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Text field backing `field`; `None` for the subject selector.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Subject => None,
            FormField::Message => Some(&mut self.message),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_message(&self.message)?;
        Ok(())
    }

    /// Validates and discards the form. On success the form is reset to
    /// its empty default; on failure the fields are left untouched.
    pub fn submit(&mut self) -> Result<Acknowledgment> {
        if let Err(err) = self.validate() {
            tracing::debug!(error = %err, "contact form rejected");
            return Err(err);
        }
        let submitted = std::mem::take(self);
        tracing::info!(
            subject = %submitted.subject,
            name_len = submitted.name.trim().chars().count(),
            message_len = submitted.message.trim().chars().count(),
            "contact form acknowledged"
        );
        Ok(Acknowledgment {
            subject: submitted.subject,
            message: ACKNOWLEDGMENT,
        })
    }
}

/// Outcome of the latest submission, shown on the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Acknowledged(String),
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactForm {
        ContactForm::new("Jane", "jane@x.com", Subject::GeneralInquiry, "Hi")
    }

    #[test]
    fn test_submit_acknowledges_and_resets() {
        let mut form = jane();
        let ack = form.submit().unwrap();
        assert_eq!(ack.message, ACKNOWLEDGMENT);
        assert_eq!(ack.subject, Subject::GeneralInquiry);
        assert!(form.is_empty());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_submit_rejects_empty_and_keeps_fields() {
        let mut form = ContactForm::new("Jane", "jane@x.com", Subject::Other, "  ");
        let err = form.submit().unwrap_err();
        assert!(err.to_string().contains("Message cannot be empty"));
        assert_eq!(form.name, "Jane");
        assert_eq!(form.subject, Subject::Other);
    }

    #[test]
    fn test_submit_reports_first_missing_field() {
        let mut form = ContactForm::default();
        let err = form.submit().unwrap_err();
        assert!(err.to_string().contains("Name cannot be empty"));
    }

    #[test]
    fn test_submit_rejects_bad_email() {
        let mut form = ContactForm::new("Jane", "not-an-email", Subject::Other, "Hi");
        assert!(matches!(form.submit(), Err(FolioError::Validation(_))));
    }

    #[test]
    fn test_subject_parse() {
        assert_eq!("General Inquiry".parse::<Subject>().unwrap(), Subject::GeneralInquiry);
        assert_eq!("job-opportunity".parse::<Subject>().unwrap(), Subject::JobOpportunity);
        assert_eq!("project_collaboration".parse::<Subject>().unwrap(), Subject::ProjectCollaboration);
        assert!("spam".parse::<Subject>().is_err());
    }

    #[test]
    fn test_subject_cycle() {
        for subject in Subject::ALL {
            assert_eq!(subject.next().prev(), subject);
        }
        assert_eq!(Subject::Other.next(), Subject::JobOpportunity);
    }

    #[test]
    fn test_field_cycle_and_text_mut() {
        let mut form = ContactForm::default();
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        form.text_mut(FormField::Email).unwrap().push_str("a@b.co");
        assert_eq!(form.email, "a@b.co");
        assert!(form.text_mut(FormField::Subject).is_none());
    }
}
