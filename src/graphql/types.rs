use crate::{contact, model};
use async_graphql::{Enum, InputObject, SimpleObject};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Achievements,
    Certifications,
    Contact,
}

impl From<model::Section> for Section {
    fn from(s: model::Section) -> Self {
        match s {
            model::Section::Home => Section::Home,
            model::Section::About => Section::About,
            model::Section::Skills => Section::Skills,
            model::Section::Experience => Section::Experience,
            model::Section::Projects => Section::Projects,
            model::Section::Achievements => Section::Achievements,
            model::Section::Certifications => Section::Certifications,
            model::Section::Contact => Section::Contact,
        }
    }
}

impl From<Section> for model::Section {
    fn from(s: Section) -> Self {
        match s {
            Section::Home => model::Section::Home,
            Section::About => model::Section::About,
            Section::Skills => model::Section::Skills,
            Section::Experience => model::Section::Experience,
            Section::Projects => model::Section::Projects,
            Section::Achievements => model::Section::Achievements,
            Section::Certifications => model::Section::Certifications,
            Section::Contact => model::Section::Contact,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum Subject {
    JobOpportunity,
    ProjectCollaboration,
    GeneralInquiry,
    Other,
}

impl From<Subject> for contact::Subject {
    fn from(s: Subject) -> Self {
        match s {
            Subject::JobOpportunity => contact::Subject::JobOpportunity,
            Subject::ProjectCollaboration => contact::Subject::ProjectCollaboration,
            Subject::GeneralInquiry => contact::Subject::GeneralInquiry,
            Subject::Other => contact::Subject::Other,
        }
    }
}

#[derive(SimpleObject)]
pub struct SectionInfo {
    pub id: Section,
    pub slug: String,
    pub label: String,
    pub icon: String,
}

impl From<model::Section> for SectionInfo {
    fn from(s: model::Section) -> Self {
        Self {
            id: s.into(),
            slug: s.id().to_string(),
            label: s.label().to_string(),
            icon: s.icon().to_string(),
        }
    }
}

#[derive(InputObject)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    #[graphql(default_with = "Subject::JobOpportunity")]
    pub subject: Subject,
    pub message: String,
}

impl From<ContactInput> for contact::ContactForm {
    fn from(input: ContactInput) -> Self {
        contact::ContactForm::new(input.name, input.email, input.subject.into(), input.message)
    }
}

#[derive(SimpleObject)]
pub struct ContactReceipt {
    pub accepted: bool,
    pub message: String,
}
