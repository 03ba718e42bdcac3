//! Page router: the active section and exhaustive section dispatch.

use crate::contact::{Acknowledgment, ContactForm, FormStatus};
use crate::error::Result;
use crate::model::Section;
use crate::render::{RenderTree, sections};

/// Renders `section`. Only the contact section reads `status`.
pub fn render(section: Section, status: &FormStatus) -> RenderTree {
    match section {
        Section::Home => sections::home(),
        Section::About => sections::about(),
        Section::Skills => sections::skills(),
        Section::Experience => sections::experience(),
        Section::Projects => sections::projects(),
        Section::Achievements => sections::achievements(),
        Section::Certifications => sections::certifications(),
        Section::Contact => sections::contact(status),
    }
}

/// Application state owned by the top-level loop.
#[derive(Debug, Default)]
pub struct Router {
    active: Section,
    form: ContactForm,
    status: FormStatus,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Makes `section` active and returns its render tree. Leaving the
    /// contact section clears the last submission outcome.
    pub fn select(&mut self, section: Section) -> RenderTree {
        if section != self.active {
            tracing::debug!(from = %self.active, to = %section, "navigate");
            if self.active == Section::Contact {
                self.status = FormStatus::Idle;
            }
            self.active = section;
        }
        self.render()
    }

    pub fn next(&mut self) -> RenderTree {
        self.select(self.active.next())
    }

    pub fn previous(&mut self) -> RenderTree {
        self.select(self.active.prev())
    }

    /// Render tree of the active section.
    pub fn render(&self) -> RenderTree {
        render(self.active, &self.status)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Submits the contact form and records the outcome for the contact
    /// section.
    pub fn submit_contact(&mut self) -> Result<Acknowledgment> {
        match self.form.submit() {
            Ok(ack) => {
                self.status = FormStatus::Acknowledged(ack.message.to_string());
                Ok(ack)
            }
            Err(err) => {
                self.status = FormStatus::Rejected(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ACKNOWLEDGMENT, Subject};

    #[test]
    fn test_initial_state_is_home() {
        let router = Router::new();
        assert_eq!(router.active(), Section::Home);
        assert_eq!(router.render().section, Section::Home);
    }

    #[test]
    fn test_select_any_from_any() {
        let mut router = Router::new();
        for from in Section::ALL {
            for to in Section::ALL {
                router.select(from);
                let tree = router.select(to);
                assert_eq!(router.active(), to);
                assert_eq!(tree.section, to);
            }
        }
    }

    #[test]
    fn test_next_previous_cycle() {
        let mut router = Router::new();
        assert_eq!(router.previous().section, Section::Contact);
        assert_eq!(router.next().section, Section::Home);
        assert_eq!(router.next().section, Section::About);
    }

    #[test]
    fn test_submit_records_acknowledgment() {
        let mut router = Router::new();
        router.select(Section::Contact);
        *router.form_mut() = ContactForm::new("Jane", "jane@x.com", Subject::GeneralInquiry, "Hi");
        router.submit_contact().unwrap();
        assert_eq!(
            router.status(),
            &FormStatus::Acknowledged(ACKNOWLEDGMENT.to_string())
        );
        assert!(router.form().is_empty());
    }

    #[test]
    fn test_rejection_recorded_and_cleared_on_leave() {
        let mut router = Router::new();
        router.select(Section::Contact);
        assert!(router.submit_contact().is_err());
        assert!(matches!(router.status(), FormStatus::Rejected(_)));

        router.select(Section::Contact);
        assert!(matches!(router.status(), FormStatus::Rejected(_)));

        router.select(Section::Home);
        assert_eq!(router.status(), &FormStatus::Idle);
    }
}
