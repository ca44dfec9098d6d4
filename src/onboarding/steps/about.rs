//! About step
//!
//! Asks what best describes the user and what kind of work they do.

use crate::onboarding::answers::AboutAnswers;
use crate::onboarding::catalog::{Description, WorkType};
use crate::onboarding::selection::TagSet;

pub const DESCRIPTION_REQUIRED: &str = "Please select a description.";
pub const WORK_REQUIRED: &str = "Please select at least one type of work.";
pub const OTHERS_NOTE_REQUIRED: &str = "Please specify your 'Others' field.";

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutErrors {
    pub description: Option<String>,
    pub work: Option<String>,
}

impl AboutErrors {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.work.is_none()
    }
}

/// Local state of the About step
#[derive(Debug, Clone, Default)]
pub struct AboutForm {
    description: Option<Description>,
    work: TagSet<WorkType>,
    others_note: String,
    errors: AboutErrors,
}

impl AboutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> Option<Description> {
        self.description
    }

    /// Choose the single description option
    pub fn select_description(&mut self, description: Description) {
        self.description = Some(description);
    }

    pub fn is_work_selected(&self, work: WorkType) -> bool {
        self.work.contains(work)
    }

    /// Toggle a work tag; `Others` goes through [`AboutForm::toggle_others`]
    pub fn toggle_work(&mut self, work: WorkType) {
        if work == WorkType::Others {
            self.toggle_others();
        } else {
            self.work.toggle(work);
        }
    }

    /// Toggle the "Others" checkbox
    ///
    /// The checkbox state is the membership of the `Others` tag. The note is
    /// cleared whenever the tag becomes deselected.
    pub fn toggle_others(&mut self) {
        if !self.work.toggle(WorkType::Others) {
            self.others_note.clear();
        }
    }

    pub fn others_selected(&self) -> bool {
        self.work.contains(WorkType::Others)
    }

    pub fn others_note(&self) -> &str {
        &self.others_note
    }

    pub fn set_others_note(&mut self, note: impl Into<String>) {
        self.others_note = note.into();
    }

    pub fn errors(&self) -> &AboutErrors {
        &self.errors
    }

    /// Check the required fields without touching stored errors
    pub fn validate(&self) -> Result<(), AboutErrors> {
        let mut errors = AboutErrors::default();

        if self.description.is_none() {
            errors.description = Some(DESCRIPTION_REQUIRED.to_string());
        }

        if self.work.is_empty() {
            errors.work = Some(WORK_REQUIRED.to_string());
        } else if self.others_selected() && self.others_note.trim().is_empty() {
            errors.work = Some(OTHERS_NOTE_REQUIRED.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and produce the step's answers
    ///
    /// Failures are stored for display and returned; success clears them.
    pub fn submit(&mut self) -> Result<AboutAnswers, AboutErrors> {
        if let Err(errors) = self.validate() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = AboutErrors::default();

        let description = self.description.ok_or_else(AboutErrors::default)?;
        let mut catalog = WorkType::STANDARD.to_vec();
        catalog.push(WorkType::Others);

        Ok(AboutAnswers {
            description,
            work: self.work.ordered_by(&catalog),
            others: if self.others_selected() {
                self.others_note.clone()
            } else {
                String::new()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description_blocks_submit() {
        let mut form = AboutForm::new();
        form.toggle_work(WorkType::Design);

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.description.as_deref(), Some(DESCRIPTION_REQUIRED));
        assert!(errors.work.is_none());
        assert_eq!(form.errors(), &errors);
    }

    #[test]
    fn test_empty_form_reports_both_fields() {
        let mut form = AboutForm::new();
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.description.as_deref(), Some(DESCRIPTION_REQUIRED));
        assert_eq!(errors.work.as_deref(), Some(WORK_REQUIRED));
    }

    #[test]
    fn test_valid_submit_clears_errors() {
        let mut form = AboutForm::new();
        assert!(form.submit().is_err());

        form.select_description(Description::Freelance);
        form.toggle_work(WorkType::Design);

        let answers = form.submit().unwrap();
        assert_eq!(answers.description, Description::Freelance);
        assert_eq!(answers.work, vec![WorkType::Design]);
        assert_eq!(answers.others, "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_others_requires_note() {
        let mut form = AboutForm::new();
        form.select_description(Description::Creator);
        form.toggle_others();

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.work.as_deref(), Some(OTHERS_NOTE_REQUIRED));

        form.set_others_note("   ");
        assert!(form.submit().is_err());

        form.set_others_note("Illustration");
        let answers = form.submit().unwrap();
        assert_eq!(answers.work, vec![WorkType::Others]);
        assert_eq!(answers.others, "Illustration");
    }

    #[test]
    fn test_deselecting_others_clears_note() {
        let mut form = AboutForm::new();
        form.toggle_others();
        form.set_others_note("Podcasting");
        assert!(form.others_selected());

        form.toggle_others();
        assert!(!form.others_selected());
        assert_eq!(form.others_note(), "");

        form.toggle_others();
        assert!(form.others_selected());
        assert_eq!(form.others_note(), "");
    }

    #[test]
    fn test_toggle_work_routes_others() {
        let mut form = AboutForm::new();
        form.toggle_work(WorkType::Others);
        assert!(form.others_selected());
        form.set_others_note("x");
        form.toggle_work(WorkType::Others);
        assert_eq!(form.others_note(), "");
    }

    #[test]
    fn test_description_is_single_choice() {
        let mut form = AboutForm::new();
        form.select_description(Description::Freelance);
        form.select_description(Description::SmallTeam);
        assert_eq!(form.description(), Some(Description::SmallTeam));
    }

    #[test]
    fn test_work_answers_follow_catalog_order() {
        let mut form = AboutForm::new();
        form.select_description(Description::Freelance);
        form.toggle_work(WorkType::Writing);
        form.toggle_work(WorkType::Design);
        let answers = form.submit().unwrap();
        assert_eq!(answers.work, vec![WorkType::Design, WorkType::Writing]);
    }
}
