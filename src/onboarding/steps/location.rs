//! Location step
//!
//! Single-choice country picker behind a dropdown. Both of its actions
//! advance unconditionally.

use crate::onboarding::answers::{Response, StepAnswer};
use crate::onboarding::catalog::{Country, COUNTRIES};

pub const PLACEHOLDER: &str = "Select your country";

/// Local state of the Location step
#[derive(Debug, Clone, Default)]
pub struct LocationForm {
    selected: Option<Country>,
    open: bool,
}

impl LocationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Country> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick the country at `index` in the catalog, replacing any earlier
    /// choice, and close the dropdown
    pub fn select(&mut self, index: usize) {
        if let Some(country) = COUNTRIES.get(index) {
            self.selected = Some(*country);
        }
        self.open = false;
    }

    /// Text shown in the closed dropdown
    pub fn display(&self) -> &'static str {
        self.selected.map(|c| c.name).unwrap_or(PLACEHOLDER)
    }

    /// "Continue" action
    pub fn continue_answer(&self) -> StepAnswer {
        StepAnswer::Location(Response::Answered(self.selected))
    }

    /// "Skip this step" action
    pub fn skip_answer(&self) -> StepAnswer {
        StepAnswer::Location(Response::Skipped)
    }
}
