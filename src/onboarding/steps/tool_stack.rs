//! Tool stack step
//!
//! Multi-select over the tool catalog. "Continue" and "Skip" both advance.

use crate::onboarding::answers::{Response, StepAnswer};
use crate::onboarding::catalog::TOOLS;
use crate::onboarding::selection::TagSet;

/// Local state of the ToolStack step
#[derive(Debug, Clone, Default)]
pub struct ToolStackForm {
    selected: TagSet<&'static str>,
}

impl ToolStackForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the tool at `index` in the catalog
    pub fn toggle(&mut self, index: usize) {
        if let Some(tool) = TOOLS.get(index) {
            self.selected.toggle(tool.name);
        }
    }

    pub fn is_selected(&self, name: &'static str) -> bool {
        self.selected.contains(name)
    }

    /// Selected tool names in catalog order
    pub fn selected(&self) -> Vec<&'static str> {
        let names: Vec<&'static str> = TOOLS.iter().map(|t| t.name).collect();
        self.selected.ordered_by(&names)
    }

    pub fn continue_answer(&self) -> StepAnswer {
        StepAnswer::ToolStack(Response::Answered(self.selected()))
    }

    pub fn skip_answer(&self) -> StepAnswer {
        StepAnswer::ToolStack(Response::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut form = ToolStackForm::new();
        form.toggle(0);
        let before = form.selected();

        form.toggle(3);
        form.toggle(3);

        assert_eq!(form.selected(), before);
        assert_eq!(before, vec!["Notion"]);
    }

    #[test]
    fn test_selection_in_catalog_order() {
        let mut form = ToolStackForm::new();
        form.toggle(8);
        form.toggle(2);
        assert_eq!(form.selected(), vec!["Slack", "Calendly"]);
        assert!(form.is_selected("Slack"));
    }

    #[test]
    fn test_skip_ignores_selection() {
        let mut form = ToolStackForm::new();
        form.toggle(1);
        assert_eq!(form.skip_answer(), StepAnswer::ToolStack(Response::Skipped));
        assert_eq!(
            form.continue_answer(),
            StepAnswer::ToolStack(Response::Answered(vec!["Trello"]))
        );
    }
}
