//! Personalization step
//!
//! Requires at least one goal before advancing.

use crate::onboarding::catalog::Goal;
use crate::onboarding::selection::TagSet;

pub const GOAL_REQUIRED: &str = "Please select at least one goal.";

/// Local state of the Personalization step
#[derive(Debug, Clone, Default)]
pub struct PersonalizationForm {
    selected: TagSet<Goal>,
    error: Option<String>,
}

impl PersonalizationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, goal: Goal) {
        self.selected.toggle(goal);
    }

    pub fn is_selected(&self, goal: Goal) -> bool {
        self.selected.contains(goal)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and return the selected goals in catalog order
    pub fn submit(&mut self) -> Result<Vec<Goal>, String> {
        if self.selected.is_empty() {
            self.error = Some(GOAL_REQUIRED.to_string());
            return Err(GOAL_REQUIRED.to_string());
        }
        self.error = None;
        Ok(self.selected.ordered_by(&Goal::ALL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut form = PersonalizationForm::new();
        assert_eq!(form.submit().unwrap_err(), GOAL_REQUIRED);
        assert_eq!(form.error(), Some("Please select at least one goal."));
    }

    #[test]
    fn test_select_then_deselect_is_empty() {
        let mut form = PersonalizationForm::new();
        form.toggle(Goal::ToolUsage);
        form.toggle(Goal::ToolUsage);
        assert!(!form.has_selection());
        assert!(form.submit().is_err());
    }

    #[test]
    fn test_success_clears_error() {
        let mut form = PersonalizationForm::new();
        assert!(form.submit().is_err());

        form.toggle(Goal::ToolSuggestions);
        form.toggle(Goal::SubscriptionCosts);

        let goals = form.submit().unwrap();
        assert_eq!(goals, vec![Goal::SubscriptionCosts, Goal::ToolSuggestions]);
        assert!(form.error().is_none());
    }
}
