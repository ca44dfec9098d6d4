//! Onboarding flow controller
//!
//! Owns the current step index and the modal visibility flag. Steps never
//! touch this state directly; they hand in an answer and ask to advance.

use crate::error::{FlowvaError, FlowvaResult};

use super::answers::{OnboardingSummary, StepAnswer};
use super::step::{progress_percentage, StepId};

/// The linear onboarding state machine
#[derive(Debug, Clone)]
pub struct FlowController {
    current_step_index: usize,
    modal_visible: bool,
    summary: OnboardingSummary,
}

impl FlowController {
    /// Start at the first step with the modal hidden
    pub fn new() -> Self {
        Self {
            current_step_index: 0,
            modal_visible: false,
            summary: OnboardingSummary::new(),
        }
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// The step selected by the current index
    pub fn current_step(&self) -> StepId {
        // The index never leaves 0..COUNT, see `advance`.
        StepId::at(self.current_step_index).unwrap_or(StepId::Completed)
    }

    pub fn total_steps(&self) -> usize {
        StepId::COUNT
    }

    /// Progress through the sequence, 0.0 to 100.0
    pub fn progress_percentage(&self) -> f64 {
        progress_percentage(self.current_step_index)
    }

    /// Move to the next step
    ///
    /// # Errors
    ///
    /// Returns [`FlowvaError::FlowComplete`] when the final step is already
    /// active; the index is left unchanged.
    pub fn advance(&mut self) -> FlowvaResult<StepId> {
        let current = self.current_step();
        if current.is_last() {
            return Err(FlowvaError::FlowComplete {
                step: current.name(),
            });
        }

        self.current_step_index += 1;
        let next = self.current_step();
        tracing::info!(from = %current, to = %next, "advanced onboarding step");

        if next.is_last() {
            self.summary.finish();
        }
        Ok(next)
    }

    /// Record the active step's answer and advance
    ///
    /// # Errors
    ///
    /// Returns [`FlowvaError::StepMismatch`] if the answer belongs to another
    /// step, and [`FlowvaError::FlowComplete`] on the final step. Neither
    /// changes the index or the summary.
    pub fn submit(&mut self, answer: StepAnswer) -> FlowvaResult<StepId> {
        let current = self.current_step();
        if current.is_last() {
            return self.advance();
        }
        if answer.step() != current {
            tracing::warn!(
                current = %current,
                answered = %answer.step(),
                "rejected answer for inactive step"
            );
            return Err(FlowvaError::StepMismatch {
                current: current.name(),
                answered: answer.step().name(),
            });
        }
        self.summary.record(answer);
        self.advance()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    /// Negate the modal visibility flag
    pub fn toggle_modal(&mut self) {
        self.modal_visible = !self.modal_visible;
    }

    /// Whether the final step has been reached
    pub fn is_complete(&self) -> bool {
        self.current_step().is_last()
    }

    pub fn summary(&self) -> &OnboardingSummary {
        &self.summary
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::answers::Response;
    use crate::onboarding::catalog::Goal;

    #[test]
    fn test_initial_state() {
        let flow = FlowController::new();
        assert_eq!(flow.current_step_index(), 0);
        assert_eq!(flow.current_step(), StepId::Welcome);
        assert!(!flow.modal_visible());
        assert_eq!(flow.progress_percentage(), 0.0);
    }

    #[test]
    fn test_advance_walks_the_sequence() {
        let mut flow = FlowController::new();
        for expected in StepId::ALL.iter().skip(1) {
            let before = flow.current_step_index();
            assert_eq!(flow.advance().unwrap(), *expected);
            assert_eq!(flow.current_step_index(), before + 1);
        }
        assert_eq!(flow.progress_percentage(), 100.0);
        assert!(flow.is_complete());
    }

    #[test]
    fn test_advance_past_final_step_is_rejected() {
        let mut flow = FlowController::new();
        while !flow.is_complete() {
            flow.advance().unwrap();
        }

        let err = flow.advance().unwrap_err();
        assert!(err.is_flow_complete());
        assert_eq!(flow.current_step_index(), StepId::COUNT - 1);
    }

    #[test]
    fn test_skip_and_continue_advance_by_one() {
        let mut skipped = FlowController::new();
        let mut continued = FlowController::new();
        for flow in [&mut skipped, &mut continued] {
            flow.advance().unwrap();
            flow.advance().unwrap();
        }

        skipped.submit(StepAnswer::Location(Response::Skipped)).unwrap();
        continued
            .submit(StepAnswer::Location(Response::Answered(None)))
            .unwrap();

        assert_eq!(skipped.current_step(), StepId::ToolStack);
        assert_eq!(continued.current_step(), StepId::ToolStack);
        assert!(skipped.summary().location.as_ref().unwrap().is_skipped());
        assert!(!continued.summary().location.as_ref().unwrap().is_skipped());
    }

    #[test]
    fn test_answer_for_other_step_is_rejected() {
        let mut flow = FlowController::new();

        let err = flow
            .submit(StepAnswer::Personalization(vec![Goal::ToolUsage]))
            .unwrap_err();

        assert!(matches!(
            err,
            FlowvaError::StepMismatch {
                current: "Welcome",
                answered: "Personalization"
            }
        ));
        assert_eq!(flow.current_step(), StepId::Welcome);
        assert!(flow.summary().goals.is_none());

        assert_eq!(flow.submit(StepAnswer::Welcome).unwrap(), StepId::About);
    }

    #[test]
    fn test_summary_finished_on_reaching_last_step() {
        let mut flow = FlowController::new();
        while !flow.is_complete() {
            assert!(!flow.summary().is_finished());
            flow.advance().unwrap();
        }
        assert!(flow.summary().is_finished());
    }

    #[test]
    fn test_modal_flag() {
        let mut flow = FlowController::new();
        flow.toggle_modal();
        assert!(flow.modal_visible());
        flow.toggle_modal();
        assert!(!flow.modal_visible());
        flow.set_modal_visible(true);
        assert!(flow.modal_visible());
    }
}
