//! Step identities
//!
//! The wizard is a fixed, ordered sequence of steps. Screens are built from
//! these identities when a step becomes active; the sequence itself never
//! holds screen instances.

use std::fmt;

/// One step of the onboarding sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Welcome,
    About,
    Location,
    ToolStack,
    Personalization,
    Completed,
}

impl StepId {
    /// The full sequence, in order
    pub const ALL: [StepId; 6] = [
        Self::Welcome,
        Self::About,
        Self::Location,
        Self::ToolStack,
        Self::Personalization,
        Self::Completed,
    ];

    /// Number of steps in the sequence
    pub const COUNT: usize = Self::ALL.len();

    /// Step at a position in the sequence
    pub fn at(index: usize) -> Option<StepId> {
        Self::ALL.get(index).copied()
    }

    /// Position of this step in the sequence
    pub fn index(&self) -> usize {
        match self {
            Self::Welcome => 0,
            Self::About => 1,
            Self::Location => 2,
            Self::ToolStack => 3,
            Self::Personalization => 4,
            Self::Completed => 5,
        }
    }

    /// Whether this is the final step
    pub fn is_last(&self) -> bool {
        self.index() + 1 == Self::COUNT
    }

    /// Short name used in logs and listings
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::About => "About",
            Self::Location => "Location",
            Self::ToolStack => "ToolStack",
            Self::Personalization => "Personalization",
            Self::Completed => "Completed",
        }
    }

    /// Heading shown at the top of the step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome to Flowva",
            Self::About => "About You",
            Self::Location => "Where Are You Based?",
            Self::ToolStack => "Your Tool Stack",
            Self::Personalization => "What Do You Want to Track or Improve?",
            Self::Completed => "Setup Complete!",
        }
    }

    /// Whether the step checks its fields before advancing
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::About | Self::Personalization)
    }

    /// Whether the step offers a skip action next to its primary action
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Location | Self::ToolStack)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Progress through the sequence for a given index, as a percentage
///
/// `index / (COUNT - 1) * 100`; 0 at the first step and 100 at the last.
pub fn progress_percentage(index: usize) -> f64 {
    index as f64 / (StepId::COUNT - 1) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, step) in StepId::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(StepId::at(i), Some(*step));
        }
        assert_eq!(StepId::at(StepId::COUNT), None);
    }

    #[test]
    fn test_only_completed_is_last() {
        let last: Vec<_> = StepId::ALL.iter().filter(|s| s.is_last()).collect();
        assert_eq!(last, vec![&StepId::Completed]);
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(progress_percentage(0), 0.0);
        assert_eq!(progress_percentage(StepId::COUNT - 1), 100.0);
    }

    #[test]
    fn test_progress_formula() {
        for i in 0..StepId::COUNT {
            let expected = i as f64 / 5.0 * 100.0;
            assert!((progress_percentage(i) - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_validated_and_skippable_steps() {
        assert!(StepId::About.is_validated());
        assert!(StepId::Personalization.is_validated());
        assert!(!StepId::Welcome.is_validated());
        assert!(StepId::Location.is_skippable());
        assert!(StepId::ToolStack.is_skippable());
        assert!(!StepId::About.is_skippable());
    }
}
