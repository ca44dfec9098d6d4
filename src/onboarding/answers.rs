//! Answers handed upward by the steps
//!
//! Each step reports its result only through the advance signal. The flow
//! controller collects those results into an [`OnboardingSummary`], which
//! lives in memory for the session and can be printed on exit.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::catalog::{Country, Description, Goal, WorkType};
use super::step::StepId;

/// Answer of a step that offers both "Continue" and "Skip"
///
/// Skipping is recorded distinctly from continuing with nothing selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Response<T> {
    Answered(T),
    Skipped,
}

impl<T> Response<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn answered(&self) -> Option<&T> {
        match self {
            Self::Answered(value) => Some(value),
            Self::Skipped => None,
        }
    }
}

/// Validated result of the About step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutAnswers {
    pub description: Description,
    pub work: Vec<WorkType>,
    /// Free-text note; empty unless `work` contains `Others`
    pub others: String,
}

/// Payload carried by an advance request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAnswer {
    Welcome,
    About(AboutAnswers),
    Location(Response<Option<Country>>),
    ToolStack(Response<Vec<&'static str>>),
    Personalization(Vec<Goal>),
}

impl StepAnswer {
    /// The step this answer belongs to
    pub fn step(&self) -> StepId {
        match self {
            Self::Welcome => StepId::Welcome,
            Self::About(_) => StepId::About,
            Self::Location(_) => StepId::Location,
            Self::ToolStack(_) => StepId::ToolStack,
            Self::Personalization(_) => StepId::Personalization,
        }
    }
}

/// Everything collected during one onboarding session
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    pub about: Option<AboutAnswers>,
    pub location: Option<Response<Option<Country>>>,
    pub tools: Option<Response<Vec<&'static str>>>,
    pub goals: Option<Vec<Goal>>,
}

impl OnboardingSummary {
    /// Start an empty summary for a new session
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            about: None,
            location: None,
            tools: None,
            goals: None,
        }
    }

    /// Store the answer of a step, replacing any earlier one
    pub fn record(&mut self, answer: StepAnswer) {
        match answer {
            StepAnswer::Welcome => {}
            StepAnswer::About(about) => self.about = Some(about),
            StepAnswer::Location(location) => self.location = Some(location),
            StepAnswer::ToolStack(tools) => self.tools = Some(tools),
            StepAnswer::Personalization(goals) => self.goals = Some(goals),
        }
    }

    /// Stamp the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

impl Default for OnboardingSummary {
    fn default() -> Self {
        Self::new()
    }
}
