//! Summary output
//!
//! Serializes what a session collected for printing after the wizard exits.

use crate::config::SummaryFormat;
use crate::error::FlowvaResult;
use crate::onboarding::OnboardingSummary;

/// Format a session summary in the requested format
pub fn format_summary(summary: &OnboardingSummary, format: SummaryFormat) -> FlowvaResult<String> {
    let output = match format {
        SummaryFormat::Json => serde_json::to_string_pretty(summary)?,
        SummaryFormat::Yaml => serde_yaml::to_string(summary)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::catalog::Goal;
    use crate::onboarding::{Response, StepAnswer};

    fn sample() -> OnboardingSummary {
        let mut summary = OnboardingSummary::new();
        summary.record(StepAnswer::Location(Response::Skipped));
        summary.record(StepAnswer::ToolStack(Response::Answered(vec!["Slack"])));
        summary.record(StepAnswer::Personalization(vec![Goal::UnusedTools]));
        summary
    }

    #[test]
    fn test_json_output() {
        let output = format_summary(&sample(), SummaryFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["location"]["status"], "skipped");
        assert_eq!(value["tools"]["value"][0], "Slack");
        assert!(value["about"].is_null());
        assert!(value.get("finished_at").is_none());
    }

    #[test]
    fn test_yaml_output() {
        let output = format_summary(&sample(), SummaryFormat::Yaml).unwrap();
        assert!(output.contains("session_id:"));
        assert!(output.contains("status: skipped"));
        assert!(output.contains("- Slack"));
    }
}
