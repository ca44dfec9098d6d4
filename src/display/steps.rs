//! Step listing
//!
//! Formats the onboarding sequence as a table for the `steps` command.

use crate::onboarding::step::progress_percentage;
use crate::onboarding::StepId;

/// How a step lets the user move on
fn advance_kind(step: StepId) -> &'static str {
    if step.is_last() {
        "Final"
    } else if step.is_validated() {
        "Validated"
    } else if step.is_skippable() {
        "Skippable"
    } else {
        "Direct"
    }
}

/// Format the step sequence as a table
pub fn format_step_list() -> String {
    let name_width = StepId::ALL
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let title_width = StepId::ALL
        .iter()
        .map(|s| s.title().chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>2}  {:<name_width$}  {:<title_width$}  {:>8}  {}\n",
        "#",
        "Step",
        "Title",
        "Progress",
        "Advance",
        name_width = name_width,
        title_width = title_width,
    ));

    output.push_str(&format!(
        "{:->2}  {:-<name_width$}  {:-<title_width$}  {:->8}  {:-<9}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        title_width = title_width,
    ));

    for step in StepId::ALL {
        output.push_str(&format!(
            "{:>2}  {:<name_width$}  {:<title_width$}  {:>7.0}%  {}\n",
            step.index() + 1,
            step.name(),
            step.title(),
            progress_percentage(step.index()),
            advance_kind(step),
            name_width = name_width,
            title_width = title_width,
        ));
    }

    output
}
