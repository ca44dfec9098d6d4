//! Onboarding CLI commands
//!
//! Runs the wizard interactively or from a key script, and lists the steps.

use anyhow::Result;

use crate::config::{Settings, SummaryFormat};
use crate::display::{format_step_list, format_summary};
use crate::onboarding::OnboardingSummary;
use crate::tui::{parse_keys, run_script, run_tui};

/// Launch the interactive wizard
pub fn handle_start(
    settings: &Settings,
    format: Option<SummaryFormat>,
    no_summary: bool,
) -> Result<()> {
    let summary = run_tui(settings)?;

    if no_summary || !settings.print_summary {
        return Ok(());
    }
    print_summary(&summary, format.unwrap_or(settings.summary_format))
}

/// Replay a comma-separated key script without a terminal
///
/// The summary is always printed; it is the only output of a replay.
pub fn handle_replay(settings: &Settings, keys: &str, format: Option<SummaryFormat>) -> Result<()> {
    let keys = parse_keys(keys)?;
    let summary = run_script(settings, &keys)?;
    print_summary(&summary, format.unwrap_or(settings.summary_format))
}

/// Print the step sequence
pub fn handle_steps() -> Result<()> {
    print!("{}", format_step_list());
    Ok(())
}

fn print_summary(summary: &OnboardingSummary, format: SummaryFormat) -> Result<()> {
    let output = format_summary(summary, format)?;
    println!("{}", output.trim_end());
    Ok(())
}
