//! Configuration CLI commands

use anyhow::Result;

use crate::config::{FlowvaPaths, Settings};

/// Show paths and the active settings
pub fn handle_config(paths: &FlowvaPaths, settings: &Settings) -> Result<()> {
    println!("Flowva Configuration");
    println!("====================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!(
        "Log file:       {}",
        paths.log_dir().join(paths.log_file_name()).display()
    );
    println!();
    println!("Settings:");
    println!("  Tick rate:       {} ms", settings.tick_rate_ms);
    println!("  Log level:       {}", settings.log_level);
    println!("  Summary format:  {}", settings.summary_format);
    println!("  Print summary:   {}", settings.print_summary);
    println!("  Show key hints:  {}", settings.show_key_hints);
    Ok(())
}

/// Create the directories and write the settings file
pub fn handle_init(paths: &FlowvaPaths, settings: &Settings) -> Result<()> {
    println!("Initializing Flowva at: {}", paths.base_dir().display());
    paths.ensure_directories()?;
    settings.save(paths)?;
    println!("Wrote {}", paths.settings_file().display());
    println!();
    println!("Run 'flowva' to start onboarding.");
    Ok(())
}
