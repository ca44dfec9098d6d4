use anyhow::Result;
use clap::{Parser, Subcommand};

use flowva::cli::{handle_config, handle_init, handle_replay, handle_start, handle_steps};
use flowva::config::{FlowvaPaths, Settings, SummaryFormat};
use flowva::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "flowva",
    version,
    about = "Terminal onboarding wizard for the Flowva tool library",
    long_about = "Flowva walks new users through a short onboarding: who they are, \
                  where they are based, which tools they use, and what they want \
                  to track. Answers are printed as a summary when the wizard exits."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive onboarding wizard (default)
    #[command(alias = "tui")]
    Start {
        /// Summary format printed on exit (json, yaml)
        #[arg(short, long)]
        format: Option<SummaryFormat>,
        /// Do not print the summary on exit
        #[arg(long)]
        no_summary: bool,
    },

    /// Run the wizard headless from a comma-separated key script
    Replay {
        /// Keys to press, e.g. "enter,space,down,type:Hello,enter"
        #[arg(short, long)]
        keys: String,
        /// Summary format (json, yaml)
        #[arg(short, long)]
        format: Option<SummaryFormat>,
    },

    /// List the onboarding steps
    Steps,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FlowvaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = init_logging(&paths, &settings) {
        eprintln!("Warning: {}", e);
    }

    match cli.command {
        Some(Commands::Start { format, no_summary }) => {
            handle_start(&settings, format, no_summary)?;
        }
        Some(Commands::Replay { keys, format }) => {
            handle_replay(&settings, &keys, format)?;
        }
        Some(Commands::Steps) => handle_steps()?,
        Some(Commands::Init) => handle_init(&paths, &settings)?,
        Some(Commands::Config) => handle_config(&paths, &settings)?,
        None => handle_start(&settings, None, false)?,
    }

    Ok(())
}
