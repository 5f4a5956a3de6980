use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chatdesk::logs::{init_logging, LogBroadcaster, VerbosityControl};

mod cli;

#[derive(Parser)]
#[command(name = "chatdesk")]
#[command(about = "Settings and debug log viewer for an AI chat-completion client")]
#[command(version)]
struct Cli {
    /// Working directory holding config/ (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GUI
    Gui,

    /// Show stored chat completion settings and masked credentials
    Show,

    /// List available models
    Models {
        /// Client type: OPEN_AI or AZURE_OPEN_AI (defaults to the stored one)
        #[arg(long)]
        client: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // One broadcaster for the whole process; the debug view subscribes to it
    let broadcaster = LogBroadcaster::new();
    let verbosity = VerbosityControl::default();
    init_logging(cli.verbose, &broadcaster, &verbosity)?;

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Show) => {
            cli::show::show_command(&work_dir)?;
        }
        Some(Commands::Models { client }) => {
            cli::models::models_command(&work_dir, client)?;
        }
        Some(Commands::Gui) | None => {
            chatdesk::gui::run_gui(work_dir, broadcaster, verbosity)?;
        }
    }

    Ok(())
}
