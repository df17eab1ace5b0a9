//! repo-scan: find git repositories and report their sync status

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use repo_scan::commands::{scan::handle_scan_command, status::handle_status_command};
use repo_scan::core::DEFAULT_SCAN_DIR;
use repo_scan::utils::{init_logging, ColorChoice, OutputConfig};

#[derive(Parser)]
#[command(name = "repo-scan")]
#[command(about = "Tool to scan directories for git repositories.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colorize output
    #[arg(long, global = true, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan directories for git repositories.
    Scan {
        /// The starting directory to scan.
        #[arg(default_value = DEFAULT_SCAN_DIR)]
        directory: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the git status of repositories.
    Status {
        /// The starting directory to scan.
        #[arg(default_value = DEFAULT_SCAN_DIR)]
        directory: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = OutputConfig::from_choice(cli.color);
    init_logging(cli.verbose, output.use_color);

    match cli.command {
        Some(Commands::Scan { directory, json }) => handle_scan_command(&directory, json)?,
        Some(Commands::Status { directory, json }) => {
            handle_status_command(&directory, json, &output).await?
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}
