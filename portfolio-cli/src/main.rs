//! Portfolio — browse the project registry from the terminal.
//!
//! # Usage
//!
//! ```text
//! portfolio list [--json]
//! portfolio show <id> [--json]
//! portfolio cards
//!
//! global: [--content <path>] [--templates <dir>] [-v...]
//! ```

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{cards::CardsArgs, list::ListArgs, show::ShowArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "portfolio",
    version,
    about = "Browse portfolio projects and render their card and detail views",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Content document to load instead of the built-in registry.
    #[arg(long, global = true, env = "PORTFOLIO_CONTENT", value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Directory of `.tera` files overriding the built-in templates.
    #[arg(long, global = true, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every project in registry order.
    List(ListArgs),

    /// Render the detail view for one project.
    Show(ShowArgs),

    /// Render the summary card view for all projects.
    Cards(CardsArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let registry = commands::load_registry(cli.global.content.as_deref())?;
    match cli.command {
        Commands::List(args) => args.run(&registry),
        Commands::Show(args) => args.run(&registry, &cli.global),
        Commands::Cards(args) => args.run(&registry, &cli.global),
    }
}
