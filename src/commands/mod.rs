pub mod add;
pub mod board;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod mv;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Show the Kanban board")]
    Board(board::BoardArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Move a task to another status column")]
    Mv(mv::MvArgs),
    #[command(about = "Show task statistics")]
    Stats,
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        // In debug mode the message macros route through tracing; give
        // them a subscriber to land on.
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Board(args) => board::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Mv(args) => mv::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Export(args) => export::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
