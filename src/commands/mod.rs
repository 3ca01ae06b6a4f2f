pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod start;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Sign in and open the task screen")]
    Start,
    #[command(about = "List, add or delete tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect the database schema version")]
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
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Start => start::cmd().await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
