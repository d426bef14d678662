//! Command-line surface.
//!
//! Each subcommand opens a session with [`session`], performs one operation on
//! the task manager and prints the outcome as a notification. Validation and
//! backend failures are shown to the user and never abort the process.

pub mod add;
pub mod clear;
pub mod delete;
pub mod init;
pub mod list;
pub mod rename;
pub mod show;
pub mod stats;
pub mod toggle;

use crate::libs::{config::Config, data_storage::DataStorage, error::TaskError, manager::TaskManager, messages::Message};
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Show a single task", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Mark a task completed, or pending again", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Change the text of a task", arg_required_else_help = true)]
    Rename(rename::RenameArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all completed tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Show task counts and where tasks are stored")]
    Stats,
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
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Rename(args) => rename::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Clear(args) => clear::cmd(args).await,
            Commands::Stats => stats::cmd().await,
        }
    }
}

/// Reads the configuration and opens a task session, announcing its mode.
///
/// An unreadable configuration file falls back to the defaults.
pub async fn session() -> TaskManager {
    session_in(&DataStorage::new()).await
}

pub async fn session_in(storage: &DataStorage) -> TaskManager {
    let config = Config::read_or_default(storage).with_env_overrides();
    let manager = TaskManager::initialize(&config, storage).await;

    if manager.backend_available() {
        msg_info!(Message::BackendConnected(config.api_url()));
    } else {
        msg_warning!(Message::BackendUnavailable);
    }
    manager
}

/// Shows a failed operation as a transient error notification.
pub fn report_failure(err: TaskError) {
    msg_error!(Message::TaskFailed(err.to_string()));
}
