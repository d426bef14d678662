use super::{report_failure, session};
use crate::libs::{messages::Message, task::TaskFilter, view::View};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: ClearArgs) -> Result<()> {
    let mut manager = session().await;

    let completed = manager.list_tasks(TaskFilter::Completed).count();
    if completed == 0 {
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    if !args.yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearCompleted(completed).to_string())
            .default(false)
            .interact()?
    {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match manager.clear_completed().await {
        Ok(removed) => msg_success!(Message::TasksCleared(removed)),
        Err(err) => report_failure(err),
    }
    View::stats(&manager.stats());
    Ok(())
}
