use super::{report_failure, session};
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut manager = session().await;

    let Some(task) = manager.find(args.id).cloned() else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    if !args.yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.text).to_string())
            .default(false)
            .interact()?
    {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match manager.delete_task(args.id).await {
        Ok(true) => msg_success!(Message::TaskDeleted),
        Ok(false) => msg_error!(Message::TaskNotFound(args.id)),
        Err(err) => report_failure(err),
    }
    Ok(())
}
