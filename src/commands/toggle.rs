use super::{report_failure, session};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    id: i64,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let mut manager = session().await;

    match manager.toggle_task(args.id).await {
        Ok(Some(task)) if task.completed => msg_success!(Message::TaskCompleted(task.text)),
        Ok(Some(task)) => msg_success!(Message::TaskReopened(task.text)),
        Ok(None) => msg_error!(Message::TaskNotFound(args.id)),
        Err(err) => report_failure(err),
    }
    Ok(())
}
