use super::{report_failure, session};
use crate::libs::{messages::Message, view::View};
use crate::msg_error;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i64,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let mut manager = session().await;

    match manager.get_task(args.id).await {
        Ok(Some(task)) => View::task(&task),
        Ok(None) => msg_error!(Message::TaskNotFound(args.id)),
        Err(err) => report_failure(err),
    }
    Ok(())
}
