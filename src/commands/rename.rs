use super::{report_failure, session};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Task ID
    id: i64,
    /// New task text
    text: String,
}

pub async fn cmd(args: RenameArgs) -> Result<()> {
    let mut manager = session().await;

    match manager.rename_task(args.id, &args.text).await {
        Ok(Some(_)) => msg_success!(Message::TaskUpdated),
        Ok(None) => msg_error!(Message::TaskNotFound(args.id)),
        Err(err) => report_failure(err),
    }
    Ok(())
}
