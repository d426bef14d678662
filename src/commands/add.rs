use super::{report_failure, session};
use crate::libs::{messages::Message, task::NewTask, view::View};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
    /// Category shown next to the task
    #[arg(short, long)]
    category: Option<String>,
    /// Longer description stored with the task
    #[arg(short, long, default_value = "")]
    description: String,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let mut manager = session().await;

    let mut draft = NewTask::new(&args.text).description(&args.description);
    if let Some(category) = &args.category {
        draft = draft.category(category);
    }

    match manager.add(draft).await {
        Ok(task) => {
            msg_success!(Message::TaskCreated);
            View::task(&task);
        }
        Err(err) => report_failure(err),
    }
    Ok(())
}
