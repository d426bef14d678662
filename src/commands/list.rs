use super::session;
use crate::libs::{messages::Message, task::TaskFilter, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum, default_value_t = TaskFilter::All)]
    filter: TaskFilter,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let manager = session().await;

    let mut tasks = manager.list_tasks(args.filter).peekable();
    if tasks.peek().is_none() {
        msg_info!(Message::NoTasksFound);
    } else {
        msg_print!(Message::TasksHeader(args.filter.as_str().to_string()), true);
        View::tasks(tasks);
    }
    View::stats(&manager.stats());
    Ok(())
}
