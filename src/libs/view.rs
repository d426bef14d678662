use super::messages::Message;
use super::task::{Task, TaskStats};
use crate::msg_print;
use chrono::{DateTime, Local, Utc};
use prettytable::{format, row, Table};

const LIST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DETAIL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn local_time(time: &DateTime<Utc>, layout: &str) -> String {
    time.with_timezone(&Local).format(layout).to_string()
}

pub struct View {}

impl View {
    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "DONE", "TASK", "CATEGORY", "STATUS", "CREATED"]);
        for task in tasks {
            let done = if task.completed { "[x]" } else { "[ ]" };
            let created = local_time(&task.created_at, LIST_TIME_FORMAT);
            table.add_row(row![task.id, done, task.text, task.category, task.status, created]);
        }
        table.printstd();
    }

    pub fn task(task: &Task) {
        let mut table = Table::new();
        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TASK", task.text]);
        if !task.description.is_empty() {
            table.add_row(row!["DESCRIPTION", task.description]);
        }
        table.add_row(row!["CATEGORY", task.category]);
        table.add_row(row!["STATUS", task.status]);
        let created = local_time(&task.created_at, DETAIL_TIME_FORMAT);
        table.add_row(row!["CREATED", created]);
        if let Some(updated_at) = &task.updated_at {
            let updated = local_time(updated_at, DETAIL_TIME_FORMAT);
            table.add_row(row!["UPDATED", updated]);
        }
        table.printstd();
    }

    pub fn stats(stats: &TaskStats) {
        msg_print!(Message::StatsLine {
            total: stats.total,
            completed: stats.completed,
        });
    }

    /// Where the session's data lives and how much of it is loaded.
    pub fn storage_info(backend_available: bool, source: &str, task_count: usize, last_saved: Option<&DateTime<Utc>>) {
        let (data_source, source_label) = match backend_available {
            true => ("Backend", "SERVICE"),
            false => ("Local storage", "FILE"),
        };

        let mut table = Table::new();
        table.add_row(row!["DATA SOURCE", data_source]);
        table.add_row(row![source_label, source]);
        table.add_row(row!["TASKS IN MEMORY", task_count]);
        if let Some(last_saved) = last_saved {
            let last_saved = local_time(last_saved, DETAIL_TIME_FORMAT);
            table.add_row(row!["LAST SAVED", last_saved]);
        }
        table.printstd();
    }
}
