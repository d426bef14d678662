//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully".to_string(),
            Message::TaskUpdated => "Task updated".to_string(),
            Message::TaskDeleted => "Task deleted".to_string(),
            Message::TaskCompleted(text) => format!("Completed: {}", text),
            Message::TaskReopened(text) => format!("Reopened: {}", text),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TasksCleared(count) => format!("Removed {} completed task(s)", count),
            Message::NoCompletedTasks => "There are no completed tasks to clear".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TasksHeader(filter) => format!("Tasks ({})", filter),
            Message::TaskFailed(error) => error.to_string(),
            Message::ConfirmDeleteTask(text) => format!("Are you sure you want to delete '{}'?", text),
            Message::ConfirmClearCompleted(count) => format!("Delete {} completed task(s)?", count),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === SESSION MESSAGES ===
            Message::BackendConnected(url) => format!("Backend connected: {}", url),
            Message::BackendUnavailable => "Backend not available, using local storage".to_string(),
            Message::StatsLine { total, completed } => format!("Total: {} | Completed: {}", total, completed),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Task service settings".to_string(),
            Message::ConfigModuleStorage => "Local storage settings".to_string(),
            Message::PromptServerApiUrl => "Enter the task service API URL".to_string(),
            Message::PromptPrimarySlot => "Enter the primary task file name".to_string(),
            Message::PromptMirrorSlot => "Enter the mirror task file name".to_string(),
        };
        write!(f, "{}", text)
    }
}
