use super::error::{TaskError, TaskResult};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CATEGORY: &str = "General";

/// Workflow state of a task.
///
/// Decoding never fails: the service stores free-form status strings, and any
/// value other than the three known ones reads as [`TaskStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == TaskStatus::Completed
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "completed" => TaskStatus::Completed,
            "in_progress" => TaskStatus::InProgress,
            _ => TaskStatus::Pending,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        TaskStatus::parse(&raw)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do entry as kept in memory and in the local slots.
///
/// `completed` mirrors `status == Completed`; [`Task::set_completed`] is the only
/// mutator that touches either field so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub completed: bool,
    #[serde(default)]
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Task {
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.status = if completed { TaskStatus::Completed } else { TaskStatus::Pending };
    }

    /// Restores `completed == (status == Completed)` on a record read from disk.
    ///
    /// `completed` wins: slot files written without a `status` field carry only
    /// the flag.
    pub fn reconcile(&mut self) {
        if self.status.is_completed() != self.completed {
            self.set_completed(self.completed);
        }
    }

    /// Returns a copy with completion flipped, leaving `self` untouched.
    pub fn toggled(&self) -> Task {
        let mut task = self.clone();
        task.set_completed(!self.completed);
        task
    }

    pub fn matches(&self, filter: TaskFilter) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !self.completed,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// Input for creating a task. Only `text` is required.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub text: String,
    pub description: String,
    pub category: Option<String>,
}

impl NewTask {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn category_or_default(&self) -> String {
        match self.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => category.to_string(),
            _ => default_category(),
        }
    }

    /// Builds a pending task with the given id, stamped with the current time.
    pub fn into_task(self, id: i64) -> Task {
        let category = self.category_or_default();
        Task {
            id,
            text: self.text,
            description: self.description,
            category,
            completed: false,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Partial update sent to the remote service. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            active: tasks.len() - completed,
        }
    }
}

/// Rejects text that is empty after trimming.
pub fn validate_text(text: &str) -> TaskResult<()> {
    if text.trim().is_empty() {
        return Err(TaskError::empty_text());
    }
    Ok(())
}
